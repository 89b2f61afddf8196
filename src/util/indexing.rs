use crate::util::*;

/// Number of cells in a square grid with `size` cells per side.
pub fn real_buffer_size(size: usize) -> usize {
    size * size
}

/// Row-major linear index of a (row, col) coordinate.
pub fn coord_to_linear(coord: &Coord, size: usize) -> usize {
    debug_assert!(coord[0] >= 0 && coord[1] >= 0);
    debug_assert!((coord[0] as usize) < size && (coord[1] as usize) < size);
    coord[0] as usize * size + coord[1] as usize
}

/// Inverse of `coord_to_linear`.
pub fn linear_to_coord(linear_index: usize, size: usize) -> Coord {
    debug_assert!(linear_index < real_buffer_size(size));
    vector![(linear_index / size) as i32, (linear_index % size) as i32]
}
