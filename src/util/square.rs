use crate::util::indexing::*;
use crate::util::*;

/// Bounds of a square grid, (row, col) in [0, size) x [0, size).
/// Responsible for mapping between the linear buffer and coordinates,
/// and for telling boundary cells from interior cells.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct SquareBounds {
    size: usize,
}

impl std::fmt::Display for SquareBounds {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "{}x{}", self.size, self.size)
    }
}

impl SquareBounds {
    #[inline]
    pub fn new(size: usize) -> Self {
        SquareBounds { size }
    }

    /// Cells per side.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        real_buffer_size(self.size)
    }

    pub fn coord_to_linear(&self, coord: &Coord) -> usize {
        coord_to_linear(coord, self.size)
    }

    pub fn linear_to_coord(&self, index: usize) -> Coord {
        linear_to_coord(index, self.size)
    }

    /// Largest valid row / col index.
    #[inline]
    pub fn last(&self) -> i32 {
        self.size as i32 - 1
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        (0..2).all(|d| coord[d] >= 0 && coord[d] <= self.last())
    }

    /// Interior cells are the only ones a stencil pass writes.
    pub fn is_interior(&self, coord: &Coord) -> bool {
        (0..2).all(|d| coord[d] > 0 && coord[d] < self.last())
    }

    pub fn is_boundary(&self, coord: &Coord) -> bool {
        self.contains(coord) && !self.is_interior(coord)
    }

    /// Return iterator over contained coords in linear ordering.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.buffer_size()).map(|i| self.linear_to_coord(i))
    }

    /// Iterator over boundary coords in linear ordering.
    pub fn boundary_iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coord_iter().filter(|c| self.is_boundary(c))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn interior_test() {
        let b = SquareBounds::new(3);
        assert!(b.is_interior(&vector![1, 1]));
        assert!(b.is_boundary(&vector![0, 1]));
        assert!(b.is_boundary(&vector![2, 2]));
        assert!(!b.contains(&vector![3, 0]));
        assert!(!b.is_boundary(&vector![-1, 0]));
        assert_eq!(b.boundary_iter().count(), 8);
    }

    #[test]
    fn boundary_count_test() {
        for size in 3..12 {
            let b = SquareBounds::new(size);
            assert_eq!(b.boundary_iter().count(), 4 * (size - 1));
            assert_eq!(
                b.coord_iter().filter(|c| b.is_interior(c)).count(),
                (size - 2) * (size - 2)
            );
        }
    }
}
