use crate::util::*;

/// Contiguous run of cells from one grid, handed to a single rayon task.
/// `start` is the linear index of `cells[0]` in the full buffer.
pub struct GridChunk<'a> {
    start: usize,
    bounds: &'a SquareBounds,
    cells: &'a mut [f64],
}

impl<'a> GridChunk<'a> {
    pub fn new(
        start: usize,
        bounds: &'a SquareBounds,
        cells: &'a mut [f64],
    ) -> Self {
        GridChunk {
            start,
            bounds,
            cells,
        }
    }

    /// Every cell of the chunk with its grid coordinate.
    pub fn coord_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord, &mut f64)> {
        let bounds = self.bounds;
        (self.start..)
            .zip(self.cells.iter_mut())
            .map(move |(linear, cell)| (bounds.linear_to_coord(linear), cell))
    }

    /// Only the cells a stencil pass may write.
    pub fn interior_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord, &mut f64)> {
        let bounds = self.bounds;
        self.coord_iter_mut()
            .filter(move |(coord, _)| bounds.is_interior(coord))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn coords_follow_start() {
        let bounds = SquareBounds::new(4);
        let mut cells = [0.0; 6];
        let mut chunk = GridChunk::new(5, &bounds, &mut cells);

        let coords: Vec<Coord> =
            chunk.coord_iter_mut().map(|(c, _)| c).collect();
        assert_eq!(coords[0], vector![1, 1]);
        assert_eq!(coords[5], vector![2, 2]);

        for (_, cell) in chunk.interior_iter_mut() {
            *cell = 1.0;
        }
        // linear 5, 6, 9, 10 are interior, 7 and 8 sit on the side edges
        assert_eq!(cells, [1.0, 1.0, 0.0, 0.0, 1.0, 1.0]);
    }
}
