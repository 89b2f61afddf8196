use super::*;
use crate::util::*;

/// Owned, contiguous, row-major N x N buffer of temperatures.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    bounds: SquareBounds,
    buffer: Vec<f64>,
}

impl Grid {
    /// Zero filled grid.
    pub fn new(bounds: SquareBounds) -> Self {
        let buffer = vec![0.0; bounds.buffer_size()];
        Grid { bounds, buffer }
    }

    pub fn size(&self) -> usize {
        self.bounds.size()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.buffer.chunks_exact(self.size())
    }
}

impl GridView for Grid {
    fn bounds(&self) -> &SquareBounds {
        &self.bounds
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    fn bounds_buffer_mut(&mut self) -> (&SquareBounds, &mut [f64]) {
        (&self.bounds, &mut self.buffer)
    }

    #[track_caller]
    fn view(&self, coord: &Coord) -> f64 {
        debug_assert!(
            self.bounds.contains(coord),
            "{} does not contain {:?}",
            self.bounds,
            coord
        );
        let index = self.bounds.coord_to_linear(coord);
        self.buffer[index]
    }

    #[track_caller]
    fn set_coord(&mut self, coord: &Coord, value: f64) {
        debug_assert!(
            self.bounds.contains(coord),
            "{} does not contain {:?}",
            self.bounds,
            coord
        );
        let index = self.bounds.coord_to_linear(coord);
        self.buffer[index] = value;
    }
}
