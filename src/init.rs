//! Grid Initialization
//!
//! Builds the boundary conditioned starting grid
//! and the duplicate buffer the relaxation needs.

use crate::domain::*;
use crate::error::ConfigurationError;
use crate::par_slice;
use crate::util::*;

/// Fixed temperatures at the four grid corners.
/// Row 0 is "up", column 0 is "left".
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Corners {
    pub up_left: f64,
    pub down_left: f64,
    pub up_right: f64,
    pub down_right: f64,
}

impl Default for Corners {
    fn default() -> Self {
        Corners {
            up_left: 10.0,
            down_left: 20.0,
            up_right: 20.0,
            down_right: 30.0,
        }
    }
}

impl Corners {
    /// Scaled before summing, finite for any finite corners.
    pub fn mean(&self) -> f64 {
        0.25 * self.up_left
            + 0.25 * self.down_left
            + 0.25 * self.up_right
            + 0.25 * self.down_right
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, value) in [
            ("up_left", self.up_left),
            ("down_left", self.down_left),
            ("up_right", self.up_right),
            ("down_right", self.down_right),
        ] {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFiniteCorner { name, value });
            }
        }
        Ok(())
    }
}

/// Starting value of the interior cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InitMode {
    #[default]
    Zero,

    /// Every interior cell starts at the mean of the four corners.
    MeanOfCorners,
}

/// Linear interpolation along an edge of `size` cells, `i` in [0, size).
/// Convex combination, so the result stays within [low, high]
/// and never overflows for finite endpoints.
pub fn edge_value(low: f64, high: f64, i: usize, size: usize) -> f64 {
    let t = i as f64 / (size - 1) as f64;
    low * (1.0 - t) + high * t
}

/// Create the starting grid: corners from `corners`,
/// edges linearly interpolated between adjacent corners,
/// interior zero or the corner mean depending on `mode`.
pub fn boundary_conditioned_grid(
    size: usize,
    corners: &Corners,
    mode: InitMode,
    chunk_size: usize,
) -> Result<Grid, ConfigurationError> {
    if size < 3 {
        return Err(ConfigurationError::GridTooSmall(size));
    }
    corners.validate()?;

    let bounds = SquareBounds::new(size);
    let mut grid = Grid::new(bounds);

    // Interior fill first, the edges below overwrite the outer ring.
    if mode == InitMode::MeanOfCorners {
        par_slice::set_value(grid.buffer_mut(), corners.mean(), chunk_size);
    }

    let last = bounds.last();
    grid.set_coord(&vector![0, 0], corners.up_left);
    grid.set_coord(&vector![0, last], corners.up_right);
    grid.set_coord(&vector![last, 0], corners.down_left);
    grid.set_coord(&vector![last, last], corners.down_right);

    for i in 1..size - 1 {
        let j = i as i32;
        let top = edge_value(corners.up_left, corners.up_right, i, size);
        let left = edge_value(corners.up_left, corners.down_left, i, size);
        let bottom = edge_value(corners.down_left, corners.down_right, i, size);
        let right = edge_value(corners.up_right, corners.down_right, i, size);
        grid.set_coord(&vector![0, j], top);
        grid.set_coord(&vector![j, 0], left);
        grid.set_coord(&vector![last, j], bottom);
        grid.set_coord(&vector![j, last], right);
    }

    Ok(grid)
}

/// Starting grid plus a value identical second buffer,
/// so the first pass has a well-defined predecessor.
pub fn boundary_conditioned(
    size: usize,
    corners: &Corners,
    mode: InitMode,
    chunk_size: usize,
) -> Result<GridPair, ConfigurationError> {
    let grid = boundary_conditioned_grid(size, corners, mode, chunk_size)?;
    Ok(GridPair::duplicate(grid))
}
