pub use nalgebra::vector;
pub use num_traits::Zero;

pub mod indexing;
mod square;
pub use square::*;

/// Grid coordinates are (row, col).
pub type Coord = nalgebra::Vector2<i32>;

/// Stencil weights and gathered neighbor values.
pub type Values<const NEIGHBORHOOD_SIZE: usize> =
    nalgebra::SVector<f64, { NEIGHBORHOOD_SIZE }>;
