//! This module has things for managing the grid,
//! which really means retrieving values based on (row, col) coordinates.
//! The relaxation works on two same-size grids,
//! `GridPair` keeps track of which one is current.

mod view;

pub use view::*;
