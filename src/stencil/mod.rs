#![allow(clippy::module_inception)]
mod stencil;

pub mod standard_stencils;

pub use stencil::*;
