//! Convergence measurement.
//!
//! The error between two grid snapshots is the maximum absolute
//! elementwise difference over the full buffer.
//! Boundaries are identical between the two relaxation buffers,
//! so their contribution is always zero.
//!
//! Two interchangeable implementations:
//! * `DirectMonitor` does a parallel max-reduction.
//! * `DelegatedMonitor` composes copy, axpy and iamax from a
//!   `ReductionBackend`, the way a dense linear algebra library would.
//!
//! Both must agree up to floating point rounding.

mod backend;
mod delegated;
mod direct;

pub use backend::*;
pub use delegated::*;
pub use direct::*;

use crate::domain::*;

pub trait ConvergenceMonitor {
    /// max(|a[i] - b[i]|) over every cell, never negative.
    fn measure(&mut self, a: &Grid, b: &Grid) -> f64;
}
