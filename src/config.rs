use crate::error::ConfigurationError;
use crate::init::{Corners, InitMode};
use clap::ValueEnum;

/// How the convergence error is measured.
#[derive(Copy, Clone, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Parallel max-reduction over the two grids
    #[default]
    Direct,

    /// Copy, scaled subtract and index-of-max through a reduction backend
    Delegated,
}

/// Immutable parameters of one solver run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Configuration {
    /// Stop once the measured error is at or below this.
    pub accuracy: f64,

    /// Cells per side.
    pub size: usize,

    /// Hard cap on relaxation passes.
    pub max_iterations: usize,

    pub corners: Corners,

    /// Measure convergence every `check_period` passes.
    pub check_period: usize,

    pub init_mode: InitMode,

    pub strategy: Strategy,

    /// Work split for the parallel kernels.
    pub chunk_size: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            accuracy: 1e-6,
            size: 10,
            max_iterations: 1_000_000,
            corners: Corners::default(),
            check_period: 70,
            init_mode: InitMode::Zero,
            strategy: Strategy::Direct,
            chunk_size: 1000,
        }
    }
}

impl Configuration {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.size < 3 {
            return Err(ConfigurationError::GridTooSmall(self.size));
        }
        if !(self.accuracy.is_finite() && self.accuracy > 0.0) {
            return Err(ConfigurationError::InvalidAccuracy(self.accuracy));
        }
        if self.max_iterations == 0 {
            return Err(ConfigurationError::ZeroIterations);
        }
        if self.check_period == 0 {
            return Err(ConfigurationError::ZeroCheckPeriod);
        }
        if self.chunk_size == 0 {
            return Err(ConfigurationError::ZeroChunkSize);
        }
        self.corners.validate()
    }
}
