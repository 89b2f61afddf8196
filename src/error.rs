//! Error types for the relaxation solver.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected configuration, reported before any buffer is allocated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// No interior exists below 3 cells per side.
    #[error("grid size {0} is too small, need at least 3")]
    GridTooSmall(usize),

    #[error("accuracy threshold must be positive and finite, got {0}")]
    InvalidAccuracy(f64),

    #[error("max iterations must be at least 1")]
    ZeroIterations,

    #[error("convergence check period must be at least 1")]
    ZeroCheckPeriod,

    #[error("chunk size must be at least 1")]
    ZeroChunkSize,

    #[error("corner value {name} must be finite, got {value}")]
    NonFiniteCorner { name: &'static str, value: f64 },
}

/// Top level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The delegated reduction was requested but its handle is not usable.
    #[error("reduction backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
