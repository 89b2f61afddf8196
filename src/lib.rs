pub mod build_info;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod heatmap;
pub mod init;
pub mod matrix_io;
pub mod monitor;
pub mod par_slice;
pub mod par_stencil;
pub mod solver;
pub mod stencil;
pub mod util;

pub use config::{Configuration, Strategy};
pub use error::{ConfigurationError, Error, Result};
pub use solver::{solve, ResultReport, SolverRun, Termination};
