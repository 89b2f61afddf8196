mod engine;
mod run;

pub use engine::*;
pub use run::*;
