//! Grid generation
//!
//! Drives the placement search over a fixed schedule of segments and keeps
//! the grid it builds.

mod config;
mod runner;
mod schedule;

pub use config::{ConfigError, DEFAULT_SIZE, DEFAULT_STRIDE, GeneratorConfig, MAX_SIZE};
pub use runner::{GenerationResult, GenerationStatus, Generator, StepRecord};
pub use schedule::schedule;
