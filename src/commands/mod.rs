//! Command implementations

pub mod candidates;
pub mod check;
pub mod generate;

pub use candidates::list_candidates;
pub use check::{CheckReport, check_grid};
pub use generate::{ArchiveConfig, GenerateConfig, GenerateReport, RunSummary, run_generate};
