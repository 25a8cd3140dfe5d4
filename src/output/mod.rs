//! Terminal output formatting
//!
//! Display utilities for CLI results, plus the grid archive.

pub mod archive;
pub mod display;
pub mod formatters;

pub use archive::append_result;
pub use display::{print_candidates, print_check_report, print_generate_report};
pub use formatters::render_grid;
