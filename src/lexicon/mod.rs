//! Dictionaries for grid generation
//!
//! Loads word lists (from files or the embedded default) into a `WordIndex`.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT};
pub use index::WordIndex;
pub use loader::LexiconError;
