//! Square Words
//!
//! Greedy generator for square word grids: every horizontal and vertical run
//! of two or more letters must be a dictionary word.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use square_words::generator::{Generator, GeneratorConfig};
//! use square_words::lexicon::WordIndex;
//! use square_words::ranking::LetterFrequency;
//!
//! let index = WordIndex::builtin();
//! let generator = Generator::new(&index, LetterFrequency, GeneratorConfig::default()).unwrap();
//! let result = generator.run().unwrap();
//! println!("{}\n{} letters", result.grid, result.letter_count);
//! ```

// Core domain types
pub mod core;

// Dictionaries
pub mod lexicon;

// Candidate ordering
pub mod ranking;

// Maximize step
pub mod search;

// Generation loop
pub mod generator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
