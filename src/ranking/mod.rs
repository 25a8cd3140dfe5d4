//! Candidate ranking
//!
//! Strategies that order pattern matches before the placement search tries
//! them.

pub mod strategy;

pub use strategy::{
    LengthOnly, LetterFrequency, Randomized, RankingConfig, RankingStrategy, StrategyType,
};
