//! Generate command
//!
//! Runs the generator one or more times and keeps the fullest grid.
//! Randomized runs are independent and evaluated in parallel.

use crate::generator::{ConfigError, GenerationResult, Generator, GeneratorConfig};
use crate::lexicon::WordIndex;
use crate::output::archive::append_result;
use crate::ranking::RankingConfig;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Where and when to archive grids
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub path: PathBuf,
    /// Only grids with at least this many letters are written
    pub threshold: usize,
}

/// Configuration for the generate command
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub generator: GeneratorConfig,
    pub ranking: RankingConfig,
    pub runs: usize,
    pub archive: Option<ArchiveConfig>,
    pub show_progress: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            ranking: RankingConfig::default(),
            runs: 1,
            archive: None,
            show_progress: false,
        }
    }
}

/// One generation loop and the ranking it used
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run: u64,
    pub seed: Option<u64>,
    pub strategy: &'static str,
    pub result: GenerationResult,
}

/// Result of the generate command
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub best: RunSummary,
    pub runs: usize,
    /// Letter count of every run, in run order
    pub letter_counts: Vec<usize>,
    pub archived: usize,
    pub duration: Duration,
}

/// Run the generator and keep the best grid
///
/// Runs are seeded `seed, seed + 1, ...`. Without randomization every run
/// would produce the same grid, so only one is made. The best run is the
/// one with the most letters, the earliest on ties.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the archive file
/// cannot be written.
pub fn run_generate(index: &WordIndex, config: &GenerateConfig) -> Result<GenerateReport> {
    config.generator.validate()?;
    if config.runs == 0 {
        return Err(ConfigError::InvalidRuns(config.runs).into());
    }

    let runs = if config.ranking.randomize {
        config.runs
    } else {
        if config.runs > 1 {
            log::warn!(
                "Ranking is not randomized; making a single run instead of {}",
                config.runs
            );
        }
        1
    };

    let base_seed = config.ranking.resolve_seed();
    if let Some(seed) = base_seed {
        log::info!("Base seed {seed}");
    }

    let started = Instant::now();
    let pb = progress_bar(runs, config.show_progress)?;

    let summaries = (0..runs as u64)
        .into_par_iter()
        .map(|run| -> Result<RunSummary> {
            let strategy = config.ranking.strategy_for_run(base_seed, run);
            let generator = Generator::new(index, strategy, config.generator.clone())?;
            let result = generator.run()?;
            pb.inc(1);
            Ok(RunSummary {
                run,
                seed: base_seed.map(|seed| seed.wrapping_add(run)),
                strategy: strategy.name(),
                result,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_and_clear();

    let mut archived = 0;
    if let Some(archive) = &config.archive {
        for summary in &summaries {
            if summary.result.letter_count >= archive.threshold {
                append_result(&archive.path, summary).with_context(|| {
                    format!("Failed to append to {}", archive.path.display())
                })?;
                archived += 1;
            }
        }
        log::info!("Archived {archived} grids to {}", archive.path.display());
    }

    let letter_counts: Vec<usize> = summaries.iter().map(|s| s.result.letter_count).collect();

    let mut summaries = summaries.into_iter();
    let first = summaries.next().context("Generator produced no runs")?;
    let best = summaries.fold(first, |best, summary| {
        if summary.result.letter_count > best.result.letter_count {
            summary
        } else {
            best
        }
    });

    log::info!(
        "Best grid: {} letters (run {}, {} steps)",
        best.result.letter_count,
        best.run,
        best.result.steps.len()
    );

    Ok(GenerateReport {
        best,
        runs,
        letter_counts,
        archived,
        duration: started.elapsed(),
    })
}

fn progress_bar(runs: usize, visible: bool) -> Result<ProgressBar> {
    if !visible || runs < 2 {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(runs as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} runs ({eta})")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}
