//! Square Words - CLI
//!
//! Generates square word grids greedily, checks hand-made grids, and lists
//! the candidates the search would try for a pattern.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use square_words::{
    commands::{ArchiveConfig, GenerateConfig, check_grid, list_candidates, run_generate},
    generator::{DEFAULT_SIZE, DEFAULT_STRIDE, GeneratorConfig},
    lexicon::WordIndex,
    logging::init_logger,
    output::{print_candidates, print_check_report, print_generate_report},
    ranking::RankingConfig,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "square_words",
    about = "Greedy generator for square word grids",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Grid side length
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Distance between anchors along the top row and left column
    #[arg(long, global = true, default_value_t = DEFAULT_STRIDE)]
    stride: usize,

    /// Jitter the candidate ranking per run
    #[arg(short, long, global = true)]
    randomize: bool,

    /// Rank by length alone instead of letter frequency
    #[arg(long, global = true)]
    no_frequency: bool,

    /// Base seed for randomized runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Dictionary: 'builtin' (default) or path to a word list; repeatable
    #[arg(short, long = "dict", global = true, default_value = "builtin")]
    dict: Vec<String>,

    /// Show debug logging and per-step details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a grid (default)
    Generate(GenerateArgs),

    /// Check a grid given as rows; '.', '_' or space marks an empty cell
    Check {
        /// Grid rows, top to bottom
        #[arg(required = true)]
        rows: Vec<String>,
    },

    /// List ranked dictionary words matching a pattern such as 'c_t'
    Candidates {
        /// Letters and '_', '.', '?' wildcards
        pattern: String,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of randomized runs; the fullest grid wins
    #[arg(long, default_value_t = 1)]
    runs: usize,

    /// Stop each run after this many seconds
    #[arg(short, long)]
    time_limit: Option<f64>,

    /// Evaluate candidates of a span in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Append every grid reaching the threshold to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Minimum letter count for a grid to be archived
    #[arg(long, default_value_t = 0)]
    threshold: usize,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            runs: 1,
            time_limit: None,
            parallel: false,
            log_file: None,
            threshold: 0,
        }
    }
}

/// Build the word index from the `--dict` values
///
/// `builtin` may be mixed with file paths; all sources are merged.
fn load_dictionary(sources: &[String]) -> Result<WordIndex> {
    let (builtin, paths): (Vec<&String>, Vec<&String>) =
        sources.iter().partition(|source| *source == "builtin");

    if paths.is_empty() {
        return Ok(WordIndex::builtin());
    }

    let loaded = WordIndex::load(&paths).context("Failed to load dictionary")?;
    if builtin.is_empty() {
        return Ok(loaded);
    }

    let merged = WordIndex::builtin()
        .words()
        .chain(loaded.words())
        .map(str::to_string)
        .collect::<Vec<_>>();
    Ok(WordIndex::from_words(merged))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let index = load_dictionary(&cli.dict)?;
    log::info!("Dictionary has {} words", index.len());

    let ranking = RankingConfig {
        use_frequency: !cli.no_frequency,
        randomize: cli.randomize,
        seed: cli.seed,
    };

    // Default to Generate if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()));

    match command {
        Commands::Generate(args) => {
            run_generate_command(&index, &args, cli.size, cli.stride, ranking, cli.verbose)
        }
        Commands::Check { rows } => run_check_command(&index, &rows),
        Commands::Candidates { pattern, limit } => {
            run_candidates_command(&index, &pattern, limit, ranking)
        }
    }
}

fn run_generate_command(
    index: &WordIndex,
    args: &GenerateArgs,
    size: usize,
    stride: usize,
    ranking: RankingConfig,
    verbose: bool,
) -> Result<()> {
    let time_limit = args
        .time_limit
        .map(Duration::try_from_secs_f64)
        .transpose()
        .context("Time limit must be a non-negative number of seconds")?;

    let config = GenerateConfig {
        generator: GeneratorConfig {
            parallel: args.parallel,
            time_limit,
            ..GeneratorConfig::new(size, stride)
        },
        ranking,
        runs: args.runs,
        archive: args.log_file.clone().map(|path| ArchiveConfig {
            path,
            threshold: args.threshold,
        }),
        show_progress: true,
    };

    let report = run_generate(index, &config)?;
    print_generate_report(&report, verbose);
    Ok(())
}

fn run_check_command(index: &WordIndex, rows: &[String]) -> Result<()> {
    let report = check_grid(rows, index)?;
    print_check_report(&report);
    if !report.valid {
        anyhow::bail!("Grid contains words missing from the dictionary");
    }
    Ok(())
}

fn run_candidates_command(
    index: &WordIndex,
    pattern: &str,
    limit: Option<usize>,
    ranking: RankingConfig,
) -> Result<()> {
    let strategy = ranking.strategy_for_run(ranking.resolve_seed(), 0);
    let words = list_candidates(index, pattern, &strategy, limit)?;
    print_candidates(pattern, &words);
    Ok(())
}
