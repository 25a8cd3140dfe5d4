//! Display functions for command results

use super::formatters::{fill_bar, format_words, render_grid};
use crate::commands::{CheckReport, GenerateReport};
use crate::generator::GenerationStatus;
use colored::Colorize;

/// Print the best grid of a generate command
pub fn print_generate_report(report: &GenerateReport, verbose: bool) {
    let best = &report.best;
    let result = &best.result;
    let capacity = result.grid.length() * result.grid.length();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATED GRID".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", render_grid(&result.grid));

    println!(
        "\n   Letters:   [{}] {}",
        fill_bar(result.letter_count, capacity, 30).green(),
        format!("{}/{capacity}", result.letter_count)
            .bright_yellow()
            .bold()
    );
    println!("   Words:     {}", format_words(&result.words));
    println!("   Ranking:   {}", best.strategy);
    if let Some(seed) = best.seed {
        println!("   Seed:      {seed}");
    }
    println!("   Stopped:   {}", describe_status(result.status));

    if verbose {
        println!("\n📋 {}", "Steps:".bright_cyan().bold());
        for (i, step) in result.steps.iter().enumerate() {
            println!(
                "   {:2}. {} {:<10} {} (+{})",
                i + 1,
                step.anchor,
                step.direction.to_string(),
                step.word.bright_yellow(),
                step.letters_added
            );
        }
    }

    if report.runs > 1 {
        let total: usize = report.letter_counts.iter().sum();
        let worst = report.letter_counts.iter().copied().min().unwrap_or(0);
        println!("\n📊 {}", "Runs:".bright_cyan().bold());
        println!("   Runs:      {}", report.runs);
        println!("   Best run:  {}", best.run);
        println!(
            "   Letters:   best {}, worst {worst}, mean {:.1}",
            result.letter_count,
            total as f64 / report.runs as f64
        );
    }
    if report.archived > 0 {
        println!("   Archived:  {} grids", report.archived);
    }
    println!("   Time:      {:.2}s", report.duration.as_secs_f64());
}

/// Print the verdict of a check command
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", render_grid(&report.grid));
    println!();

    for (word, known) in &report.words {
        if *known {
            println!("   {} {word}", "✓".green());
        } else {
            println!("   {} {}", "✗".red(), word.red());
        }
    }

    println!();
    if report.valid {
        println!(
            "{}",
            format!("✅ Valid grid with {} letters", report.letter_count)
                .green()
                .bold()
        );
    } else {
        let invalid: Vec<&str> = report.invalid_words().collect();
        println!(
            "{}",
            format!("❌ Unknown words: {}", invalid.join(", "))
                .red()
                .bold()
        );
    }
}

/// Print ranked pattern matches
pub fn print_candidates(pattern: &str, words: &[String]) {
    println!(
        "{} {}",
        "Candidates for".bright_cyan(),
        pattern.bright_yellow().bold()
    );
    if words.is_empty() {
        println!("   {}", "(none)".bright_black());
        return;
    }
    for (rank, word) in words.iter().enumerate() {
        println!("   {:4}. {word}", rank + 1);
    }
}

fn describe_status(status: GenerationStatus) -> String {
    match status {
        GenerationStatus::ScheduleExhausted => "schedule complete".to_string(),
        GenerationStatus::Stalled { anchor, direction } => {
            format!("no progress at {anchor} {direction}")
        }
        GenerationStatus::TimedOut { elapsed } => {
            format!("time limit after {:.2}s", elapsed.as_secs_f64())
        }
    }
}
