//! End-to-end generation tests over the public API

use square_words::commands::{
    ArchiveConfig, GenerateConfig, check_grid, list_candidates, run_generate,
};
use square_words::core::{Anchor, Direction, Grid};
use square_words::generator::{GenerationStatus, Generator, GeneratorConfig, schedule};
use square_words::lexicon::WordIndex;
use square_words::output::formatters::plain_rows;
use square_words::ranking::{LengthOnly, LetterFrequency, RankingConfig, StrategyType};
use std::fs;

#[test]
fn longest_word_placed_first() {
    let index = WordIndex::from_words(["racecar", "aaa", "ab", "ac"]);
    let result = Generator::new(&index, LengthOnly, GeneratorConfig::default())
        .unwrap()
        .run()
        .unwrap();

    let first = &result.steps[0];
    assert_eq!(first.word, "racecar");
    assert_eq!(first.letters_added, 7);
    for (row, letter) in "racecar".bytes().enumerate() {
        assert_eq!(result.grid.cell(row, 0), Ok(Some(letter)));
    }
    assert_eq!(result.grid.cell(7, 0), Ok(None));
    assert!(result.grid.is_valid(&index));
}

#[test]
fn builtin_generation_yields_valid_grid() {
    let index = WordIndex::builtin();
    let result = Generator::new(&index, LetterFrequency, GeneratorConfig::default())
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(result.grid.length(), 8);
    assert!(result.letter_count > 0);
    assert!(result.grid.is_valid(&index));
    for word in &result.words {
        assert!(index.contains(word), "'{word}' not in dictionary");
    }

    let added: usize = result.steps.iter().map(|s| s.letters_added).sum();
    assert_eq!(added, result.letter_count);
    assert!(result.steps.len() <= schedule(8, 2).len());
}

#[test]
fn finite_dictionary_terminates() {
    let index = WordIndex::from_words(["ab", "ba", "aa"]);
    for stride in 1..=3 {
        let result = Generator::new(&index, LengthOnly, GeneratorConfig::new(6, stride))
            .unwrap()
            .run()
            .unwrap();

        assert!(result.grid.is_valid(&index));
        assert!(result.steps.len() <= schedule(6, stride).len());
        if result.steps.len() < schedule(6, stride).len() {
            assert!(matches!(result.status, GenerationStatus::Stalled { .. }));
        }
    }
}

#[test]
fn randomized_runs_reproduce_per_seed() {
    let index = WordIndex::builtin();
    let run = |seed| {
        Generator::new(
            &index,
            StrategyType::from_flags(true, Some(seed)),
            GeneratorConfig::new(6, 2),
        )
        .unwrap()
        .run()
        .unwrap()
    };

    assert_eq!(run(17).grid, run(17).grid);
    assert!(run(17).grid.is_valid(&index));
}

#[test]
fn parallel_search_matches_sequential() {
    let index = WordIndex::builtin();
    let sequential = Generator::new(&index, LetterFrequency, GeneratorConfig::new(6, 1))
        .unwrap()
        .run()
        .unwrap();
    let parallel = Generator::new(
        &index,
        LetterFrequency,
        GeneratorConfig {
            parallel: true,
            ..GeneratorConfig::new(6, 1)
        },
    )
    .unwrap()
    .run()
    .unwrap();

    assert_eq!(sequential.grid, parallel.grid);
    assert_eq!(sequential.steps, parallel.steps);
}

#[test]
fn generated_grid_passes_check() {
    let index = WordIndex::builtin();
    let config = GenerateConfig {
        generator: GeneratorConfig::new(6, 2),
        ..GenerateConfig::default()
    };
    let report = run_generate(&index, &config).unwrap();

    let rows = plain_rows(&report.best.result.grid);
    let check = check_grid(&rows, &index).unwrap();
    assert!(check.valid);
    assert_eq!(check.letter_count, report.best.result.letter_count);
    assert_eq!(check.grid, report.best.result.grid);
}

#[test]
fn generate_archives_each_run() {
    let index = WordIndex::builtin();
    let path = std::env::temp_dir().join(format!(
        "square_words_{}_integration_archive.txt",
        std::process::id()
    ));
    let _ = fs::remove_file(&path);

    let config = GenerateConfig {
        generator: GeneratorConfig::new(5, 2),
        ranking: RankingConfig {
            use_frequency: false,
            randomize: true,
            seed: Some(3),
        },
        runs: 3,
        archive: Some(ArchiveConfig {
            path: path.clone(),
            threshold: 0,
        }),
        show_progress: false,
    };
    let report = run_generate(&index, &config).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(report.archived, 3);
    let headers: Vec<&str> = content.lines().filter(|l| l.starts_with('#')).collect();
    assert_eq!(headers.len(), 3);
    assert!(headers[0].contains("run 0, seed 3"));
    assert!(headers[2].contains("run 2, seed 5"));
}

#[test]
fn candidates_follow_search_order() {
    let index = WordIndex::from_words(["racecar", "aaa", "ab", "ac"]);
    let words = list_candidates(&index, "a?", &LengthOnly, None).unwrap();
    assert_eq!(words, vec!["ab", "ac"]);

    let grid = Grid::from_rows(&["a.", ".."]).unwrap();
    let prototype = grid
        .prototype(Anchor::new(0, 0), Direction::Horizontal, 2)
        .unwrap();
    assert_eq!(prototype.to_string(), "a_");
}
