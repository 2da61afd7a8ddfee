//! Integration tests for word-splitter
//!
//! These run the full pipeline end-to-end over small in-memory token sets
//! and check the three output files on disk.

use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;
use word_splitter::config::SplitConfig;
use word_splitter::output::{read_tokens, write_sorted};
use word_splitter::splitter::{SplitCoordinator, SplitResult};

fn test_config() -> SplitConfig {
    SplitConfig {
        input_path: PathBuf::from("in.txt"),
        words_path: PathBuf::from("words.txt"),
        candidates_path: PathBuf::from("candidates.txt"),
        residue_path: PathBuf::from("residue.txt"),
        worker_count: 8,
        progress_interval: Duration::from_millis(100),
        show_progress: false,
        verbose: false,
    }
}

fn run(tokens: &[&str]) -> SplitResult {
    SplitCoordinator::new(test_config())
        .run(tokens.iter().map(|t| t.to_string()).collect())
        .unwrap()
}

#[test]
fn test_end_to_end_decomposition() {
    let result = run(&["CatDog", "catsun", "dogfog", "sunsun", "zzzy"]);

    let mut dict = result.dictionary.clone();
    dict.sort();
    assert_eq!(dict, vec!["cat", "dog", "fog", "sun"]);

    let mut candidates = result.candidates.clone();
    candidates.sort();
    assert_eq!(candidates, vec!["fog", "sun"]);

    assert_eq!(result.residue, vec!["zzzy"]);
    assert_eq!(result.capital_seeds, 2);
    assert_eq!(result.doubled_seeds, 1);
}

#[test]
fn test_token_conservation() {
    // Aside from the odd-length drop in the doubled pass, every input token
    // either seeds the dictionary, contributes a candidate, or survives as
    // residue.
    let tokens = ["CatDog", "catsun", "dogfog", "sunsun", "zzzy", "abc"];
    let result = run(&tokens);

    // "abc": odd length, no capitals - the one intentional silent drop.
    assert!(!result.dictionary.contains(&"abc".to_string()));
    assert!(!result.candidates.contains(&"abc".to_string()));
    assert!(!result.residue.contains(&"abc".to_string()));

    // "zzzy" matched nothing in any round.
    assert_eq!(result.residue, vec!["zzzy"]);

    // Dictionary and residue never overlap.
    for token in &result.residue {
        assert!(!result.dictionary.contains(token));
    }
}

#[test]
fn test_output_files_sorted() {
    let dir = tempdir().unwrap();
    let result = run(&["CatDog", "catsun", "dogfog", "sunsun", "zzzy"]);

    let words_path = dir.path().join("words.txt");
    let candidates_path = dir.path().join("candidates.txt");
    let residue_path = dir.path().join("residue.txt");

    write_sorted(&words_path, result.dictionary).unwrap();
    write_sorted(&candidates_path, result.candidates).unwrap();
    write_sorted(&residue_path, result.residue).unwrap();

    for path in [&words_path, &candidates_path, &residue_path] {
        let lines = read_tokens(path).unwrap();
        let mut sorted = lines.clone();
        sorted.sort();
        assert_eq!(lines, sorted, "{} is not sorted", path.display());
    }

    let words = std::fs::read_to_string(&words_path).unwrap();
    assert_eq!(words, "cat\ndog\nfog\nsun\n");
    let residue = std::fs::read_to_string(&residue_path).unwrap();
    assert_eq!(residue, "zzzy\n");
}

#[test]
fn test_multi_generation_peeling() {
    // Each round peels exactly one layer:
    //   seeds: "ab" (from "abab")
    //   round 1 frontier {ab}: "abcdcd" -> "cdcd"; others forwarded
    //   round 2 frontier {cdcd}: "cdcdef" -> "ef"
    //   round 3 frontier {ef}: "efefgh" -> "efgh"
    //   round 4 frontier {efgh}: nothing matches, halt
    let result = run(&["abab", "abcdcd", "cdcdef", "efefgh"]);
    let mut candidates = result.candidates.clone();
    candidates.sort();
    assert_eq!(candidates, vec!["cdcd", "ef", "efgh"]);

    let mut dict = result.dictionary.clone();
    dict.sort();
    assert_eq!(dict, vec!["ab", "cdcd", "ef", "efgh"]);

    assert!(result.residue.is_empty());
    assert_eq!(result.rounds, 4);
}

#[test]
fn test_remainders_are_not_peeled_further() {
    // A remainder becomes a candidate and a dictionary entry, but never
    // re-enters the pending stream: "cdab" stays whole even though "ab"
    // could peel it again. Matching scope is one generation deep by design.
    let result = run(&["abab", "abcdab"]);

    // round 1 frontier {ab}: "abcdab" -> remainder "cdab"
    // round 2 frontier {cdab}: nothing pending, halt
    assert_eq!(result.candidates, vec!["cdab"]);

    let mut dict = result.dictionary.clone();
    dict.sort();
    assert_eq!(dict, vec!["ab", "cdab"]);
    assert!(result.residue.is_empty());
}

#[test]
fn test_large_input_parallel_drain() {
    // Enough tokens to exercise all 8 workers; every "WordNNN" seeds
    // "wordNNN"-style roots via the capital pass.
    let tokens: Vec<String> = (0..2000).map(|i| format!("Word{i}X")).collect();
    let refs: Vec<&str> = tokens.iter().map(|s| s.as_str()).collect();
    let result = run(&refs);

    // Each token splits into "x" and "wordN..." pieces; nothing forwards.
    assert!(result.dictionary.contains(&"x".to_string()));
    assert!(result.residue.is_empty());
    assert_eq!(result.doubled_seeds, 0);
}
