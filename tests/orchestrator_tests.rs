//! End-to-end runs over dictionary and input files on disk.

use std::io::Write;

use anagram_scan::config::{AppConfig, DictionaryConfig};
use anagram_scan::orchestrator::{run, RunOptions};
use anagram_scan::Error;
use tempfile::NamedTempFile;

fn file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run_to_string(dictionary: &str, input: &str, config: &AppConfig, options: &RunOptions) -> String {
    let dictionary = file_with(dictionary);
    let input = file_with(input);
    let mut out = Vec::new();
    run(dictionary.path(), input.path(), config, options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

const DICTIONARY: &str = "axpaj\napxaj\ndnrbt\npjxdn\nabd\n";

#[test]
fn reports_one_case_per_line_in_order() {
    let input = "aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt\nzzzzzz\ndnrbtxx\n";
    let options = RunOptions { chunk_size: 10, ..RunOptions::default() };
    let output = run_to_string(DICTIONARY, input, &AppConfig::default(), &options);
    assert_eq!(output, "Case #1: 4\nCase #2: 0\nCase #3: 1\n");
}

#[test]
fn derived_chunk_size_finds_reference_matches() {
    // longest word 5, one line of 50: chunk size 12 with the default bounds
    let input = "aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt\n";
    let output = run_to_string(DICTIONARY, input, &AppConfig::default(), &RunOptions::default());
    assert_eq!(output, "Case #1: 4\n");
}

#[test]
fn empty_dictionary_reports_zero_everywhere() {
    let input = "aapxjdnrbt\nabdabd\n";
    let output = run_to_string("", input, &AppConfig::default(), &RunOptions::default());
    assert_eq!(output, "Case #1: 0\nCase #2: 0\n");
}

#[test]
fn dictionary_limits_apply_before_matching() {
    let config = AppConfig {
        dictionary: DictionaryConfig {
            min_word_length: 4,
            max_word_length: 20,
            max_dictionary_size: 100,
        },
        ..AppConfig::default()
    };
    // "abd" is too short to be loaded
    let output = run_to_string(DICTIONARY, "xxbadxx\n", &config, &RunOptions::default());
    assert_eq!(output, "Case #1: 0\n");
}

#[test]
fn overlap_catches_boundary_words() {
    let options = RunOptions { chunk_size: 4, overlap: true, ..RunOptions::default() };
    let output = run_to_string("dnrbt\n", "xxdnrbtx\n", &AppConfig::default(), &options);
    assert_eq!(output, "Case #1: 1\n");

    let options = RunOptions { chunk_size: 4, ..RunOptions::default() };
    let output = run_to_string("dnrbt\n", "xxdnrbtx\n", &AppConfig::default(), &options);
    assert_eq!(output, "Case #1: 0\n");
}

#[test]
fn dedicated_pool_gives_same_output() {
    let input = "aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt\nbadpxjdn\n";
    let shared = run_to_string(DICTIONARY, input, &AppConfig::default(), &RunOptions::default());
    let pooled = run_to_string(
        DICTIONARY,
        input,
        &AppConfig::default(),
        &RunOptions { workers: 2, ..RunOptions::default() },
    );
    assert_eq!(shared, pooled);
    assert_eq!(pooled, "Case #1: 4\nCase #2: 2\n");
}

#[test]
fn missing_input_is_fatal() {
    let dictionary = file_with(DICTIONARY);
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    let err = run(
        dictionary.path(),
        dir.path().join("missing.txt"),
        &AppConfig::default(),
        &RunOptions::default(),
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(out.is_empty());
}
