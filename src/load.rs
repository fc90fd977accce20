//! Reading the dictionary and input files.
//!
//! Both files hold one entry per line. Entries are trimmed and checked
//! against the configured length limits; anything outside them is skipped,
//! and so is any line that is not valid UTF-8.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::prelude::*;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::{DictionaryConfig, InputConfig};
use crate::error::{Error, Result};

fn read_file(path: &Path, max_file_size: u64) -> Result<Vec<u8>> {
    let read_error = |source| Error::Read { path: path.to_path_buf(), source };

    let size = fs::metadata(path).map_err(read_error)?.len();
    if size > max_file_size {
        return Err(Error::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_file_size,
        });
    }

    let mut file = File::open(path).map_err(read_error)?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents).map_err(read_error)?;
    Ok(contents)
}

/// Splits `contents` into lines the way `str::lines` does, dropping lines
/// that do not decode as UTF-8.
fn decode_lines<'a>(path: &Path, contents: &'a [u8]) -> Vec<&'a str> {
    let contents = contents.strip_suffix(b"\n").unwrap_or(contents);
    if contents.is_empty() {
        return Vec::new();
    }

    contents
        .split(|&b| b == b'\n')
        .enumerate()
        .filter_map(|(i, raw)| match std::str::from_utf8(raw) {
            Ok(line) => Some(line.strip_suffix('\r').unwrap_or(line)),
            Err(e) => {
                warn!(path = %path.display(), line = i + 1, error = %e, "Skipping line that is not valid UTF-8");
                None
            }
        })
        .collect()
}

fn within(len: usize, min: usize, max: usize) -> bool {
    len >= min && len <= max
}

/// Keeps words within the length limits, drops repeats and stops at
/// `max_dictionary_size` words. Order of first occurrence is preserved.
pub fn filter_words<'a, I>(words: I, config: &DictionaryConfig) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kept = Vec::new();
    let mut seen = HashSet::new();

    for line in words {
        let word = line.trim();
        if !within(word.chars().count(), config.min_word_length, config.max_word_length) {
            continue;
        }
        if seen.contains(word) {
            continue;
        }
        if kept.len() >= config.max_dictionary_size {
            warn!(
                max_dictionary_size = config.max_dictionary_size,
                "Reached max dictionary size, ignoring remaining words"
            );
            break;
        }
        seen.insert(word);
        kept.push(word.to_string());
    }

    kept
}

/// Keeps lines within the length limits and stops after `max_line_count`.
pub fn filter_lines<'a, I>(lines: I, config: &InputConfig) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kept = Vec::new();

    for line in lines {
        let line = line.trim();
        if !within(line.chars().count(), config.min_line_length, config.max_line_length) {
            continue;
        }
        kept.push(line.to_string());
        if kept.len() >= config.max_line_count {
            warn!(
                max_line_count = config.max_line_count,
                "Reached max line count, ignoring remaining input"
            );
            break;
        }
    }

    kept
}

pub fn load_dictionary<P: AsRef<Path>>(path: P, config: &DictionaryConfig, max_file_size: u64) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = read_file(path, max_file_size)?;
    let raw = decode_lines(path, &contents);
    let words = filter_words(raw.iter().copied(), config);

    debug!(
        path = %path.display(),
        scanned = raw.len(),
        kept = words.len(),
        "Loaded dictionary"
    );
    Ok(words)
}

pub fn load_input<P: AsRef<Path>>(path: P, config: &InputConfig, max_file_size: u64) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = read_file(path, max_file_size)?;
    let lines = filter_lines(decode_lines(path, &contents), config);

    debug!(path = %path.display(), kept = lines.len(), "Loaded input");
    Ok(lines)
}
