use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::config::AppConfig;
use crate::error::Result;
use crate::load::{load_dictionary, load_input};
use crate::matcher::{chunk_size_for, Matcher};
use crate::observe::TracingObserver;

/// Knobs the command line adds on top of `AppConfig`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Fixed chunk size; 0 picks one from the dictionary and input.
    pub chunk_size: usize,
    /// Size of a dedicated worker pool; 0 uses the global rayon pool.
    pub workers: usize,
    /// Scan past chunk ends far enough to catch words on a boundary.
    pub overlap: bool,
}

/// Loads both files, then writes `Case #n: count` for every input line, in
/// input order.
pub fn run<D, I, W>(dictionary_path: D, input_path: I, config: &AppConfig, options: &RunOptions, out: &mut W) -> Result<()>
where
    D: AsRef<Path>,
    I: AsRef<Path>,
    W: Write,
{
    let words = load_dictionary(dictionary_path, &config.dictionary, config.max_file_size)?;
    let lines = load_input(input_path, &config.input, config.max_file_size)?;

    let chunk_size = if options.chunk_size > 0 {
        options.chunk_size
    } else {
        chunk_size_for(&words, &lines, &config.chunk)
    };
    info!(
        words = words.len(),
        lines = lines.len(),
        chunk_size,
        overlap = options.overlap,
        "Matching input against dictionary"
    );

    let mut matcher = Matcher::new(&words, chunk_size)
        .with_overlap(options.overlap)
        .with_observer(TracingObserver);
    if options.workers > 0 {
        matcher = matcher.with_workers(options.workers)?;
    }

    for (i, line) in lines.iter().enumerate() {
        let matches = matcher.find_matches(line);
        let unique = matcher.count_unique_matches(&matches);
        writeln!(out, "Case #{}: {}", i + 1, unique)?;
    }
    out.flush()?;

    Ok(())
}
