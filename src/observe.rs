//! Hooks for watching the matcher at work.
//!
//! The engine never logs on its own. Callers that want diagnostics hand a
//! `MatchObserver` to the `Matcher`; `TracingObserver` forwards every event
//! to `tracing` at debug level.

use tracing::debug;

use crate::chunk::Chunk;

pub trait MatchObserver: Send + Sync {
    /// A line was split into `chunks` chunks of `chunk_size` characters.
    fn line_split(&self, _line_len: usize, _chunk_size: usize, _chunks: usize) {}

    /// A chunk finished scanning after probing `probes` substrings.
    fn chunk_scanned(&self, _chunk: &Chunk, _probes: usize, _hits: usize) {}

    /// Matches of a line were reduced to `unique` dictionary words.
    fn matches_counted(&self, _matches: usize, _unique: usize) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
    fn line_split(&self, line_len: usize, chunk_size: usize, chunks: usize) {
        debug!(line_len, chunk_size, chunks, "Split line into chunks");
    }

    fn chunk_scanned(&self, chunk: &Chunk, probes: usize, hits: usize) {
        debug!(
            chunk = chunk.index,
            start = chunk.start,
            end = chunk.end,
            probes,
            hits,
            "Scanned chunk"
        );
    }

    fn matches_counted(&self, matches: usize, unique: usize) {
        debug!(matches, unique, "Counted unique matches");
    }
}
