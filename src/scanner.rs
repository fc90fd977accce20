use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::key::push_sorted;
use crate::trie::AnagramIndex;

pub use tokio_util::sync::CancellationToken;

/// Literal substrings of a line whose key is in the index.
pub type MatchSet = HashSet<String>;

/// What one chunk scan found.
#[derive(Debug, Default)]
pub struct ChunkScan {
    pub matches: MatchSet,
    pub probes: usize,
}

/// Probes every substring of `chunk` against the index.
///
/// For each start position the substring is grown one character at a time
/// and its key kept sorted by insertion, so each probe costs one insertion
/// and one trie walk. The token is checked before every start position.
pub fn scan_chunk(chunk: &[char], index: &AnagramIndex, cancel: &CancellationToken) -> Result<ChunkScan> {
    let mut scan = ChunkScan::default();
    if index.is_empty() {
        return Ok(scan);
    }

    let mut sorted = Vec::with_capacity(chunk.len());
    for i in 0..chunk.len() {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        sorted.clear();
        for j in i..chunk.len() {
            push_sorted(&mut sorted, chunk[j]);
            scan.probes += 1;
            if index.contains_chars(&sorted) {
                scan.matches.insert(chunk[i..=j].iter().collect());
            }
        }
    }

    Ok(scan)
}
