//! Counts, for every line of an input text, how many dictionary words have an
//! anagram somewhere in that line.
//!
//! Dictionary words are indexed by their key (their characters, sorted) in a
//! trie. Each line is cut into chunks, every substring of every chunk is
//! probed against the trie, and the hits are reduced to the number of
//! distinct dictionary words they are anagrams of.

pub mod chunk;
pub mod config;
pub mod error;
pub mod key;
pub mod load;
pub mod matcher;
pub mod observe;
pub mod orchestrator;
pub mod scanner;
pub mod trie;

pub use crate::chunk::{determine_chunk_size, ChunkConfig};
pub use crate::config::AppConfig;
pub use crate::error::{Error, Result};
pub use crate::key::make_key;
pub use crate::matcher::{build_index, count_unique_matches, find_matches, Matcher};
pub use crate::scanner::{CancellationToken, MatchSet};
pub use crate::trie::AnagramIndex;
