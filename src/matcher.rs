use std::collections::{HashMap, HashSet, hash_map::DefaultHasher};
use std::hash::BuildHasherDefault;
use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::chunk::{self, ChunkConfig};
use crate::error::Result;
use crate::key::{make_key, Key};
use crate::observe::{MatchObserver, NoopObserver};
use crate::scanner::{scan_chunk, CancellationToken, MatchSet};
use crate::trie::AnagramIndex;

/// Dictionary words grouped under their key.
type Dictionary = HashMap<Box<Key>, Vec<Box<str>>, BuildHasherDefault<DefaultHasher>>;

fn group_words<S: AsRef<str>>(words: &[S]) -> Dictionary {
    let mut dictionary = Dictionary::default();

    for word in words {
        let word = word.as_ref();
        if word.is_empty() { continue }

        let group = dictionary.entry(make_key(word)).or_insert_with(|| vec![]);
        if !group.iter().any(|w| &**w == word) {
            group.push(word.into());
        }
    }

    dictionary
}

fn count_grouped(dictionary: &Dictionary, matches: &MatchSet) -> usize {
    let keys: HashSet<Box<Key>> = matches.iter().map(|m| make_key(m)).collect();
    keys.iter()
        .filter_map(|key| dictionary.get(key))
        .map(Vec::len)
        .sum()
}

/// Scans `line` chunk by chunk on the current rayon pool and unions the hits.
///
/// Every chunk worker returns its own set and the sets are merged by the
/// reduction, so nothing is shared mutably between workers.
fn scan_line(
    line: &str,
    index: &AnagramIndex,
    chunk_size: usize,
    overlap: usize,
    observer: &dyn MatchObserver,
    cancel: &CancellationToken,
) -> Result<MatchSet> {
    let chars: Vec<char> = line.chars().collect();
    let chunk_size = chunk_size.max(1);
    let chunks = chunk::split(chars.len(), chunk_size, overlap);
    observer.line_split(chars.len(), chunk_size, chunks.len());

    chunks
        .par_iter()
        .map(|chunk| -> Result<MatchSet> {
            let scan = scan_chunk(&chars[chunk.window()], index, cancel)?;
            observer.chunk_scanned(chunk, scan.probes, scan.matches.len());
            Ok(scan.matches)
        })
        .try_reduce(MatchSet::new, |mut acc, mut part| {
            if acc.len() < part.len() {
                std::mem::swap(&mut acc, &mut part);
            }
            acc.extend(part);
            Ok(acc)
        })
}

/// Indexes the canonical key of every dictionary word.
pub fn build_index<S: AsRef<str>>(words: &[S]) -> AnagramIndex {
    AnagramIndex::from_words(words)
}

/// Chunk size for a dictionary and a set of input lines.
pub fn chunk_size_for<W: AsRef<str>, L: AsRef<str>>(words: &[W], lines: &[L], config: &ChunkConfig) -> usize {
    chunk::determine_chunk_size(
        chunk::longest_word_length(words),
        chunk::average_line_length(lines),
        config,
    )
}

/// Substrings of `line` whose key is in `index`, scanned chunk by chunk.
///
/// A substring that straddles two chunks is never seen.
pub fn find_matches(line: &str, index: &AnagramIndex, chunk_size: usize) -> MatchSet {
    // a fresh token is never cancelled
    scan_line(line, index, chunk_size, 0, &NoopObserver, &CancellationToken::new())
        .unwrap_or_default()
}

/// Number of dictionary words that are anagrams of at least one match.
pub fn count_unique_matches<S: AsRef<str>>(matches: &MatchSet, words: &[S]) -> usize {
    count_grouped(&group_words(words), matches)
}

/// Owns everything needed to match lines against one dictionary.
pub struct Matcher {
    index: AnagramIndex,
    dictionary: Dictionary,
    longest_word: usize,
    chunk_size: usize,
    overlap: usize,
    pool: Option<ThreadPool>,
    observer: Arc<dyn MatchObserver>,
}

impl Matcher {
    pub fn new<S: AsRef<str>>(words: &[S], chunk_size: usize) -> Self {
        Matcher {
            index: build_index(words),
            dictionary: group_words(words),
            longest_word: chunk::longest_word_length(words),
            chunk_size: chunk_size.max(1),
            overlap: 0,
            pool: None,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Runs chunk scans on a dedicated pool of `workers` threads instead of
    /// the global rayon pool.
    pub fn with_workers(mut self, workers: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("anagram-scan-{}", i))
            .build()?;
        self.pool = Some(pool);
        Ok(self)
    }

    /// Lets each chunk's scan run `longest word - 1` characters into the
    /// next chunk, so words straddling a boundary are found too.
    pub fn with_overlap(mut self, enabled: bool) -> Self {
        self.overlap = if enabled { self.longest_word.saturating_sub(1) } else { 0 };
        self
    }

    pub fn with_observer<O: MatchObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    pub fn index(&self) -> &AnagramIndex {
        &self.index
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn find_matches(&self, line: &str) -> MatchSet {
        // a fresh token is never cancelled
        self.try_find_matches(line, &CancellationToken::new())
            .unwrap_or_default()
    }

    /// Like `find_matches`, but gives up with `Error::Cancelled` once
    /// `cancel` is tripped.
    pub fn try_find_matches(&self, line: &str, cancel: &CancellationToken) -> Result<MatchSet> {
        let observer = &*self.observer;
        let run = || scan_line(line, &self.index, self.chunk_size, self.overlap, observer, cancel);
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    pub fn count_unique_matches(&self, matches: &MatchSet) -> usize {
        let unique = count_grouped(&self.dictionary, matches);
        self.observer.matches_counted(matches.len(), unique);
        unique
    }
}
