use std::collections::{HashMap, hash_map::DefaultHasher};
use std::hash::BuildHasherDefault;

use crate::key::{make_key, Key};

type Children = HashMap<char, Node, BuildHasherDefault<DefaultHasher>>;

#[derive(Debug, Default)]
struct Node {
    children: Children,
    terminal: bool,
}

/// A trie over canonical keys.
///
/// Lookups walk at most one node per key character, so their cost depends on
/// the key length and not on how many words were indexed. The index is never
/// mutated once built, which makes shared lookups from many threads safe
/// without locking.
#[derive(Debug, Default)]
pub struct AnagramIndex {
    root: Node,
    len: usize,
}

impl AnagramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes the canonical key of every word.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for word in words {
            index.insert(&make_key(word.as_ref()));
        }
        index
    }

    /// Inserting a key that is already present leaves the trie unchanged.
    /// The empty key is ignored.
    pub fn insert(&mut self, key: &Key) {
        if key.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.walk(key.chars())
    }

    /// Same as `contains` for a key held as sorted characters.
    pub fn contains_chars(&self, key: &[char]) -> bool {
        self.walk(key.iter().copied())
    }

    fn walk<I: Iterator<Item = char>>(&self, key: I) -> bool {
        let mut node = &self.root;
        for c in key {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Number of distinct keys in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
