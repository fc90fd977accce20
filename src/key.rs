/// `Key` is used to denote a string whose characters are sorted by code point.
///
/// Two strings are anagrams of each other exactly when their keys are equal.
pub type Key = str;

pub fn make_key(word: &str) -> Box<Key> {
    let mut cs: Vec<char> = word.chars().collect();
    cs.sort_unstable();
    from_sorted(&cs)
}

/// Builds a key from characters that are already in key order.
pub(crate) fn from_sorted(cs: &[char]) -> Box<Key> {
    let mut string = String::with_capacity(cs.len()); // lower bound on UTF-8 len
    for &c in cs {
        string.push(c);
    }

    string.into()
}

/// Inserts `c` into `sorted` keeping it in key order.
///
/// Extending a substring by one character and inserting that character here
/// yields the same sequence as sorting the extended substring from scratch.
pub(crate) fn push_sorted(sorted: &mut Vec<char>, c: char) {
    let at = sorted.partition_point(|&x| x <= c);
    sorted.insert(at, c);
}
