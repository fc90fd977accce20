//! Chunk sizing and line splitting.
//!
//! Substrings are only ever enumerated inside a chunk, so the chunk size
//! bounds the per-chunk cost. The sizing policy below is a tuning heuristic:
//! results depend on where chunk boundaries fall, not on how the size was
//! picked.

use std::ops::Range;

/// Bounds for the chunk-size heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    pub min_chunk_size: usize,
    pub max_chunk_size: usize,
    pub adjustment_factor: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        ChunkConfig {
            min_chunk_size: 10,
            max_chunk_size: 100,
            adjustment_factor: 4,
        }
    }
}

/// Picks a scan window size.
///
/// The chunk starts out as long as the longest dictionary word and is
/// stretched to `average_line_length / adjustment_factor` (capped at
/// `max_chunk_size`) when lines are long compared to words. Otherwise it is
/// raised to `min_chunk_size` if it falls short.
pub fn determine_chunk_size(
    longest_word_length: usize,
    average_line_length: usize,
    config: &ChunkConfig,
) -> usize {
    let factor = config.adjustment_factor.max(1);
    let mut chunk_size = longest_word_length;

    if average_line_length > chunk_size.saturating_mul(factor)
        && average_line_length / factor > config.min_chunk_size
    {
        let proposed = average_line_length / factor;
        chunk_size = proposed.min(config.max_chunk_size);
    } else if chunk_size < config.min_chunk_size {
        chunk_size = config.min_chunk_size;
    }

    chunk_size
}

/// Length in characters of the longest word, 0 when there are none.
pub fn longest_word_length<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .map(|w| w.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

/// Integer mean of the line lengths in characters, 0 when there are none.
pub fn average_line_length<S: AsRef<str>>(lines: &[S]) -> usize {
    if lines.is_empty() {
        return 0;
    }
    let total: usize = lines.iter().map(|l| l.as_ref().chars().count()).sum();
    total / lines.len()
}

/// A half-open span of character positions within a line.
///
/// `start..end` is the chunk's own share of the line. `window_end` is where
/// scanning stops; it equals `end` unless an overlap margin was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub window_end: usize,
}

impl Chunk {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn window(&self) -> Range<usize> {
        self.start..self.window_end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `len` characters into contiguous chunks of `chunk_size`.
///
/// The last chunk may be shorter. A `chunk_size` of 0 is treated as 1.
/// `overlap` extends each chunk's scan window past its end, never past the
/// end of the line.
pub fn split(len: usize, chunk_size: usize, overlap: usize) -> Vec<Chunk> {
    let size = chunk_size.max(1);
    (0..len)
        .step_by(size)
        .enumerate()
        .map(|(index, start)| {
            let end = (start + size).min(len);
            Chunk {
                index,
                start,
                end,
                window_end: (end + overlap).min(len),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(min: usize, max: usize, factor: usize) -> ChunkConfig {
        ChunkConfig {
            min_chunk_size: min,
            max_chunk_size: max,
            adjustment_factor: factor,
        }
    }

    #[test]
    fn long_lines_stretch_the_chunk() {
        // 50 > 5 * 4 and 50 / 4 = 12 > 10
        assert_eq!(determine_chunk_size(5, 50, &cfg(10, 100, 4)), 12);
        assert_eq!(determine_chunk_size(5, 50, &cfg(10, 100, 4)), 12);
    }

    #[test]
    fn stretch_is_capped_by_max() {
        assert_eq!(determine_chunk_size(5, 2000, &cfg(10, 100, 4)), 100);
    }

    #[test]
    fn short_words_are_raised_to_min() {
        assert_eq!(determine_chunk_size(5, 30, &cfg(10, 100, 4)), 10);
        assert_eq!(determine_chunk_size(0, 0, &cfg(10, 100, 4)), 10);
    }

    #[test]
    fn longest_word_kept_when_no_branch_applies() {
        assert_eq!(determine_chunk_size(15, 40, &cfg(10, 100, 4)), 15);
    }

    #[test]
    fn zero_factor_means_no_adjustment() {
        assert_eq!(
            determine_chunk_size(5, 50, &cfg(10, 100, 0)),
            determine_chunk_size(5, 50, &cfg(10, 100, 1))
        );
        assert_eq!(determine_chunk_size(5, 50, &cfg(10, 100, 0)), 50);
    }

    #[test]
    fn result_stays_within_bounds() {
        let config = cfg(10, 100, 4);
        for longest in 0..=100 {
            for average in (0..=1000).step_by(7) {
                let size = determine_chunk_size(longest, average, &config);
                assert!(size >= config.min_chunk_size, "{} {}", longest, average);
                assert!(size <= config.max_chunk_size, "{} {}", longest, average);
            }
        }
    }

    #[test]
    fn never_below_longest_word_without_stretch() {
        let config = cfg(10, 100, 4);
        for longest in 10..=100 {
            // average too short for the stretch branch
            let size = determine_chunk_size(longest, longest, &config);
            assert!(size >= longest);
        }
    }

    #[test]
    fn lengths_helpers() {
        assert_eq!(longest_word_length(&["ab", "abcde", "abc"]), 5);
        assert_eq!(longest_word_length::<&str>(&[]), 0);
        assert_eq!(average_line_length(&["ab", "abcd", "abcdef"]), 4);
        assert_eq!(average_line_length(&["abc", "ab"]), 2);
        assert_eq!(average_line_length::<String>(&[]), 0);
    }

    #[test]
    fn chunks_cover_the_line() {
        let line: Vec<char> = "aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt".chars().collect();
        for size in 1..=60 {
            let chunks = split(line.len(), size, 0);
            assert_eq!(chunks.len(), (line.len() + size - 1) / size);

            let rebuilt: String = chunks.iter().flat_map(|c| line[c.span()].iter()).collect();
            assert_eq!(rebuilt, line.iter().collect::<String>());

            for pair in chunks.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
            assert!(chunks.iter().all(|c| c.window() == c.span()));
        }
    }

    #[test]
    fn trailing_chunk_may_be_short() {
        let chunks = split(25, 10, 0);
        let lens: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        assert_eq!(lens, vec![10, 10, 5]);
    }

    #[test]
    fn empty_line_has_no_chunks() {
        assert!(split(0, 10, 0).is_empty());
    }

    #[test]
    fn zero_chunk_size_is_treated_as_one() {
        assert_eq!(split(3, 0, 0).len(), 3);
    }

    #[test]
    fn overlap_extends_window_only() {
        let chunks = split(25, 10, 4);
        assert_eq!(chunks[0].span(), 0..10);
        assert_eq!(chunks[0].window(), 0..14);
        assert_eq!(chunks[2].window(), 20..25);
    }
}
