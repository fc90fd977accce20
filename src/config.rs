use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::chunk::ChunkConfig;

/// Limits applied while loading the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub max_dictionary_size: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            min_word_length: 2,
            max_word_length: 20,
            max_dictionary_size: 100,
        }
    }
}

/// Limits applied while loading input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    pub min_line_length: usize,
    pub max_line_length: usize,
    pub max_line_count: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            min_line_length: 2,
            max_line_length: 500,
            max_line_count: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub dictionary: DictionaryConfig,
    pub input: InputConfig,
    pub chunk: ChunkConfig,
    /// Largest dictionary or input file accepted, in bytes.
    pub max_file_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            dictionary: DictionaryConfig::default(),
            input: InputConfig::default(),
            chunk: ChunkConfig::default(),
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment. Callers that want a
    /// `.env` file honoured load it with `dotenv::dotenv()` beforehand.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source. Missing variables keep
    /// their defaults, and so do unparsable ones (with a warning).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let get = |name: &str, default: usize| read_var(&lookup, name, default);

        AppConfig {
            dictionary: DictionaryConfig {
                min_word_length: get("MIN_WORD_LENGTH", defaults.dictionary.min_word_length),
                max_word_length: get("MAX_WORD_LENGTH", defaults.dictionary.max_word_length),
                max_dictionary_size: get("MAX_DICTIONARY_SIZE", defaults.dictionary.max_dictionary_size),
            },
            input: InputConfig {
                min_line_length: get("MIN_LINE_LENGTH", defaults.input.min_line_length),
                max_line_length: get("MAX_LINE_LENGTH", defaults.input.max_line_length),
                max_line_count: get("MAX_LINE_COUNT", defaults.input.max_line_count),
            },
            chunk: ChunkConfig {
                min_chunk_size: get("MIN_CHUNK_SIZE", defaults.chunk.min_chunk_size),
                max_chunk_size: get("MAX_CHUNK_SIZE", defaults.chunk.max_chunk_size),
                adjustment_factor: adjustment_factor(get(
                    "CHUNK_SIZE_ADJUSTMENT_FACTOR",
                    defaults.chunk.adjustment_factor,
                )),
            },
            max_file_size: read_var(&lookup, "MAX_FILE_SIZE", defaults.max_file_size),
        }
    }
}

fn adjustment_factor(value: usize) -> usize {
    if value == 0 {
        warn!("CHUNK_SIZE_ADJUSTMENT_FACTOR must be at least 1, using 1");
        1
    } else {
        value
    }
}

fn read_var<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy,
{
    match lookup(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(variable = name, value = %raw, "Ignoring unparsable setting");
                default
            }
        },
        None => default,
    }
}
