use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

use crate::error::{Result, VocabError};

pub const DEFAULT_TOKEN_LIMIT: usize = 100;
pub const DEFAULT_MIN_LENGTH: usize = 0;
pub const DEFAULT_MAX_LENGTH: usize = 16;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Startup defaults for a refinement session, read from the environment
/// (or a `.env` file next to the binary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token_limit: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_limit: DEFAULT_TOKEN_LIMIT,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            token_limit: get_or_default(&lookup, "VOCAB_TOKEN_LIMIT", DEFAULT_TOKEN_LIMIT)?,
            min_length: get_or_default(&lookup, "VOCAB_MIN_LENGTH", DEFAULT_MIN_LENGTH)?,
            max_length: get_or_default(&lookup, "VOCAB_MAX_LENGTH", DEFAULT_MAX_LENGTH)?,
            log_level: lookup("VOCAB_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        };

        if config.token_limit == 0 {
            return Err(VocabError::Config(
                "VOCAB_TOKEN_LIMIT must be at least 1".to_string(),
            ));
        }
        if config.min_length > config.max_length {
            return Err(VocabError::Config(format!(
                "VOCAB_MIN_LENGTH ({}) exceeds VOCAB_MAX_LENGTH ({})",
                config.min_length, config.max_length
            )));
        }
        Ok(config)
    }
}

fn get_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| VocabError::Config(format!("{key} must be a non-negative integer, got {raw:?}"))),
        None => Ok(default),
    }
}
