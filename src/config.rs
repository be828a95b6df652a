//! Runtime configuration, loaded from environment variables at startup.

use std::path::PathBuf;

use crate::infrastructure::DEFAULT_DATA_FILE;

/// Runtime configuration for moviehub.
///
/// Every field has a default so the program works without any
/// environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// File used by the save and load actions (default: `movie_collections.txt`).
    pub data_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset (default: `"warn"`).
    pub log_level: String,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build [`Config`] from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        Self {
            data_file: PathBuf::from(env_or("MOVIEHUB_DATA_FILE", DEFAULT_DATA_FILE)),
            log_level: env_or("MOVIEHUB_LOG", "warn"),
        }
    }
}
