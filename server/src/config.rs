//! Host configuration from environment variables.
//!
//! | variable | default | meaning |
//! |---|---|---|
//! | `PORT` | `3000` | TCP port bound on `127.0.0.1` |
//! | `CATEGORY_SEED` | `true` | start with the starter categories |

use std::num::ParseIntError;

use category_core::CategoryStore;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

/// Errors from reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid CATEGORY_SEED {0:?}: expected true, false, 1 or 0")]
    InvalidSeed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup("PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }

        if let Some(value) = lookup("CATEGORY_SEED") {
            config.seed = match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(ConfigError::InvalidSeed(value)),
            };
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }

    /// The store the host starts with.
    pub fn store(&self) -> CategoryStore {
        if self.seed {
            CategoryStore::seeded()
        } else {
            CategoryStore::new()
        }
    }
}
