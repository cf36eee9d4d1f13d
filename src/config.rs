//! Runtime configuration from environment variables.
//!
//! | Variable          | Meaning                                   | Default |
//! |-------------------|-------------------------------------------|---------|
//! | `MATCH3_SEED`     | RNG seed                                  | clock   |
//! | `MATCH3_LEVEL`    | starting level                            | 1       |
//! | `MATCH3_LOG_PATH` | log file; logging is off when unset       | -       |
//! | `MATCH3_LOG`      | `tracing` filter when `RUST_LOG` is unset | `info`  |

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u32>,
    pub level: u32,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            level: 1,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("MATCH3_SEED").and_then(|s| s.parse().ok());
        let level = non_empty("MATCH3_LEVEL")
            .and_then(|s| s.parse().ok())
            .filter(|l: &u32| *l >= 1)
            .unwrap_or(1);
        let log_path = non_empty("MATCH3_LOG_PATH");
        let log_filter = non_empty("MATCH3_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            level,
            log_path,
            log_filter,
        }
    }

    /// Configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
