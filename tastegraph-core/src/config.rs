use std::time::Duration;
use tastegraph_common::MatchPercentage;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_JOIN_DELAY_MS: u64 = 1500;
pub const DEFAULT_MATCH_PERCENTAGE: u8 = 86;

const JOIN_DELAY_KEY: &str = "TASTEGRAPH_JOIN_DELAY_MS";
const MATCH_PERCENTAGE_KEY: &str = "TASTEGRAPH_MATCH_PERCENTAGE";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Simulated latency of the mock share-link join
    pub join_delay: Duration,
    /// Match percentage reported by the mock share-link join
    pub match_percentage: MatchPercentage,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            join_delay: Duration::from_millis(DEFAULT_JOIN_DELAY_MS),
            match_percentage: default_match_percentage(),
        }
    }
}

fn default_match_percentage() -> MatchPercentage {
    MatchPercentage::clamped(DEFAULT_MATCH_PERCENTAGE)
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// A `.env` file in the working directory is honored in development.
    /// Invalid values are logged and replaced by defaults.
    pub fn load() -> Self {
        let dev_mode = dotenvy::dotenv().is_ok();
        if dev_mode {
            info!("Loaded .env file");
        }

        match Self::from_lookup(|key| std::env::var(key).ok()) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Build configuration from an arbitrary key lookup. Missing keys take
    /// their defaults; present but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(JOIN_DELAY_KEY) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: JOIN_DELAY_KEY,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            config.join_delay = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup(MATCH_PERCENTAGE_KEY) {
            let invalid = |reason: String| ConfigError::InvalidValue {
                key: MATCH_PERCENTAGE_KEY,
                value: raw.clone(),
                reason,
            };
            let value = raw
                .trim()
                .parse::<u8>()
                .map_err(|e| invalid(e.to_string()))?;
            config.match_percentage =
                MatchPercentage::try_from(value).map_err(|e| invalid(e.to_string()))?;
        }

        Ok(config)
    }
}
