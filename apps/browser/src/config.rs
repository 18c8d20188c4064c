//! apps/browser/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The
//! `.env` file is used for local development.

use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Where the key-value store file lives.
    pub store_path: PathBuf,
    /// Rows per page of search results.
    pub page_size: usize,
    /// Simulated network round trip before each fetch becomes visible.
    pub fetch_delay: Duration,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for
    /// development, but this is skipped in test environments to ensure
    /// tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let store_path = std::env::var("STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("recipe_browser.json"));

        let page_size_str = std::env::var("PAGE_SIZE").unwrap_or_else(|_| "12".to_string());
        let page_size = page_size_str
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidValue("PAGE_SIZE".to_string(), e.to_string()))?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue(
                "PAGE_SIZE".to_string(),
                "page size must be at least 1".to_string(),
            ));
        }

        let fetch_delay_str =
            std::env::var("FETCH_DELAY_MS").unwrap_or_else(|_| "300".to_string());
        let fetch_delay_ms = fetch_delay_str.parse::<u64>().map_err(|e| {
            ConfigError::InvalidValue("FETCH_DELAY_MS".to_string(), e.to_string())
        })?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            store_path,
            page_size,
            fetch_delay: Duration::from_millis(fetch_delay_ms),
            log_level,
        })
    }
}
