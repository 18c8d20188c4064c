//! apps/browser/src/error.rs
//!
//! Defines the primary error type for the whole app.

use crate::config::ConfigError;
use recipe_browser_core::Error as CoreError;

/// The primary error type for the `browser` app.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from the core services.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Represents a standard Input/Output error (e.g., reading the terminal).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
