//! crates/recipe_browser_core/src/error.rs
//!
//! The error taxonomy for the core services. Every variant is surfaced to
//! the end user as a single blocking message; none are retried and none
//! recover automatically beyond the corruption fallback in `storage`.

use crate::ports::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A user is already registered under the given email.
    #[error("a user already exists with the email {0}")]
    DuplicateUser(String),

    /// No registered user has the given email.
    #[error("no user found with the email {0}")]
    UserNotFound(String),

    /// The operation requires a signed-in user.
    #[error("you must be signed in to do that")]
    NotAuthenticated,

    /// The submitted review failed validation.
    #[error("invalid review: {0}")]
    InvalidReview(String),

    /// Detail lookup for an id absent from the catalog.
    #[error("recipe {0} not found")]
    RecipeNotFound(u32),

    /// A persisted value failed to decode. Callers fall back to the empty
    /// default after logging; the variant carries the offending key for
    /// the diagnostic trace.
    #[error("stored value under '{key}' is corrupt and was ignored")]
    StorageCorruption { key: String },

    /// A failure in the underlying key-value backend.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
