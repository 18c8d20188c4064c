//! crates/recipe_browser_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like the
//! on-disk store the app ships with.

use async_trait::async_trait;

/// Storage key for the registered-users list.
pub const USERS_KEY: &str = "users";
/// Storage key for the currently signed-in user.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Storage key for the recipe-id -> review-list mapping.
pub const REVIEWS_KEY: &str = "recipeReviews";

/// An error from the key-value backend itself, as opposed to the domain
/// errors raised by the services on top of it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage i/o failure: {0}")]
    Io(String),
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// A convenience type alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// The flat key-value persistence shim. Values are JSON documents; the
/// services above this port own their encoding. Access is synchronous from
/// the caller's point of view and atomic within a single process.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the value stored under `key`. Removing an absent key is not
    /// an error.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}
