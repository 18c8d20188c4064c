//! crates/recipe_browser_core/src/storage.rs
//!
//! JSON blob helpers over the key-value port, plus the "impure" record
//! structs that define the persisted shape of each value. Stored field
//! names are camelCase; existing browser local-storage exports load as-is.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::domain::{Review, User};
use crate::error::{Error, Result};
use crate::ports::{KeyValueStore, StoreError};

//=========================================================================================
// Persisted Record Structs
//=========================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserRecord {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn to_domain(self) -> User {
        User {
            id: self.id,
            email: self.email,
            username: self.username,
            created_at: self.created_at,
        }
    }

    pub fn from_domain(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ReviewRecord {
    pub username: String,
    pub rating: u8,
    pub text: String,
    pub date: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn to_domain(self) -> Review {
        Review {
            username: self.username,
            rating: self.rating,
            text: self.text,
            date: self.date,
        }
    }

    pub fn from_domain(review: &Review) -> Self {
        Self {
            username: review.username.clone(),
            rating: review.rating,
            text: review.text.clone(),
            date: review.date,
        }
    }
}

/// The `recipeReviews` value: recipe id (as a string key) to review list.
pub(crate) type ReviewMap = BTreeMap<String, Vec<ReviewRecord>>;

//=========================================================================================
// Blob Read/Write Helpers
//=========================================================================================

/// Reads and decodes the value under `key`. Absent keys yield `Ok(None)`;
/// malformed JSON yields `Error::StorageCorruption`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(Error::StorageCorruption {
            key: key.to_string(),
        }),
    }
}

/// Like [`read_json`], but a corrupt value logs a warning and reads as
/// absent instead of failing the operation.
pub(crate) async fn read_json_lenient<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>> {
    match read_json(store, key).await {
        Err(err @ Error::StorageCorruption { .. }) => {
            warn!(key, %err, "discarding corrupt stored value");
            Ok(None)
        }
        other => other,
    }
}

/// Reads the value under `key`, treating both absence and corruption as the
/// empty default.
pub(crate) async fn read_json_or_default<T: DeserializeOwned + Default>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<T> {
    Ok(read_json_lenient(store, key).await?.unwrap_or_default())
}

/// Encodes `value` and stores it under `key`.
pub(crate) async fn write_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)
        .map_err(|err| StoreError::Backend(format!("failed to encode '{key}': {err}")))?;
    store.set(key, &raw).await?;
    Ok(())
}
