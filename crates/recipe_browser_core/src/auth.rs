//! crates/recipe_browser_core/src/auth.rs
//!
//! Registration, login, and logout against the key-value store. This is a
//! mock flow: the password argument is accepted and discarded, never stored
//! or verified, and must not be read as a security contract.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::{SessionContext, User};
use crate::error::{Error, Result};
use crate::ports::{KeyValueStore, CURRENT_USER_KEY, USERS_KEY};
use crate::storage::{self, UserRecord};

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Creates a user and signs them in. Fails with
    /// [`Error::DuplicateUser`] when a stored user already has the email.
    /// A blank username defaults to the email local-part.
    pub async fn register(&self, email: &str, _password: &str, username: &str) -> Result<User> {
        let mut users: Vec<UserRecord> =
            storage::read_json_or_default(self.store.as_ref(), USERS_KEY).await?;

        if users.iter().any(|u| u.email == email) {
            return Err(Error::DuplicateUser(email.to_string()));
        }

        let username = if username.trim().is_empty() {
            email.split('@').next().unwrap_or(email)
        } else {
            username.trim()
        };
        let created_at = Utc::now();
        let user = User {
            id: created_at.timestamp_millis(),
            email: email.to_string(),
            username: username.to_string(),
            created_at,
        };

        users.push(UserRecord::from_domain(&user));
        storage::write_json(self.store.as_ref(), USERS_KEY, &users).await?;

        // registration signs the user in immediately
        self.set_current(&user).await?;
        Ok(user)
    }

    /// Signs in the stored user with the given email. Fails with
    /// [`Error::UserNotFound`] when no user has it. The password is not
    /// verified.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User> {
        let users: Vec<UserRecord> =
            storage::read_json_or_default(self.store.as_ref(), USERS_KEY).await?;

        let record = users
            .into_iter()
            .find(|u| u.email == email)
            .ok_or_else(|| Error::UserNotFound(email.to_string()))?;

        let user = record.to_domain();
        self.set_current(&user).await?;
        Ok(user)
    }

    /// Clears the current session user. Logging out while signed out is
    /// not an error.
    pub async fn logout(&self) -> Result<()> {
        self.store.remove(CURRENT_USER_KEY).await?;
        Ok(())
    }

    /// The signed-in user, if any. A corrupt stored session reads as
    /// signed out.
    pub async fn current_user(&self) -> Result<Option<User>> {
        let record: Option<UserRecord> =
            storage::read_json_lenient(self.store.as_ref(), CURRENT_USER_KEY).await?;
        Ok(record.map(UserRecord::to_domain))
    }

    /// The caller identity to hand to collaborators needing it.
    pub async fn session(&self) -> Result<SessionContext> {
        Ok(SessionContext {
            user: self.current_user().await?,
        })
    }

    async fn set_current(&self, user: &User) -> Result<()> {
        storage::write_json(
            self.store.as_ref(),
            CURRENT_USER_KEY,
            &UserRecord::from_domain(user),
        )
        .await
    }
}
