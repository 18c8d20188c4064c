//! crates/recipe_browser_core/src/reviews.rs
//!
//! Append-only recipe reviews over the key-value store. Identity comes in
//! as an explicit [`SessionContext`] rather than being read from a global.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::{Review, SessionContext};
use crate::error::{Error, Result};
use crate::ports::{KeyValueStore, REVIEWS_KEY};
use crate::storage::{self, ReviewMap, ReviewRecord};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn KeyValueStore>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The reviews for a recipe, in insertion order. A recipe nobody has
    /// reviewed yields an empty list.
    pub async fn list(&self, recipe_id: u32) -> Result<Vec<Review>> {
        let all: ReviewMap = storage::read_json_or_default(self.store.as_ref(), REVIEWS_KEY).await?;
        Ok(all
            .get(&recipe_id.to_string())
            .map(|records| records.iter().cloned().map(ReviewRecord::to_domain).collect())
            .unwrap_or_default())
    }

    /// Appends a review. Requires a signed-in caller, a rating between
    /// [`MIN_RATING`] and [`MAX_RATING`], and non-blank text; on any
    /// failure the stored reviews are left untouched.
    pub async fn add(
        &self,
        session: &SessionContext,
        recipe_id: u32,
        rating: u8,
        text: &str,
    ) -> Result<Review> {
        let user = session.user.as_ref().ok_or(Error::NotAuthenticated)?;

        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(Error::InvalidReview(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidReview("review text must not be empty".to_string()));
        }

        let review = Review {
            username: user.username.clone(),
            rating,
            text: text.to_string(),
            date: Utc::now(),
        };

        let mut all: ReviewMap =
            storage::read_json_or_default(self.store.as_ref(), REVIEWS_KEY).await?;
        all.entry(recipe_id.to_string())
            .or_default()
            .push(ReviewRecord::from_domain(&review));
        storage::write_json(self.store.as_ref(), REVIEWS_KEY, &all).await?;

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::store::MemoryStore;

    fn signed_in() -> SessionContext {
        SessionContext::signed_in(User {
            id: 1,
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            created_at: Utc::now(),
        })
    }

    fn service() -> (ReviewService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (ReviewService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn unreviewed_recipes_list_empty() {
        let (reviews, _) = service();
        assert!(reviews.list(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn adding_requires_a_signed_in_user_and_leaves_storage_untouched() {
        let (reviews, store) = service();
        let err = reviews
            .add(&SessionContext::anonymous(), 3, 5, "great")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotAuthenticated));
        assert_eq!(store.get(REVIEWS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn ratings_outside_one_to_five_are_rejected() {
        let (reviews, store) = service();
        for rating in [0, 6] {
            let err = reviews
                .add(&signed_in(), 3, rating, "text")
                .await
                .unwrap_err();
            assert!(matches!(err, Error::InvalidReview(_)));
        }
        assert_eq!(store.get(REVIEWS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let (reviews, _) = service();
        let err = reviews.add(&signed_in(), 3, 4, "   ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidReview(_)));
    }

    #[tokio::test]
    async fn reviews_append_in_insertion_order_per_recipe() {
        let (reviews, _) = service();
        let session = signed_in();

        reviews.add(&session, 3, 5, "first").await.unwrap();
        reviews.add(&session, 3, 2, "second").await.unwrap();
        reviews.add(&session, 7, 4, "other recipe").await.unwrap();

        let listed = reviews.list(3).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].text, "first");
        assert_eq!(listed[1].text, "second");
        assert_eq!(listed[0].username, "ada");

        assert_eq!(reviews.list(7).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_stored_reviews_read_as_empty_and_are_replaced_on_write() {
        let (reviews, store) = service();
        store.set(REVIEWS_KEY, "not a map").await.unwrap();

        assert!(reviews.list(3).await.unwrap().is_empty());
        reviews.add(&signed_in(), 3, 5, "fresh start").await.unwrap();
        assert_eq!(reviews.list(3).await.unwrap().len(), 1);
    }
}
