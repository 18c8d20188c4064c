//! crates/recipe_browser_core/src/browser.rs
//!
//! The browse session: the command/query surface a front-end drives to
//! search the catalog, page through results, and open recipe detail. It
//! owns the current criteria, the paging cursor, and the accumulated
//! displayed rows, and emulates a network round trip with a fixed
//! artificial delay before each page becomes visible.

use std::time::Duration;
use tokio::time::sleep;

use crate::catalog::Catalog;
use crate::domain::{Criteria, Recipe};
use crate::error::{Error, Result};
use crate::filter;
use crate::pager::Pager;

/// One atomically delivered fetch result.
#[derive(Debug, Clone)]
pub struct Page {
    /// The rows this fetch added.
    pub items: Vec<Recipe>,
    /// Every row accumulated since the last criteria change, in order.
    pub displayed: Vec<Recipe>,
    /// Size of the full filtered set, for the results count.
    pub total_matches: usize,
    /// Whether a further load-more would yield rows.
    pub has_more: bool,
}

/// A browse session over a fixed catalog.
///
/// Fetches borrow the session mutably, which makes overlapping requests
/// latest-wins by construction: starting a new search requires dropping any
/// in-flight fetch future first, a dropped fetch never delivers, and
/// `search` rebuilds the criteria, cursor, and accumulated rows before its
/// own fetch. State only changes after the simulated delay has elapsed, so
/// an abandoned fetch leaves no partial page behind.
#[derive(Debug)]
pub struct Browser {
    catalog: Catalog,
    criteria: Criteria,
    filtered: Vec<Recipe>,
    displayed: Vec<Recipe>,
    pager: Pager,
    fetch_delay: Duration,
}

impl Browser {
    /// Creates a session showing the whole catalog, one `page_size`-row
    /// page at a time, with no artificial latency.
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        let filtered = catalog.recipes().to_vec();
        Self {
            catalog,
            criteria: Criteria::default(),
            filtered,
            displayed: Vec::new(),
            pager: Pager::new(page_size),
            fetch_delay: Duration::ZERO,
        }
    }

    /// Sets the simulated round-trip delay applied before every fetch.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Replaces the criteria, discards previously accumulated rows, resets
    /// the cursor, and fetches the first page of the new result set. Stale
    /// rows from the prior criteria are never mixed into the new view.
    pub async fn search(&mut self, criteria: Criteria) -> Page {
        self.filtered = filter::filter(self.catalog.recipes(), &criteria);
        self.criteria = criteria;
        self.pager.reset();
        self.displayed.clear();
        self.fetch_page().await
    }

    /// Fetches the next page under the current criteria. Past the end of
    /// the result set this yields an empty page with `has_more` false.
    pub async fn load_more(&mut self) -> Page {
        self.fetch_page().await
    }

    /// Detail lookup by id, with the same simulated round trip as a page
    /// fetch. Entries without authored detail come back with the generic
    /// synthesized lists.
    pub async fn recipe(&self, id: u32) -> Result<Recipe> {
        sleep(self.fetch_delay).await;
        self.catalog.detail(id).ok_or(Error::RecipeNotFound(id))
    }

    async fn fetch_page(&mut self) -> Page {
        sleep(self.fetch_delay).await;
        let items = self.pager.next(&self.filtered).to_vec();
        self.displayed.extend(items.iter().cloned());
        Page {
            items,
            displayed: self.displayed.clone(),
            total_matches: self.filtered.len(),
            has_more: self.pager.has_more(self.filtered.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagFilter;

    fn ids(recipes: &[Recipe]) -> Vec<u32> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn first_fetch_shows_the_whole_demo_catalog_in_one_page() {
        let mut browser = Browser::new(Catalog::demo(), 12);
        let page = browser.search(Criteria::default()).await;

        assert_eq!(page.items.len(), 12);
        assert_eq!(page.total_matches, 12);
        assert!(!page.has_more);
        assert_eq!(ids(&page.items), (1..=12).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn load_more_accumulates_without_gaps_or_duplicates() {
        let mut browser = Browser::new(Catalog::demo(), 5);

        let mut page = browser.search(Criteria::default()).await;
        assert_eq!(ids(&page.items), vec![1, 2, 3, 4, 5]);
        assert!(page.has_more);

        page = browser.load_more().await;
        assert_eq!(ids(&page.items), vec![6, 7, 8, 9, 10]);
        assert!(page.has_more);

        page = browser.load_more().await;
        assert_eq!(ids(&page.items), vec![11, 12]);
        assert!(!page.has_more);
        assert_eq!(ids(&page.displayed), (1..=12).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn a_new_search_discards_rows_from_the_prior_criteria() {
        let mut browser = Browser::new(Catalog::demo(), 5);
        browser.search(Criteria::default()).await;
        browser.load_more().await;

        let page = browser
            .search(Criteria::default().with_diet("vegan"))
            .await;
        assert_eq!(ids(&page.items), vec![4, 7, 10]);
        assert_eq!(ids(&page.displayed), vec![4, 7, 10]);
        assert_eq!(page.total_matches, 3);
        assert!(!page.has_more);
        assert_eq!(browser.criteria().diet, TagFilter::Tag("vegan".into()));
    }

    #[tokio::test]
    async fn loading_past_the_end_yields_an_empty_page() {
        let mut browser = Browser::new(Catalog::demo(), 12);
        browser.search(Criteria::default()).await;

        let page = browser.load_more().await;
        assert!(page.items.is_empty());
        assert_eq!(page.displayed.len(), 12);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn detail_lookup_synthesizes_or_fails_by_id() {
        let browser = Browser::new(Catalog::demo(), 12);

        let detailed = browser.recipe(2).await.unwrap();
        assert!(detailed.instructions[0].contains("al dente"));

        let synthesized = browser.recipe(9).await.unwrap();
        assert!(!synthesized.ingredients.is_empty());

        assert!(matches!(
            browser.recipe(404).await,
            Err(Error::RecipeNotFound(404))
        ));
    }

    #[tokio::test]
    async fn a_dropped_fetch_leaves_no_partial_state() {
        let mut browser =
            Browser::new(Catalog::demo(), 5).with_fetch_delay(Duration::from_secs(60));
        {
            let fetch = browser.search(Criteria::default());
            tokio::pin!(fetch);
            // poll once so the fetch is genuinely in its simulated delay,
            // then drop it before it can deliver
            poll_once(fetch.as_mut()).await;
        }

        // the superseding search observes a clean cursor and no stale rows
        let mut browser = browser.with_fetch_delay(Duration::ZERO);
        let page = browser.search(Criteria::default().with_diet("vegan")).await;
        assert_eq!(ids(&page.items), vec![4, 7, 10]);
        assert_eq!(ids(&page.displayed), vec![4, 7, 10]);
    }

    async fn poll_once<F>(mut fut: std::pin::Pin<&mut F>)
    where
        F: std::future::Future,
    {
        use std::future::Future;
        use std::task::Poll;
        std::future::poll_fn(move |cx| {
            let _ = fut.as_mut().poll(cx);
            Poll::Ready(())
        })
        .await;
    }
}
