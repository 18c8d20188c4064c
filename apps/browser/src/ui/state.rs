//! apps/browser/src/ui/state.rs
//!
//! Defines the application's shared state: the browse session and the
//! services every command handler drives.

use std::sync::Arc;

use recipe_browser_core::{AuthService, Browser, Catalog, KeyValueStore, ReviewService};

use crate::config::Config;

/// The application state, created once at startup and owned by the shell.
pub struct AppState {
    pub config: Arc<Config>,
    pub browser: Browser,
    pub auth: AuthService,
    pub reviews: ReviewService,
}

impl AppState {
    /// Wires the core services to one key-value store and builds a browse
    /// session over the demo catalog.
    pub fn new(config: Arc<Config>, store: Arc<dyn KeyValueStore>) -> Self {
        let browser = Browser::new(Catalog::demo(), config.page_size)
            .with_fetch_delay(config.fetch_delay);
        Self {
            config,
            browser,
            auth: AuthService::new(store.clone()),
            reviews: ReviewService::new(store),
        }
    }
}
