pub mod auth;
pub mod browser;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod filter;
pub mod pager;
pub mod ports;
pub mod reviews;
mod storage;
pub mod store;

pub use auth::AuthService;
pub use browser::{Browser, Page};
pub use catalog::Catalog;
pub use domain::{Criteria, Recipe, Review, SessionContext, TagFilter, TimeFilter, User};
pub use error::{Error, Result};
pub use pager::Pager;
pub use ports::{KeyValueStore, StoreError, StoreResult};
pub use reviews::ReviewService;
pub use store::MemoryStore;
