//! crates/recipe_browser_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or serialization format.

use chrono::{DateTime, Utc};

/// A recipe in the catalog. Catalog entries are immutable for the lifetime
/// of the session; `id` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub diets: Vec<String>,
    pub cuisines: Vec<String>,
    /// Authored detail. Entries without it get a generic synthesized list
    /// in the detail view.
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Whether this entry carries authored ingredients and instructions.
    pub fn has_detail(&self) -> bool {
        !self.ingredients.is_empty() && !self.instructions.is_empty()
    }
}

/// Represents a registered user. Created on registration; never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Creation time in epoch milliseconds, doubling as the unique id.
    pub id: i64,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A review left on a recipe. Append-only; owned by the recipe id it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub username: String,
    /// 1 through 5 stars.
    pub rating: u8,
    pub text: String,
    pub date: DateTime<Utc>,
}

/// The identity of the caller, handed explicitly to collaborators that need
/// it instead of living in a process-wide global.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub user: Option<User>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// A diet or cuisine constraint. `All` is the normalized "no constraint"
/// sentinel; raw user input never reaches the predicates un-normalized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Parses raw input. Blank or the literal `all` (any case) means no
    /// constraint.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Tag(raw.to_string())
        }
    }
}

/// A preparation-time ceiling. `Any` is the normalized "no constraint"
/// sentinel. Unparsable input also behaves as `Any`: a non-numeric ceiling
/// filters nothing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    #[default]
    Any,
    AtMost(u32),
}

impl TimeFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("any") {
            return Self::Any;
        }
        match raw.parse::<u32>() {
            Ok(minutes) => Self::AtMost(minutes),
            Err(_) => Self::Any,
        }
    }
}

/// One search action's filter specification. Constructed from user input,
/// consumed by the filter engine, discarded.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Free-text query over title and summary; empty matches everything.
    pub query: String,
    pub diet: TagFilter,
    pub cuisine: TagFilter,
    pub max_time: TimeFilter,
}

impl Criteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = TagFilter::Tag(diet.into());
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = TagFilter::Tag(cuisine.into());
        self
    }

    pub fn with_max_time(mut self, minutes: u32) -> Self {
        self.max_time = TimeFilter::AtMost(minutes);
        self
    }
}
