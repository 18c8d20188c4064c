//! apps/browser/src/ui/render.rs
//!
//! Plain-text rendering of pages, recipe detail, and reviews. These are
//! pure string builders so the shell (and the tests) can use them without
//! touching the terminal.

use recipe_browser_core::{Page, Recipe, Review};

pub fn results_count(total: usize) -> String {
    format!("Found {total} recipes")
}

/// Five-star rendering, filled up to `rating`.
pub fn stars(rating: u8) -> String {
    let rating = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating))
}

/// One result row: id, title, timing, servings, diet tags.
pub fn recipe_card(recipe: &Recipe) -> String {
    let mut line = format!(
        "{:>4}. {}  ({} min, {} servings)",
        recipe.id, recipe.title, recipe.ready_in_minutes, recipe.servings
    );
    if !recipe.diets.is_empty() {
        line.push_str(&format!("  [{}]", recipe.diets.join(", ")));
    }
    line
}

/// A full page view: results count, every accumulated row, and the
/// load-more affordance when rows remain.
pub fn page(page: &Page) -> String {
    if page.displayed.is_empty() {
        return "No recipes found. Try adjusting your search or filters.".to_string();
    }

    let mut out = String::new();
    out.push_str(&results_count(page.total_matches));
    out.push('\n');
    for recipe in &page.displayed {
        out.push_str(&recipe_card(recipe));
        out.push('\n');
    }
    if page.has_more {
        out.push_str("Type `more` to load more recipes.\n");
    }
    out
}

/// The detail view: header, summary, ingredients, instructions, reviews.
pub fn detail(recipe: &Recipe, reviews: &[Review]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", recipe.title));
    out.push_str(&format!(
        "{} minutes, {} servings\n",
        recipe.ready_in_minutes, recipe.servings
    ));
    if !recipe.diets.is_empty() {
        out.push_str(&format!("Tags: {}\n", recipe.diets.join(", ")));
    }
    if !recipe.cuisines.is_empty() {
        out.push_str(&format!("Cuisine: {}\n", recipe.cuisines.join(", ")));
    }
    out.push_str(&format!("Image: {}\n", recipe.image));
    out.push_str(&format!("\n{}\n", recipe.summary));

    out.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  - {ingredient}\n"));
    }

    out.push_str("\nInstructions\n");
    for (index, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, step));
    }

    out.push_str("\nReviews\n");
    if reviews.is_empty() {
        out.push_str("No reviews yet. Be the first to review this recipe!\n");
    } else {
        for review in reviews {
            out.push_str(&review_item(review));
        }
    }
    out
}

fn review_item(review: &Review) -> String {
    format!(
        "  {} {}\n    {}\n    {}\n",
        stars(review.rating),
        review.username,
        review.text,
        review.date.format("%Y-%m-%d")
    )
}
