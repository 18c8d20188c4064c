//! crates/recipe_browser_core/src/filter.rs
//!
//! The filter engine: pure predicate logic that narrows the catalog to the
//! entries matching one set of criteria. All matching is case-insensitive
//! containment; results keep catalog order and there is no ranking.

use crate::domain::{Criteria, Recipe, TagFilter, TimeFilter};

/// Returns the ordered subsequence of `recipes` satisfying every active
/// constraint in `criteria`. An empty input or zero matches yield an empty
/// result, never an error.
pub fn filter(recipes: &[Recipe], criteria: &Criteria) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| matches(recipe, criteria))
        .cloned()
        .collect()
}

/// Whether a single recipe satisfies every active predicate (logical AND).
pub fn matches(recipe: &Recipe, criteria: &Criteria) -> bool {
    matches_query(recipe, &criteria.query)
        && matches_tags(&recipe.diets, &criteria.diet)
        && matches_tags(&recipe.cuisines, &criteria.cuisine)
        && matches_time(recipe, criteria.max_time)
}

/// An empty query matches everything; otherwise the query must appear in
/// the title or the summary.
fn matches_query(recipe: &Recipe, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    contains_ci(&recipe.title, query) || contains_ci(&recipe.summary, query)
}

/// `All` matches everything; otherwise some tag must contain the wanted
/// value.
fn matches_tags(tags: &[String], wanted: &TagFilter) -> bool {
    match wanted {
        TagFilter::All => true,
        TagFilter::Tag(value) => tags.iter().any(|tag| contains_ci(tag, value)),
    }
}

fn matches_time(recipe: &Recipe, ceiling: TimeFilter) -> bool {
    match ceiling {
        TimeFilter::Any => true,
        TimeFilter::AtMost(minutes) => recipe.ready_in_minutes <= minutes,
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(recipes: &[Recipe]) -> Vec<u32> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn inactive_criteria_return_the_whole_catalog_in_order() {
        let catalog = Catalog::demo();
        let result = filter(catalog.recipes(), &Criteria::default());
        assert_eq!(ids(&result), ids(catalog.recipes()));
    }

    #[test]
    fn empty_catalog_is_an_empty_result_not_an_error() {
        let result = filter(&[], &Criteria::default().with_query("pasta"));
        assert!(result.is_empty());
    }

    #[test]
    fn query_matches_title_or_summary_case_insensitively() {
        let catalog = Catalog::demo();

        let by_title = filter(catalog.recipes(), &Criteria::default().with_query("TACOS"));
        assert_eq!(ids(&by_title), vec![5]);

        // "quinoa" only appears in the Buddha Bowl summary
        let by_summary = filter(catalog.recipes(), &Criteria::default().with_query("quinoa"));
        assert_eq!(ids(&by_summary), vec![4]);
    }

    #[test]
    fn vegan_diet_matches_exactly_the_three_vegan_recipes() {
        let catalog = Catalog::demo();
        let result = filter(catalog.recipes(), &Criteria::default().with_diet("vegan"));
        assert_eq!(ids(&result), vec![4, 7, 10]);
    }

    #[test]
    fn diet_matching_is_containment_over_tags() {
        let catalog = Catalog::demo();
        // "gluten" is a substring of the "gluten free" tag
        let result = filter(catalog.recipes(), &Criteria::default().with_diet("gluten"));
        assert!(!result.is_empty());
        assert!(result
            .iter()
            .all(|r| r.diets.iter().any(|d| d.contains("gluten"))));
    }

    #[test]
    fn cuisine_filter_is_symmetric_to_diet() {
        let catalog = Catalog::demo();
        let result = filter(catalog.recipes(), &Criteria::default().with_cuisine("thai"));
        assert_eq!(ids(&result), vec![3, 7]);
    }

    #[test]
    fn twenty_minute_ceiling_leaves_only_the_caprese_salad() {
        let catalog = Catalog::demo();
        let result = filter(catalog.recipes(), &Criteria::default().with_max_time(20));
        assert_eq!(ids(&result), vec![12]);
    }

    #[test]
    fn predicates_combine_with_logical_and() {
        let catalog = Catalog::demo();
        let criteria = Criteria::default()
            .with_query("thai")
            .with_diet("vegan")
            .with_max_time(30);
        let result = filter(catalog.recipes(), &criteria);
        assert_eq!(ids(&result), vec![7]);
    }

    #[test]
    fn no_matches_is_an_empty_result() {
        let catalog = Catalog::demo();
        let result = filter(
            catalog.recipes(),
            &Criteria::default().with_query("bouillabaisse"),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn filtering_is_sound_complete_and_idempotent() {
        let catalog = Catalog::demo();
        let criteria = Criteria::default().with_diet("gluten free").with_max_time(30);

        let first = filter(catalog.recipes(), &criteria);
        for recipe in &first {
            assert!(matches(recipe, &criteria), "included entry fails a predicate");
        }
        for recipe in catalog.recipes() {
            if !first.iter().any(|r| r.id == recipe.id) {
                assert!(!matches(recipe, &criteria), "excluded entry passes all predicates");
            }
        }

        let second = filter(catalog.recipes(), &criteria);
        assert_eq!(ids(&first), ids(&second));
    }
}
