//! crates/recipe_browser_core/src/catalog.rs
//!
//! The fixed in-memory recipe catalog: a built-in mock dataset, read-only
//! for the lifetime of the session.

use crate::domain::Recipe;

/// The read-only source of truth for browsing. Ids are unique; order is
/// the presentation order.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Builds a catalog from the given entries. Ids must be unique.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<u32> = recipes.iter().map(|r| r.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "catalog ids must be unique"
        );
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Detail view of a recipe. Entries without authored detail get the
    /// generic synthesized lists.
    pub fn detail(&self, id: u32) -> Option<Recipe> {
        let mut recipe = self.get(id)?.clone();
        if !recipe.has_detail() {
            recipe.ingredients = generic_ingredients();
            recipe.instructions = generic_instructions();
        }
        Some(recipe)
    }

    /// The built-in demo dataset: twelve recipes, with authored detail for
    /// the first two.
    pub fn demo() -> Self {
        let mut recipes = vec![
            entry(
                1,
                "Mediterranean Grilled Chicken Salad",
                "A fresh and healthy Mediterranean salad with grilled chicken, olives, and feta cheese.",
                "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=500",
                30,
                4,
                &["gluten free"],
                &["Mediterranean"],
            ),
            entry(
                2,
                "Creamy Tuscan Garlic Pasta",
                "Rich and creamy pasta with sun-dried tomatoes, spinach, and garlic parmesan sauce.",
                "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9?w=500",
                25,
                6,
                &["vegetarian"],
                &["Italian"],
            ),
            entry(
                3,
                "Thai Basil Stir-Fry",
                "Aromatic Thai stir-fry with fresh basil, chili, and your choice of protein.",
                "https://images.unsplash.com/photo-1512058564366-18510be2db19?w=500",
                25,
                4,
                &["gluten free", "dairy free"],
                &["Thai", "Asian"],
            ),
            entry(
                4,
                "Vegan Buddha Bowl",
                "Nutritious bowl packed with quinoa, roasted vegetables, avocado, and tahini dressing.",
                "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=500",
                35,
                2,
                &["vegan", "gluten free"],
                &["American"],
            ),
            entry(
                5,
                "Classic Beef Tacos",
                "Authentic Mexican street tacos with seasoned beef, fresh salsa, and lime.",
                "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=500",
                30,
                6,
                &["gluten free"],
                &["Mexican", "Latin American"],
            ),
            entry(
                6,
                "Honey Glazed Salmon",
                "Pan-seared salmon with a sweet honey glaze and roasted asparagus.",
                "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=500",
                25,
                4,
                &["gluten free", "dairy free", "pescatarian"],
                &["American"],
            ),
            entry(
                7,
                "Vegetable Pad Thai",
                "Classic Thai noodles with tofu, bean sprouts, peanuts, and tangy tamarind sauce.",
                "https://images.unsplash.com/photo-1559314809-0d155014e29e?w=500",
                30,
                4,
                &["vegan", "gluten free"],
                &["Thai", "Asian"],
            ),
            entry(
                8,
                "Mushroom Risotto",
                "Creamy Italian risotto with mixed wild mushrooms and parmesan cheese.",
                "https://images.unsplash.com/photo-1476124369491-e7addf5db371?w=500",
                45,
                4,
                &["vegetarian", "gluten free"],
                &["Italian"],
            ),
            entry(
                9,
                "Grilled Lemon Herb Chicken",
                "Juicy grilled chicken marinated in lemon, garlic, and fresh herbs.",
                "https://images.unsplash.com/photo-1598103442097-8b74394b95c6?w=500",
                40,
                4,
                &["gluten free", "dairy free", "paleo"],
                &["Mediterranean", "Greek"],
            ),
            entry(
                10,
                "Spicy Black Bean Soup",
                "Hearty and warming black bean soup with cumin, lime, and fresh cilantro.",
                "https://images.unsplash.com/photo-1547592166-23ac45744acd?w=500",
                35,
                6,
                &["vegan", "gluten free"],
                &["Mexican", "Latin American"],
            ),
            entry(
                11,
                "Japanese Teriyaki Bowl",
                "Sweet and savory teriyaki chicken served over steamed rice with vegetables.",
                "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=500",
                30,
                4,
                &["dairy free"],
                &["Japanese", "Asian"],
            ),
            entry(
                12,
                "Fresh Caprese Salad",
                "Simple Italian salad with fresh mozzarella, tomatoes, basil, and balsamic glaze.",
                "https://images.unsplash.com/photo-1608897013039-887f21d8c804?w=500",
                10,
                4,
                &["vegetarian", "gluten free"],
                &["Italian"],
            ),
        ];

        recipes[0].ingredients = strings(&[
            "2 chicken breasts",
            "4 cups mixed salad greens",
            "1 cup cherry tomatoes, halved",
            "1/2 cup Kalamata olives",
            "1/2 cup feta cheese, crumbled",
            "1/4 red onion, thinly sliced",
            "2 tablespoons olive oil",
            "1 lemon, juiced",
            "2 cloves garlic, minced",
            "1 teaspoon dried oregano",
            "Salt and pepper to taste",
        ]);
        recipes[0].instructions = strings(&[
            "Marinate chicken breasts in olive oil, lemon juice, garlic, oregano, salt, and pepper for at least 15 minutes.",
            "Preheat grill to medium-high heat. Grill chicken for 6-7 minutes per side until cooked through.",
            "While chicken is grilling, prepare the salad by combining mixed greens, cherry tomatoes, olives, feta cheese, and red onion in a large bowl.",
            "Let the chicken rest for 5 minutes, then slice into strips.",
            "Top the salad with sliced chicken and drizzle with extra olive oil and lemon juice if desired.",
            "Serve immediately and enjoy your Mediterranean feast!",
        ]);

        recipes[1].ingredients = strings(&[
            "1 lb penne pasta",
            "2 tablespoons butter",
            "4 cloves garlic, minced",
            "1 cup heavy cream",
            "1/2 cup chicken or vegetable broth",
            "1/2 cup sun-dried tomatoes, chopped",
            "2 cups fresh spinach",
            "1 cup Parmesan cheese, grated",
            "1 teaspoon Italian seasoning",
            "Salt and pepper to taste",
            "Fresh basil for garnish",
        ]);
        recipes[1].instructions = strings(&[
            "Cook pasta according to package directions until al dente. Reserve 1 cup of pasta water before draining.",
            "In a large skillet, melt butter over medium heat. Add minced garlic and cook for 1-2 minutes until fragrant.",
            "Pour in heavy cream and broth. Bring to a simmer and cook for 3-4 minutes.",
            "Add sun-dried tomatoes and spinach. Cook until spinach wilts, about 2 minutes.",
            "Stir in Parmesan cheese and Italian seasoning. Season with salt and pepper.",
            "Add cooked pasta to the sauce, tossing to coat. Add reserved pasta water if needed for desired consistency.",
            "Serve hot, garnished with fresh basil and extra Parmesan cheese.",
        ]);

        Self::new(recipes)
    }
}

/// Placeholder ingredient list for entries without authored detail.
pub fn generic_ingredients() -> Vec<String> {
    strings(&[
        "Main protein or base ingredient",
        "Fresh vegetables",
        "Herbs and spices",
        "Cooking oil or butter",
        "Salt and pepper to taste",
    ])
}

/// Placeholder instruction list for entries without authored detail.
pub fn generic_instructions() -> Vec<String> {
    strings(&[
        "Prepare and wash all ingredients.",
        "Heat oil in a pan over medium heat.",
        "Cook main ingredients according to recipe requirements.",
        "Season with herbs and spices.",
        "Serve hot and enjoy!",
    ])
}

fn entry(
    id: u32,
    title: &str,
    summary: &str,
    image: &str,
    ready_in_minutes: u32,
    servings: u32,
    diets: &[&str],
    cuisines: &[&str],
) -> Recipe {
    Recipe {
        id,
        title: title.to_string(),
        summary: summary.to_string(),
        image: image.to_string(),
        ready_in_minutes,
        servings,
        diets: strings(diets),
        cuisines: strings(cuisines),
        ingredients: Vec::new(),
        instructions: Vec::new(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_twelve_unique_ids() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 12);
        let mut ids: Vec<u32> = catalog.recipes().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn exactly_three_vegan_entries() {
        let catalog = Catalog::demo();
        let vegan: Vec<u32> = catalog
            .recipes()
            .iter()
            .filter(|r| r.diets.iter().any(|d| d == "vegan"))
            .map(|r| r.id)
            .collect();
        assert_eq!(vegan, vec![4, 7, 10]);
    }

    #[test]
    fn only_the_caprese_salad_is_twenty_minutes_or_under() {
        let catalog = Catalog::demo();
        let quick: Vec<u32> = catalog
            .recipes()
            .iter()
            .filter(|r| r.ready_in_minutes <= 20)
            .map(|r| r.id)
            .collect();
        assert_eq!(quick, vec![12]);
    }

    #[test]
    fn detail_synthesizes_when_no_authored_lists_exist() {
        let catalog = Catalog::demo();

        let authored = catalog.detail(1).unwrap();
        assert!(authored.ingredients[0].contains("chicken breasts"));

        let synthesized = catalog.detail(5).unwrap();
        assert_eq!(synthesized.ingredients, generic_ingredients());
        assert_eq!(synthesized.instructions, generic_instructions());

        assert!(catalog.detail(99).is_none());
    }
}
