//! The built-in sample catalog.

use super::source::CatalogSource;
use super::Catalog;
use crate::domain::{Difficulty, Recipe, Result};

/// The six sample recipes, in display order.
#[must_use]
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Lemon Garlic Salmon", "Seafood", 25, Difficulty::Easy)
            .with_ingredients(["Salmon", "Lemon", "Garlic", "Butter", "Parsley"])
            .with_steps(["Preheat oven to 400F", "Season salmon", "Bake 12-15 mins"]),
        Recipe::new(2, "Spaghetti Carbonara", "Pasta", 30, Difficulty::Moderate)
            .with_ingredients(["Spaghetti", "Eggs", "Pancetta", "Parmesan", "Black Pepper"])
            .with_steps([
                "Cook pasta",
                "Render pancetta",
                "Temper eggs with pasta water",
                "Combine",
            ]),
        Recipe::new(3, "Grilled Chicken Bowl", "Grill", 35, Difficulty::Easy)
            .with_ingredients(["Chicken", "Rice", "Veggies", "Sauce"])
            .with_steps(["Marinate chicken", "Grill", "Assemble bowl"]),
        Recipe::new(4, "Vegetable Stir Fry", "Vegan", 20, Difficulty::Easy)
            .with_ingredients(["Mixed Veg", "Soy Sauce", "Ginger", "Garlic"])
            .with_steps(["Prep veggies", "Stir fry", "Add sauce"]),
        Recipe::new(5, "Beef Tacos", "Mexican", 25, Difficulty::Easy)
            .with_ingredients(["Beef", "Taco Shells", "Lettuce", "Cheese"])
            .with_steps(["Brown beef", "Season", "Assemble tacos"]),
        Recipe::new(6, "Pad Thai", "Thai", 40, Difficulty::Hard)
            .with_ingredients(["Rice Noodles", "Tamarind", "Shrimp", "Peanuts"])
            .with_steps(["Soak noodles", "Stir fry sauce", "Combine"]),
    ]
}

/// Source that always yields [`sample_recipes`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn describe(&self) -> String {
        "built-in samples".to_string()
    }

    fn load(&self) -> Result<Catalog> {
        Ok(Catalog::builtin())
    }
}
