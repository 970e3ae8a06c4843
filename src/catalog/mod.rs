//! The recipe catalog and the sources it is loaded from.
//!
//! A [`Catalog`] is loaded once and is read-only afterwards. Construction is
//! the only place catalog invariants are checked: ids are unique, titles are
//! non-empty, and times are positive.
//!
//! # Modules
//!
//! - `source`: [`CatalogSource`] trait for external loaders
//! - `builtin`: the six sample recipes
//! - `json`: JSON file loader

mod builtin;
mod json;
mod source;

pub use builtin::{sample_recipes, BuiltinCatalog};
pub use json::{parse_catalog, JsonCatalogFile};
pub use source::CatalogSource;

use crate::domain::{Recipe, RecipeExplorerError, RecipeId, Result};
use std::collections::HashSet;

/// Immutable, ordered sequence of recipes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Validates and wraps `recipes`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeExplorerError::Catalog`] on a duplicate id, an empty
    /// (or whitespace-only) title, or a zero time.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_explorer::catalog::Catalog;
    /// use recipe_explorer::domain::{Difficulty, Recipe};
    ///
    /// let dup = vec![
    ///     Recipe::new(1, "Toast", "Breakfast", 5, Difficulty::Easy),
    ///     Recipe::new(1, "Jam", "Breakfast", 5, Difficulty::Easy),
    /// ];
    /// assert!(Catalog::new(dup).is_err());
    /// ```
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !ids.insert(recipe.id) {
                return Err(RecipeExplorerError::Catalog(format!(
                    "duplicate recipe id {}",
                    recipe.id
                )));
            }
            if recipe.title.trim().is_empty() {
                return Err(RecipeExplorerError::Catalog(format!(
                    "recipe {} has an empty title",
                    recipe.id
                )));
            }
            if recipe.time == 0 {
                return Err(RecipeExplorerError::Catalog(format!(
                    "recipe {} must take at least one minute",
                    recipe.id
                )));
            }
        }
        Ok(Self { recipes })
    }

    /// The built-in sample catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            recipes: sample_recipes(),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    #[must_use]
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    #[must_use]
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }
}

/// Loads `source`, logging a failure and yielding an empty catalog instead.
///
/// # Examples
///
/// ```
/// use recipe_explorer::catalog::{load_or_empty, BuiltinCatalog, JsonCatalogFile};
///
/// assert_eq!(load_or_empty(&BuiltinCatalog).len(), 6);
/// assert!(load_or_empty(&JsonCatalogFile::new("/no/such/recipes.json")).is_empty());
/// ```
#[must_use]
pub fn load_or_empty(source: &dyn CatalogSource) -> Catalog {
    source.load().unwrap_or_else(|e| {
        tracing::error!(source = %source.describe(), error = %e, "failed to load catalog");
        Catalog::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;

    #[test]
    fn builtin_catalog_passes_validation() {
        let validated = Catalog::new(sample_recipes()).unwrap();
        assert_eq!(validated, Catalog::builtin());
        assert_eq!(validated.len(), 6);
    }

    #[test]
    fn rejects_blank_title_and_zero_time() {
        let blank = vec![Recipe::new(1, "  ", "Misc", 5, Difficulty::Easy)];
        assert!(matches!(Catalog::new(blank), Err(RecipeExplorerError::Catalog(_))));

        let instant = vec![Recipe::new(1, "Water", "Misc", 0, Difficulty::Easy)];
        assert!(Catalog::new(instant).is_err());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(6).map(|r| r.title.as_str()), Some("Pad Thai"));
        assert!(catalog.get(42).is_none());
    }

    #[test]
    fn builtin_source_loads_samples() {
        let catalog = BuiltinCatalog.load().unwrap();
        assert_eq!(catalog.as_slice()[0].title, "Lemon Garlic Salmon");
        assert_eq!(BuiltinCatalog.describe(), "built-in samples");
        assert_eq!(load_or_empty(&BuiltinCatalog), catalog);
    }
}
