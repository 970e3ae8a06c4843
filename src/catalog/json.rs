//! JSON catalog files.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Lemon Garlic Salmon",
//!     "category": "Seafood",
//!     "time": 25,
//!     "difficulty": "easy",
//!     "ingredients": ["Salmon", "Lemon"],
//!     "steps": ["Season salmon", "Bake 12-15 mins"]
//!   }
//! ]
//! ```
//!
//! `ingredients` and `steps` may be omitted. Array order is display order.

use super::source::CatalogSource;
use super::Catalog;
use crate::domain::{Recipe, RecipeExplorerError, Result};
use std::path::PathBuf;

/// Catalog stored as a JSON array of recipes.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonCatalogFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.path).entered();

        let contents = std::fs::read_to_string(&self.path)?;
        let catalog = parse_catalog(&contents)?;

        tracing::debug!(recipe_count = catalog.len(), "catalog file loaded");
        Ok(catalog)
    }
}

/// Parses and validates catalog JSON.
///
/// # Errors
///
/// Returns [`RecipeExplorerError::Catalog`] if the JSON is malformed or the
/// recipes violate a catalog invariant.
///
/// # Examples
///
/// ```
/// use recipe_explorer::catalog::parse_catalog;
///
/// let catalog = parse_catalog(
///     r#"[{"id": 1, "title": "Toast", "category": "Breakfast", "time": 5, "difficulty": "easy"}]"#,
/// )?;
/// assert_eq!(catalog.len(), 1);
/// # Ok::<(), recipe_explorer::RecipeExplorerError>(())
/// ```
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let recipes: Vec<Recipe> = serde_json::from_str(contents)
        .map_err(|e| RecipeExplorerError::Catalog(format!("failed to parse JSON: {e}")))?;
    Catalog::new(recipes)
}
