//! Recipe domain model.
//!
//! A [`Recipe`] is an immutable value constructed once when the catalog is
//! loaded. Nothing in the crate mutates or deletes a recipe afterwards; the
//! filter engine only reads them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a recipe within a catalog.
pub type RecipeId = u32;

/// How demanding a recipe is to cook.
///
/// Serializes in lowercase (`"easy"`, `"moderate"`, `"hard"`), which is also
/// the form shown on cards and accepted by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`Difficulty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty: {:?}", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "hard" => Ok(Self::Hard),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: unique within the catalog
/// - `title`: non-empty display title, the only field searched by the query
/// - `category`: free-form label shown as a badge
/// - `time`: preparation time in minutes, always positive
/// - `difficulty`: one of [`Difficulty`]
/// - `ingredients`, `steps`: ordered, possibly empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub category: String,
    pub time: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Creates a recipe with no ingredients or steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_explorer::domain::{Difficulty, Recipe};
    ///
    /// let recipe = Recipe::new(7, "Miso Soup", "Japanese", 15, Difficulty::Easy);
    /// assert_eq!(recipe.initial(), 'M');
    /// assert!(recipe.ingredients.is_empty());
    /// ```
    #[must_use]
    pub fn new(
        id: RecipeId,
        title: impl Into<String>,
        category: impl Into<String>,
        time: u32,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            time,
            difficulty,
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// First printable character of the title, used as the card's media
    /// placeholder.
    #[must_use]
    pub fn initial(&self) -> char {
        self.title.chars().find(|c| !c.is_control()).unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_only_lowercase_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("Easy".parse::<Difficulty>().is_err());
        assert!("".parse::<Difficulty>().is_err());
    }

    #[test]
    fn recipe_deserializes_without_optional_lists() {
        let json = r#"{"id":9,"title":"Toast","category":"Breakfast","time":5,"difficulty":"easy"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert!(recipe.steps.is_empty());
    }
}
