//! Domain layer for the Recipe Explorer plugin.
//!
//! Holds the recipe model and the crate error type, independent of Zellij
//! APIs and rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`recipe`]: Recipe and difficulty types

pub mod error;
pub mod recipe;

pub use error::{RecipeExplorerError, Result};
pub use recipe::{Difficulty, Recipe, RecipeId, UnknownDifficulty};
