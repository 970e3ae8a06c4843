//! Error types for the Recipe Explorer plugin.
//!
//! The filter engine and presentation controller are total and never produce
//! errors. Everything that touches the outside world (catalog files, theme
//! files, markup files, worker messaging) reports through
//! [`RecipeExplorerError`].

use thiserror::Error;

/// The main error type for Recipe Explorer operations.
///
/// # Examples
///
/// ```
/// use recipe_explorer::RecipeExplorerError;
///
/// fn check_title(title: &str) -> Result<(), RecipeExplorerError> {
///     if title.is_empty() {
///         return Err(RecipeExplorerError::Catalog("empty title".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_title("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum RecipeExplorerError {
    /// Catalog data could not be parsed or violates a catalog invariant
    /// (duplicate ids, empty titles, non-positive times).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Externally supplied markup could not be loaded.
    #[error("Markup error: {0}")]
    Markup(String),
}

/// A specialized `Result` type for Recipe Explorer operations.
pub type Result<T> = std::result::Result<T, RecipeExplorerError>;
