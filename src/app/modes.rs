//! Mode types for the application: layout, screen, and input focus.
//!
//! - [`ViewMode`]: grid or list layout of the results
//! - [`Screen`]: which page the shell is showing
//! - [`InputMode`]: whether keys navigate or edit a sidebar field
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::app::modes::{FilterField, InputMode, ViewMode};
//!
//! assert_eq!(ViewMode::from_param(Some("list")), ViewMode::List);
//! assert_eq!(ViewMode::from_param(None), ViewMode::Grid);
//! let mode = InputMode::Editing(FilterField::Query);
//! ```

/// Presentation layout of the visible recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Cards laid out in columns.
    #[default]
    Grid,
    /// One row per recipe.
    List,
}

impl ViewMode {
    /// Parses a mode name; only `grid` and `list` are recognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "grid" => Some(Self::Grid),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    /// Mode for a location's `view` parameter, defaulting to grid when it is
    /// absent or unrecognized.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        param.and_then(Self::parse).unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// Page currently shown by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Recipes,
    SignIn,
}

/// Editable sidebar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Query,
    MinTime,
    MaxTime,
}

impl FilterField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Query => "Search",
            Self::MinTime => "Min",
            Self::MaxTime => "Max",
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate results and trigger commands.
    Normal,
    /// Printable keys edit the given sidebar field.
    Editing(FilterField),
}
