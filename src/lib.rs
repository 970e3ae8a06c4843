//! Recipe Explorer: a Zellij plugin for browsing a recipe catalog.
//!
//! Recipe Explorer provides:
//! - Live filtering by title substring, difficulty, and a time range
//! - Grid and list layouts of the matching recipes
//! - A detail view with ingredients and steps
//! - An ocean light/dark theme pair, switchable at runtime
//! - Catalog and sign-in screen files read on a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Presentation controller                          │
//! │  - Event handling, actions                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Filter        │   │ Worker Layer  │
//! │ (ui/)         │   │ (filter/)     │   │ (worker/)     │
//! │ - Rendering   │   │ - Criteria    │   │ - File reads  │
//! │ - Appearance  │   │ - Engine      │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog, Navigation, Markup, Domain                │
//! │  Infrastructure (paths), Observability (tracing)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! plugin location="file:recipe-explorer.wasm" {
//!     catalog_file "~/recipes.json"
//!     signin_file "~/signin.html"
//!     location "/recipes?view=list"
//!     theme "ocean-dark"
//!     trace_level "debug"
//! }
//! ```
//!
//! Every key is optional. Without `catalog_file` the six built-in sample
//! recipes are shown.
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.controller.visible().len(), 6);
//!
//! handle_event(&mut state, &Event::CycleDifficulty)?;
//! assert_eq!(state.controller.visible().len(), 4);
//! # Ok::<(), recipe_explorer::RecipeExplorerError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod markup;
pub mod navigation;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, PresentationController, ViewMode};
pub use domain::{Recipe, RecipeExplorerError, Result};
pub use ui::{Appearance, Theme};

use catalog::{BuiltinCatalog, Catalog};
use infrastructure::expand_tilde;
use navigation::Location;
use std::collections::BTreeMap;

/// Plugin configuration, read from the Zellij KDL block.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// JSON catalog to load through the worker. `None` shows the built-in
    /// samples.
    pub catalog_file: Option<String>,

    /// Markup for the sign-in page. `None` shows a built-in form.
    pub signin_file: Option<String>,

    /// Location shown at startup. Default: `/recipes`.
    pub location: Option<String>,

    /// Built-in theme name, `ocean-light` or `ocean-dark`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`, or a full
    /// `EnvFilter` directive. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map. Blank values
    /// count as absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use recipe_explorer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_file".to_string(), "~/recipes.json".to_string());
    /// map.insert("theme".to_string(), "ocean-dark".to_string());
    /// map.insert("signin_file".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_file.as_deref(), Some("~/recipes.json"));
    /// assert_eq!(config.theme_name.as_deref(), Some("ocean-dark"));
    /// assert_eq!(config.signin_file, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            catalog_file: get("catalog_file"),
            signin_file: get("signin_file"),
            location: get("location"),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Whether the worker needs host file access.
    #[must_use]
    pub const fn reads_files(&self) -> bool {
        self.catalog_file.is_some() || self.signin_file.is_some()
    }

    /// Resolves the configured theme: `theme_file`, then `theme`, then the
    /// default light theme.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeExplorerError::Theme`] if `theme_file` cannot be read
    /// or parsed, and [`RecipeExplorerError::Config`] for an unknown theme
    /// name.
    pub fn load_theme(&self) -> Result<Theme> {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(expand_tilde(theme_file));
        }

        match &self.theme_name {
            None => Ok(Theme::default()),
            Some(name) => Theme::from_name(name).ok_or_else(|| {
                RecipeExplorerError::Config(format!(
                    "unknown theme '{name}', expected '{}' or '{}'",
                    Theme::LIGHT,
                    Theme::DARK
                ))
            }),
        }
    }
}

/// Builds the initial application state from `config`.
///
/// With a `catalog_file` the controller starts on an empty catalog and the
/// results show a loading state until the worker delivers the file. The
/// location's `view` parameter seeds the view mode.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::{initialize, Config, ViewMode};
///
/// let state = initialize(&Config {
///     location: Some("/recipes?view=list".to_string()),
///     ..Config::default()
/// });
/// assert_eq!(state.controller.view_mode(), ViewMode::List);
/// assert_eq!(state.location.to_string(), "/recipes?view=list");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing recipe explorer plugin");

    let location = Location::parse(config.location.as_deref().unwrap_or("/recipes"));
    let catalog = if config.catalog_file.is_some() {
        Catalog::default()
    } else {
        catalog::load_or_empty(&BuiltinCatalog)
    };
    let controller = PresentationController::new(catalog, location.view_param());

    let theme = config.load_theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default theme");
        Theme::default()
    });
    let mut state = AppState::new(controller, Appearance::new(theme));
    if let Some(path) = &config.catalog_file {
        state = state.with_catalog_source(path.clone());
    }
    if let Some(path) = &config.signin_file {
        state = state.with_sign_in_source(path.clone());
    }

    // File access is still pending here, so this never posts to the worker.
    let _ = state.navigate(location);
    state
}
