//! Application layer: state, events, and actions.
//!
//! ```text
//! key press -> Event -> handle_event -> AppState mutation -> Actions
//!                 ^                                           |
//!                 +------------- WorkerResponse <-------------+
//! ```
//!
//! - [`controller`]: the presentation controller owning criteria, view mode,
//!   and selection
//! - [`state`]: everything else the shell tracks, plus view model computation
//! - [`handler`]: the event to state transition function
//! - [`actions`]: side effects returned to the plugin shim
//! - [`modes`]: small mode enums
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::app::{handle_event, Event};
//! use recipe_explorer::{initialize, Config};
//!
//! let mut state = initialize(&Config::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::MoveDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), recipe_explorer::RecipeExplorerError>(())
//! ```

pub mod actions;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::PresentationController;
pub use handler::{handle_event, Event};
pub use modes::{FilterField, InputMode, Screen, ViewMode};
pub use state::{AppState, FileAccess};
