//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready frame description
//! - [`layout`]: screen geometry shared by view model and components
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: region renderers
//! - [`helpers`]: cursor positioning, truncation, match highlighting
//! - [`theme`]: color schemes and ANSI escapes
//! - [`appearance`]: the shared light/dark presentation configuration

pub mod appearance;
pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use appearance::{Appearance, ThemeMode};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Body, DetailModal, DisplayItem, EmptyState, FooterInfo, HeaderInfo, RecipesView,
    ResultsLayout, SidebarInfo, SignInView, UIViewModel,
};
