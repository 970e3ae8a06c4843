//! Sandbox filesystem helpers.
//!
//! Inside Zellij the host filesystem is mounted under `/host`; configured
//! paths are written as the user sees them and translated here.

pub mod paths;

pub use paths::{display_path, expand_tilde, get_data_dir};
