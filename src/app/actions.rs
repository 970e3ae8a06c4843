//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) mutates state synchronously and
//! returns the effects it needs as [`Action`]s; the plugin shim performs them
//! in order through Zellij's API.
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::app::Action;
//! use recipe_explorer::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_catalog(
//!     "~/recipes.json".to_string(),
//! ))];
//! ```

use crate::worker::WorkerMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hide the plugin pane.
    CloseFocus,

    /// Send a request to the worker thread.
    PostToWorker(WorkerMessage),
}
