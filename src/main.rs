//! Zellij plugin entry point.
//!
//! Translates Zellij events into [`recipe_explorer::Event`]s, runs them
//! through the handler, and executes the resulting actions. All state lives in
//! [`recipe_explorer::AppState`]; this shim only owns the worker name.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use recipe_explorer::app::{FilterField, Screen};
use recipe_explorer::navigation::Location;
use recipe_explorer::worker::{RecipeWorker, WorkerMessage, WorkerResponse};
use recipe_explorer::{handle_event, Action, Config, Event, InputMode, ViewMode};

register_plugin!(State);
register_worker!(RecipeWorker, recipe_explorer_worker, RECIPE_EXPLORER_WORKER);

/// Pipe name accepted by [`ZellijPlugin::pipe`]; the payload is a location.
const NAVIGATE_PIPE: &str = "navigate";

struct State {
    app: recipe_explorer::AppState,

    /// Name the worker was registered under, also used as the message name.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: recipe_explorer::initialize(&Config::default()),
            worker_name: "recipe_explorer".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        recipe_explorer::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = recipe_explorer::initialize(&config);

        let mut permissions = vec![PermissionType::ChangeApplicationState];
        if config.reads_files() {
            permissions.push(PermissionType::FullHdAccess);
        }
        tracing::debug!(permissions = ?permissions, "requesting permissions");
        request_permission(&permissions);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::FileAccess {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        if pipe_message.name != NAVIGATE_PIPE {
            return false;
        }
        let Some(target) = pipe_message.payload else {
            tracing::debug!("navigate pipe without a location");
            return false;
        };
        self.dispatch(&Event::Navigate(target))
    }

    fn render(&mut self, rows: usize, cols: usize) {
        recipe_explorer::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::MoveDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::MoveUp);
        }

        if self.app.screen == Screen::SignIn {
            return match key.bare_key {
                BareKey::Esc | BareKey::Char('b') => Some(Event::ShowRecipes),
                BareKey::Char('g') => Some(Event::Navigate(Location::recipes(ViewMode::Grid).to_string())),
                BareKey::Char('l') => Some(Event::Navigate(Location::recipes(ViewMode::List).to_string())),
                BareKey::Char('t') => Some(Event::ToggleTheme),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        if self.app.controller.selection().is_some() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseDetail),
                _ => None,
            };
        }

        if let InputMode::Editing(_) = self.app.input_mode {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter => Some(Event::StopEditing),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::MoveDown,
            BareKey::Up | BareKey::Char('k') => Event::MoveUp,
            BareKey::Enter | BareKey::Char(' ') => Event::OpenSelected,
            BareKey::Char('/') => Event::EditField(FilterField::Query),
            BareKey::Char('m') => Event::EditField(FilterField::MinTime),
            BareKey::Char('M') => Event::EditField(FilterField::MaxTime),
            BareKey::Char('d') => Event::CycleDifficulty,
            BareKey::Char('c') => Event::ClearFilters,
            BareKey::Char('g') => Event::SetViewMode("grid".to_string()),
            BareKey::Char('l') => Event::SetViewMode("list".to_string()),
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Char('s') => Event::ShowSignIn,
            BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => {
                tracing::debug!(response = ?response, "worker response received");
                Some(Event::WorkerResponse(response))
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
            }
        }
    }
}
