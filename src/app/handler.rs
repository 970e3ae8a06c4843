//! Event handling and state transition logic.
//!
//! The plugin shell translates keys, permission results, and worker replies
//! into [`Event`]s. [`handle_event`] applies one event to the [`AppState`]
//! and reports whether a re-render is needed together with the side effects
//! the shell must carry out.
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::app::{handle_event, Event};
//! use recipe_explorer::{initialize, Config};
//!
//! let mut state = initialize(&Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::OpenSelected)?;
//! assert!(render && actions.is_empty());
//! assert!(state.controller.selection().is_some());
//! # Ok::<(), recipe_explorer::domain::RecipeExplorerError>(())
//! ```

use super::modes::{FilterField, InputMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::markup::SignInContent;
use crate::navigation::Location;
use crate::worker::WorkerResponse;

/// Events from user input, the permission prompt, or the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the result cursor forward (wraps to the first result).
    MoveDown,
    /// Moves the result cursor back (wraps to the last result).
    MoveUp,
    /// Opens the detail view for the recipe under the cursor.
    OpenSelected,
    CloseDetail,
    /// Hides the plugin pane.
    CloseFocus,

    /// Focuses a sidebar input; typed characters go to it.
    EditField(FilterField),
    Char(char),
    Backspace,
    /// Leaves the focused input. Its value is kept.
    StopEditing,
    /// Steps the difficulty selector to its next value.
    CycleDifficulty,
    ClearFilters,
    /// Requested layout, `"grid"` or `"list"`; anything else is ignored.
    SetViewMode(String),

    /// Goes to a location such as `/recipes?view=list` or `/signin`.
    Navigate(String),
    ShowSignIn,
    ShowRecipes,
    ToggleTheme,

    /// Answer to the file access prompt.
    FileAccess { granted: bool },

    WorkerResponse(WorkerResponse),
}

/// Applies `event` to `state`.
///
/// Returns whether the frame changed and the actions to run, in order.
///
/// # Errors
///
/// Currently every event is handled in place; the `Result` keeps the shell
/// ready for transitions that can fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::MoveDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::OpenSelected => Ok((state.open_under_cursor(), vec![])),
        Event::CloseDetail => {
            let was_open = state.controller.selection().is_some();
            state.controller.close();
            Ok((was_open, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::EditField(field) => {
            tracing::debug!(field = field.label(), "editing filter field");
            state.begin_editing(*field);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let changed = state.type_char(*c);
            if changed {
                tracing::trace!(
                    criteria = ?state.controller.criteria(),
                    visible = state.controller.visible().len(),
                    "filter input updated"
                );
            }
            Ok((changed, vec![]))
        }
        Event::Backspace => Ok((state.delete_char(), vec![])),
        Event::StopEditing => {
            let was_editing = state.input_mode != InputMode::Normal;
            state.stop_editing();
            Ok((was_editing, vec![]))
        }
        Event::CycleDifficulty => {
            state.cycle_difficulty();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            tracing::debug!("clearing filters");
            state.clear_filters();
            Ok((true, vec![]))
        }
        Event::SetViewMode(mode) => Ok((state.set_view_mode(mode), vec![])),

        Event::Navigate(target) => Ok((true, state.navigate(Location::parse(target)))),
        Event::ShowSignIn => Ok((true, state.navigate(Location::sign_in()))),
        Event::ShowRecipes => {
            let location = Location::recipes(state.controller.view_mode());
            Ok((true, state.navigate(location)))
        }
        Event::ToggleTheme => {
            state.appearance.toggle();
            tracing::debug!(theme = %state.appearance.theme().name, "theme toggled");
            Ok((true, vec![]))
        }

        Event::FileAccess { granted } => {
            tracing::info!(granted = granted, "file access resolved");
            Ok((true, state.resolve_file_access(*granted)))
        }

        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { recipes, source } => {
                state.install_catalog(recipes.clone(), source);
                Ok((true, vec![]))
            }
            WorkerResponse::SignInLoaded { markup } => {
                state.sign_in = SignInContent::from_markup(markup);
                Ok((true, vec![]))
            }
            WorkerResponse::SignInFailed { message } => {
                tracing::warn!(error = %message, "sign-in markup unavailable");
                state.sign_in = SignInContent::Failed;
                Ok((true, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                if state.catalog_pending {
                    state.fall_back_to_samples(message);
                }
                Ok((true, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PresentationController, Screen, ViewMode};
    use crate::catalog::Catalog;
    use crate::domain::{Difficulty, Recipe};
    use crate::ui::{Appearance, Theme, ThemeMode};
    use crate::worker::WorkerMessage;

    fn state() -> AppState {
        AppState::new(
            PresentationController::new(Catalog::builtin(), None),
            Appearance::new(Theme::default()),
        )
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn typing_into_search_filters_results() {
        let mut state = state();
        send(&mut state, Event::EditField(FilterField::Query));
        for c in "SALMON".chars() {
            send(&mut state, Event::Char(c));
        }
        assert_eq!(state.controller.visible().len(), 1);

        send(&mut state, Event::StopEditing);
        let (render, _) = send(&mut state, Event::Char('x'));
        assert!(!render);
        assert_eq!(state.controller.criteria().query, "SALMON");
    }

    #[test]
    fn difficulty_and_time_combine() {
        let mut state = state();
        send(&mut state, Event::CycleDifficulty);
        send(&mut state, Event::EditField(FilterField::MaxTime));
        send(&mut state, Event::Char('2'));
        send(&mut state, Event::Char('5'));

        let titles: Vec<_> = state.controller.visible().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Lemon Garlic Salmon", "Vegetable Stir Fry", "Beef Tacos"]);

        send(&mut state, Event::ClearFilters);
        assert_eq!(state.controller.visible().len(), 6);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn detail_survives_filtering_and_closes() {
        let mut state = state();
        send(&mut state, Event::OpenSelected);
        send(&mut state, Event::EditField(FilterField::Query));
        send(&mut state, Event::Char('z'));
        assert!(state.controller.visible().is_empty());
        assert_eq!(state.controller.selection().map(|r| r.id), Some(1));

        let (render, _) = send(&mut state, Event::CloseDetail);
        assert!(render);
        let (render, _) = send(&mut state, Event::CloseDetail);
        assert!(!render);
    }

    #[test]
    fn open_on_empty_results_does_nothing() {
        let mut state = state();
        send(&mut state, Event::EditField(FilterField::Query));
        send(&mut state, Event::Char('z'));
        let (render, actions) = send(&mut state, Event::OpenSelected);
        assert!(!render && actions.is_empty());
        assert!(state.controller.selection().is_none());
    }

    #[test]
    fn invalid_view_mode_is_ignored() {
        let mut state = state();
        let (render, _) = send(&mut state, Event::SetViewMode("table".into()));
        assert!(!render);
        assert_eq!(state.controller.view_mode(), ViewMode::Grid);

        send(&mut state, Event::Navigate("/recipes?view=list&view=grid".into()));
        assert_eq!(state.controller.view_mode(), ViewMode::List);
    }

    #[test]
    fn filters_persist_across_sign_in_round_trip() {
        let mut state = state();
        send(&mut state, Event::EditField(FilterField::Query));
        send(&mut state, Event::Char('t'));
        send(&mut state, Event::ShowSignIn);
        assert_eq!(state.screen, Screen::SignIn);

        send(&mut state, Event::ShowRecipes);
        assert_eq!(state.screen, Screen::Recipes);
        assert_eq!(state.controller.criteria().query, "t");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn unknown_path_redirects_to_recipes() {
        let mut state = state();
        send(&mut state, Event::ShowSignIn);
        send(&mut state, Event::Navigate("/nowhere".into()));
        assert_eq!(state.screen, Screen::Recipes);
        assert_eq!(state.location.to_string(), "/recipes?view=grid");
    }

    #[test]
    fn theme_toggles_between_light_and_dark() {
        let mut state = state();
        send(&mut state, Event::ToggleTheme);
        assert_eq!(state.appearance.mode(), ThemeMode::Dark);
        send(&mut state, Event::ToggleTheme);
        assert_eq!(state.appearance.mode(), ThemeMode::Light);
    }

    #[test]
    fn catalog_response_replaces_samples_once() {
        let mut state = AppState::new(
            PresentationController::new(Catalog::default(), None),
            Appearance::new(Theme::default()),
        )
        .with_catalog_source("~/recipes.json");

        let (_, actions) = send(&mut state, Event::FileAccess { granted: true });
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::LoadCatalog { .. })]
        ));

        let loaded = WorkerResponse::CatalogLoaded {
            recipes: vec![Recipe::new(9, "Miso Soup", "Japanese", 15, Difficulty::Easy)],
            source: "~/recipes.json".into(),
        };
        send(&mut state, Event::WorkerResponse(loaded.clone()));
        assert_eq!(state.controller.visible().len(), 1);
        assert_eq!(state.status.as_deref(), Some("Loaded 1 recipes from ~/recipes.json"));

        send(&mut state, Event::WorkerResponse(loaded));
        assert_eq!(state.controller.catalog().len(), 1);
    }

    #[test]
    fn worker_error_while_loading_falls_back() {
        let mut state = AppState::new(
            PresentationController::new(Catalog::default(), None),
            Appearance::new(Theme::default()),
        )
        .with_catalog_source("~/recipes.json");
        send(&mut state, Event::FileAccess { granted: true });

        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::Error { message: "load catalog: bad".into() }),
        );
        assert!(!state.catalog_pending);
        assert_eq!(state.controller.visible().len(), 6);
    }

    #[test]
    fn sign_in_markup_is_sanitized_on_arrival() {
        let mut state = state().with_sign_in_source("~/signin.html");
        send(&mut state, Event::FileAccess { granted: true });
        let (_, actions) = send(&mut state, Event::ShowSignIn);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::LoadSignIn { .. })]
        ));

        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::SignInLoaded {
                markup: "<h1>Hi</h1><script>evil()</script>".into(),
            }),
        );
        assert_eq!(state.sign_in, SignInContent::Ready(vec!["Hi".to_string()]));
    }

    #[test]
    fn sign_in_failure_shows_message() {
        let mut state = state().with_sign_in_source("~/signin.html");
        send(&mut state, Event::FileAccess { granted: true });
        send(&mut state, Event::ShowSignIn);
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::SignInFailed { message: "gone".into() }),
        );
        assert_eq!(state.sign_in, SignInContent::Failed);
    }
}
