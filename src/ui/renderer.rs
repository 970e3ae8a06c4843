//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] turns state into a
//! [`UIViewModel`], then the page renderer for the current body draws it with
//! the theme from the shared [`Appearance`](crate::ui::Appearance).

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders the plugin UI to stdout for a `rows` x `cols` pane.
///
/// Prints ANSI-styled output with absolute cursor positioning. Does not clear
/// the screen; Zellij hands the plugin a fresh frame on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state.appearance.theme(), rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        Body::Recipes(view) => components::render_recipes_page(vm, view, theme, rows, cols),
        Body::SignIn(view) => components::render_sign_in_page(vm, view, theme, rows, cols),
    }
}
