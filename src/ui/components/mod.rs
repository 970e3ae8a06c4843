//! Component renderers.
//!
//! Each component draws one region of the screen at absolute positions; the
//! page functions here place them according to [`crate::ui::layout`].
//!
//! - [`header`]: brand bar, page title, location
//! - [`footer`]: status or note line and keybinding hints
//! - [`sidebar`]: filter controls
//! - [`grid`] / [`list`]: the two result layouts
//! - [`empty`]: message shown instead of results
//! - [`modal`]: recipe detail overlay
//! - [`signin`]: sign-in page body
//!
//! ```text
//! [Header]
//! [Border]
//! [Sidebar] [Results or empty state, modal on top]
//! [Border]
//! [Status]
//! [Keybindings]
//! ```

mod empty;
mod footer;
mod grid;
mod header;
mod list;
mod modal;
mod sidebar;
mod signin;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{self, GUTTER, HEADER_ROWS, SIDEBAR_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{RecipesView, ResultsLayout, SignInView, UIViewModel};

/// Renders a horizontal border at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_chrome(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    header::render_header(1, &vm.header, theme, cols);
    footer::render_footer(rows, &vm.footer, theme, cols);
}

/// Header, sidebar, results (or empty state), optional modal, footer.
pub fn render_recipes_page(vm: &UIViewModel, view: &RecipesView, theme: &Theme, rows: usize, cols: usize) {
    render_chrome(vm, theme, rows, cols);

    let top = HEADER_ROWS + 1;
    let height = layout::body_rows(rows);
    let left = SIDEBAR_WIDTH + GUTTER + 1;
    let width = layout::results_width(cols);

    sidebar::render_sidebar(top, height, &view.sidebar, theme);

    if let Some(empty) = &view.empty_state {
        empty::render_empty_state(top, left, width, empty, theme);
    } else {
        match &view.results {
            ResultsLayout::Grid { columns, items } => grid::render_grid(top, left, *columns, items, theme),
            ResultsLayout::List { items } => list::render_list(top, left, width, items, theme),
        }
    }

    if let Some(detail) = &view.modal {
        modal::render_modal(top, height, cols, detail, theme);
    }
}

/// Header, sign-in card, footer.
pub fn render_sign_in_page(vm: &UIViewModel, view: &SignInView, theme: &Theme, rows: usize, cols: usize) {
    render_chrome(vm, theme, rows, cols);
    signin::render_sign_in(HEADER_ROWS + 2, layout::body_rows(rows).saturating_sub(1), cols, view, theme);
}
