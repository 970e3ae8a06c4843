//! Empty state message for the results area.

use crate::ui::helpers::{center_offset, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message in the area starting at
/// (`top`, `left`) that is `width` columns wide.
pub fn render_empty_state(top: usize, left: usize, width: usize, empty: &EmptyState, theme: &Theme) {
    let message = truncate(&empty.message, width);
    position_cursor(top + 2, left + center_offset(&message, width));
    print!("{}{}{message}{}", Theme::bold(), Theme::fg(&theme.colors.empty_state_fg), Theme::reset());

    let subtitle = truncate(&empty.subtitle, width);
    position_cursor(top + 3, left + center_offset(&subtitle, width));
    print!("{}{}{subtitle}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), Theme::reset());
}
