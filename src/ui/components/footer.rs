//! Footer: border, status or brand note, and keybinding hints.

use crate::ui::helpers::{center_offset, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer on the last three rows of a `rows` tall screen.
///
/// A status message replaces the brand note while it is set.
pub fn render_footer(rows: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let keys_row = rows.max(3);
    super::render_border(keys_row - 2, &theme.colors.border, cols);

    position_cursor(keys_row - 1, 1);
    match &footer.status {
        Some(status) => print!("{}{}{}", Theme::fg(&theme.colors.badge_fg), fit(status, cols), Theme::reset()),
        None => print!("{}{}{}", Theme::fg(&theme.colors.text_dim), fit(&footer.note, cols), Theme::reset()),
    }

    let help_text = truncate(&footer.keybindings, cols);
    let padding = center_offset(&help_text, cols);

    position_cursor(keys_row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{}", fit(&help_text, cols - padding));
    print!("{}", Theme::reset());
}
