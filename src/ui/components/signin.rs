//! Sign-in page body.

use crate::ui::helpers::{center_offset, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SignInView;

const CARD_WIDTH: usize = 48;

/// Renders the sanitized sign-in lines inside a centered card. Lines styled
/// like form controls (`[ ... ]`) are drawn as inputs.
pub fn render_sign_in(top: usize, height: usize, cols: usize, view: &SignInView, theme: &Theme) {
    let width = cols.min(CARD_WIDTH);
    if width < 6 || height < 3 {
        return;
    }
    let inner = width - 4;
    let body_rows = view.lines.len().clamp(1, height - 2);
    let col = 1 + (cols - width) / 2;
    let border = Theme::fg(&theme.colors.border);

    position_cursor(top, col);
    print!("{border}┌{}┐", "─".repeat(width - 2));

    for offset in 0..body_rows {
        let line = view.lines.get(offset).map_or("", String::as_str);
        position_cursor(top + 1 + offset, col);
        print!("{border}│ ");
        if view.failed {
            print!("{}", Theme::fg(&theme.colors.error_fg));
        } else if line.starts_with("[ ") && line.ends_with(" ]") {
            print!("{}", Theme::fg(&theme.colors.input_focus_border));
        } else if offset == 0 {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.brand_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        let pad = center_offset(line, inner);
        print!("{}{}", " ".repeat(pad), fit(line, inner - pad));
        print!("{}{border} │", Theme::reset());
    }

    position_cursor(top + body_rows + 1, col);
    print!("{border}└{}┘{}", "─".repeat(width - 2), Theme::reset());
}
