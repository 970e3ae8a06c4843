//! Header: brand bar, page title, and a separating border.

use crate::ui::helpers::{fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header starting at `row` and returns the next free row.
///
/// ```text
/// Recipe Explorer                              /recipes?view=grid
/// Discover Recipes (6)  Browse, search, and manage your favorite dishes.
/// ────────────────────────────────────────────────────────────────────
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let location = truncate(&header.location, cols / 2);
    let brand_width = cols.saturating_sub(location.chars().count());

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.brand_fg));
    print!("{}", fit(&header.brand, brand_width));
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{location}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());

    let title = truncate(&header.title, cols);
    let title_len = title.chars().count();
    position_cursor(row + 1, 1);
    print!("{}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
    if title_len + 2 < cols {
        let subtitle = fit(&header.subtitle, cols - title_len - 2);
        print!("  {}{subtitle}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }

    super::render_border(row + 2, &theme.colors.border, cols)
}
