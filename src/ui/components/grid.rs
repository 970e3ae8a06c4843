//! Card grid layout of the results.

use crate::ui::helpers::{fit, position_cursor, render_highlighted_text};
use crate::ui::layout::{CARD_GAP, CARD_HEIGHT, CARD_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Draws one card with its top-left corner at (`row`, `col`).
///
/// ```text
/// ┌────────────────────────────┐
/// │ L  Lemon Garlic Salmon     │
/// │ Seafood         25m  easy  │
/// └────────────────────────────┘
/// ```
fn render_card(row: usize, col: usize, item: &DisplayItem, theme: &Theme) {
    let inner = CARD_WIDTH - 4;
    let border = if item.is_selected {
        &theme.colors.selection_bg
    } else {
        &theme.colors.border
    };
    let text_style = if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, col);
    print!("{}┌{}┐{}", Theme::fg(border), "─".repeat(CARD_WIDTH - 2), Theme::reset());

    position_cursor(row + 1, col);
    print!("{}│ {}", Theme::fg(border), text_style);
    print!("{}{}{text_style} ", Theme::bold(), item.initial);
    print!("{}", Theme::reset());
    print!("{text_style} ");
    let title_width = inner - 3;
    render_highlighted_text(&item.title, &item.highlight_ranges, theme, &text_style, title_width);
    let title_len = item.title.chars().count().min(title_width);
    print!("{}", " ".repeat(title_width - title_len));
    print!("{}{} │{}", Theme::reset(), Theme::fg(border), Theme::reset());

    let meta_len = item.meta.chars().count().min(inner);
    let category_width = inner - meta_len;
    position_cursor(row + 2, col);
    print!("{}│ ", Theme::fg(border));
    print!("{}{}", Theme::fg(&theme.colors.badge_fg), fit(&item.category, category_width));
    print!("{}{}", Theme::fg(&theme.colors.text_dim), fit(&item.meta, meta_len));
    print!("{} │{}", Theme::fg(border), Theme::reset());

    position_cursor(row + 3, col);
    print!("{}└{}┘{}", Theme::fg(border), "─".repeat(CARD_WIDTH - 2), Theme::reset());
}

/// Lays `items` out `columns` per row starting at (`top`, `left`).
pub fn render_grid(top: usize, left: usize, columns: usize, items: &[DisplayItem], theme: &Theme) {
    for (index, item) in items.iter().enumerate() {
        let row = top + (index / columns) * CARD_HEIGHT;
        let col = left + (index % columns) * (CARD_WIDTH + CARD_GAP);
        render_card(row, col, item, theme);
    }
}
