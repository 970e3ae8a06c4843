//! List layout: one row per recipe.

use crate::ui::helpers::{fit, position_cursor, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const CATEGORY_WIDTH: usize = 14;
const META_WIDTH: usize = 14;

/// Renders the rows starting at (`top`, `left`), each `width` columns wide.
///
/// ```text
/// L  Lemon Garlic Salmon           Seafood       25m  easy
/// ```
pub fn render_list(top: usize, left: usize, width: usize, items: &[DisplayItem], theme: &Theme) {
    let title_width = width.saturating_sub(3 + CATEGORY_WIDTH + META_WIDTH);

    for (offset, item) in items.iter().enumerate() {
        let style = if item.is_selected {
            format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
        } else {
            Theme::fg(&theme.colors.text_normal)
        };

        position_cursor(top + offset, left);
        print!("{style}{}{}  ", Theme::bold(), item.initial);
        print!("{}{style}", Theme::reset());
        render_highlighted_text(&item.title, &item.highlight_ranges, theme, &style, title_width);
        let title_len = item.title.chars().count().min(title_width);
        print!("{}", " ".repeat(title_width - title_len));

        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.badge_fg));
        }
        print!("{}", fit(&item.category, CATEGORY_WIDTH));
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{}{}", fit(&item.meta, META_WIDTH), Theme::reset());
    }
}
