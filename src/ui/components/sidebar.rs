//! Filter sidebar: search box, difficulty selector, time range, clear button.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::layout::SIDEBAR_WIDTH;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldInfo, SidebarInfo};

const TIME_BOX_WIDTH: usize = (SIDEBAR_WIDTH - 2) / 2;

/// Draws a three-line input box at (`row`, `col`). The placeholder is shown
/// dimmed while the value is empty.
fn render_input_box(row: usize, col: usize, width: usize, field: &FieldInfo, theme: &Theme) {
    let inner = width.saturating_sub(4);
    let border = if field.focused {
        &theme.colors.input_focus_border
    } else {
        &theme.colors.input_border
    };

    position_cursor(row, col);
    print!("{}┌{}┐", Theme::fg(border), "─".repeat(width.saturating_sub(2)));

    position_cursor(row + 1, col);
    print!("│ ");
    if field.value.is_empty() && !field.focused {
        print!("{}{}", Theme::fg(&theme.colors.text_dim), fit(field.placeholder, inner));
    } else {
        let mut text = field.value.clone();
        if field.focused {
            text.push('▏');
        }
        // Keep the tail visible while typing past the box width.
        let skip = text.chars().count().saturating_sub(inner);
        let tail: String = text.chars().skip(skip).collect();
        print!("{}{}", Theme::fg(&theme.colors.text_normal), fit(&tail, inner));
    }
    print!("{} │", Theme::fg(border));

    position_cursor(row + 2, col);
    print!("└{}┘{}", "─".repeat(width.saturating_sub(2)), Theme::reset());
}

fn render_label(row: usize, text: &str, theme: &Theme) {
    position_cursor(row, 1);
    print!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        fit(text, SIDEBAR_WIDTH),
        Theme::reset()
    );
}

/// Renders the sidebar from `top` downwards. Sections that do not fit in
/// `height` rows are left out.
pub fn render_sidebar(top: usize, height: usize, sidebar: &SidebarInfo, theme: &Theme) {
    let bottom = top + height;
    let fits = |row: usize, lines: usize| row + lines <= bottom;

    let mut row = top;
    if fits(row, 4) {
        render_label(row, sidebar.query.label, theme);
        render_input_box(row + 1, 1, SIDEBAR_WIDTH, &sidebar.query, theme);
        row += 5;
    }

    if fits(row, 2) {
        render_label(row, "Difficulty", theme);
        position_cursor(row + 1, 1);
        print!("{}‹ ", Theme::fg(&theme.colors.text_dim));
        print!("{}{}", Theme::fg(&theme.colors.brand_fg), fit(&sidebar.difficulty, 8));
        print!("{} ›  (d){}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        row += 3;
    }

    if fits(row, 4) {
        render_label(row, "Time (mins)", theme);
        render_input_box(row + 1, 1, TIME_BOX_WIDTH, &sidebar.min_time, theme);
        render_input_box(row + 1, TIME_BOX_WIDTH + 3, TIME_BOX_WIDTH, &sidebar.max_time, theme);
        row += 5;
    }

    if fits(row, 1) {
        position_cursor(row, 1);
        print!(
            "{}{}{}",
            Theme::fg(&theme.colors.brand_fg),
            fit("[ Clear Filters ]  (c)", SIDEBAR_WIDTH),
            Theme::reset()
        );
    }
}
