//! Recipe detail modal drawn over the results.

use crate::ui::helpers::{center_offset, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailModal;

const MAX_WIDTH: usize = 64;

enum Line<'a> {
    Title(&'a str),
    Section(&'a str),
    Dim(String),
    Text(String),
    Blank,
}

fn content(modal: &DetailModal) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::Title(&modal.title),
        Line::Dim(modal.summary.clone()),
        Line::Blank,
        Line::Section("Ingredients"),
    ];
    if modal.ingredients.is_empty() {
        lines.push(Line::Dim("None listed".to_string()));
    }
    lines.extend(modal.ingredients.iter().map(|i| Line::Text(format!("• {i}"))));
    lines.push(Line::Blank);
    lines.push(Line::Section("Steps"));
    if modal.steps.is_empty() {
        lines.push(Line::Dim("None listed".to_string()));
    }
    lines.extend(
        modal
            .steps
            .iter()
            .enumerate()
            .map(|(n, step)| Line::Text(format!("{}. {step}", n + 1))),
    );
    lines
}

/// Centers the modal inside the area `top..top + height` by `cols`. Content
/// that does not fit is cut at the bottom.
pub fn render_modal(top: usize, height: usize, cols: usize, modal: &DetailModal, theme: &Theme) {
    let width = cols.saturating_sub(4).min(MAX_WIDTH);
    if width < 8 || height < 3 {
        return;
    }
    let inner = width - 4;
    let lines = content(modal);
    let body_rows = lines.len().min(height - 2);
    let box_rows = body_rows + 2;
    let row = top + (height - box_rows) / 2;
    let col = 1 + (cols - width) / 2;
    let border = Theme::fg(&theme.colors.modal_border);

    position_cursor(row, col);
    print!("{border}╭{}╮", "─".repeat(width - 2));

    for (offset, line) in lines.iter().take(body_rows).enumerate() {
        position_cursor(row + 1 + offset, col);
        print!("{border}│ {}", Theme::reset());
        match line {
            Line::Title(text) => {
                let pad = center_offset(text, inner);
                print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.brand_fg));
                print!("{}{}", " ".repeat(pad), fit(text, inner - pad));
            }
            Line::Section(text) => {
                print!("{}{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), fit(text, inner));
            }
            Line::Dim(text) => print!("{}{}", Theme::fg(&theme.colors.text_dim), fit(text, inner)),
            Line::Text(text) => print!("{}{}", Theme::fg(&theme.colors.text_normal), fit(text, inner)),
            Line::Blank => print!("{}", " ".repeat(inner)),
        }
        print!("{}{border} │", Theme::reset());
    }

    position_cursor(row + box_rows - 1, col);
    print!("{border}╰{}╯{}", "─".repeat(width - 2), Theme::reset());
}
