//! Shared rendering utilities.
//!
//! Widths are counted in `char`s. Catalog text is expected to be narrow
//! (single-column) characters; wide glyphs may overflow a cell by one column.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Cuts `text` to at most `width` characters, marking the cut with `…`.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::ui::helpers::truncate;
///
/// assert_eq!(truncate("Spaghetti Carbonara", 10), "Spaghetti…");
/// assert_eq!(truncate("Pad Thai", 10), "Pad Thai");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Drops control characters from catalog text so it cannot move the cursor
/// or restyle the terminal. Tabs become spaces.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::ui::helpers::printable;
///
/// assert_eq!(printable("Taco\u{1b}[2J\tNight"), "Taco[2J Night");
/// ```
#[must_use]
pub fn printable(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// [`truncate`]s then right-pads with spaces to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let pad = width.saturating_sub(cut.chars().count());
    format!("{cut}{}", " ".repeat(pad))
}

/// Left padding that centers `text` in `width` columns.
#[must_use]
pub fn center_offset(text: &str, width: usize) -> usize {
    width.saturating_sub(text.chars().count()) / 2
}

/// Prints `text` with the character `ranges` highlighted, then restores
/// `restore` (the escape sequence the surrounding text was drawn with).
///
/// Ranges past `width` characters are clipped; the text itself is cut with
/// [`truncate`] first.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
    width: usize,
) {
    let text = truncate(text, width);
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}{restore}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_cuts_by_chars() {
        assert_eq!(fit("Crème", 7), "Crème  ");
        assert_eq!(fit("Crème brûlée", 6), "Crème…");
        assert_eq!(fit("abc", 0), "");
    }

    #[test]
    fn printable_strips_escapes_and_newlines() {
        assert_eq!(printable("a\u{1b}b\nc\u{9b}d"), "abcd");
        assert_eq!(printable("Crème brûlée"), "Crème brûlée");
    }

    #[test]
    fn center_offset_never_underflows() {
        assert_eq!(center_offset("abcd", 10), 3);
        assert_eq!(center_offset("too long", 4), 0);
    }
}
