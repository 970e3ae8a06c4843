//! Screen geometry shared by view model computation and the components.

/// Header lines: brand bar, page title, border.
pub const HEADER_ROWS: usize = 3;
/// Footer lines: border, status or note, keybindings.
pub const FOOTER_ROWS: usize = 3;

pub const SIDEBAR_WIDTH: usize = 24;
/// Gap between sidebar and results.
pub const GUTTER: usize = 2;

pub const CARD_WIDTH: usize = 30;
pub const CARD_HEIGHT: usize = 5;
pub const CARD_GAP: usize = 1;

pub const LIST_ROW_HEIGHT: usize = 1;

/// Rows left for the page body.
#[must_use]
pub const fn body_rows(rows: usize) -> usize {
    rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS)
}

/// Columns left for results after the sidebar.
#[must_use]
pub const fn results_width(cols: usize) -> usize {
    cols.saturating_sub(SIDEBAR_WIDTH + GUTTER)
}

/// Cards per grid row; always at least one.
#[must_use]
pub const fn grid_columns(cols: usize) -> usize {
    let per_row = (results_width(cols) + CARD_GAP) / (CARD_WIDTH + CARD_GAP);
    if per_row == 0 {
        1
    } else {
        per_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_columns_follow_width() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(26 + 30), 1);
        assert_eq!(grid_columns(26 + 61), 2);
        assert_eq!(grid_columns(26 + 92), 3);
    }
}
