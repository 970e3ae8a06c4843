//! Display-ready snapshot of the application.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold no logic: text is already formatted, the result
//! window already cut to the screen, and match highlights already located.

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: Body,
    pub footer: FooterInfo,
}

/// Top bar: brand, page title, and the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub brand: String,
    /// Page title with the visible count on the recipes page.
    pub title: String,
    pub subtitle: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
    /// One-off message, e.g. a catalog load failure.
    pub status: Option<String>,
    pub note: String,
}

/// Page-specific part of the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Recipes(RecipesView),
    SignIn(SignInView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipesView {
    pub sidebar: SidebarInfo,
    pub results: ResultsLayout,
    /// Set when there is nothing to show; replaces the results.
    pub empty_state: Option<EmptyState>,
    /// Detail modal drawn over the results.
    pub modal: Option<DetailModal>,
}

/// Filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarInfo {
    pub query: FieldInfo,
    pub difficulty: String,
    pub min_time: FieldInfo,
    pub max_time: FieldInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub focused: bool,
}

/// Visible window of results in the active layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsLayout {
    Grid {
        columns: usize,
        items: Vec<DisplayItem>,
    },
    List {
        items: Vec<DisplayItem>,
    },
}

impl ResultsLayout {
    #[must_use]
    pub fn items(&self) -> &[DisplayItem] {
        match self {
            Self::Grid { items, .. } | Self::List { items } => items,
        }
    }
}

/// One recipe card (grid) or row (list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub initial: char,
    pub title: String,
    pub category: String,
    /// `"25m  easy"`.
    pub meta: String,
    pub is_selected: bool,
    /// Character ranges of the title matching the query, `(start, end)`
    /// with exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailModal {
    pub title: String,
    /// `"Category: Seafood • Time: 25m • Difficulty: easy"`.
    pub summary: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInView {
    pub lines: Vec<String>,
    pub failed: bool,
}
