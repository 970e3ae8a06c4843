//! Shell state and view model computation.
//!
//! [`AppState`] wraps the [`PresentationController`] with everything the
//! terminal shell needs on top of it: which page is showing, where the result
//! cursor is, which sidebar field is being edited, and how far the external
//! loaders have got. The controller stays the single owner of criteria, view
//! mode, and selection; this type only ever changes them through its API.
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::app::{AppState, PresentationController, ViewMode};
//! use recipe_explorer::catalog::Catalog;
//! use recipe_explorer::navigation::Location;
//! use recipe_explorer::ui::{Appearance, Body, Theme};
//!
//! let location = Location::parse("/recipes?view=list");
//! let controller = PresentationController::new(Catalog::builtin(), location.view_param());
//! let mut state = AppState::new(controller, Appearance::new(Theme::default()));
//! let _ = state.navigate(location);
//!
//! assert_eq!(state.controller.view_mode(), ViewMode::List);
//! let vm = state.compute_viewmodel(24, 100);
//! assert!(matches!(vm.body, Body::Recipes(_)));
//! ```

use super::actions::Action;
use super::controller::PresentationController;
use super::modes::{FilterField, InputMode, Screen, ViewMode};
use crate::catalog::{self, BuiltinCatalog, Catalog, CatalogSource};
use crate::domain::Recipe;
use crate::filter::{self, CriteriaUpdate};
use crate::markup::SignInContent;
use crate::navigation::{Location, Route};
use crate::ui::appearance::Appearance;
use crate::ui::helpers::printable;
use crate::ui::layout;
use crate::ui::viewmodel::{
    Body, DetailModal, DisplayItem, EmptyState, FieldInfo, FooterInfo, HeaderInfo, RecipesView,
    ResultsLayout, SidebarInfo, SignInView, UIViewModel,
};
use crate::worker::WorkerMessage;

const BRAND: &str = "Recipe Explorer";
const FOOTER_NOTE: &str = "Ocean Professional • Blue & amber accents";

/// Whether the worker may read the configured files yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    /// No file is configured.
    NotNeeded,
    /// Waiting for the user to answer the permission prompt.
    Pending,
    Granted,
    Denied,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub controller: PresentationController,
    pub screen: Screen,
    pub location: Location,
    pub input_mode: InputMode,
    /// Index into the controller's visible recipes.
    pub cursor: usize,
    pub appearance: Appearance,
    pub sign_in: SignInContent,
    pub sign_in_source: Option<String>,
    pub catalog_source: Option<String>,
    /// A catalog file is configured and has not been delivered yet.
    pub catalog_pending: bool,
    pub file_access: FileAccess,
    /// Message shown in the footer until replaced.
    pub status: Option<String>,
}

impl AppState {
    /// Creates the state on the recipes page at `/recipes`.
    #[must_use]
    pub fn new(controller: PresentationController, appearance: Appearance) -> Self {
        Self {
            controller,
            screen: Screen::Recipes,
            location: Location::default(),
            input_mode: InputMode::Normal,
            cursor: 0,
            appearance,
            sign_in: SignInContent::NotRequested,
            sign_in_source: None,
            catalog_source: None,
            catalog_pending: false,
            file_access: FileAccess::NotNeeded,
            status: None,
        }
    }

    /// Marks the catalog as coming from `path` via the worker. Until it
    /// arrives the results show a loading state.
    #[must_use]
    pub fn with_catalog_source(mut self, path: impl Into<String>) -> Self {
        self.catalog_source = Some(path.into());
        self.catalog_pending = true;
        self.file_access = FileAccess::Pending;
        self
    }

    #[must_use]
    pub fn with_sign_in_source(mut self, path: impl Into<String>) -> Self {
        self.sign_in_source = Some(path.into());
        self.file_access = FileAccess::Pending;
        self
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.controller.visible().len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    pub fn move_cursor_up(&mut self) {
        let len = self.controller.visible().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// Keeps the cursor inside the visible sequence after it changed.
    fn clamp_cursor(&mut self) {
        let len = self.controller.visible().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    #[must_use]
    pub fn recipe_under_cursor(&self) -> Option<&Recipe> {
        self.controller.visible().get(self.cursor)
    }

    /// Opens the detail view for the recipe under the cursor.
    pub fn open_under_cursor(&mut self) -> bool {
        let Some(id) = self.recipe_under_cursor().map(|r| r.id) else {
            tracing::debug!("nothing under cursor to open");
            return false;
        };
        self.controller.open(id)
    }

    pub fn begin_editing(&mut self, field: FilterField) {
        self.input_mode = InputMode::Editing(field);
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    fn field_text(&self, field: FilterField) -> String {
        let criteria = self.controller.criteria();
        match field {
            FilterField::Query => criteria.query.clone(),
            FilterField::MinTime => criteria.min_time.raw().to_string(),
            FilterField::MaxTime => criteria.max_time.raw().to_string(),
        }
    }

    fn write_field(&mut self, field: FilterField, text: String) {
        let update = match field {
            FilterField::Query => CriteriaUpdate::default().query(text),
            FilterField::MinTime => CriteriaUpdate::default().min_time(text),
            FilterField::MaxTime => CriteriaUpdate::default().max_time(text),
        };
        self.controller.set_criteria(update);
        self.clamp_cursor();
    }

    /// Appends `c` to the field being edited. Returns `false` outside
    /// editing mode.
    pub fn type_char(&mut self, c: char) -> bool {
        let InputMode::Editing(field) = self.input_mode else {
            return false;
        };
        let mut text = self.field_text(field);
        text.push(c);
        self.write_field(field, text);
        true
    }

    /// Removes the last character of the field being edited. Returns `false`
    /// when there was nothing to remove.
    pub fn delete_char(&mut self) -> bool {
        let InputMode::Editing(field) = self.input_mode else {
            return false;
        };
        let mut text = self.field_text(field);
        if text.pop().is_none() {
            return false;
        }
        self.write_field(field, text);
        true
    }

    pub fn cycle_difficulty(&mut self) {
        let next = self.controller.criteria().difficulty.cycle();
        self.controller
            .set_criteria(CriteriaUpdate::default().difficulty_filter(next));
        self.clamp_cursor();
    }

    pub fn clear_filters(&mut self) {
        self.controller.clear_filters();
        self.input_mode = InputMode::Normal;
        self.clamp_cursor();
    }

    /// Switches layout and mirrors it into the location. Unknown modes are
    /// rejected and change nothing.
    pub fn set_view_mode(&mut self, mode: &str) -> bool {
        if !self.controller.set_view_mode(mode) {
            return false;
        }
        self.location = Location::recipes(self.controller.view_mode());
        true
    }

    /// Shows the page for `location`.
    ///
    /// A `view` parameter on a recipes location is applied like a layout
    /// switch; the stored location always carries the resulting mode.
    /// Entering the sign-in page may need the worker to read markup.
    pub fn navigate(&mut self, location: Location) -> Vec<Action> {
        tracing::debug!(location = %location, "navigating");
        self.input_mode = InputMode::Normal;

        match location.route() {
            Route::Recipes => {
                if let Some(view) = location.view_param() {
                    if !self.controller.set_view_mode(view) {
                        tracing::debug!(view = %view, "ignoring unknown view parameter");
                    }
                }
                self.screen = Screen::Recipes;
                self.location = Location::recipes(self.controller.view_mode());
                Vec::new()
            }
            Route::SignIn => {
                self.screen = Screen::SignIn;
                self.location = location;
                self.request_sign_in().into_iter().collect()
            }
        }
    }

    fn request_sign_in(&mut self) -> Option<Action> {
        if self.sign_in != SignInContent::NotRequested {
            return None;
        }
        let Some(path) = self.sign_in_source.clone() else {
            self.sign_in = SignInContent::fallback();
            return None;
        };

        match self.file_access {
            FileAccess::Granted | FileAccess::NotNeeded => {
                self.sign_in = SignInContent::Loading;
                Some(Action::PostToWorker(WorkerMessage::load_sign_in(path)))
            }
            FileAccess::Pending => {
                self.sign_in = SignInContent::Loading;
                None
            }
            FileAccess::Denied => {
                self.sign_in = SignInContent::Failed;
                None
            }
        }
    }

    /// Records the answer to the file permission prompt and returns the
    /// reads that were waiting on it.
    pub fn resolve_file_access(&mut self, granted: bool) -> Vec<Action> {
        let mut actions = Vec::new();

        if granted {
            self.file_access = FileAccess::Granted;
            if let (true, Some(path)) = (self.catalog_pending, &self.catalog_source) {
                actions.push(Action::PostToWorker(WorkerMessage::load_catalog(path.clone())));
            }
            if let (SignInContent::Loading, Some(path)) = (&self.sign_in, &self.sign_in_source) {
                actions.push(Action::PostToWorker(WorkerMessage::load_sign_in(path.clone())));
            }
        } else {
            self.file_access = FileAccess::Denied;
            if self.catalog_pending {
                self.fall_back_to_samples("file access denied");
            }
            if self.sign_in == SignInContent::Loading {
                self.sign_in = SignInContent::Failed;
            }
        }

        actions
    }

    /// Installs recipes delivered by the worker.
    pub fn install_catalog(&mut self, recipes: Vec<Recipe>, source: &str) {
        self.catalog_pending = false;
        match Catalog::new(recipes) {
            Ok(catalog) => {
                let count = catalog.len();
                if self.controller.replace_catalog(catalog) {
                    tracing::info!(recipe_count = count, source = %source, "catalog installed");
                    self.status = Some(format!("Loaded {count} recipes from {source}"));
                }
                self.clamp_cursor();
            }
            Err(e) => self.fall_back_to_samples(&e.to_string()),
        }
    }

    /// Replaces a catalog that could not be loaded with the sample recipes.
    pub fn fall_back_to_samples(&mut self, reason: &str) {
        tracing::warn!(reason = %reason, source = %BuiltinCatalog.describe(), "using sample recipes");
        self.catalog_pending = false;
        self.controller.replace_catalog(catalog::load_or_empty(&BuiltinCatalog));
        self.clamp_cursor();
        self.status = Some(format!("Could not load recipes ({reason}); showing samples"));
    }

    /// Computes the frame for a terminal of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match self.screen {
            Screen::Recipes => Body::Recipes(self.compute_recipes_view(rows, cols)),
            Screen::SignIn => Body::SignIn(SignInView {
                lines: self.sign_in.lines(),
                failed: self.sign_in == SignInContent::Failed,
            }),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let (title, subtitle) = match self.screen {
            Screen::Recipes => (
                format!("Discover Recipes ({})", self.controller.visible().len()),
                "Browse, search, and manage your favorite dishes.",
            ),
            Screen::SignIn => (
                "Welcome Back".to_string(),
                "Sign in to manage your recipes and collections.",
            ),
        };

        HeaderInfo {
            brand: BRAND.to_string(),
            title,
            subtitle: subtitle.to_string(),
            location: self.location.to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.screen, self.input_mode) {
            (Screen::SignIn, _) => {
                "b/Esc: back to recipes  g/l: grid/list  t: theme  q: hide".to_string()
            }
            (Screen::Recipes, _) if self.controller.selection().is_some() => {
                "Esc/Enter/q: close details".to_string()
            }
            (Screen::Recipes, InputMode::Editing(field)) => format!(
                "Editing {}: type to filter  Backspace: delete  Enter/Esc: done",
                field.label()
            ),
            (Screen::Recipes, InputMode::Normal) => "j/k: move  Enter/Space: open  /: search  \
                m/M: min/max time  d: difficulty  c: clear  g/l: grid/list  t: theme  \
                s: sign in  q: hide"
                .to_string(),
        };

        FooterInfo {
            keybindings,
            status: self.status.clone(),
            note: FOOTER_NOTE.to_string(),
        }
    }

    fn compute_sidebar(&self) -> SidebarInfo {
        let criteria = self.controller.criteria();
        let field = |field: FilterField, value: &str, placeholder: &'static str| FieldInfo {
            label: field.label(),
            value: value.to_string(),
            placeholder,
            focused: self.input_mode == InputMode::Editing(field),
        };

        SidebarInfo {
            query: field(FilterField::Query, &criteria.query, "Search recipes..."),
            difficulty: criteria.difficulty.label().to_string(),
            min_time: field(FilterField::MinTime, criteria.min_time.raw(), "Min"),
            max_time: field(FilterField::MaxTime, criteria.max_time.raw(), "Max"),
        }
    }

    fn compute_recipes_view(&self, rows: usize, cols: usize) -> RecipesView {
        let visible = self.controller.visible();
        let body_rows = layout::body_rows(rows);

        let (columns, unit_height) = match self.controller.view_mode() {
            ViewMode::Grid => (layout::grid_columns(cols), layout::CARD_HEIGHT),
            ViewMode::List => (1, layout::LIST_ROW_HEIGHT),
        };
        let capacity = (body_rows / unit_height).max(1);
        let total_units = visible.len().div_ceil(columns);
        let (first_unit, last_unit) = window(total_units, self.cursor / columns, capacity);

        let start = first_unit * columns;
        let end = (last_unit * columns).min(visible.len());
        let query = &self.controller.criteria().query;

        let items: Vec<DisplayItem> = visible[start..end]
            .iter()
            .enumerate()
            .map(|(offset, recipe)| Self::display_item(recipe, query, start + offset == self.cursor))
            .collect();

        let results = match self.controller.view_mode() {
            ViewMode::Grid => ResultsLayout::Grid { columns, items },
            ViewMode::List => ResultsLayout::List { items },
        };

        RecipesView {
            sidebar: self.compute_sidebar(),
            results,
            empty_state: self.compute_empty_state(),
            modal: self.compute_modal(),
        }
    }

    fn display_item(recipe: &Recipe, query: &str, is_selected: bool) -> DisplayItem {
        let title = printable(&recipe.title);
        DisplayItem {
            initial: recipe.initial(),
            highlight_ranges: filter::match_ranges(&title, query),
            title,
            category: printable(&recipe.category),
            meta: format!("{}m  {}", recipe.time, recipe.difficulty),
            is_selected,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.catalog_pending {
            let source = self.catalog_source.as_deref().unwrap_or_default();
            return Some(EmptyState {
                message: "Loading recipes...".to_string(),
                subtitle: format!("Reading {source}"),
            });
        }
        if self.controller.catalog().is_empty() {
            return Some(EmptyState {
                message: "No recipes in the catalog".to_string(),
                subtitle: "Check the catalog_file option".to_string(),
            });
        }
        if self.controller.visible().is_empty() {
            return Some(EmptyState {
                message: "No recipes match your filters".to_string(),
                subtitle: "Press c to clear filters".to_string(),
            });
        }
        None
    }

    fn compute_modal(&self) -> Option<DetailModal> {
        self.controller.selection().map(|recipe| DetailModal {
            title: printable(&recipe.title),
            summary: format!(
                "Category: {} • Time: {}m • Difficulty: {}",
                printable(&recipe.category),
                recipe.time,
                recipe.difficulty
            ),
            ingredients: recipe.ingredients.iter().map(|i| printable(i)).collect(),
            steps: recipe.steps.iter().map(|s| printable(s)).collect(),
        })
    }
}

/// Range `[start, end)` of `capacity` units around `selected`, shifted back
/// near the end so the window stays full when possible.
fn window(total: usize, selected: usize, capacity: usize) -> (usize, usize) {
    let mut start = selected.saturating_sub(capacity / 2);
    let end = (start + capacity).min(total);
    if end - start < capacity && total >= capacity {
        start = end - capacity;
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(
            PresentationController::new(Catalog::builtin(), None),
            Appearance::new(Theme::default()),
        )
    }

    fn recipes_view(vm: &UIViewModel) -> &RecipesView {
        match &vm.body {
            Body::Recipes(view) => view,
            Body::SignIn(_) => panic!("expected recipes body"),
        }
    }

    #[test]
    fn window_centers_then_sticks_to_end() {
        assert_eq!(window(0, 0, 5), (0, 0));
        assert_eq!(window(10, 0, 4), (0, 4));
        assert_eq!(window(10, 5, 4), (3, 7));
        assert_eq!(window(10, 9, 4), (6, 10));
        assert_eq!(window(3, 2, 5), (0, 3));
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut state = state();
        state.move_cursor_up();
        assert_eq!(state.cursor, 5);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn typing_filters_and_clamps_cursor() {
        let mut state = state();
        state.cursor = 5;
        state.begin_editing(FilterField::Query);
        for c in "pad".chars() {
            assert!(state.type_char(c));
        }
        assert_eq!(state.controller.criteria().query, "pad");
        assert_eq!(state.cursor, 0);
        assert_eq!(state.recipe_under_cursor().map(|r| r.id), Some(6));

        assert!(state.delete_char());
        assert_eq!(state.controller.criteria().query, "pa");
    }

    #[test]
    fn typing_outside_editing_is_ignored() {
        let mut state = state();
        assert!(!state.type_char('x'));
        assert!(!state.delete_char());
        assert!(state.controller.criteria().is_unconstrained());
    }

    #[test]
    fn time_fields_keep_raw_text() {
        let mut state = state();
        state.begin_editing(FilterField::MaxTime);
        state.type_char('2');
        state.type_char('x');
        assert_eq!(state.controller.criteria().max_time.raw(), "2x");
        assert_eq!(state.controller.visible().len(), 6);
    }

    #[test]
    fn view_mode_change_updates_location() {
        let mut state = state();
        assert!(state.set_view_mode("list"));
        assert_eq!(state.location.to_string(), "/recipes?view=list");
        assert!(!state.set_view_mode("table"));
        assert_eq!(state.controller.view_mode(), ViewMode::List);
    }

    #[test]
    fn navigate_keeps_location_in_step_with_view_mode() {
        let mut state = state();
        assert!(state.set_view_mode("list"));

        let _ = state.navigate(Location::parse("/recipes?view=bogus"));
        assert_eq!(state.controller.view_mode(), ViewMode::List);
        assert_eq!(state.location.to_string(), "/recipes?view=list");

        let _ = state.navigate(Location::parse("/recipes"));
        assert_eq!(state.location.to_string(), "/recipes?view=list");

        let _ = state.navigate(Location::parse("/recipes?view=grid"));
        assert_eq!(state.controller.view_mode(), ViewMode::Grid);
        assert_eq!(state.location.to_string(), "/recipes?view=grid");
    }

    #[test]
    fn escape_sequences_in_catalog_text_are_not_rendered() {
        let recipes = vec![Recipe::new(1, "Bad\u{1b}[2JTaco", "Mex\u{7}ican", 10, Difficulty::Easy)
            .with_ingredients(["Salt\u{1b}[31m"])
            .with_steps(["Stir\r"])];
        let mut state = AppState::new(
            PresentationController::new(Catalog::new(recipes).unwrap(), None),
            Appearance::new(Theme::default()),
        );
        state.begin_editing(FilterField::Query);
        state.type_char('t');

        let vm = state.compute_viewmodel(40, 120);
        let item = &recipes_view(&vm).results.items()[0];
        assert_eq!(item.title, "Bad[2JTaco");
        assert_eq!(item.category, "Mexican");
        assert_eq!(item.highlight_ranges, [(6, 7)]);

        state.stop_editing();
        assert!(state.open_under_cursor());
        let vm = state.compute_viewmodel(40, 120);
        let modal = recipes_view(&vm).modal.clone().unwrap();
        assert_eq!(modal.ingredients, ["Salt[31m"]);
        assert_eq!(modal.steps, ["Stir"]);
        assert!(!modal.summary.contains('\u{7}'));
    }

    #[test]
    fn sign_in_without_source_uses_fallback_form() {
        let mut state = state();
        let actions = state.navigate(Location::sign_in());
        assert!(actions.is_empty());
        assert_eq!(state.screen, Screen::SignIn);
        assert!(matches!(state.sign_in, SignInContent::Ready(_)));
    }

    #[test]
    fn sign_in_waits_for_file_access() {
        let mut state = state().with_sign_in_source("~/signin.html");
        assert!(state.navigate(Location::sign_in()).is_empty());
        assert_eq!(state.sign_in, SignInContent::Loading);

        let actions = state.resolve_file_access(true);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::LoadSignIn { path, .. })] if path == "~/signin.html"
        ));
    }

    #[test]
    fn denied_access_falls_back_to_samples() {
        let mut state = AppState::new(
            PresentationController::new(Catalog::default(), None),
            Appearance::new(Theme::default()),
        )
        .with_catalog_source("~/recipes.json");
        assert!(state.catalog_pending);

        let actions = state.resolve_file_access(false);
        assert!(actions.is_empty());
        assert!(!state.catalog_pending);
        assert_eq!(state.controller.visible().len(), 6);
        assert!(state.status.as_deref().is_some_and(|s| s.contains("showing samples")));
    }

    #[test]
    fn grid_viewmodel_windows_by_card_rows() {
        let mut state = state();
        state.cursor = 5;
        // Two columns, two card rows.
        let vm = state.compute_viewmodel(layout::HEADER_ROWS + layout::FOOTER_ROWS + 10, 26 + 61);
        let view = recipes_view(&vm);

        let ResultsLayout::Grid { columns, items } = &view.results else {
            panic!("expected grid");
        };
        assert_eq!(*columns, 2);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].title, "Grilled Chicken Bowl");
        assert!(items[3].is_selected);
        assert_eq!(vm.header.title, "Discover Recipes (6)");
    }

    #[test]
    fn list_viewmodel_highlights_query() {
        let mut state = state();
        state.set_view_mode("list");
        state.begin_editing(FilterField::Query);
        state.type_char('a');

        let vm = state.compute_viewmodel(40, 120);
        let view = recipes_view(&vm);
        let pad_thai = view
            .results
            .items()
            .iter()
            .find(|item| item.title == "Pad Thai")
            .unwrap();
        assert_eq!(pad_thai.highlight_ranges, [(1, 2), (6, 7)]);
        assert!(view.sidebar.query.focused);
        assert!(vm.footer.keybindings.starts_with("Editing Search"));
    }

    #[test]
    fn empty_results_show_hint_and_modal_shows_details() {
        let mut state = state();
        state.begin_editing(FilterField::Query);
        state.type_char('z');
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(
            recipes_view(&vm).empty_state.as_ref().map(|e| e.message.as_str()),
            Some("No recipes match your filters")
        );

        state.clear_filters();
        assert!(state.open_under_cursor());
        let vm = state.compute_viewmodel(40, 120);
        let modal = recipes_view(&vm).modal.clone().unwrap();
        assert_eq!(modal.title, "Lemon Garlic Salmon");
        assert_eq!(modal.summary, "Category: Seafood • Time: 25m • Difficulty: easy");
        assert_eq!(modal.steps.len(), 3);
    }
}
