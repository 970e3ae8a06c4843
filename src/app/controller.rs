//! Presentation controller: the single owner of criteria, view mode, and
//! selection.
//!
//! Every criteria or catalog change synchronously recomputes the visible
//! sequence, so [`PresentationController::visible`] always reflects the most
//! recent criteria. All operations are total: invalid input is either stored
//! and ignored by the engine (time bounds) or rejected as a no-op (view mode,
//! unknown recipe id).
//!
//! # Example
//!
//! ```rust
//! use recipe_explorer::app::{PresentationController, ViewMode};
//! use recipe_explorer::catalog::Catalog;
//! use recipe_explorer::filter::CriteriaUpdate;
//!
//! let mut controller = PresentationController::new(Catalog::builtin(), Some("list"));
//! assert_eq!(controller.view_mode(), ViewMode::List);
//!
//! controller.set_criteria(CriteriaUpdate::default().difficulty("hard"));
//! assert_eq!(controller.visible().len(), 1);
//!
//! assert!(controller.open(6));
//! assert_eq!(controller.selection().map(|r| r.title.as_str()), Some("Pad Thai"));
//! controller.close();
//! ```

use super::modes::ViewMode;
use crate::catalog::Catalog;
use crate::domain::{Recipe, RecipeId};
use crate::filter::{self, CriteriaUpdate, FilterCriteria};

#[derive(Debug, Clone)]
pub struct PresentationController {
    catalog: Catalog,
    catalog_replaced: bool,
    criteria: FilterCriteria,
    view_mode: ViewMode,
    selection: Option<RecipeId>,
    visible: Vec<Recipe>,
}

impl PresentationController {
    /// Creates a controller over `catalog` with all criteria unset.
    ///
    /// `view_param` is the `view` parameter of the location at mount time; it
    /// is read here once and never again.
    #[must_use]
    pub fn new(catalog: Catalog, view_param: Option<&str>) -> Self {
        let mut controller = Self {
            catalog,
            catalog_replaced: false,
            criteria: FilterCriteria::default(),
            view_mode: ViewMode::from_param(view_param),
            selection: None,
            visible: Vec::new(),
        };
        controller.recompute();
        controller
    }

    /// Merges `update` into the current criteria and recomputes.
    pub fn set_criteria(&mut self, update: CriteriaUpdate) {
        self.criteria.merge(update);
        self.recompute();
    }

    /// Resets every criterion to "no constraint". View mode and selection are
    /// left as they are.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.recompute();
    }

    /// Switches layout. Returns `false`, leaving the mode unchanged, for
    /// anything other than `grid` or `list`.
    pub fn set_view_mode(&mut self, mode: &str) -> bool {
        let Some(mode) = ViewMode::parse(mode) else {
            tracing::debug!(requested = %mode, "rejected unknown view mode");
            return false;
        };
        self.view_mode = mode;
        true
    }

    /// Opens the detail view for `id`.
    ///
    /// Callers only pass ids taken from the catalog. An unknown id leaves the
    /// selection unchanged and returns `false`.
    pub fn open(&mut self, id: RecipeId) -> bool {
        if self.catalog.get(id).is_none() {
            tracing::warn!(recipe_id = id, "open requested for a recipe outside the catalog");
            return false;
        }
        self.selection = Some(id);
        true
    }

    /// Closes the detail view. Always safe to call.
    pub fn close(&mut self) {
        self.selection = None;
    }

    /// Installs the catalog delivered by the external loader.
    ///
    /// Accepted once per controller; later deliveries are ignored and return
    /// `false`. A selection that no longer resolves is cleared.
    pub fn replace_catalog(&mut self, catalog: Catalog) -> bool {
        if self.catalog_replaced {
            tracing::debug!("catalog already loaded, ignoring replacement");
            return false;
        }
        self.catalog = catalog;
        self.catalog_replaced = true;
        if self.selection.is_some_and(|id| self.catalog.get(id).is_none()) {
            self.selection = None;
        }
        self.recompute();
        true
    }

    #[must_use]
    pub fn visible(&self) -> &[Recipe] {
        &self.visible
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The recipe open in the detail view, if any.
    ///
    /// Resolved against the catalog, so it stays available even when the
    /// current criteria filter it out of [`visible`](Self::visible).
    #[must_use]
    pub fn selection(&self) -> Option<&Recipe> {
        self.selection.and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn recompute(&mut self) {
        let _span = tracing::debug_span!(
            "recompute_visible",
            catalog_size = self.catalog.len(),
            query_len = self.criteria.query.len(),
            difficulty = ?self.criteria.difficulty
        )
        .entered();

        self.visible = filter::apply(self.catalog.as_slice(), &self.criteria);

        tracing::debug!(visible_count = self.visible.len(), "visible recipes recomputed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;

    fn titles(controller: &PresentationController) -> Vec<&str> {
        controller.visible().iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn starts_with_full_catalog_in_order() {
        let controller = PresentationController::new(Catalog::builtin(), None);
        assert_eq!(controller.visible(), Catalog::builtin().as_slice());
        assert_eq!(controller.view_mode(), ViewMode::Grid);
        assert!(controller.selection().is_none());
    }

    #[test]
    fn unrecognized_view_param_defaults_to_grid() {
        let controller = PresentationController::new(Catalog::builtin(), Some("table"));
        assert_eq!(controller.view_mode(), ViewMode::Grid);
    }

    #[test]
    fn set_criteria_recomputes_on_each_call() {
        let mut controller = PresentationController::new(Catalog::builtin(), None);
        controller.set_criteria(CriteriaUpdate::default().query("s"));
        assert_eq!(
            titles(&controller),
            [
                "Lemon Garlic Salmon",
                "Spaghetti Carbonara",
                "Vegetable Stir Fry",
                "Beef Tacos"
            ]
        );
        controller.set_criteria(CriteriaUpdate::default().query("sa"));
        assert_eq!(titles(&controller), ["Lemon Garlic Salmon"]);
    }

    #[test]
    fn clear_filters_keeps_view_mode_and_selection() {
        let mut controller = PresentationController::new(Catalog::builtin(), Some("list"));
        controller.set_criteria(
            CriteriaUpdate::default()
                .query("bowl")
                .difficulty("easy")
                .min_time("1")
                .max_time("99"),
        );
        assert!(controller.open(3));

        controller.clear_filters();

        assert_eq!(controller.criteria(), &FilterCriteria::default());
        assert_eq!(controller.view_mode(), ViewMode::List);
        assert_eq!(controller.selection().map(|r| r.id), Some(3));
        assert_eq!(controller.visible().len(), 6);
    }

    #[test]
    fn bogus_view_mode_is_rejected() {
        let mut controller = PresentationController::new(Catalog::builtin(), Some("list"));
        assert!(!controller.set_view_mode("bogus"));
        assert!(!controller.set_view_mode("GRID"));
        assert_eq!(controller.view_mode(), ViewMode::List);
        assert!(controller.set_view_mode("grid"));
        assert_eq!(controller.view_mode(), ViewMode::Grid);
    }

    #[test]
    fn open_unknown_id_leaves_selection_alone() {
        let mut controller = PresentationController::new(Catalog::builtin(), None);
        assert!(controller.open(2));
        assert!(!controller.open(99));
        assert_eq!(controller.selection().map(|r| r.id), Some(2));
    }

    #[test]
    fn close_is_idempotent() {
        let mut controller = PresentationController::new(Catalog::builtin(), None);
        controller.close();
        assert!(controller.open(1));
        controller.close();
        controller.close();
        assert!(controller.selection().is_none());
    }

    #[test]
    fn selection_survives_being_filtered_out() {
        let mut controller = PresentationController::new(Catalog::builtin(), None);
        assert!(controller.open(6));
        controller.set_criteria(CriteriaUpdate::default().difficulty("easy"));
        assert!(controller.visible().iter().all(|r| r.difficulty == Difficulty::Easy));
        assert_eq!(controller.selection().map(|r| r.id), Some(6));
    }

    #[test]
    fn catalog_replacement_is_accepted_once() {
        let mut controller = PresentationController::new(Catalog::default(), None);
        controller.set_criteria(CriteriaUpdate::default().difficulty("hard"));
        assert!(controller.visible().is_empty());

        assert!(controller.replace_catalog(Catalog::builtin()));
        assert_eq!(titles(&controller), ["Pad Thai"]);

        assert!(!controller.replace_catalog(Catalog::default()));
        assert_eq!(controller.catalog().len(), 6);
    }

    #[test]
    fn replacement_clears_dangling_selection() {
        let mut controller = PresentationController::new(Catalog::builtin(), None);
        assert!(controller.open(5));
        let smaller = Catalog::new(vec![Recipe::new(1, "Toast", "Breakfast", 5, Difficulty::Easy)])
            .unwrap();
        assert!(controller.replace_catalog(smaller));
        assert!(controller.selection().is_none());
    }
}
