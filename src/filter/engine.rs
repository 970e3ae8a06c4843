//! Stable, side-effect free recipe filtering.
//!
//! [`apply`] keeps every recipe that satisfies all active clauses of the
//! criteria and preserves catalog order. It never sorts, never errors, and an
//! inverted time range (`min > max`) simply matches nothing.

use super::criteria::{DifficultyFilter, FilterCriteria};
use crate::domain::Recipe;

/// Criteria pre-processed once per [`apply`] call.
struct Compiled {
    query: Option<String>,
    difficulty: DifficultyFilter,
    min_time: Option<f64>,
    max_time: Option<f64>,
}

impl Compiled {
    fn new(criteria: &FilterCriteria) -> Self {
        Self {
            query: (!criteria.query.is_empty()).then(|| criteria.query.to_lowercase()),
            difficulty: criteria.difficulty,
            min_time: criteria.min_time.minutes(),
            max_time: criteria.max_time.minutes(),
        }
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(query) = &self.query {
            if !recipe.title.to_lowercase().contains(query.as_str()) {
                return false;
            }
        }
        if !self.difficulty.matches(recipe.difficulty) {
            return false;
        }
        let time = f64::from(recipe.time);
        if self.min_time.is_some_and(|min| time < min) {
            return false;
        }
        if self.max_time.is_some_and(|max| time > max) {
            return false;
        }
        true
    }
}

/// Returns the recipes of `catalog` that satisfy `criteria`, in catalog order.
///
/// # Examples
///
/// ```
/// use recipe_explorer::catalog::sample_recipes;
/// use recipe_explorer::filter::{apply, CriteriaUpdate, FilterCriteria};
///
/// let catalog = sample_recipes();
/// let mut criteria = FilterCriteria::default();
/// criteria.merge(CriteriaUpdate::default().query("pad"));
///
/// let titles: Vec<_> = apply(&catalog, &criteria).into_iter().map(|r| r.title).collect();
/// assert_eq!(titles, ["Pad Thai"]);
/// ```
#[must_use]
pub fn apply(catalog: &[Recipe], criteria: &FilterCriteria) -> Vec<Recipe> {
    let compiled = Compiled::new(criteria);
    catalog
        .iter()
        .filter(|recipe| compiled.matches(recipe))
        .cloned()
        .collect()
}

/// Character ranges `(start, end)` of every case-insensitive, non-overlapping
/// occurrence of `query` in `title`.
///
/// Indices count `char`s, not bytes, so they can be used directly by the
/// highlighting renderer.
///
/// # Examples
///
/// ```
/// use recipe_explorer::filter::match_ranges;
///
/// assert_eq!(match_ranges("Pad Thai", "a"), vec![(1, 2), (6, 7)]);
/// assert!(match_ranges("Pad Thai", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(title: &str, query: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = title.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_recipes;
    use crate::domain::Difficulty;
    use crate::filter::criteria::CriteriaUpdate;

    fn titles(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.title.as_str()).collect()
    }

    fn criteria(update: CriteriaUpdate) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        criteria.merge(update);
        criteria
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let k = criteria(CriteriaUpdate::default().query("salmon"));
        assert!(apply(&[], &k).is_empty());
        assert!(apply(&[], &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn query_is_case_insensitive_substring_of_title() {
        let catalog = sample_recipes();
        let result = apply(&catalog, &criteria(CriteriaUpdate::default().query("GRILL")));
        assert_eq!(titles(&result), ["Grilled Chicken Bowl"]);
    }

    #[test]
    fn query_does_not_search_category() {
        let catalog = sample_recipes();
        let result = apply(&catalog, &criteria(CriteriaUpdate::default().query("seafood")));
        assert!(result.is_empty());
    }

    #[test]
    fn clauses_combine_with_and() {
        let catalog = sample_recipes();
        let k = criteria(
            CriteriaUpdate::default()
                .difficulty("easy")
                .min_time("25")
                .max_time("30"),
        );
        assert_eq!(titles(&apply(&catalog, &k)), ["Lemon Garlic Salmon", "Beef Tacos"]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let catalog = sample_recipes();
        let k = criteria(CriteriaUpdate::default().min_time("40").max_time("20"));
        assert!(apply(&catalog, &k).is_empty());
    }

    #[test]
    fn non_numeric_bound_is_ignored() {
        let catalog = sample_recipes();
        let k = criteria(CriteriaUpdate::default().min_time("quick").max_time("25"));
        assert_eq!(
            titles(&apply(&catalog, &k)),
            ["Lemon Garlic Salmon", "Vegetable Stir Fry", "Beef Tacos"]
        );
    }

    #[test]
    fn fractional_bounds_compare_numerically() {
        let catalog = sample_recipes();
        let k = criteria(CriteriaUpdate::default().min_time("34.5"));
        assert_eq!(titles(&apply(&catalog, &k)), ["Grilled Chicken Bowl", "Pad Thai"]);
    }

    #[test]
    fn difficulty_clause_keeps_only_that_level() {
        let catalog = sample_recipes();
        let k = criteria(CriteriaUpdate::default().difficulty("hard"));
        let result = apply(&catalog, &k);
        assert!(result.iter().all(|r| r.difficulty == Difficulty::Hard));
        assert_eq!(titles(&result), ["Pad Thai"]);
    }

    #[test]
    fn match_ranges_are_non_overlapping() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(match_ranges("Beef Tacos", "TACO"), vec![(5, 9)]);
        assert!(match_ranges("Tacos", "tacos and more").is_empty());
    }
}
