//! Filter criteria and partial updates.
//!
//! [`FilterCriteria`] mirrors the sidebar controls: a free-text query, a
//! difficulty selector, and two time inputs. Time inputs keep the raw text the
//! user typed so the sidebar can echo it back; the numeric value is derived on
//! demand and text that is not a finite number simply counts as "unset".

use crate::domain::Difficulty;

/// Difficulty selector state: either no constraint or one exact difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    Any,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Parses selector text. Empty text, `"any"`, and unrecognized values all
    /// mean "no constraint".
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_explorer::domain::Difficulty;
    /// use recipe_explorer::filter::DifficultyFilter;
    ///
    /// assert_eq!(DifficultyFilter::parse("easy"), DifficultyFilter::Only(Difficulty::Easy));
    /// assert_eq!(DifficultyFilter::parse(""), DifficultyFilter::Any);
    /// assert_eq!(DifficultyFilter::parse("extreme"), DifficultyFilter::Any);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "" | "any" => Self::Any,
            other => other.parse().map_or(Self::Any, Self::Only),
        }
    }

    #[must_use]
    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == difficulty,
        }
    }

    /// Next selector value in the order any, easy, moderate, hard, any.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Any => Self::Only(Difficulty::Easy),
            Self::Only(Difficulty::Easy) => Self::Only(Difficulty::Moderate),
            Self::Only(Difficulty::Moderate) => Self::Only(Difficulty::Hard),
            Self::Only(Difficulty::Hard) => Self::Any,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Only(Difficulty::Easy) => "Easy",
            Self::Only(Difficulty::Moderate) => "Moderate",
            Self::Only(Difficulty::Hard) => "Hard",
        }
    }
}

/// Raw text of a time input together with its derived numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeBound(String);

impl TimeBound {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Numeric value in minutes, or `None` when the text is empty or is not a
    /// number.
    ///
    /// Negative and fractional values are returned as-is; they are valid
    /// bounds, just unusual ones. `Infinity` (optionally signed) and
    /// overflowing literals such as `1e999` are infinite bounds, so a minimum
    /// of `Infinity` matches nothing. Other spellings like `inf` are not
    /// numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_explorer::filter::TimeBound;
    ///
    /// assert_eq!(TimeBound::new(" 30 ").minutes(), Some(30.0));
    /// assert_eq!(TimeBound::new("abc").minutes(), None);
    /// assert_eq!(TimeBound::new("NaN").minutes(), None);
    /// assert_eq!(TimeBound::new("-Infinity").minutes(), Some(f64::NEG_INFINITY));
    /// assert_eq!(TimeBound::new("inf").minutes(), None);
    /// assert_eq!(TimeBound::new("").minutes(), None);
    /// ```
    #[must_use]
    pub fn minutes(&self) -> Option<f64> {
        let text = self.0.trim();
        if text.is_empty() {
            return None;
        }
        let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
        let spelled_infinity = unsigned
            .as_bytes()
            .first()
            .is_some_and(|b| b.eq_ignore_ascii_case(&b'i'));
        if spelled_infinity && unsigned != "Infinity" {
            return None;
        }
        text.parse::<f64>().ok().filter(|v| !v.is_nan())
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.minutes().is_some()
    }
}

/// Complete set of user constraints applied to the catalog.
///
/// The default value is the all-unset state: every recipe passes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub difficulty: DifficultyFilter,
    pub min_time: TimeBound,
    pub max_time: TimeBound,
}

impl FilterCriteria {
    /// Returns `true` when no field constrains the result.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.query.is_empty()
            && self.difficulty == DifficultyFilter::Any
            && !self.min_time.is_set()
            && !self.max_time.is_set()
    }

    /// Merges the fields present in `update`; absent fields keep their value.
    pub fn merge(&mut self, update: CriteriaUpdate) {
        if let Some(query) = update.query {
            self.query = query;
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(min_time) = update.min_time {
            self.min_time = min_time;
        }
        if let Some(max_time) = update.max_time {
            self.max_time = max_time;
        }
    }
}

/// Partial update of [`FilterCriteria`].
///
/// # Examples
///
/// ```
/// use recipe_explorer::filter::{CriteriaUpdate, FilterCriteria};
///
/// let mut criteria = FilterCriteria::default();
/// criteria.merge(CriteriaUpdate::default().query("pad").min_time("10"));
/// criteria.merge(CriteriaUpdate::default().difficulty("hard"));
///
/// assert_eq!(criteria.query, "pad");
/// assert_eq!(criteria.min_time.raw(), "10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CriteriaUpdate {
    pub query: Option<String>,
    pub difficulty: Option<DifficultyFilter>,
    pub min_time: Option<TimeBound>,
    pub max_time: Option<TimeBound>,
}

impl CriteriaUpdate {
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the difficulty from selector text (see [`DifficultyFilter::parse`]).
    #[must_use]
    pub fn difficulty(mut self, text: &str) -> Self {
        self.difficulty = Some(DifficultyFilter::parse(text));
        self
    }

    #[must_use]
    pub const fn difficulty_filter(mut self, filter: DifficultyFilter) -> Self {
        self.difficulty = Some(filter);
        self
    }

    #[must_use]
    pub fn min_time(mut self, raw: impl Into<String>) -> Self {
        self.min_time = Some(TimeBound::new(raw));
        self
    }

    #[must_use]
    pub fn max_time(mut self, raw: impl Into<String>) -> Self {
        self.max_time = Some(TimeBound::new(raw));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_cycle_visits_every_value_once() {
        let mut filter = DifficultyFilter::Any;
        let mut seen = vec![filter];
        for _ in 0..3 {
            filter = filter.cycle();
            seen.push(filter);
        }
        assert_eq!(filter.cycle(), DifficultyFilter::Any);
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[2], DifficultyFilter::Only(Difficulty::Moderate));
    }

    #[test]
    fn infinity_is_a_bound_but_other_spellings_are_not() {
        assert_eq!(TimeBound::new(" Infinity ").minutes(), Some(f64::INFINITY));
        assert_eq!(TimeBound::new("+Infinity").minutes(), Some(f64::INFINITY));
        assert_eq!(TimeBound::new("1e999").minutes(), Some(f64::INFINITY));
        assert_eq!(TimeBound::new("infinity").minutes(), None);
        assert_eq!(TimeBound::new("INF").minutes(), None);
        assert_eq!(TimeBound::new("--5").minutes(), None);
        assert_eq!(TimeBound::new("nan").minutes(), None);
    }

    #[test]
    fn zero_and_negative_bounds_are_set() {
        assert_eq!(TimeBound::new("0").minutes(), Some(0.0));
        assert_eq!(TimeBound::new("-5").minutes(), Some(-5.0));
        assert!(!TimeBound::new("inf").is_set());
    }

    #[test]
    fn merge_leaves_absent_fields_untouched() {
        let mut criteria = FilterCriteria {
            query: "salmon".to_string(),
            difficulty: DifficultyFilter::Only(Difficulty::Easy),
            min_time: TimeBound::new("10"),
            max_time: TimeBound::new("40"),
        };
        criteria.merge(CriteriaUpdate::default().max_time("25"));

        assert_eq!(criteria.query, "salmon");
        assert_eq!(criteria.difficulty, DifficultyFilter::Only(Difficulty::Easy));
        assert_eq!(criteria.min_time.raw(), "10");
        assert_eq!(criteria.max_time.raw(), "25");
    }

    #[test]
    fn invalid_bound_text_leaves_criteria_unconstrained() {
        let mut criteria = FilterCriteria::default();
        criteria.merge(CriteriaUpdate::default().min_time("soon").max_time(" "));
        assert!(criteria.is_unconstrained());
        assert_eq!(criteria.min_time.raw(), "soon");
    }
}
