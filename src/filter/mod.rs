//! Recipe filtering: criteria model and the pure filter engine.
//!
//! - [`criteria`]: [`FilterCriteria`], partial [`CriteriaUpdate`]s, and the
//!   typed pieces they are built from
//! - [`engine`]: [`apply`], the stable filter over a catalog slice

pub mod criteria;
pub mod engine;

pub use criteria::{CriteriaUpdate, DifficultyFilter, FilterCriteria, TimeBound};
pub use engine::{apply, match_ranges};
