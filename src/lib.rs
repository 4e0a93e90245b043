//! Muscle engagement aggregation engine
//!
//! Turns heterogeneous workout records (weighted sets, bodyweight sets,
//! timed holds, cardio sessions) into normalized per-muscle-group intensity
//! scores for heatmap rendering, plus a coarse chart-group path for
//! pill/badge display.
//!
//! The pipeline: workout logs + exercise catalog + date range ->
//! [`engagement::aggregate`] -> raw per-muscle totals ->
//! [`engagement::MuscleEngagementMap::normalize`] -> presentation-ready
//! intensities. Separately, [`chart::reduce_to_chart_groups`] produces the
//! deduplicated set of engaged display groups.
//!
//! All computation is pure, synchronous, and linear in the number of logged
//! sets. The taxonomy tables are process-wide static data; callers may
//! invoke any function concurrently over shared immutable inputs.

pub mod catalog;
pub mod chart;
pub mod engagement;
pub mod models;
pub mod taxonomy;
pub mod volume;

#[cfg(test)]
pub(crate) mod test_utils;

pub use catalog::{resolve_category, CatalogError, OnMissingExercise};
pub use chart::{reduce_to_chart_groups, volume_by_chart_group, DailyChartVolume};
pub use engagement::{aggregate, EngagementError, MuscleEngagementMap, NormalizeMode};
pub use models::{DateRange, ExerciseDefinition, LoggedSet, WorkoutLog, WorkoutLogEntry};
pub use taxonomy::{
  cardio_weights, category_to_muscle_groups, chart_group_of, ChartGroup, MuscleGroup,
  TaxonomyError,
};
pub use volume::{entry_load, set_load};
