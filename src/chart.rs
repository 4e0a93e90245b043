//! Coarse chart-group views for pills and progress charts
//!
//! Two lighter read paths next to the quantitative heatmap:
//! - a deduplicated set of engaged chart groups for badge/pill display
//! - per-day chart-group volume totals for the progress line chart

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{resolve_category, OnMissingExercise};
use crate::engagement::{accumulate_entry, EngagementError, MuscleEngagementMap};
use crate::models::{DateRange, ExerciseDefinition, WorkoutLog, WorkoutLogEntry};
use crate::taxonomy::{category_to_muscle_groups, ChartGroup};

/// ---------------------------------------------------------------------------
/// Pill Reduction
/// ---------------------------------------------------------------------------

/// Fold a workout's entries into the set of engaged chart groups.
///
/// Each entry contributes its primary muscle group only, mapped through the
/// chart-group table. Entries with no catalog match are skipped; taxonomy
/// gaps still propagate. Iteration order of the returned set is the
/// `ChartGroup` declaration order; display sorting is the caller's concern.
pub fn reduce_to_chart_groups(
  entries: &[WorkoutLogEntry],
  catalog: &[ExerciseDefinition],
) -> Result<BTreeSet<ChartGroup>, EngagementError> {
  let mut groups = BTreeSet::new();

  for entry in entries {
    let category = match resolve_category(entry, catalog) {
      Ok(category) => category,
      Err(_) => {
        debug!(
          exercise_id = %entry.exercise_id,
          "no catalog match for pill display, skipping entry"
        );
        continue;
      }
    };

    let muscles = category_to_muscle_groups(category)?;
    groups.insert(muscles[0].chart_group());
  }

  Ok(groups)
}

/// ---------------------------------------------------------------------------
/// Daily Volume Series
/// ---------------------------------------------------------------------------

/// One day's chart-group volume totals. Every day present in the series
/// carries all six groups, zero-filled, so chart consumers never see a
/// missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyChartVolume {
  pub date: NaiveDate,
  pub totals: BTreeMap<ChartGroup, f64>,
}

/// Per-day chart-group volume over the logs inside `range`, sorted by date.
///
/// Attribution matches the heatmap engine: primary-only for strength,
/// weighted fan-out for cardio, folded through the chart-group table.
pub fn volume_by_chart_group(
  logs: &[WorkoutLog],
  catalog: &[ExerciseDefinition],
  range: &DateRange,
  on_missing: OnMissingExercise,
) -> Result<Vec<DailyChartVolume>, EngagementError> {
  let mut by_date: BTreeMap<NaiveDate, MuscleEngagementMap> = BTreeMap::new();

  for log in logs.iter().filter(|log| range.contains(log.date)) {
    let day_totals = by_date
      .entry(log.date.date_naive())
      .or_insert_with(MuscleEngagementMap::zeroed);
    for entry in &log.entries {
      accumulate_entry(day_totals, entry, catalog, on_missing)?;
    }
  }

  Ok(
    by_date
      .into_iter()
      .map(|(date, muscles)| DailyChartVolume {
        date,
        totals: fold_to_chart_groups(&muscles),
      })
      .collect(),
  )
}

fn fold_to_chart_groups(muscles: &MuscleEngagementMap) -> BTreeMap<ChartGroup, f64> {
  let mut totals: BTreeMap<ChartGroup, f64> = ChartGroup::ALL.iter().map(|g| (*g, 0.0)).collect();
  for (muscle, load) in muscles.iter() {
    *totals.entry(muscle.chart_group()).or_insert(0.0) += load;
  }
  totals
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
