//! Muscle engagement aggregation
//!
//! The core computation: walks workout logs restricted to a date range,
//! resolves each entry to its exercise category, and accumulates set loads
//! per muscle group. Two attribution rules apply:
//! - strength entries credit the full entry load to the primary (first-listed)
//!   muscle group only, avoiding double counting across correlated muscles
//! - cardio entries fan out across multiple groups, each scaled by its
//!   activity weight independently
//!
//! Everything here is pure and synchronous: no caching, no shared state, no
//! suspension points. Recomputing on new data is the caller's concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{resolve_category, CatalogError, OnMissingExercise};
use crate::models::{DateRange, ExerciseDefinition, WorkoutLog, WorkoutLogEntry};
use crate::taxonomy::{cardio_weights, category_to_muscle_groups, MuscleGroup, TaxonomyError};
use crate::volume::entry_load;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngagementError {
  #[error(transparent)]
  Taxonomy(#[from] TaxonomyError),

  #[error(transparent)]
  Catalog(#[from] CatalogError),
}

/// ---------------------------------------------------------------------------
/// Engagement Map
/// ---------------------------------------------------------------------------

/// Per-muscle-group totals. Raw after aggregation (same units as logged
/// volume), intensities in [0, 1] after normalization.
///
/// The key set is always the full `MuscleGroup` enumeration regardless of
/// input, so consumers can index any group without presence checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MuscleEngagementMap {
  totals: BTreeMap<MuscleGroup, f64>,
}

impl MuscleEngagementMap {
  /// A map with every muscle group present at zero.
  pub fn zeroed() -> Self {
    Self {
      totals: MuscleGroup::ALL.iter().map(|m| (*m, 0.0)).collect(),
    }
  }

  pub fn get(&self, muscle: MuscleGroup) -> f64 {
    self.totals.get(&muscle).copied().unwrap_or(0.0)
  }

  pub fn add(&mut self, muscle: MuscleGroup, load: f64) {
    *self.totals.entry(muscle).or_insert(0.0) += load;
  }

  pub fn iter(&self) -> impl Iterator<Item = (MuscleGroup, f64)> + '_ {
    self.totals.iter().map(|(m, v)| (*m, *v))
  }

  /// Largest per-group value in the map.
  pub fn max_value(&self) -> f64 {
    self.totals.values().fold(0.0, |max, v| v.max(max))
  }

  /// Rescale raw totals to [0, 1] intensities for presentation.
  pub fn normalize(&self, mode: NormalizeMode) -> MuscleEngagementMap {
    let divisor = match mode {
      NormalizeMode::Fixed { ceiling } => {
        if !ceiling.is_finite() || ceiling <= 0.0 {
          warn!(ceiling, "non-positive normalization ceiling, returning zero intensities");
          return Self::zeroed();
        }
        ceiling
      }
      NormalizeMode::Relative => {
        let max = self.max_value();
        // An all-zero map normalizes to all zeros; never divide by zero
        if max <= 0.0 {
          return Self::zeroed();
        }
        max
      }
    };

    Self {
      totals: self
        .totals
        .iter()
        .map(|(m, v)| (*m, (v / divisor).clamp(0.0, 1.0)))
        .collect(),
    }
  }

  /// Serialize for the presentation layer.
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

impl Default for MuscleEngagementMap {
  fn default() -> Self {
    Self::zeroed()
  }
}

/// How to rescale raw totals into intensities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NormalizeMode {
  /// `intensity = min(1, raw / ceiling)`. Deterministic across date ranges,
  /// suited to week-over-week comparability.
  Fixed { ceiling: f64 },
  /// `intensity = raw / max(raw)`. One group is always exactly 1.0 unless
  /// every group is zero. Suited to single-session relative emphasis.
  Relative,
}

/// ---------------------------------------------------------------------------
/// Aggregation
/// ---------------------------------------------------------------------------

/// Aggregate raw per-muscle-group load over every log inside `range`.
///
/// Logs dated outside the range are skipped, never an error; empty input
/// yields an all-zero map. Taxonomy gaps always propagate. Missing catalog
/// entries follow `on_missing`.
pub fn aggregate(
  logs: &[WorkoutLog],
  catalog: &[ExerciseDefinition],
  range: &DateRange,
  on_missing: OnMissingExercise,
) -> Result<MuscleEngagementMap, EngagementError> {
  let mut totals = MuscleEngagementMap::zeroed();

  for log in logs.iter().filter(|log| range.contains(log.date)) {
    for entry in &log.entries {
      accumulate_entry(&mut totals, entry, catalog, on_missing)?;
    }
  }

  Ok(totals)
}

/// Add one log entry's load into the running totals. Shared with the
/// chart-group volume series.
pub(crate) fn accumulate_entry(
  totals: &mut MuscleEngagementMap,
  entry: &WorkoutLogEntry,
  catalog: &[ExerciseDefinition],
  on_missing: OnMissingExercise,
) -> Result<(), EngagementError> {
  let category = match resolve_category(entry, catalog) {
    Ok(category) => category,
    Err(err) => {
      return match on_missing {
        OnMissingExercise::Skip => {
          debug!(
            exercise_id = %entry.exercise_id,
            exercise_name = %entry.exercise_name,
            "skipping entry with no catalog match"
          );
          Ok(())
        }
        OnMissingExercise::Abort => Err(err.into()),
      };
    }
  };

  let load = entry_load(&entry.sets);

  if let Some(weights) = cardio_weights(category) {
    // Fan-out: one cardio entry contributes to several groups at once, each
    // weight applied independently against the full entry load
    for (muscle, weight) in weights {
      totals.add(*muscle, load * weight);
    }
  } else {
    // Strength attribution: the entire load goes to the primary group.
    // Secondary groups in the sequence are display-only.
    let muscles = category_to_muscle_groups(category)?;
    totals.add(muscles[0], load);
  }

  Ok(())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
