//! Exercise catalog resolution
//!
//! Maps a logged exercise reference back to its catalog definition. Matching
//! is by id first, then by exact name: names are stored canonically at
//! creation time, so the name match is case-sensitive.

use serde::{Deserialize, Serialize};

use crate::models::{ExerciseDefinition, WorkoutLogEntry};

/// What to do when a log entry references an exercise absent from the
/// catalog. The engine never hard-codes this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnMissingExercise {
  /// Drop the entry from aggregation and continue.
  Skip,
  /// Stop and surface the fault with the offending entry identified.
  Abort,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
  #[error("Exercise not found in catalog: id '{exercise_id}', name '{exercise_name}'")]
  ExerciseNotFound {
    exercise_id: String,
    exercise_name: String,
  },
}

/// Resolve a log entry to its exercise category.
pub fn resolve_category<'a>(
  entry: &WorkoutLogEntry,
  catalog: &'a [ExerciseDefinition],
) -> Result<&'a str, CatalogError> {
  let matched = catalog
    .iter()
    .find(|def| def.id == entry.exercise_id)
    .or_else(|| catalog.iter().find(|def| def.name == entry.exercise_name));

  match matched {
    Some(def) => Ok(&def.category),
    None => Err(CatalogError::ExerciseNotFound {
      exercise_id: entry.exercise_id.clone(),
      exercise_name: entry.exercise_name.clone(),
    }),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{mock_catalog, mock_entry};

  #[test]
  fn test_resolves_by_id_first() {
    let catalog = mock_catalog();
    // Name deliberately wrong: id match must win
    let entry = mock_entry("1", "Not The Real Name", vec![]);

    assert_eq!(resolve_category(&entry, &catalog).unwrap(), "Chest");
  }

  #[test]
  fn test_falls_back_to_exact_name_match() {
    let catalog = mock_catalog();
    let entry = mock_entry("missing-id", "Goblet Squat", vec![]);

    assert_eq!(resolve_category(&entry, &catalog).unwrap(), "Legs");
  }

  #[test]
  fn test_name_match_is_case_sensitive() {
    let catalog = mock_catalog();
    let entry = mock_entry("missing-id", "goblet squat", vec![]);

    assert!(resolve_category(&entry, &catalog).is_err());
  }

  #[test]
  fn test_missing_exercise_identifies_entry() {
    let catalog = mock_catalog();
    let entry = mock_entry("ghost", "Phantom Press", vec![]);

    let err = resolve_category(&entry, &catalog).unwrap_err();
    assert_eq!(
      err,
      CatalogError::ExerciseNotFound {
        exercise_id: "ghost".to_string(),
        exercise_name: "Phantom Press".to_string(),
      }
    );
  }
}
