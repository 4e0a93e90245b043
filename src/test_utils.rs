//! Test utilities and helpers
//!
//! Shared infrastructure for the module test suites:
//! - mock data factories (catalog, log entries, workout logs)
//! - a deterministic anchor date so range-boundary tests are exact
//! - float comparison assertions

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::models::{DateRange, ExerciseDefinition, LoggedSet, WorkoutLog, WorkoutLogEntry};

/// ---------------------------------------------------------------------------
/// Time Helpers
/// ---------------------------------------------------------------------------

/// Fixed reference instant. All mock logs hang off this so date-range tests
/// never race a midnight boundary.
pub fn anchor() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// The seven days up to and including the anchor.
pub fn week_range() -> DateRange {
  DateRange::new(anchor() - Duration::days(7), anchor())
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// A small master catalog mirroring the seeded exercise list, plus the
/// cardio pseudo-exercises.
pub fn mock_catalog() -> Vec<ExerciseDefinition> {
  vec![
    ExerciseDefinition::new("1", "Barbell Bench Press", "Chest"),
    ExerciseDefinition::new("2", "Seated Lat Pulldown", "Back"),
    ExerciseDefinition::new("3", "Goblet Squat", "Legs"),
    ExerciseDefinition::new("4", "Overhead Press", "Shoulders"),
    ExerciseDefinition::new("5", "Bicep Curl", "Arms"),
    ExerciseDefinition::new("6", "Tricep Extension", "Arms"),
    ExerciseDefinition::new("7", "Deadlift", "Back"),
    ExerciseDefinition::new("8", "Plank", "Core"),
    ExerciseDefinition::new("10", "Chest Fly", "Chest"),
    ExerciseDefinition::new("pushup", "Push-up", "Chest"),
    ExerciseDefinition::new("run", "Run", "Run"),
    ExerciseDefinition::new("walk", "Walk", "Walk"),
    ExerciseDefinition::new("cycle", "Cycle", "Cycle"),
    ExerciseDefinition::new("hiit", "HIIT", "HIIT"),
  ]
}

/// One log entry referencing a catalog exercise.
pub fn mock_entry(exercise_id: &str, exercise_name: &str, sets: Vec<LoggedSet>) -> WorkoutLogEntry {
  WorkoutLogEntry {
    exercise_id: exercise_id.to_string(),
    exercise_name: exercise_name.to_string(),
    sets,
  }
}

/// A workout log dated `days_ago` before the anchor.
pub fn mock_log(days_ago: i64, entries: Vec<WorkoutLogEntry>) -> WorkoutLog {
  WorkoutLog {
    id: format!("log_{}", days_ago),
    workout_name: "Test Workout".to_string(),
    date: anchor() - Duration::days(days_ago),
    entries,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let catalog = mock_catalog();
    assert!(catalog.iter().any(|e| e.name == "Barbell Bench Press"));
    assert!(catalog.iter().all(|e| !e.category.is_empty()));

    let log = mock_log(3, vec![mock_entry("1", "Barbell Bench Press", vec![])]);
    assert_eq!(log.entries.len(), 1);
    assert_eq!(log.date, anchor() - Duration::days(3));
  }

  #[test]
  fn test_week_range_spans_anchor() {
    let range = week_range();
    assert!(range.contains(anchor()));
    assert!(range.contains(anchor() - Duration::days(7)));
    assert!(!range.contains(anchor() - Duration::days(8)));
  }
}
