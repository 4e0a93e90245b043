use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded set within a logged exercise.
///
/// All fields are optional because workout logs are historical data recorded
/// by hand: a weighted set carries `weight` + `reps`, a timed hold carries
/// `duration_seconds`, a bodyweight set often carries `reps` alone.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LoggedSet {
  pub weight: Option<f64>,
  pub reps: Option<i64>,
  pub duration_seconds: Option<i64>,
}

impl LoggedSet {
  pub fn weighted(weight: f64, reps: i64) -> Self {
    Self {
      weight: Some(weight),
      reps: Some(reps),
      duration_seconds: None,
    }
  }

  pub fn reps_only(reps: i64) -> Self {
    Self {
      weight: None,
      reps: Some(reps),
      duration_seconds: None,
    }
  }

  pub fn timed(duration_seconds: i64) -> Self {
    Self {
      weight: None,
      reps: None,
      duration_seconds: Some(duration_seconds),
    }
  }
}

/// One exercise within a workout log: a catalog reference plus its sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLogEntry {
  pub exercise_id: String,
  pub exercise_name: String,
  pub sets: Vec<LoggedSet>,
}

/// A completed workout. Immutable once created; the engine only reads these.
///
/// `date` is a canonical UTC instant, normalized at the system boundary -
/// the engine never branches on date representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
  pub id: String,
  pub workout_name: String,
  pub date: DateTime<Utc>,
  pub entries: Vec<WorkoutLogEntry>,
}

/// An inclusive date window for aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRange {
  pub start: DateTime<Utc>,
  pub end: DateTime<Utc>,
}

impl DateRange {
  pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
    Self { start, end }
  }

  /// Both bounds are inclusive.
  pub fn contains(&self, instant: DateTime<Utc>) -> bool {
    instant >= self.start && instant <= self.end
  }
}
