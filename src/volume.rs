//! Volume calculation for individual logged sets
//!
//! Turns one recorded set into a scalar load value. The three recording
//! styles reduce to:
//! - weighted set: weight * reps
//! - timed hold (planks, wall-sits): duration in seconds
//! - bodyweight reps (push-ups): rep count as a volume proxy
//!
//! This function never errors. Logs are historical data that must always be
//! displayable, so a set with no usable field degrades to zero load.

use tracing::debug;

use crate::models::LoggedSet;

/// Compute the scalar load of one logged set.
///
/// Always finite and non-negative. A bodyweight set logged with an explicit
/// weight of 0 yields 0 here (reps-only sets without a weight field take the
/// rep-count fallback instead).
pub fn set_load(set: &LoggedSet) -> f64 {
  let load = match (set.weight, set.reps, set.duration_seconds) {
    (Some(weight), Some(reps), _) => weight * reps as f64,
    (_, _, Some(duration)) => duration as f64,
    (None, Some(reps), None) => reps as f64,
    _ => {
      debug!("logged set has no usable volume field, counting as zero load");
      0.0
    }
  };

  if !load.is_finite() || load < 0.0 {
    debug!(load, "discarding malformed set load");
    return 0.0;
  }
  load
}

/// Sum of set loads for one log entry.
pub fn entry_load(sets: &[LoggedSet]) -> f64 {
  sets.iter().map(set_load).sum()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;

  #[test]
  fn test_weighted_set() {
    let set = LoggedSet::weighted(135.0, 8);
    assert_approx_eq!(set_load(&set), 1080.0, 1e-9);
  }

  #[test]
  fn test_explicit_zero_weight_yields_zero() {
    // Bodyweight estimate of 0 is intentional, not a fallback trigger
    let set = LoggedSet::weighted(0.0, 12);
    assert_eq!(set_load(&set), 0.0);
  }

  #[test]
  fn test_timed_set_uses_duration() {
    let set = LoggedSet::timed(90);
    assert_approx_eq!(set_load(&set), 90.0, 1e-9);
  }

  #[test]
  fn test_reps_only_fallback() {
    // Push-ups with no weight field contribute their rep count, not zero
    let set = LoggedSet::reps_only(10);
    assert_approx_eq!(set_load(&set), 10.0, 1e-9);
  }

  #[test]
  fn test_empty_set_degrades_to_zero() {
    let set = LoggedSet::default();
    assert_eq!(set_load(&set), 0.0);
  }

  #[test]
  fn test_weight_without_reps_degrades_to_zero() {
    let set = LoggedSet {
      weight: Some(185.0),
      reps: None,
      duration_seconds: None,
    };
    assert_eq!(set_load(&set), 0.0);
  }

  #[test]
  fn test_weighted_timed_set_prefers_weight_times_reps() {
    let set = LoggedSet {
      weight: Some(25.0),
      reps: Some(3),
      duration_seconds: Some(60),
    };
    assert_approx_eq!(set_load(&set), 75.0, 1e-9);
  }

  #[test]
  fn test_negative_values_clamp_to_zero() {
    let set = LoggedSet::weighted(-50.0, 10);
    assert_eq!(set_load(&set), 0.0);

    let set = LoggedSet::timed(-30);
    assert_eq!(set_load(&set), 0.0);
  }

  #[test]
  fn test_nonfinite_weight_clamps_to_zero() {
    let set = LoggedSet::weighted(f64::NAN, 5);
    assert_eq!(set_load(&set), 0.0);

    let set = LoggedSet::weighted(f64::INFINITY, 5);
    assert_eq!(set_load(&set), 0.0);
  }

  #[test]
  fn test_entry_load_sums_sets() {
    let sets = vec![
      LoggedSet::weighted(100.0, 5),
      LoggedSet::weighted(100.0, 5),
      LoggedSet::reps_only(10),
    ];
    assert_approx_eq!(entry_load(&sets), 1010.0, 1e-9);
  }
}
