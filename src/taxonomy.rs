//! Static taxonomy tables for muscle engagement
//!
//! Three read-only mappings drive the whole engine:
//! - exercise category -> ordered muscle group sequence (first = primary)
//! - muscle group -> coarse chart group for pill/badge display
//! - cardio activity -> per-muscle intensity weights
//!
//! All three are plain data. Extending the domain (a new exercise category,
//! a new cardio activity) means adding a table entry, not a code path.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Muscle Groups
/// ---------------------------------------------------------------------------

/// Fine-grained anatomical region used for load attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
  Chest,
  Lats,
  Traps,
  BackLower,
  ShouldersFront,
  ShouldersBack,
  Quads,
  Glutes,
  Hamstrings,
  Calves,
  Biceps,
  Triceps,
  Abs,
}

impl MuscleGroup {
  /// Every defined muscle group, in display order. The engagement map is
  /// keyed off this list so its key set never varies with input.
  pub const ALL: [MuscleGroup; 13] = [
    MuscleGroup::Chest,
    MuscleGroup::Lats,
    MuscleGroup::Traps,
    MuscleGroup::BackLower,
    MuscleGroup::ShouldersFront,
    MuscleGroup::ShouldersBack,
    MuscleGroup::Quads,
    MuscleGroup::Glutes,
    MuscleGroup::Hamstrings,
    MuscleGroup::Calves,
    MuscleGroup::Biceps,
    MuscleGroup::Triceps,
    MuscleGroup::Abs,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      MuscleGroup::Chest => "chest",
      MuscleGroup::Lats => "lats",
      MuscleGroup::Traps => "traps",
      MuscleGroup::BackLower => "back_lower",
      MuscleGroup::ShouldersFront => "shoulders_front",
      MuscleGroup::ShouldersBack => "shoulders_back",
      MuscleGroup::Quads => "quads",
      MuscleGroup::Glutes => "glutes",
      MuscleGroup::Hamstrings => "hamstrings",
      MuscleGroup::Calves => "calves",
      MuscleGroup::Biceps => "biceps",
      MuscleGroup::Triceps => "triceps",
      MuscleGroup::Abs => "abs",
    }
  }

  /// The coarse display group this muscle folds into. Total by construction:
  /// adding a variant without extending this match is a compile error.
  pub fn chart_group(&self) -> ChartGroup {
    match self {
      MuscleGroup::Chest => ChartGroup::Chest,
      MuscleGroup::Lats | MuscleGroup::Traps | MuscleGroup::BackLower => ChartGroup::Back,
      MuscleGroup::ShouldersFront | MuscleGroup::ShouldersBack => ChartGroup::Shoulders,
      MuscleGroup::Quads | MuscleGroup::Glutes | MuscleGroup::Hamstrings | MuscleGroup::Calves => {
        ChartGroup::Legs
      }
      MuscleGroup::Biceps | MuscleGroup::Triceps => ChartGroup::Arms,
      MuscleGroup::Abs => ChartGroup::Core,
    }
  }
}

impl std::fmt::Display for MuscleGroup {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for MuscleGroup {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .find(|m| m.as_str() == s)
      .copied()
      .ok_or_else(|| format!("Unknown muscle group: {}", s))
  }
}

/// ---------------------------------------------------------------------------
/// Chart Groups
/// ---------------------------------------------------------------------------

/// Coarse display category folding several muscle groups together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChartGroup {
  Chest,
  Back,
  Shoulders,
  Legs,
  Arms,
  Core,
}

impl ChartGroup {
  pub const ALL: [ChartGroup; 6] = [
    ChartGroup::Chest,
    ChartGroup::Back,
    ChartGroup::Shoulders,
    ChartGroup::Legs,
    ChartGroup::Arms,
    ChartGroup::Core,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      ChartGroup::Chest => "Chest",
      ChartGroup::Back => "Back",
      ChartGroup::Shoulders => "Shoulders",
      ChartGroup::Legs => "Legs",
      ChartGroup::Arms => "Arms",
      ChartGroup::Core => "Core",
    }
  }
}

impl std::fmt::Display for ChartGroup {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// The total, surjective mapping from muscle group to chart group.
pub fn chart_group_of(muscle: MuscleGroup) -> ChartGroup {
  muscle.chart_group()
}

/// ---------------------------------------------------------------------------
/// Category -> Muscle Group Sequences
/// ---------------------------------------------------------------------------

use MuscleGroup::*;

/// Ordered muscle sequences per exercise category. The first entry is the
/// primary muscle group: it is the sole recipient of strength-training load
/// in the aggregator, and the one the pill reducer keys off. Secondary
/// entries exist for informational display only.
///
/// Cardio activities appear here too (so the pill path is total over every
/// known category); their quantitative attribution goes through the weight
/// table below instead.
static CATEGORY_MUSCLES: &[(&str, &[MuscleGroup])] = &[
  ("Chest", &[Chest, ShouldersFront, Triceps]),
  ("Back", &[Lats, Traps, Biceps, BackLower]),
  ("Lats", &[Lats]),
  ("Lower Back", &[BackLower]),
  ("Shoulders", &[ShouldersFront, ShouldersBack, Triceps]),
  ("Legs", &[Quads, Glutes, Hamstrings, Calves]),
  ("Arms", &[Biceps, Triceps]),
  ("Biceps", &[Biceps]),
  ("Triceps", &[Triceps]),
  ("Core", &[Abs]),
  (
    "Full Body",
    &[Chest, Lats, Traps, ShouldersFront, ShouldersBack, Quads, Glutes, Hamstrings, Biceps, Triceps, Abs],
  ),
  (
    "Upper Body",
    &[Chest, Lats, Traps, ShouldersFront, ShouldersBack, Biceps, Triceps],
  ),
  ("Lower Body", &[Quads, Glutes, Hamstrings, Calves, Abs]),
  ("Run", &[Quads, Hamstrings, Glutes, Calves, Abs]),
  ("Walk", &[Quads, Glutes, Calves, Hamstrings, Abs]),
  ("Cycle", &[Quads, Glutes, Hamstrings, Calves]),
  ("HIIT", &[Quads, Glutes, Abs, Hamstrings, Calves, Chest, ShouldersFront]),
];

/// ---------------------------------------------------------------------------
/// Cardio Intensity Weights
/// ---------------------------------------------------------------------------

/// Relative engagement weights per cardio activity. Weights are independent
/// multipliers in [0, 1] and are NOT required to sum to 1 across an activity;
/// the aggregator applies each one against the full entry load.
static CARDIO_WEIGHTS: &[(&str, &[(MuscleGroup, f64)])] = &[
  (
    "Run",
    &[(Quads, 0.30), (Hamstrings, 0.25), (Glutes, 0.25), (Calves, 0.15), (Abs, 0.05)],
  ),
  (
    "Walk",
    &[(Quads, 0.25), (Glutes, 0.25), (Calves, 0.25), (Hamstrings, 0.20), (Abs, 0.05)],
  ),
  (
    "Cycle",
    &[(Quads, 0.40), (Glutes, 0.25), (Hamstrings, 0.20), (Calves, 0.15)],
  ),
  (
    "HIIT",
    &[
      (Quads, 0.25),
      (Glutes, 0.20),
      (Abs, 0.15),
      (Hamstrings, 0.15),
      (Calves, 0.10),
      (Chest, 0.10),
      (ShouldersFront, 0.10),
    ],
  ),
];

/// ---------------------------------------------------------------------------
/// Lookup Functions
/// ---------------------------------------------------------------------------

/// Errors raised when the taxonomy tables are out of sync with the catalog.
/// These are data-integrity faults and always propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
  #[error("Category '{0}' has no muscle group mapping")]
  UnknownCategory(String),

  #[error("Category '{0}' maps to an empty muscle group sequence")]
  EmptyMuscleGroupMapping(String),
}

/// Resolve a category to its ordered, non-empty muscle group sequence.
pub fn category_to_muscle_groups(category: &str) -> Result<&'static [MuscleGroup], TaxonomyError> {
  let muscles = CATEGORY_MUSCLES
    .iter()
    .find(|(name, _)| *name == category)
    .map(|(_, muscles)| *muscles)
    .ok_or_else(|| TaxonomyError::UnknownCategory(category.to_string()))?;

  if muscles.is_empty() {
    return Err(TaxonomyError::EmptyMuscleGroupMapping(category.to_string()));
  }
  Ok(muscles)
}

/// Intensity weights for a cardio/conditioning category. `None` means the
/// category is a strength category and gets primary-only attribution.
pub fn cardio_weights(category: &str) -> Option<&'static [(MuscleGroup, f64)]> {
  CARDIO_WEIGHTS
    .iter()
    .find(|(name, _)| *name == category)
    .map(|(_, weights)| *weights)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
