use serde::{Deserialize, Serialize};

/// A catalog entry describing one known exercise.
///
/// Every `category` value present in a catalog must exist in the taxonomy
/// tables; an unmapped category surfaces as an integrity fault during
/// aggregation, never a silent zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDefinition {
  pub id: String,
  pub name: String,
  pub category: String,
}

impl ExerciseDefinition {
  pub fn new(id: &str, name: &str, category: &str) -> Self {
    Self {
      id: id.to_string(),
      name: name.to_string(),
      category: category.to_string(),
    }
  }
}
