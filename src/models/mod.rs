pub mod exercise;
pub mod workout;

pub use exercise::ExerciseDefinition;
pub use workout::{DateRange, LoggedSet, WorkoutLog, WorkoutLogEntry};
