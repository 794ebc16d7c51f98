//! Nutrition calculation module
//!
//! Scaling arithmetic, unit types, the recommendation planner and progress
//! comparison.

pub mod planner;
pub mod progress;
pub mod scaling;
pub mod units;

pub use planner::{
    activity_multiplier, compute_bmr, compute_exercise_recommendation, compute_targets,
    compute_tdee, get_full_recommendation,
};
pub use progress::{compare, DailyIntake, ExerciseTotals, LoggedExercise, ProgressReport};
pub use scaling::{round_half_even, scale_ratio, truncate};
pub use units::{DurationUnit, QuantityUnit};
