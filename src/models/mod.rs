//! Data models
//!
//! Plain value types shared by the interpreter, the planner and the MCP tools.

mod activity;
mod extraction;
mod food_profile;
mod nutrition;
mod profile;
mod recommendation;

pub use activity::ActivityProfile;
pub use extraction::{
    ExerciseMatch, ExtractionResult, FoodMatch, EXERCISE_NOT_RECOGNIZED, FOOD_NOT_RECOGNIZED,
    QUERY_NOT_UNDERSTOOD,
};
pub use food_profile::FoodProfile;
pub use nutrition::Nutrition;
pub use profile::{ActivityLevel, Goal, Sex, UserProfile};
pub use recommendation::{ExercisePlan, NutritionTargets, Recommendation};
