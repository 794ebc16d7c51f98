//! Recommendation MCP Tools
//!
//! Nutrition and exercise targets, and progress against them.

use serde::Serialize;

use crate::models::{ExerciseMatch, FoodMatch, Recommendation, UserProfile};
use crate::nutrition::{self, LoggedExercise, ProgressReport};

/// Response for get_recommendation
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub profile: UserProfile,
    pub recommendation: Recommendation,
}

/// Response for compare_progress
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub recommendation: Recommendation,
    pub progress: ProgressReport,
}

/// Reject profiles the formulas cannot produce meaningful numbers for
fn check_profile(profile: &UserProfile) -> Result<(), String> {
    let positive = |value: f64, field: &str| {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(format!("{} must be a positive number, got {}", field, value))
        }
    };
    positive(profile.weight_kg, "weight_kg")?;
    positive(profile.height_cm, "height_cm")?;
    if !profile.age_years.is_finite() || profile.age_years < 0.0 {
        return Err(format!(
            "age_years must be zero or more, got {}",
            profile.age_years
        ));
    }
    Ok(())
}

/// Compute the full recommendation for a profile
pub fn get_recommendation(profile: UserProfile) -> Result<RecommendationResponse, String> {
    check_profile(&profile)?;
    let recommendation = nutrition::get_full_recommendation(&profile);
    Ok(RecommendationResponse {
        profile,
        recommendation,
    })
}

/// Compare logged food and exercise against the profile's recommendation
pub fn compare_progress(
    profile: &UserProfile,
    today_food: &[FoodMatch],
    today_exercise: &[ExerciseMatch],
    week_exercise: &[LoggedExercise],
) -> Result<ProgressResponse, String> {
    check_profile(profile)?;
    let recommendation = nutrition::get_full_recommendation(profile);
    let progress = nutrition::compare(&recommendation, today_food, today_exercise, week_exercise);
    Ok(ProgressResponse {
        recommendation,
        progress,
    })
}
