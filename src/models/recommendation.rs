//! Planner outputs

use serde::{Deserialize, Serialize};

/// Daily calorie and nutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub fiber: i64,
    pub sugar: i64,
    pub sodium: i64, // milligrams
}

/// Weekly and daily exercise targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePlan {
    pub weekly_cardio_minutes: i64,
    pub weekly_strength_days: i64,
    pub daily_cardio_minutes: i64,
    pub weekly_calories_burned: i64,
    pub daily_calories_burned: i64,
}

/// Combined energy, nutrition and exercise recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub target_protein: i64,
    pub target_carbs: i64,
    pub target_fat: i64,
    pub target_fiber: i64,
    pub target_sugar: i64,
    pub target_sodium: i64,
    pub weekly_cardio_minutes: i64,
    pub weekly_strength_days: i64,
    pub daily_cardio_minutes: i64,
    pub weekly_calories_burned: i64,
    pub daily_calories_burned: i64,
}

impl Recommendation {
    pub fn new(bmr: i64, tdee: i64, targets: NutritionTargets, plan: ExercisePlan) -> Self {
        Self {
            bmr,
            tdee,
            target_calories: targets.calories,
            target_protein: targets.protein,
            target_carbs: targets.carbs,
            target_fat: targets.fat,
            target_fiber: targets.fiber,
            target_sugar: targets.sugar,
            target_sodium: targets.sodium,
            weekly_cardio_minutes: plan.weekly_cardio_minutes,
            weekly_strength_days: plan.weekly_strength_days,
            daily_cardio_minutes: plan.daily_cardio_minutes,
            weekly_calories_burned: plan.weekly_calories_burned,
            daily_calories_burned: plan.daily_calories_burned,
        }
    }
}
