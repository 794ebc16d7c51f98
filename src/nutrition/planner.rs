//! Nutrition and exercise planner
//!
//! Energy expenditure, macro targets and exercise volume from a user profile.
//! Everything here is pure arithmetic. Intermediate values stay as `f64`;
//! only the returned targets are rounded (ties to even).

use crate::models::{
    ActivityLevel, ExercisePlan, Goal, NutritionTargets, Recommendation, Sex, UserProfile,
};
use crate::nutrition::scaling::round_half_even;

/// Calories per gram of protein or carbohydrate
const KCAL_PER_GRAM_PROTEIN_CARB: f64 = 4.0;
/// Calories per gram of fat
const KCAL_PER_GRAM_FAT: f64 = 9.0;
/// Minimum protein while losing weight (grams per kg of body weight)
const MIN_PROTEIN_PER_KG_LOSING: f64 = 1.6;
/// Fiber per 1000 calories (grams)
const FIBER_PER_1000_KCAL: f64 = 14.0;
/// Upper share of calories from sugar
const SUGAR_CALORIE_SHARE: f64 = 0.10;
/// Daily sodium limit (milligrams)
pub const SODIUM_LIMIT_MG: i64 = 2300;
/// MET used for the recommended moderate-intensity cardio
const CARDIO_MET: f64 = 7.0;

/// Basal metabolic rate via the Mifflin-St Jeor equation
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
        // midpoint of the male and female constants
        Sex::Other => base - 78.0,
    }
}

/// Multiplier from BMR to total daily energy expenditure
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Total daily energy expenditure
pub fn compute_tdee(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(level)
}

/// Calorie factor and (protein, fat, carb) calorie shares for a goal
struct MacroSplit {
    calorie_factor: f64,
    protein: f64,
    fat: f64,
    carbs: f64,
}

fn macro_split(goal: Goal) -> MacroSplit {
    match goal {
        Goal::Lose => MacroSplit {
            calorie_factor: 0.8,
            protein: 0.35,
            fat: 0.25,
            carbs: 0.4,
        },
        Goal::Gain => MacroSplit {
            calorie_factor: 1.15,
            protein: 0.3,
            fat: 0.25,
            carbs: 0.45,
        },
        Goal::Maintain => MacroSplit {
            calorie_factor: 1.0,
            protein: 0.25,
            fat: 0.25,
            carbs: 0.5,
        },
    }
}

/// Daily calorie and nutrient targets for a goal
///
/// When losing weight, protein is raised to at least 1.6 g per kg. The raise
/// is not balanced against calories or the other macros.
pub fn compute_targets(tdee: f64, goal: Goal, weight_kg: f64) -> NutritionTargets {
    let split = macro_split(goal);
    let calories = tdee * split.calorie_factor;

    let mut protein = calories * split.protein / KCAL_PER_GRAM_PROTEIN_CARB;
    let carbs = calories * split.carbs / KCAL_PER_GRAM_PROTEIN_CARB;
    let fat = calories * split.fat / KCAL_PER_GRAM_FAT;

    let protein_floor = weight_kg * MIN_PROTEIN_PER_KG_LOSING;
    if goal == Goal::Lose && protein < protein_floor {
        protein = protein_floor;
    }

    let fiber = calories / 1000.0 * FIBER_PER_1000_KCAL;
    let sugar = calories * SUGAR_CALORIE_SHARE / KCAL_PER_GRAM_PROTEIN_CARB;

    NutritionTargets {
        calories: round_half_even(calories),
        protein: round_half_even(protein),
        carbs: round_half_even(carbs),
        fat: round_half_even(fat),
        fiber: round_half_even(fiber),
        sugar: round_half_even(sugar),
        sodium: SODIUM_LIMIT_MG,
    }
}

/// Weekly cardio minutes before goal adjustment
fn base_weekly_minutes(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 150.0,
        ActivityLevel::Light => 180.0,
        ActivityLevel::Moderate => 210.0,
        ActivityLevel::Active => 240.0,
        ActivityLevel::VeryActive => 300.0,
    }
}

/// Cardio volume, strength days and expected burn
pub fn compute_exercise_recommendation(
    weight_kg: f64,
    goal: Goal,
    level: ActivityLevel,
) -> ExercisePlan {
    let base_minutes = base_weekly_minutes(level);
    let (cardio_minutes, strength_days) = match goal {
        Goal::Lose => (base_minutes * 1.2, 2),
        Goal::Gain => (base_minutes * 0.8, 4),
        Goal::Maintain => (base_minutes, 3),
    };

    // kcal/min = 0.0175 * MET * kg
    let calories_per_minute = 0.0175 * CARDIO_MET * weight_kg;
    let weekly_calories = cardio_minutes * calories_per_minute;

    ExercisePlan {
        weekly_cardio_minutes: round_half_even(cardio_minutes),
        weekly_strength_days: strength_days,
        daily_cardio_minutes: round_half_even(cardio_minutes / 7.0),
        weekly_calories_burned: round_half_even(weekly_calories),
        daily_calories_burned: round_half_even(weekly_calories / 7.0),
    }
}

/// Full recommendation for a profile
pub fn get_full_recommendation(profile: &UserProfile) -> Recommendation {
    let bmr = compute_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );
    let tdee = compute_tdee(bmr, profile.activity_level);
    let targets = compute_targets(tdee, profile.goal, profile.weight_kg);
    let plan =
        compute_exercise_recommendation(profile.weight_kg, profile.goal, profile.activity_level);

    tracing::debug!(
        bmr,
        tdee,
        goal = profile.goal.as_str(),
        "Computed recommendation"
    );

    Recommendation::new(round_half_even(bmr), round_half_even(tdee), targets, plan)
}
