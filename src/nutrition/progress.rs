//! Progress against recommendations
//!
//! Compares logged food and exercise with a [`Recommendation`]. The caller
//! supplies the logs (earlier extraction results); nothing is stored here.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{ExerciseMatch, FoodMatch, Recommendation};

/// Sessions shorter than this with a small burn count as strength work
const STRENGTH_MAX_MINUTES: f64 = 20.0;
const STRENGTH_MAX_CALORIES: i64 = 100;

/// Summed nutrition from food matches
///
/// Sums saturate at the `i64` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyIntake {
    pub calories: i64,
    pub protein: i64,
    pub carbohydrates: i64,
    pub fiber: i64,
    pub sugar: i64,
    pub sodium: i64,
}

impl DailyIntake {
    pub fn from_matches<'a>(foods: impl IntoIterator<Item = &'a FoodMatch>) -> Self {
        foods.into_iter().fold(Self::default(), |acc, f| Self {
            calories: acc.calories.saturating_add(f.calories),
            protein: acc.protein.saturating_add(f.protein),
            carbohydrates: acc.carbohydrates.saturating_add(f.carbohydrates),
            fiber: acc.fiber.saturating_add(f.fiber),
            sugar: acc.sugar.saturating_add(f.sugar),
            sodium: acc.sodium.saturating_add(f.sodium),
        })
    }
}

/// Summed duration and burn from exercise matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseTotals {
    pub minutes: f64,
    pub calories_burned: i64,
}

impl ExerciseTotals {
    pub fn from_matches<'a>(sessions: impl IntoIterator<Item = &'a ExerciseMatch>) -> Self {
        sessions
            .into_iter()
            .fold(Self::default(), |acc, s| Self {
                minutes: acc.minutes + s.duration_minutes,
                calories_burned: acc.calories_burned.saturating_add(s.calories_burned),
            })
    }
}

/// An exercise match tagged with the day it was logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedExercise {
    /// Caller-chosen day label, e.g. "2024-05-01"
    pub day: String,
    #[serde(flatten)]
    pub exercise: ExerciseMatch,
}

/// Whether a logged session looks like strength training
pub fn is_strength_session(name: &str, duration_minutes: f64, calories_burned: i64) -> bool {
    let name = name.to_lowercase();
    (duration_minutes < STRENGTH_MAX_MINUTES && calories_burned < STRENGTH_MAX_CALORIES)
        || name.contains("strength")
        || name.contains("weight")
}

/// Number of distinct days with at least one strength session
pub fn count_strength_days(week: &[LoggedExercise]) -> usize {
    week.iter()
        .filter(|log| {
            is_strength_session(
                &log.exercise.name,
                log.exercise.duration_minutes,
                log.exercise.calories_burned,
            )
        })
        .map(|log| log.day.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// One metric measured against its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricProgress {
    pub actual: f64,
    pub target: f64,
    /// Target minus actual; negative once the target is exceeded
    pub remaining: f64,
    /// Actual as a percentage of target, absent for a zero target
    pub percent: Option<f64>,
}

impl MetricProgress {
    pub fn new(actual: f64, target: f64) -> Self {
        let percent = (target != 0.0).then(|| actual / target * 100.0);
        Self {
            actual,
            target,
            remaining: target - actual,
            percent,
        }
    }
}

/// Today's and this week's logs against a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub calories: MetricProgress,
    pub protein: MetricProgress,
    pub carbohydrates: MetricProgress,
    pub fiber: MetricProgress,
    pub sugar: MetricProgress,
    pub sodium: MetricProgress,
    pub daily_cardio_minutes: MetricProgress,
    pub daily_calories_burned: MetricProgress,
    pub weekly_cardio_minutes: MetricProgress,
    pub weekly_calories_burned: MetricProgress,
    pub weekly_strength_days: MetricProgress,
    /// Calories eaten minus calories burned today
    pub net_calories: i64,
}

/// Compare today's food and exercise plus the past week's exercise
pub fn compare(
    recommendation: &Recommendation,
    today_food: &[FoodMatch],
    today_exercise: &[ExerciseMatch],
    week_exercise: &[LoggedExercise],
) -> ProgressReport {
    let intake = DailyIntake::from_matches(today_food);
    let today = ExerciseTotals::from_matches(today_exercise);
    let week = ExerciseTotals::from_matches(week_exercise.iter().map(|log| &log.exercise));
    let strength_days = count_strength_days(week_exercise);

    let metric = |actual: i64, target: i64| MetricProgress::new(actual as f64, target as f64);

    ProgressReport {
        calories: metric(intake.calories, recommendation.target_calories),
        protein: metric(intake.protein, recommendation.target_protein),
        carbohydrates: metric(intake.carbohydrates, recommendation.target_carbs),
        fiber: metric(intake.fiber, recommendation.target_fiber),
        sugar: metric(intake.sugar, recommendation.target_sugar),
        sodium: metric(intake.sodium, recommendation.target_sodium),
        daily_cardio_minutes: MetricProgress::new(
            today.minutes,
            recommendation.daily_cardio_minutes as f64,
        ),
        daily_calories_burned: metric(
            today.calories_burned,
            recommendation.daily_calories_burned,
        ),
        weekly_cardio_minutes: MetricProgress::new(
            week.minutes,
            recommendation.weekly_cardio_minutes as f64,
        ),
        weekly_calories_burned: metric(
            week.calories_burned,
            recommendation.weekly_calories_burned,
        ),
        weekly_strength_days: metric(
            strength_days as i64,
            recommendation.weekly_strength_days,
        ),
        net_calories: intake.calories.saturating_sub(today.calories_burned),
    }
}
