//! Extraction results
//!
//! Structured facts produced by the query interpreter for one utterance.

use serde::{Deserialize, Serialize};

use super::Nutrition;
use crate::nutrition::scaling::truncate;
use crate::nutrition::units::QuantityUnit;

pub const FOOD_NOT_RECOGNIZED: &str = "food item not recognized";
pub const EXERCISE_NOT_RECOGNIZED: &str = "exercise not recognized or duration not specified";
pub const QUERY_NOT_UNDERSTOOD: &str = "query not understood";

/// A recognised food with nutrition scaled to the requested quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodMatch {
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: QuantityUnit,
    pub calories: i64,
    pub protein: i64,
    pub carbohydrates: i64,
    pub fiber: i64,
    pub sugar: i64,
    pub sodium: i64,
}

impl FoodMatch {
    /// Build from already-scaled nutrition, truncating each value
    pub fn from_scaled(
        name: impl Into<String>,
        quantity: f64,
        unit: QuantityUnit,
        scaled: &Nutrition,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
            calories: truncate(scaled.calories),
            protein: truncate(scaled.protein),
            carbohydrates: truncate(scaled.carbohydrates),
            fiber: truncate(scaled.fiber),
            sugar: truncate(scaled.sugar),
            sodium: truncate(scaled.sodium),
        }
    }
}

/// A recognised activity with its duration and energy cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseMatch {
    pub name: String,
    pub duration_minutes: f64,
    pub calories_burned: i64,
}

/// Outcome of interpreting an utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionResult {
    FoodMatch(FoodMatch),
    ExerciseMatch(ExerciseMatch),
    NoMatch { reason: String },
}

impl ExtractionResult {
    pub fn no_match(reason: impl Into<String>) -> Self {
        ExtractionResult::NoMatch {
            reason: reason.into(),
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, ExtractionResult::NoMatch { .. })
    }

    pub fn as_food(&self) -> Option<&FoodMatch> {
        match self {
            ExtractionResult::FoodMatch(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_exercise(&self) -> Option<&ExerciseMatch> {
        match self {
            ExtractionResult::ExerciseMatch(m) => Some(m),
            _ => None,
        }
    }

    /// One-line confirmation suitable for showing to the user
    pub fn summary(&self) -> String {
        match self {
            ExtractionResult::FoodMatch(m) => {
                format!("Added {} with {} calories", m.name, m.calories)
            }
            ExtractionResult::ExerciseMatch(m) => format!(
                "Burned approximately {} calories from {} minutes of {}",
                m.calories_burned, m.duration_minutes, m.name
            ),
            ExtractionResult::NoMatch { reason } => reason.clone(),
        }
    }
}
