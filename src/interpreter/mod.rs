//! Query interpreter
//!
//! Turns short free-text utterances ("2 cups rice", "ran 45 minutes") into
//! structured food or exercise facts using fixed pattern tables and lexicons.
//! There is no grammar and no learned model: a word is either in a table or
//! it is not.

mod error;
mod exercise;
mod food;
pub mod lexicon;
pub mod patterns;
pub mod tokenizer;

pub use error::{InterpretError, InterpretResult};

use crate::models::{ActivityProfile, ExtractionResult, FoodProfile, QUERY_NOT_UNDERSTOOD};
use lexicon::{ACTIVITY_LEXICON, FOOD_LEXICON};

/// Interpreter over a pair of read-only lexicons
///
/// Holds no mutable state; a single instance can be shared freely across
/// threads and every call is independent.
#[derive(Debug, Clone, Copy)]
pub struct QueryInterpreter<'a> {
    foods: &'a [FoodProfile],
    activities: &'a [ActivityProfile],
}

impl QueryInterpreter<'static> {
    /// Interpreter over the built-in lexicons
    pub fn new() -> Self {
        Self {
            foods: FOOD_LEXICON.as_slice(),
            activities: ACTIVITY_LEXICON.as_slice(),
        }
    }
}

impl Default for QueryInterpreter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> QueryInterpreter<'a> {
    /// Interpreter over caller-provided lexicons
    ///
    /// Food names are matched against lowercase tokens, so they should be
    /// lowercase single words.
    pub fn with_lexicon(
        foods: &'a [FoodProfile],
        activities: &'a [ActivityProfile],
    ) -> InterpretResult<Self> {
        if foods.is_empty() {
            return Err(InterpretError::EmptyLexicon("food"));
        }
        if activities.is_empty() {
            return Err(InterpretError::EmptyLexicon("activity"));
        }
        for food in foods {
            validate_food(food)?;
        }
        for activity in activities {
            let rate = activity.calories_per_minute;
            if !rate.is_finite() || rate < 0.0 {
                return Err(InterpretError::InvalidActivityRate {
                    name: activity.name.clone(),
                    value: rate,
                });
            }
        }
        Ok(Self { foods, activities })
    }

    pub fn foods(&self) -> &'a [FoodProfile] {
        self.foods
    }

    pub fn activities(&self) -> &'a [ActivityProfile] {
        self.activities
    }

    /// Try the utterance as food first, then as exercise
    pub fn interpret_query(
        &self,
        utterance: &str,
        custom_foods: &[FoodProfile],
    ) -> InterpretResult<ExtractionResult> {
        let food = self.interpret_food(utterance, custom_foods)?;
        if food.is_match() {
            return Ok(food);
        }

        let exercise = self.interpret_exercise(utterance);
        if exercise.is_match() {
            return Ok(exercise);
        }

        tracing::debug!(utterance, "Query matched neither food nor exercise");
        Ok(ExtractionResult::no_match(QUERY_NOT_UNDERSTOOD))
    }
}

/// Check that a food can be scaled
pub fn validate_food(food: &FoodProfile) -> InterpretResult<()> {
    if !food.has_valid_reference() {
        return Err(InterpretError::InvalidReferenceQuantity {
            name: food.name.clone(),
            value: food.reference_quantity,
        });
    }
    if !food.nutrition.is_finite() {
        return Err(InterpretError::InvalidNutrition {
            name: food.name.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Nutrition, QUERY_NOT_UNDERSTOOD};

    fn oats() -> FoodProfile {
        FoodProfile::new("oats", Nutrition::new(150.0, 5.0, 27.0, 4.0, 1.0, 0.0), "cup", 0.5)
    }

    #[test]
    fn test_query_prefers_food() {
        let interpreter = QueryInterpreter::new();
        let result = interpreter.interpret_query("2 cups rice", &[]).unwrap();
        assert_eq!(result.as_food().map(|m| m.name.as_str()), Some("rice"));
    }

    #[test]
    fn test_query_falls_back_to_exercise() {
        let interpreter = QueryInterpreter::new();
        let result = interpreter.interpret_query("ran 45 minutes", &[]).unwrap();
        let exercise = result.as_exercise().unwrap();
        assert_eq!(exercise.name, "running");
        assert_eq!(exercise.calories_burned, 450);
    }

    #[test]
    fn test_query_not_understood() {
        let interpreter = QueryInterpreter::new();
        let result = interpreter.interpret_query("went somewhere", &[]).unwrap();
        assert_eq!(result, ExtractionResult::no_match(QUERY_NOT_UNDERSTOOD));
    }

    #[test]
    fn test_with_lexicon_rejects_empty() {
        let activities = vec![ActivityProfile::new("rowing", 9.0)];
        let err = QueryInterpreter::with_lexicon(&[], &activities).unwrap_err();
        assert_eq!(err, InterpretError::EmptyLexicon("food"));

        let foods = vec![oats()];
        let err = QueryInterpreter::with_lexicon(&foods, &[]).unwrap_err();
        assert_eq!(err, InterpretError::EmptyLexicon("activity"));
    }

    #[test]
    fn test_with_lexicon_rejects_bad_reference_quantity() {
        let mut bad = oats();
        bad.reference_quantity = 0.0;
        let foods = vec![bad];
        let activities = vec![ActivityProfile::new("rowing", 9.0)];
        let err = QueryInterpreter::with_lexicon(&foods, &activities).unwrap_err();
        assert!(matches!(err, InterpretError::InvalidReferenceQuantity { .. }));
    }

    #[test]
    fn test_with_lexicon_rejects_bad_rate() {
        let foods = vec![oats()];
        let activities = vec![ActivityProfile::new("rowing", f64::NAN)];
        let err = QueryInterpreter::with_lexicon(&foods, &activities).unwrap_err();
        assert!(matches!(err, InterpretError::InvalidActivityRate { .. }));
    }

    #[test]
    fn test_custom_lexicon_scales_by_reference() {
        let foods = vec![oats()];
        let activities = vec![ActivityProfile::new("rowing", 9.0)];
        let interpreter = QueryInterpreter::with_lexicon(&foods, &activities).unwrap();

        // 1 cup against a half-cup reference doubles everything
        let result = interpreter.interpret_food("1 cup oats", &[]).unwrap();
        let food = result.as_food().unwrap();
        assert_eq!(food.calories, 300);
        assert_eq!(food.carbohydrates, 54);
    }

    #[test]
    fn test_shared_across_threads() {
        let interpreter = QueryInterpreter::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(move || {
                    interpreter.interpret_food("ate 2 cups rice", &[]).unwrap()
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }
}
