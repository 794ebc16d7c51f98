//! Food utterances

use tracing::{debug, warn};

use super::patterns::extract_quantity;
use super::tokenizer::tokenize;
use super::{validate_food, InterpretResult, QueryInterpreter};
use crate::models::{ExtractionResult, FoodMatch, FoodProfile, FOOD_NOT_RECOGNIZED};
use crate::nutrition::scaling::scale_ratio;
use crate::nutrition::units::QuantityUnit;

impl<'a> QueryInterpreter<'a> {
    /// Extract a food, its quantity and scaled nutrition from an utterance
    ///
    /// The built-in lexicon is searched first, token by token in utterance
    /// order. Only when no token names a lexicon food are `custom_foods`
    /// consulted, in the order given: the first whose lowercased name appears
    /// anywhere in the lowercased utterance wins. That substring test is
    /// loose (a custom food named "pie" also matches "piece"), so callers
    /// should prefer distinctive names.
    ///
    /// Fails only when the matched food has an unusable reference quantity.
    pub fn interpret_food(
        &self,
        utterance: &str,
        custom_foods: &[FoodProfile],
    ) -> InterpretResult<ExtractionResult> {
        let query = utterance.to_lowercase();
        let tokens = tokenize(&query);
        let (quantity, unit) = extract_quantity(&query);

        let lexicon_hit = tokens
            .iter()
            .find_map(|token| self.foods.iter().find(|food| food.name == *token));

        if let Some(food) = lexicon_hit {
            debug!(food = %food.name, quantity, %unit, "Matched lexicon food");
            return scale_food(food, quantity, unit).map(ExtractionResult::FoodMatch);
        }

        let custom_hit = custom_foods.iter().find(|item| {
            let name = item.name.to_lowercase();
            !name.trim().is_empty() && query.contains(&name)
        });

        if let Some(item) = custom_hit {
            debug!(food = %item.name, quantity, %unit, "Matched custom food");
            return scale_food(item, quantity, unit).map(ExtractionResult::FoodMatch);
        }

        debug!(utterance, "No food recognized");
        Ok(ExtractionResult::no_match(FOOD_NOT_RECOGNIZED))
    }
}

/// Scale a food's nutrition to `quantity` of its reference quantity
pub fn scale_food(
    food: &FoodProfile,
    quantity: f64,
    unit: QuantityUnit,
) -> InterpretResult<FoodMatch> {
    validate_food(food).inspect_err(|e| warn!("Refusing to scale food: {}", e))?;
    // validated above, the ratio always exists here
    let ratio = scale_ratio(quantity, food.reference_quantity).unwrap_or_default();
    let scaled = food.nutrition.scale(ratio);
    Ok(FoodMatch::from_scaled(&food.name, quantity, unit, &scaled))
}
