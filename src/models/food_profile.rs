//! Food profile model
//!
//! A food with nutrition values expressed per reference quantity. Built-in
//! lexicon entries and caller-owned custom foods share this shape.

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// A food with nutritional information per `reference_quantity` of `unit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodProfile {
    pub name: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
    /// Label of the unit the nutrition values refer to (e.g. "cup")
    pub unit: String,
    /// Numeric base for the nutrition values (e.g. 1 for "per 1 cup")
    pub reference_quantity: f64,
}

impl FoodProfile {
    pub fn new(
        name: impl Into<String>,
        nutrition: Nutrition,
        unit: impl Into<String>,
        reference_quantity: f64,
    ) -> Self {
        Self {
            name: name.into(),
            nutrition,
            unit: unit.into(),
            reference_quantity,
        }
    }

    /// Whether the reference quantity can be divided by
    pub fn has_valid_reference(&self) -> bool {
        self.reference_quantity.is_finite() && self.reference_quantity > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flat_json() {
        let json = r#"{
            "name": "Protein Shake",
            "calories": 160,
            "protein": 30,
            "carbohydrates": 4,
            "fiber": 1,
            "sugar": 2,
            "sodium": 150,
            "unit": "scoop",
            "reference_quantity": 1
        }"#;
        let food: FoodProfile = serde_json::from_str(json).unwrap();
        assert_eq!(food.name, "Protein Shake");
        assert_eq!(food.nutrition.protein, 30.0);
        assert_eq!(food.unit, "scoop");
        assert!(food.has_valid_reference());
    }

    #[test]
    fn test_invalid_reference_quantities() {
        let mut food = FoodProfile::new("oats", Nutrition::default(), "cup", 0.0);
        assert!(!food.has_valid_reference());
        food.reference_quantity = -1.0;
        assert!(!food.has_valid_reference());
        food.reference_quantity = f64::INFINITY;
        assert!(!food.has_valid_reference());
        food.reference_quantity = 0.5;
        assert!(food.has_valid_reference());
    }
}
