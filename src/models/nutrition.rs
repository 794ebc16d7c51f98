//! Shared nutrition data structure
//!
//! Used by the food lexicon, custom foods and scaled extraction results.

use serde::{Deserialize, Serialize};

/// Nutritional information for one reference quantity of a food
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,       // grams
    pub carbohydrates: f64, // grams
    #[serde(default)]
    pub fiber: f64,         // grams
    #[serde(default)]
    pub sugar: f64,         // grams
    #[serde(default)]
    pub sodium: f64,        // milligrams
}

impl Nutrition {
    pub const fn new(
        calories: f64,
        protein: f64,
        carbohydrates: f64,
        fiber: f64,
        sugar: f64,
        sodium: f64,
    ) -> Self {
        Self {
            calories,
            protein,
            carbohydrates,
            fiber,
            sugar,
            sodium,
        }
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbohydrates: self.carbohydrates * multiplier,
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
            sodium: self.sodium * multiplier,
        }
    }

    /// True when every value is a finite number
    pub fn is_finite(&self) -> bool {
        [
            self.calories,
            self.protein,
            self.carbohydrates,
            self.fiber,
            self.sugar,
            self.sodium,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        let rice = Nutrition::new(130.0, 2.7, 28.0, 0.6, 0.1, 1.0);
        let doubled = rice.scale(2.0);
        assert!((doubled.calories - 260.0).abs() < 1e-9);
        assert!((doubled.protein - 5.4).abs() < 1e-9);
        assert!((doubled.sodium - 2.0).abs() < 1e-9);
        assert_eq!(rice.scale(0.0), Nutrition::default());
    }

    #[test]
    fn test_missing_optional_fields_default_to_zero() {
        let n: Nutrition =
            serde_json::from_str(r#"{"calories": 100, "protein": 5, "carbohydrates": 10}"#)
                .unwrap();
        assert_eq!(n.fiber, 0.0);
        assert_eq!(n.sodium, 0.0);
    }

    #[test]
    fn test_is_finite() {
        assert!(Nutrition::default().is_finite());
        assert!(!Nutrition::new(f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0).is_finite());
    }
}
