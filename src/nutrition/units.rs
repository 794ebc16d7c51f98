//! Unit types
//!
//! Quantity units recognised in food utterances and duration units recognised
//! in exercise utterances.

use serde::{Deserialize, Serialize};

/// Unit attached to a food quantity
///
/// Units label the quantity only; nutrition always scales by
/// `quantity / reference_quantity` regardless of unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    Cup,
    Gram,
    Kilogram,
    Pound,
    Ounce,
    Milliliter,
    Liter,
    Tablespoon,
    Teaspoon,
    Slice,
    Piece,
    /// No unit was given
    #[default]
    Serving,
}

impl QuantityUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityUnit::Cup => "cup",
            QuantityUnit::Gram => "gram",
            QuantityUnit::Kilogram => "kilogram",
            QuantityUnit::Pound => "pound",
            QuantityUnit::Ounce => "ounce",
            QuantityUnit::Milliliter => "milliliter",
            QuantityUnit::Liter => "liter",
            QuantityUnit::Tablespoon => "tablespoon",
            QuantityUnit::Teaspoon => "teaspoon",
            QuantityUnit::Slice => "slice",
            QuantityUnit::Piece => "piece",
            QuantityUnit::Serving => "serving",
        }
    }
}

impl std::fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit attached to an exercise duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Minutes,
    Hours,
}

impl DurationUnit {
    /// Convert a value in this unit to minutes
    pub fn to_minutes(&self, value: f64) -> f64 {
        match self {
            DurationUnit::Minutes => value,
            DurationUnit::Hours => value * 60.0,
        }
    }
}
