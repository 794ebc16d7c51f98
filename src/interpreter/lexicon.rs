//! Built-in food and activity lexicons
//!
//! Process-wide read-only tables, built on first use and never mutated.

use std::sync::LazyLock;

use crate::models::{ActivityProfile, FoodProfile, Nutrition};

/// Common foods with nutrition per standard unit
pub static FOOD_LEXICON: LazyLock<Vec<FoodProfile>> = LazyLock::new(|| {
    [
        ("apple", Nutrition::new(95.0, 0.5, 25.0, 4.0, 19.0, 2.0), "piece"),
        ("banana", Nutrition::new(105.0, 1.3, 27.0, 3.1, 14.0, 1.0), "piece"),
        ("orange", Nutrition::new(62.0, 1.2, 15.4, 3.1, 12.0, 0.0), "piece"),
        ("bread", Nutrition::new(264.0, 9.0, 49.0, 3.0, 6.0, 491.0), "slice"),
        ("rice", Nutrition::new(130.0, 2.7, 28.0, 0.6, 0.1, 1.0), "cup"),
        ("pasta", Nutrition::new(221.0, 8.1, 43.2, 2.5, 0.8, 1.0), "cup"),
        // chicken and beef are per 100g portion
        ("chicken", Nutrition::new(165.0, 31.0, 0.0, 0.0, 0.0, 74.0), "piece"),
        ("beef", Nutrition::new(250.0, 26.0, 0.0, 0.0, 0.0, 72.0), "piece"),
        ("milk", Nutrition::new(149.0, 8.0, 12.0, 0.0, 12.0, 105.0), "cup"),
        ("egg", Nutrition::new(72.0, 6.3, 0.4, 0.0, 0.2, 71.0), "piece"),
    ]
    .into_iter()
    .map(|(name, nutrition, unit)| FoodProfile::new(name, nutrition, unit, 1.0))
    .collect()
});

/// Common activities with calories burned per minute for a 70 kg person
///
/// Order matters: activity normalization takes the first key that matches.
pub static ACTIVITY_LEXICON: LazyLock<Vec<ActivityProfile>> = LazyLock::new(|| {
    [
        ("running", 10.0),
        ("jogging", 8.0),
        ("walking", 4.0),
        ("cycling", 7.0),
        ("swimming", 8.0),
        ("yoga", 3.0),
        ("hiit", 12.0),
        ("workout", 8.0),
        ("training", 7.0),
    ]
    .into_iter()
    .map(|(name, rate)| ActivityProfile::new(name, rate))
    .collect()
});
