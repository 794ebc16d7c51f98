//! Pattern rules
//!
//! Quantity, duration and activity recognition expressed as ordered
//! `(spelling, tag)` tables. Matching is leftmost-first: the earliest position
//! in the text with any matching rule wins, and at that position the first
//! rule in table order wins. Spellings are prefix matches with no word
//! boundary, so "2 glasses" reads as two grams.

use crate::nutrition::units::{DurationUnit, QuantityUnit};

/// A spelling and the meaning it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<T> {
    pub spelling: &'static str,
    pub tag: T,
}

const fn rule<T>(spelling: &'static str, tag: T) -> Rule<T> {
    Rule { spelling, tag }
}

pub const QUANTITY_UNIT_RULES: &[Rule<QuantityUnit>] = &[
    rule("cup", QuantityUnit::Cup),
    rule("cups", QuantityUnit::Cup),
    rule("g", QuantityUnit::Gram),
    rule("grams", QuantityUnit::Gram),
    rule("kg", QuantityUnit::Kilogram),
    rule("kilograms", QuantityUnit::Kilogram),
    rule("lb", QuantityUnit::Pound),
    rule("lbs", QuantityUnit::Pound),
    rule("pounds", QuantityUnit::Pound),
    rule("oz", QuantityUnit::Ounce),
    rule("ounce", QuantityUnit::Ounce),
    rule("ounces", QuantityUnit::Ounce),
    rule("ml", QuantityUnit::Milliliter),
    rule("l", QuantityUnit::Liter),
    rule("liter", QuantityUnit::Liter),
    rule("liters", QuantityUnit::Liter),
    rule("tbsp", QuantityUnit::Tablespoon),
    rule("tablespoon", QuantityUnit::Tablespoon),
    rule("tablespoons", QuantityUnit::Tablespoon),
    rule("tsp", QuantityUnit::Teaspoon),
    rule("teaspoon", QuantityUnit::Teaspoon),
    rule("teaspoons", QuantityUnit::Teaspoon),
    rule("slice", QuantityUnit::Slice),
    rule("slices", QuantityUnit::Slice),
    rule("piece", QuantityUnit::Piece),
    rule("pieces", QuantityUnit::Piece),
];

pub const DURATION_UNIT_RULES: &[Rule<DurationUnit>] = &[
    rule("minutes", DurationUnit::Minutes),
    rule("mins", DurationUnit::Minutes),
    rule("min", DurationUnit::Minutes),
    rule("hours", DurationUnit::Hours),
    rule("hour", DurationUnit::Hours),
    rule("hr", DurationUnit::Hours),
    rule("hrs", DurationUnit::Hours),
];

/// Activity words tagged with the lexicon activity they name
pub const ACTIVITY_RULES: &[Rule<&str>] = &[
    rule("ran", "running"),
    rule("running", "running"),
    rule("jogging", "jogging"),
    rule("jogged", "jogging"),
    rule("walked", "walking"),
    rule("walking", "walking"),
    rule("cycling", "cycling"),
    rule("cycled", "cycling"),
    rule("swimming", "swimming"),
    rule("swam", "swimming"),
    rule("yoga", "yoga"),
    rule("hiit", "hiit"),
    rule("workout", "workout"),
    rule("exercised", "workout"),
    rule("training", "training"),
    rule("trained", "training"),
];

/// Quantity used when the utterance has no number
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Duration used when the utterance has no duration
pub const DEFAULT_DURATION_MINUTES: f64 = 30.0;

/// Parse `digits[.digits]` starting at byte offset `start`
///
/// Returns the value and the byte offset just past the number. A number too
/// large for `f64` is no number at all.
fn number_at(text: &str, start: usize) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return None;
    }
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    text[start..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| (value, end))
}

/// First rule whose spelling starts `text`
fn rule_at<T: Copy>(rules: &[Rule<T>], text: &str) -> Option<Rule<T>> {
    rules.iter().copied().find(|r| text.starts_with(r.spelling))
}

/// Byte offsets where a run of digits begins
fn digit_offsets(text: &str) -> impl Iterator<Item = usize> + '_ {
    let bytes = text.as_bytes();
    (0..bytes.len())
        .filter(move |&i| bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit()))
}

/// Leftmost `<number><optional whitespace><unit>` match
pub fn match_measured<T: Copy>(text: &str, rules: &[Rule<T>]) -> Option<(f64, T)> {
    digit_offsets(text).find_map(|start| {
        let (value, end) = number_at(text, start)?;
        let rest = text[end..].trim_start();
        rule_at(rules, rest).map(|r| (value, r.tag))
    })
}

/// Leftmost bare number
pub fn match_number(text: &str) -> Option<f64> {
    digit_offsets(text).find_map(|start| number_at(text, start).map(|(value, _)| value))
}

/// Quantity and unit of a food utterance
///
/// A number followed by a known unit wins over a bare number; with neither
/// the quantity is one serving.
pub fn extract_quantity(text: &str) -> (f64, QuantityUnit) {
    if let Some(found) = match_measured(text, QUANTITY_UNIT_RULES) {
        return found;
    }
    match match_number(text) {
        Some(value) => (value, QuantityUnit::Serving),
        None => (DEFAULT_QUANTITY, QuantityUnit::Serving),
    }
}

/// Duration of an exercise utterance in minutes, if one is stated
pub fn extract_duration(text: &str) -> Option<f64> {
    match_measured(text, DURATION_UNIT_RULES).map(|(value, unit)| unit.to_minutes(value))
}

/// Leftmost activity word
pub fn match_activity(text: &str) -> Option<Rule<&'static str>> {
    text.char_indices()
        .find_map(|(i, _)| rule_at(ACTIVITY_RULES, &text[i..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_with_unit() {
        assert_eq!(extract_quantity("ate 2 cups rice"), (2.0, QuantityUnit::Cup));
        assert_eq!(extract_quantity("200g chicken"), (200.0, QuantityUnit::Gram));
        assert_eq!(extract_quantity("1.5 liters milk"), (1.5, QuantityUnit::Liter));
        assert_eq!(extract_quantity("3 tbsp sugar"), (3.0, QuantityUnit::Tablespoon));
        assert_eq!(extract_quantity("2 kg beef"), (2.0, QuantityUnit::Kilogram));
    }

    #[test]
    fn test_measured_beats_earlier_bare_number() {
        // the bare "3" comes first but the measured rule has priority
        assert_eq!(extract_quantity("3 eggs and 2 slices bread"), (2.0, QuantityUnit::Slice));
    }

    #[test]
    fn test_bare_number_fallback() {
        assert_eq!(extract_quantity("3 eggs"), (3.0, QuantityUnit::Serving));
        assert_eq!(extract_quantity("12 eggs"), (12.0, QuantityUnit::Serving));
    }

    #[test]
    fn test_default_quantity() {
        assert_eq!(extract_quantity("an apple"), (1.0, QuantityUnit::Serving));
        assert_eq!(extract_quantity(""), (1.0, QuantityUnit::Serving));
    }

    #[test]
    fn test_unit_prefix_without_word_boundary() {
        assert_eq!(extract_quantity("2 glasses milk"), (2.0, QuantityUnit::Gram));
    }

    #[test]
    fn test_trailing_dot_is_not_decimal() {
        assert_eq!(match_number("ate 2."), Some(2.0));
        assert_eq!(match_number("0.25"), Some(0.25));
        assert_eq!(match_number("none"), None);
    }

    #[test]
    fn test_oversized_number_is_ignored() {
        let huge = "9".repeat(400);
        assert_eq!(match_number(&huge), None);
        assert_eq!(
            extract_quantity(&format!("{} cups rice", huge)),
            (1.0, QuantityUnit::Serving)
        );
        assert_eq!(
            extract_quantity(&format!("{} then 2 cups rice", huge)),
            (2.0, QuantityUnit::Cup)
        );
        assert_eq!(extract_duration(&format!("ran {} minutes", huge)), None);
    }

    #[test]
    fn test_duration() {
        assert_eq!(extract_duration("ran 45 minutes"), Some(45.0));
        assert_eq!(extract_duration("yoga for 1 hour"), Some(60.0));
        assert_eq!(extract_duration("swam 1.5hrs"), Some(90.0));
        assert_eq!(extract_duration("cycled 2 hr"), Some(120.0));
        assert_eq!(extract_duration("walked 20min"), Some(20.0));
        assert_eq!(extract_duration("walked 3 miles"), None);
    }

    #[test]
    fn test_activity_leftmost_wins() {
        let found = match_activity("walked then ran").unwrap();
        assert_eq!(found.spelling, "walked");
        assert_eq!(found.tag, "walking");
    }

    #[test]
    fn test_activity_first_rule_at_position() {
        let found = match_activity("running late").unwrap();
        assert_eq!(found.spelling, "running");

        let found = match_activity("i trained hard").unwrap();
        assert_eq!(found.spelling, "trained");
        assert_eq!(found.tag, "training");
    }

    #[test]
    fn test_activity_none() {
        assert!(match_activity("went somewhere").is_none());
    }
}
