//! Scaling and integer conversion
//!
//! Food nutrients are truncated toward zero while exercise calories and
//! planner outputs are rounded. Both conversions happen only when a result is
//! produced, never on intermediate values.

/// Ratio of a requested quantity to a reference quantity
///
/// Returns `None` when the reference quantity is zero, negative or not finite.
pub fn scale_ratio(quantity: f64, reference_quantity: f64) -> Option<f64> {
    if !reference_quantity.is_finite() || reference_quantity <= 0.0 {
        return None;
    }
    Some(quantity / reference_quantity)
}

/// Convert to an integer by dropping the fractional part
pub fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

/// Round to the nearest integer, ties to even (2.5 -> 2, 3.5 -> 4)
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}
