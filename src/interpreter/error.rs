//! Interpreter error types

use thiserror::Error;

/// Precondition violations in lexicon or custom food data
///
/// Unrecognised utterances are never errors; they produce
/// [`ExtractionResult::NoMatch`](crate::models::ExtractionResult::NoMatch).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpretError {
    #[error("Invalid reference quantity {value} for food '{name}': must be positive and finite")]
    InvalidReferenceQuantity { name: String, value: f64 },

    #[error("Invalid nutrition values for food '{name}': must be finite")]
    InvalidNutrition { name: String },

    #[error("Invalid calories per minute {value} for activity '{name}': must be finite and non-negative")]
    InvalidActivityRate { name: String, value: f64 },

    #[error("The {0} lexicon is empty")]
    EmptyLexicon(&'static str),
}

/// Result type for interpreter operations
pub type InterpretResult<T> = Result<T, InterpretError>;
