//! Query MCP Tools
//!
//! Food and exercise extraction from free-text utterances.

use serde::Serialize;

use crate::interpreter::QueryInterpreter;
use crate::models::{ActivityProfile, ExtractionResult, FoodProfile};

// ============================================================================
// Response Structs
// ============================================================================

/// Response for interpret_food, interpret_exercise and process_query
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub matched: bool,
    pub summary: String,
    pub result: ExtractionResult,
}

impl QueryResponse {
    fn new(query: &str, result: ExtractionResult) -> Self {
        Self {
            query: query.to_string(),
            matched: result.is_match(),
            summary: result.summary(),
            result,
        }
    }
}

/// Response for list_lexicon
#[derive(Debug, Serialize)]
pub struct LexiconResponse {
    pub foods: Vec<FoodProfile>,
    pub activities: Vec<ActivityProfile>,
    pub custom_foods: Vec<FoodProfile>,
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Request-scoped custom foods come before the configured ones
fn merge_custom_foods(request: &[FoodProfile], configured: &[FoodProfile]) -> Vec<FoodProfile> {
    request.iter().chain(configured).cloned().collect()
}

fn check_query(query: &str) -> Result<(), String> {
    if query.trim().is_empty() {
        return Err("Query must not be empty".to_string());
    }
    Ok(())
}

/// Extract a food and its nutrition
pub fn interpret_food(
    interpreter: &QueryInterpreter,
    query: &str,
    request_foods: &[FoodProfile],
    configured_foods: &[FoodProfile],
) -> Result<QueryResponse, String> {
    check_query(query)?;
    let custom_foods = merge_custom_foods(request_foods, configured_foods);
    let result = interpreter
        .interpret_food(query, &custom_foods)
        .map_err(|e| e.to_string())?;
    Ok(QueryResponse::new(query, result))
}

/// Extract an exercise and its calories burned
pub fn interpret_exercise(
    interpreter: &QueryInterpreter,
    query: &str,
) -> Result<QueryResponse, String> {
    check_query(query)?;
    Ok(QueryResponse::new(query, interpreter.interpret_exercise(query)))
}

/// Try food first, then exercise
pub fn process_query(
    interpreter: &QueryInterpreter,
    query: &str,
    request_foods: &[FoodProfile],
    configured_foods: &[FoodProfile],
) -> Result<QueryResponse, String> {
    check_query(query)?;
    let custom_foods = merge_custom_foods(request_foods, configured_foods);
    let result = interpreter
        .interpret_query(query, &custom_foods)
        .map_err(|e| e.to_string())?;
    Ok(QueryResponse::new(query, result))
}

/// Built-in lexicons plus configured custom foods
pub fn list_lexicon(
    interpreter: &QueryInterpreter,
    configured_foods: &[FoodProfile],
) -> LexiconResponse {
    LexiconResponse {
        foods: interpreter.foods().to_vec(),
        activities: interpreter.activities().to_vec(),
        custom_foods: configured_foods.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrition;

    fn shake(name: &str, calories: f64) -> FoodProfile {
        FoodProfile::new(name, Nutrition::new(calories, 20.0, 5.0, 0.0, 2.0, 100.0), "scoop", 1.0)
    }

    #[test]
    fn test_request_foods_shadow_configured() {
        let interpreter = QueryInterpreter::new();
        let request = vec![shake("shake", 120.0)];
        let configured = vec![shake("shake", 300.0)];
        let response = interpret_food(&interpreter, "1 shake", &request, &configured).unwrap();
        assert!(response.matched);
        assert_eq!(response.result.as_food().unwrap().calories, 120);
    }

    #[test]
    fn test_configured_foods_used() {
        let interpreter = QueryInterpreter::new();
        let configured = vec![shake("shake", 300.0)];
        let response = process_query(&interpreter, "2 shake", &[], &configured).unwrap();
        assert_eq!(response.result.as_food().unwrap().calories, 600);
        assert_eq!(response.summary, "Added shake with 600 calories");
    }

    #[test]
    fn test_process_query_exercise() {
        let interpreter = QueryInterpreter::new();
        let response = process_query(&interpreter, "ran 45 minutes", &[], &[]).unwrap();
        assert!(response.matched);
        assert_eq!(
            response.summary,
            "Burned approximately 450 calories from 45 minutes of running"
        );
    }

    #[test]
    fn test_unmatched_is_not_an_error() {
        let interpreter = QueryInterpreter::new();
        let response = interpret_exercise(&interpreter, "went somewhere").unwrap();
        assert!(!response.matched);
    }

    #[test]
    fn test_empty_query_rejected() {
        let interpreter = QueryInterpreter::new();
        assert!(interpret_food(&interpreter, "  ", &[], &[]).is_err());
        assert!(interpret_exercise(&interpreter, "").is_err());
    }

    #[test]
    fn test_invalid_custom_food_surfaces_error() {
        let interpreter = QueryInterpreter::new();
        let mut bad = shake("shake", 100.0);
        bad.reference_quantity = -1.0;
        let err = interpret_food(&interpreter, "shake", &[bad], &[]).unwrap_err();
        assert!(err.contains("Invalid reference quantity"));
    }

    #[test]
    fn test_list_lexicon() {
        let interpreter = QueryInterpreter::new();
        let response = list_lexicon(&interpreter, &[shake("shake", 1.0)]);
        assert_eq!(response.foods.len(), 10);
        assert_eq!(response.activities.len(), 9);
        assert_eq!(response.custom_foods.len(), 1);
    }
}
