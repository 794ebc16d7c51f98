//! Health Tracker MCP Server Implementation
//!
//! Implements the MCP server with all Health Tracker tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::build_info::BuildInfo;
use crate::interpreter::QueryInterpreter;
use crate::models::{
    ActivityLevel, ExerciseMatch, FoodMatch, FoodProfile, Goal, Nutrition, Sex, UserProfile,
};
use crate::nutrition::{LoggedExercise, QuantityUnit};
use crate::tools::query;
use crate::tools::recommendations;
use crate::tools::status::StatusTracker;

/// Health Tracker MCP Service
#[derive(Clone)]
pub struct HealthTrackerService {
    status_tracker: Arc<StatusTracker>,
    interpreter: QueryInterpreter<'static>,
    /// Custom foods loaded from configuration at startup
    custom_foods: Arc<Vec<FoodProfile>>,
    tool_router: ToolRouter<HealthTrackerService>,
}

impl HealthTrackerService {
    pub fn new(custom_foods_path: Option<PathBuf>, custom_foods: Vec<FoodProfile>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(custom_foods_path, custom_foods.len())),
            interpreter: QueryInterpreter::new(),
            custom_foods: Arc::new(custom_foods),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Query Parameter Structs
// ============================================================================

/// A caller-defined food, with nutrition per `reference_quantity` of `unit`
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CustomFoodParam {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub sodium: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_reference_quantity")]
    pub reference_quantity: f64,
}

fn default_unit() -> String { "serving".to_string() }
fn default_reference_quantity() -> f64 { 1.0 }

impl From<CustomFoodParam> for FoodProfile {
    fn from(p: CustomFoodParam) -> Self {
        FoodProfile::new(
            p.name,
            Nutrition::new(p.calories, p.protein, p.carbohydrates, p.fiber, p.sugar, p.sodium),
            p.unit,
            p.reference_quantity,
        )
    }
}

fn into_profiles(foods: Vec<CustomFoodParam>) -> Vec<FoodProfile> {
    foods.into_iter().map(FoodProfile::from).collect()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FoodQueryParams {
    /// Free text, e.g. "2 cups rice"
    pub query: String,
    /// Foods to try after the built-in lexicon, ahead of configured ones
    #[serde(default)]
    pub custom_foods: Vec<CustomFoodParam>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExerciseQueryParams {
    /// Free text, e.g. "ran 45 minutes"
    pub query: String,
}

// ============================================================================
// Recommendation Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProfileParams {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    /// male, female or other
    #[serde(default)]
    pub sex: Option<String>,
    /// sedentary, light, moderate, active or very_active
    #[serde(default)]
    pub activity_level: Option<String>,
    /// lose, maintain or gain
    #[serde(default)]
    pub goal: Option<String>,
}

impl From<ProfileParams> for UserProfile {
    fn from(p: ProfileParams) -> Self {
        UserProfile {
            weight_kg: p.weight_kg,
            height_cm: p.height_cm,
            age_years: p.age_years,
            sex: p.sex.as_deref().map(Sex::from_str).unwrap_or(Sex::Other),
            activity_level: p
                .activity_level
                .as_deref()
                .and_then(ActivityLevel::from_str)
                .unwrap_or_default(),
            goal: p.goal.as_deref().map(Goal::from_str).unwrap_or_default(),
        }
    }
}

/// A food result as returned by interpret_food
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FoodEntryParam {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    pub calories: i64,
    #[serde(default)]
    pub protein: i64,
    #[serde(default)]
    pub carbohydrates: i64,
    #[serde(default)]
    pub fiber: i64,
    #[serde(default)]
    pub sugar: i64,
    #[serde(default)]
    pub sodium: i64,
}

fn default_quantity() -> f64 { 1.0 }

impl From<FoodEntryParam> for FoodMatch {
    fn from(p: FoodEntryParam) -> Self {
        FoodMatch {
            name: p.name,
            quantity: p.quantity,
            unit: QuantityUnit::default(),
            calories: p.calories,
            protein: p.protein,
            carbohydrates: p.carbohydrates,
            fiber: p.fiber,
            sugar: p.sugar,
            sodium: p.sodium,
        }
    }
}

/// An exercise result as returned by interpret_exercise
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExerciseEntryParam {
    pub name: String,
    pub duration_minutes: f64,
    pub calories_burned: i64,
}

impl From<ExerciseEntryParam> for ExerciseMatch {
    fn from(p: ExerciseEntryParam) -> Self {
        ExerciseMatch {
            name: p.name,
            duration_minutes: p.duration_minutes,
            calories_burned: p.calories_burned,
        }
    }
}

/// An exercise result tagged with the day it happened on
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WeekExerciseParam {
    /// Any day label, e.g. "2024-05-01"; sessions sharing a label share a day
    pub day: String,
    pub name: String,
    pub duration_minutes: f64,
    pub calories_burned: i64,
}

impl From<WeekExerciseParam> for LoggedExercise {
    fn from(p: WeekExerciseParam) -> Self {
        LoggedExercise {
            day: p.day,
            exercise: ExerciseMatch {
                name: p.name,
                duration_minutes: p.duration_minutes,
                calories_burned: p.calories_burned,
            },
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompareProgressParams {
    pub profile: ProfileParams,
    #[serde(default)]
    pub today_food: Vec<FoodEntryParam>,
    #[serde(default)]
    pub today_exercise: Vec<ExerciseEntryParam>,
    /// Exercise over the past seven days, today included
    #[serde(default)]
    pub week_exercise: Vec<WeekExerciseParam>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl HealthTrackerService {
    // --- Status ---

    #[tool(description = "Get the current status of the Health Tracker service including build info, lexicon sizes, configured custom foods, and process information")]
    fn health_tracker_status(&self) -> Result<CallToolResult, McpError> {
        to_json(&self.status_tracker.get_status(&self.interpreter))
    }

    #[tool(description = "Get instructions for turning user messages into food and exercise entries. Call this before the first query of a session.")]
    fn query_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::QUERY_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(QUERY_INSTRUCTIONS)]))
    }

    // --- Queries ---

    #[tool(description = "Extract a food and its scaled nutrition from free text such as '2 cups rice' or '200g chicken'")]
    fn interpret_food(&self, Parameters(p): Parameters<FoodQueryParams>) -> Result<CallToolResult, McpError> {
        let request_foods = into_profiles(p.custom_foods);
        let result = query::interpret_food(&self.interpreter, &p.query, &request_foods, &self.custom_foods)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Extract an exercise, its duration, and calories burned from free text such as 'ran 45 minutes'")]
    fn interpret_exercise(&self, Parameters(p): Parameters<ExerciseQueryParams>) -> Result<CallToolResult, McpError> {
        let result = query::interpret_exercise(&self.interpreter, &p.query)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Interpret free text as food first, then as exercise. Returns a no_match result with a reason if neither applies.")]
    fn process_query(&self, Parameters(p): Parameters<FoodQueryParams>) -> Result<CallToolResult, McpError> {
        let request_foods = into_profiles(p.custom_foods);
        let result = query::process_query(&self.interpreter, &p.query, &request_foods, &self.custom_foods)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "List the built-in foods and activities, and any custom foods loaded from configuration")]
    fn list_lexicon(&self) -> Result<CallToolResult, McpError> {
        to_json(&query::list_lexicon(&self.interpreter, &self.custom_foods))
    }

    // --- Recommendations ---

    #[tool(description = "Compute BMR, TDEE, daily nutrition targets, and a weekly exercise plan for a user profile")]
    fn get_recommendation(&self, Parameters(p): Parameters<ProfileParams>) -> Result<CallToolResult, McpError> {
        let result = recommendations::get_recommendation(p.into())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Compare today's food and exercise, and the past week's exercise, against the recommendation for a user profile")]
    fn compare_progress(&self, Parameters(p): Parameters<CompareProgressParams>) -> Result<CallToolResult, McpError> {
        let profile = UserProfile::from(p.profile);
        let today_food: Vec<FoodMatch> = p.today_food.into_iter().map(FoodMatch::from).collect();
        let today_exercise: Vec<ExerciseMatch> =
            p.today_exercise.into_iter().map(ExerciseMatch::from).collect();
        let week_exercise: Vec<LoggedExercise> =
            p.week_exercise.into_iter().map(LoggedExercise::from).collect();

        let result = recommendations::compare_progress(&profile, &today_food, &today_exercise, &week_exercise)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for HealthTrackerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: crate::build_info::NAME.into(),
                version: crate::build_info::VERSION.into(),
                title: Some(BuildInfo::current().title()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Health Tracker - Turns short free-text messages into food and exercise entries \
                 and computes nutrition and exercise targets. \
                 IMPORTANT: Call query_instructions before the first query. \
                 Queries: process_query, interpret_food, interpret_exercise, list_lexicon. \
                 Targets: get_recommendation, compare_progress. \
                 Nothing is stored; pass previous results back in to compare_progress."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_params(sex: &str, level: &str, goal: &str) -> ProfileParams {
        ProfileParams {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30.0,
            sex: Some(sex.to_string()),
            activity_level: Some(level.to_string()),
            goal: Some(goal.to_string()),
        }
    }

    #[test]
    fn test_profile_params_parse_strings() {
        let profile = UserProfile::from(profile_params("F", "Very Active", "lose"));
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.goal, Goal::Lose);
    }

    #[test]
    fn test_profile_params_unknown_strings_default() {
        let profile = UserProfile::from(profile_params("unknown", "couch", "bulk"));
        assert_eq!(profile.sex, Sex::Other);
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
        assert_eq!(profile.goal, Goal::Maintain);

        let profile = UserProfile::from(ProfileParams {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 30.0,
            sex: None,
            activity_level: None,
            goal: None,
        });
        assert_eq!(profile.sex, Sex::Other);
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
    }

    #[test]
    fn test_custom_food_param_defaults() {
        let param: CustomFoodParam = serde_json::from_str(
            r#"{"name": "protein bar", "calories": 210, "protein": 20, "carbohydrates": 22}"#,
        )
        .unwrap();
        let food = FoodProfile::from(param);
        assert_eq!(food.unit, "serving");
        assert_eq!(food.reference_quantity, 1.0);
        assert_eq!(food.nutrition.sodium, 0.0);
    }

    #[test]
    fn test_food_entry_param_defaults() {
        let param: FoodEntryParam =
            serde_json::from_str(r#"{"name": "apple", "calories": 95}"#).unwrap();
        let food = FoodMatch::from(param);
        assert_eq!(food.quantity, 1.0);
        assert_eq!(food.unit, QuantityUnit::Serving);
        assert_eq!(food.protein, 0);
    }

    #[test]
    fn test_week_exercise_param_conversion() {
        let param: WeekExerciseParam = serde_json::from_str(
            r#"{"day": "mon", "name": "running", "duration_minutes": 30, "calories_burned": 300}"#,
        )
        .unwrap();
        let logged = LoggedExercise::from(param);
        assert_eq!(logged.day, "mon");
        assert_eq!(logged.exercise.calories_burned, 300);
    }

    #[test]
    fn test_service_info() {
        let service = HealthTrackerService::new(None, Vec::new());
        let info = service.get_info();
        assert_eq!(info.server_info.name, crate::build_info::NAME);
        assert!(info.server_info.title.unwrap().starts_with("Health Tracker"));
        assert!(info.instructions.unwrap().contains("query_instructions"));
    }
}
