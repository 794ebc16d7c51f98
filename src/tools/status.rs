//! Status Tool
//!
//! Runtime status of the Health Tracker service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::interpreter::QueryInterpreter;

/// Usage guide for AI assistants
pub const QUERY_INSTRUCTIONS: &str = r#"
# Health Tracker Query Instructions

## Logging food

Pass the user's words as they are to `process_query` (or `interpret_food`).

- Quantities: "2 cups rice", "200g chicken", "1.5 l milk", "3 slices bread"
- A number without a unit is a count of servings: "3 eggs"
- No number at all means one serving: "an apple"

Built-in foods: apple, banana, orange, bread, rice, pasta, chicken, beef,
milk, egg. Built-in foods must appear as whole words ("egg", not "eggs").

Anything else needs a custom food. Pass the user's own foods in
`custom_foods`; each has a name, nutrition per `reference_quantity`, and a
unit label. A custom food matches when its name appears anywhere in the
query, so prefer distinctive names ("greek yogurt" rather than "yo").

Nutrition scales by quantity / reference_quantity. Units are not converted:
"200g rice" is 200 times the per-cup values. Nutrient values are rounded
down to whole numbers.

## Logging exercise

- "ran 45 minutes", "swam 1 hour", "yoga 20 min", "cycled for 2 hrs"
- No duration means 30 minutes.

Known activities: running, jogging, walking, cycling, swimming, yoga, hiit,
workout, training.

## Recommendations

`get_recommendation` takes weight (kg), height (cm), age, sex
(male/female/other), activity level (sedentary/light/moderate/active/
very_active) and goal (lose/maintain/gain).

`compare_progress` takes the same profile plus today's food and exercise
results and the past week's exercise results, each as returned by the query
tools.
"#;

/// Status response
#[derive(Debug, Clone, Serialize)]
pub struct HealthTrackerStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub lexicon_foods: usize,
    pub lexicon_activities: usize,
    pub custom_foods: usize,
    pub custom_foods_path: Option<String>,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    custom_foods_path: Option<PathBuf>,
    custom_food_count: usize,
}

impl StatusTracker {
    pub fn new(custom_foods_path: Option<PathBuf>, custom_food_count: usize) -> Self {
        Self {
            start_time: Instant::now(),
            custom_foods_path,
            custom_food_count,
        }
    }

    /// Get the current status
    pub fn get_status(&self, interpreter: &QueryInterpreter) -> HealthTrackerStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        HealthTrackerStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            lexicon_foods: interpreter.foods().len(),
            lexicon_activities: interpreter.activities().len(),
            custom_foods: self.custom_food_count,
            custom_foods_path: self
                .custom_foods_path
                .as_ref()
                .map(|p| p.display().to_string()),
        }
    }
}
