//! Activity profile model

use serde::{Deserialize, Serialize};

/// An activity with its energy cost (based on a 70 kg person)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityProfile {
    pub name: String,
    pub calories_per_minute: f64,
}

impl ActivityProfile {
    pub fn new(name: impl Into<String>, calories_per_minute: f64) -> Self {
        Self {
            name: name.into(),
            calories_per_minute,
        }
    }
}
