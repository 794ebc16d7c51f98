//! Server configuration
//!
//! Read from environment variables at startup:
//!
//! - `HT_LOG`: tracing directive added to the default filter
//!   (default `health_tracker=info`)
//! - `HT_CUSTOM_FOODS`: path to a JSON array of custom foods available to
//!   every query

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::interpreter::{validate_food, InterpretError};
use crate::models::FoodProfile;

pub const LOG_ENV: &str = "HT_LOG";
pub const CUSTOM_FOODS_ENV: &str = "HT_CUSTOM_FOODS";
pub const DEFAULT_LOG_DIRECTIVE: &str = "health_tracker=info";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read custom foods from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse custom foods from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Custom food #{index} has no name")]
    UnnamedFood { index: usize },

    #[error("Invalid custom food: {0}")]
    InvalidFood(#[from] InterpretError),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub log_directive: String,
    pub custom_foods_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            custom_foods_path: None,
        }
    }
}

impl ServerConfig {
    /// Build from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; blank values count as unset
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_directive: get(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string()),
            custom_foods_path: get(CUSTOM_FOODS_ENV).map(PathBuf::from),
        }
    }

    /// Load the configured custom foods, or none if no path is set
    pub fn load_custom_foods(&self) -> ConfigResult<Vec<FoodProfile>> {
        match &self.custom_foods_path {
            Some(path) => load_custom_foods(path),
            None => Ok(Vec::new()),
        }
    }
}

/// Read and validate a JSON array of custom foods
pub fn load_custom_foods(path: &Path) -> ConfigResult<Vec<FoodProfile>> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let foods: Vec<FoodProfile> =
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, food) in foods.iter().enumerate() {
        if food.name.trim().is_empty() {
            return Err(ConfigError::UnnamedFood { index });
        }
        validate_food(food)?;
    }

    tracing::info!(count = foods.len(), path = %path.display(), "Loaded custom foods");
    Ok(foods)
}
