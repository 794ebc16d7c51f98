//! Health Tracker Library
//!
//! Free-text food and exercise extraction, and nutrition planning.

pub mod build_info;
pub mod config;
pub mod interpreter;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
