//! Health Tracker Tools module
//!
//! Tool implementations behind the MCP server.

pub mod query;
pub mod recommendations;
pub mod status;
