//! Health Tracker
//!
//! An MCP server that turns short free-text messages into food and exercise
//! entries and computes nutrition and exercise targets.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use health_tracker::build_info;
use health_tracker::config::ServerConfig;
use health_tracker::mcp::HealthTrackerService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();

    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    // A bad custom food file stops startup rather than silently dropping foods
    let custom_foods = config.load_custom_foods()?;
    if let Some(path) = &config.custom_foods_path {
        eprintln!("Custom foods: {} from {}", custom_foods.len(), path.display());
    }

    let service = HealthTrackerService::new(config.custom_foods_path.clone(), custom_foods);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
