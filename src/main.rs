//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, builds the Cloudflare client and
//! starts the server with the configured transport.

use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cloudflare_dns_mcp_server::core::config::LoggingConfig;
use cloudflare_dns_mcp_server::core::{Config, McpServer, TransportService};
use cloudflare_dns_mcp_server::domains::cloudflare::{CF_API_BASE, CloudflareClient};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing API token is fatal before anything else starts
    let config = Config::from_env()?;

    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let client = Arc::new(CloudflareClient::from_config(&config)?);

    match client.default_zone_id() {
        Some(zone_id) => info!("Default zone configured: {}", zone_id),
        None => warn!("CLOUDFLARE_ZONE_ID not set - record tools will require an explicit zoneId"),
    }
    if config.api.base_url != CF_API_BASE {
        info!("Using Cloudflare API base URL: {}", config.api.base_url);
    }

    let server = McpServer::new(config.clone(), client);

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs always go to stderr; stdout is reserved for the STDIO transport.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
