//! Cloudflare DNS MCP Server Library
//!
//! This crate exposes Cloudflare zone and DNS record management as Model
//! Context Protocol (MCP) tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the main server and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **cloudflare**: Typed client for the Cloudflare v4 REST API
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cloudflare_dns_mcp_server::core::{Config, McpServer, TransportService};
//! use cloudflare_dns_mcp_server::domains::cloudflare::CloudflareClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = Arc::new(CloudflareClient::from_config(&config)?);
//!     let server = McpServer::new(config.clone(), client);
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
