//! Domains module containing business logic organized by bounded contexts.
//!
//! - **cloudflare**: Typed client for the Cloudflare v4 API (zones and DNS records)
//! - **tools**: MCP tools exposing the client operations to clients

pub mod cloudflare;
pub mod tools;
