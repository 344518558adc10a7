//! Cloudflare API domain.
//!
//! This module wraps the Cloudflare v4 REST API used by the DNS tools:
//! - `client.rs` - Typed zone and DNS record operations
//! - `http.rs` - Request building and the HTTP executor seam
//! - `types.rs` - Zone, record and response envelope DTOs
//! - `error.rs` - Client error types
//!
//! Every client method performs exactly one HTTP round trip and unwraps the
//! Cloudflare response envelope, turning `success: false` into an error.

mod client;
mod error;
pub mod http;
pub mod types;

pub use client::{CF_API_BASE, CloudflareClient};
pub use error::{CloudflareError, CloudflareResult};
pub use http::{ApiRequest, HttpExecutor, ReqwestExecutor};
pub use types::{DeletedRecord, DnsRecord, DnsRecordPatch, NewDnsRecord, Zone};
