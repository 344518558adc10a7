//! Tool-specific error types.

use thiserror::Error;

use crate::domains::cloudflare::CloudflareError;

/// Errors that can occur during tool operations.
///
/// Every variant except `NotFound` is rendered into a flagged text result by
/// the tool wrapper rather than reaching the MCP client as a protocol error.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("{0}")]
    InvalidArguments(String),

    /// The Cloudflare call failed.
    #[error(transparent)]
    Cloudflare(#[from] CloudflareError),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
