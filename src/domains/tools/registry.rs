//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-based dispatch for tool calls (used by the HTTP transport)

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject};
use serde_json::Value;
use tracing::warn;

use crate::domains::cloudflare::CloudflareClient;

use super::definitions::{
    CreateDnsRecordTool, DeleteDnsRecordTool, GetDnsRecordTool, GetZoneTool, ListDnsRecordsTool,
    ListZonesTool, UpdateDnsRecordTool,
};
use super::{DnsTool, ToolError, execute};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<CloudflareClient>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `client`.
    pub fn new(client: Arc<CloudflareClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListZonesTool::NAME,
            GetZoneTool::NAME,
            ListDnsRecordsTool::NAME,
            GetDnsRecordTool::NAME,
            CreateDnsRecordTool::NAME,
            UpdateDnsRecordTool::NAME,
            DeleteDnsRecordTool::NAME,
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Only an unknown tool name is an error; every tool failure is reported
    /// inside the returned result. Non-object arguments are treated as empty.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<CallToolResult, ToolError> {
        let arguments = match arguments {
            Value::Object(map) => map,
            _ => JsonObject::new(),
        };
        let client = self.client.as_ref();

        let result = match name {
            ListZonesTool::NAME => execute::<ListZonesTool>(client, arguments).await,
            GetZoneTool::NAME => execute::<GetZoneTool>(client, arguments).await,
            ListDnsRecordsTool::NAME => execute::<ListDnsRecordsTool>(client, arguments).await,
            GetDnsRecordTool::NAME => execute::<GetDnsRecordTool>(client, arguments).await,
            CreateDnsRecordTool::NAME => execute::<CreateDnsRecordTool>(client, arguments).await,
            UpdateDnsRecordTool::NAME => execute::<UpdateDnsRecordTool>(client, arguments).await,
            DeleteDnsRecordTool::NAME => execute::<DeleteDnsRecordTool>(client, arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };

        Ok(result)
    }
}
