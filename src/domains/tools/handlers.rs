//! Shared tool plumbing.
//!
//! Every Cloudflare tool implements [`DnsTool`]. The functions here turn a
//! tool type into rmcp metadata and a route, and run it behind a single
//! wrapper that converts any error into a flagged text result.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use super::definitions::common::{error_result, parse_params};
use super::error::ToolError;
use crate::domains::cloudflare::CloudflareClient;

/// A Cloudflare tool: metadata plus one client call.
#[async_trait::async_trait]
pub trait DnsTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// What the tool is doing, used in failure messages ("listing zones").
    const ACTION: &'static str;

    /// Parameters that must be present as non-empty strings.
    const REQUIRED: &'static [&'static str] = &[];

    /// Typed parameters; their JSON schema is the tool's input schema.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Perform the call and render the outcome.
    async fn run(
        client: &CloudflareClient,
        params: Self::Params,
    ) -> Result<CallToolResult, ToolError>;
}

/// Run `operation`, rendering any error as `Error <action>: <message>`.
pub async fn run_tool<F>(action: &str, operation: F) -> CallToolResult
where
    F: Future<Output = Result<CallToolResult, ToolError>>,
{
    match operation.await {
        Ok(result) => result,
        Err(e) => error_result(&format!("Error {}: {}", action, e)),
    }
}

/// Validate raw arguments and execute tool `T`. Never fails.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn execute<T: DnsTool>(client: &CloudflareClient, arguments: JsonObject) -> CallToolResult {
    info!("Tool called: {}", T::NAME);

    run_tool(T::ACTION, async {
        let params = parse_params::<T::Params>(arguments, T::REQUIRED)?;
        T::run(client, params).await
    })
    .await
}

/// Create a Tool model for `T` (metadata).
pub fn to_tool<T: DnsTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for `T` backed by `client`.
pub fn create_route<T, S>(client: Arc<CloudflareClient>) -> ToolRoute<S>
where
    T: DnsTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        async move { Ok::<CallToolResult, McpError>(execute::<T>(&client, args).await) }.boxed()
    })
}
