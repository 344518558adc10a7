//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each route shares the same Cloudflare client; the definitions know how to
//! describe and execute themselves through `create_route`.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::cloudflare::CloudflareClient;

use super::create_route;
use super::definitions::{
    CreateDnsRecordTool, DeleteDnsRecordTool, GetDnsRecordTool, GetZoneTool, ListDnsRecordsTool,
    ListZonesTool, UpdateDnsRecordTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<CloudflareClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<ListZonesTool, S>(client.clone()))
        .with_route(create_route::<GetZoneTool, S>(client.clone()))
        .with_route(create_route::<ListDnsRecordsTool, S>(client.clone()))
        .with_route(create_route::<GetDnsRecordTool, S>(client.clone()))
        .with_route(create_route::<CreateDnsRecordTool, S>(client.clone()))
        .with_route(create_route::<UpdateDnsRecordTool, S>(client.clone()))
        .with_route(create_route::<DeleteDnsRecordTool, S>(client))
}
