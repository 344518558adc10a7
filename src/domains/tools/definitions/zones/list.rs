//! List zones tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::cloudflare::{CloudflareClient, Zone};
use crate::domains::tools::definitions::common::structured_result;
use crate::domains::tools::{DnsTool, ToolError};

/// Parameters for the list zones tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListZonesParams {}

/// List zones tool - lists every zone the API token can access.
pub struct ListZonesTool;

#[async_trait::async_trait]
impl DnsTool for ListZonesTool {
    const NAME: &'static str = "cloudflare_list_zones";
    const DESCRIPTION: &'static str = "List all DNS zones accessible to the API token";
    const ACTION: &'static str = "listing zones";

    type Params = ListZonesParams;

    async fn run(
        client: &CloudflareClient,
        _params: ListZonesParams,
    ) -> Result<CallToolResult, ToolError> {
        let zones = client.list_zones().await?;
        info!("Listed {} zones", zones.len());

        let summary = render_zones(&zones);
        let data = serde_json::json!({ "count": zones.len(), "zones": zones });
        Ok(structured_result(summary, &data))
    }
}

fn render_zones(zones: &[Zone]) -> String {
    let entries: Vec<String> = zones
        .iter()
        .map(|zone| {
            format!(
                "• {}\n  - Zone ID: {}\n  - Status: {}\n  - Account: {}\n  - Name servers: {}",
                zone.name,
                zone.id,
                zone.status,
                zone.account.name,
                zone.name_servers.join(", ")
            )
        })
        .collect();

    format!("Found {} DNS zones:\n\n{}", zones.len(), entries.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::cloudflare::http::testing::RecordingExecutor;
    use crate::domains::tools::definitions::common::test_support::{
        args, client, failure, is_error, text,
    };
    use crate::domains::tools::execute;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_zones_renders_each_zone() {
        let executor = Arc::new(RecordingExecutor::success(json!([
            {
                "id": "zone1",
                "name": "example.com",
                "status": "active",
                "account": { "id": "acc1", "name": "Acme Corp" },
                "name_servers": ["ada.ns.cloudflare.com", "bob.ns.cloudflare.com"],
                "original_name_servers": []
            },
            {
                "id": "zone2",
                "name": "example.org",
                "status": "pending",
                "account": { "id": "acc1", "name": "Acme Corp" },
                "name_servers": [],
                "original_name_servers": []
            }
        ])));
        let client = client(&executor, None);

        let result = execute::<ListZonesTool>(&client, args(json!({}))).await;

        assert!(!is_error(&result));
        let text = text(&result);
        assert!(text.starts_with("Found 2 DNS zones:"));
        assert!(text.contains("• example.com\n  - Zone ID: zone1"));
        assert!(text.contains("  - Account: Acme Corp"));
        assert!(text.contains("  - Name servers: ada.ns.cloudflare.com, bob.ns.cloudflare.com"));
        assert!(text.contains("  - Status: pending"));
        assert_eq!(result.structured_content.as_ref().unwrap()["count"], 2);
    }

    #[tokio::test]
    async fn test_list_zones_remote_error() {
        let executor = Arc::new(RecordingExecutor::responding(failure(&[
            "Authentication error",
        ])));
        let client = client(&executor, None);

        let result = execute::<ListZonesTool>(&client, args(json!({}))).await;

        assert!(is_error(&result));
        assert_eq!(
            text(&result),
            "Error listing zones: Cloudflare API Error: Authentication error"
        );
    }

    #[tokio::test]
    async fn test_list_zones_network_failure_is_flagged() {
        // No canned response: the executor fails like an unreachable host.
        let executor = Arc::new(RecordingExecutor::new());
        let client = client(&executor, None);

        let result = execute::<ListZonesTool>(&client, args(json!({}))).await;

        assert!(is_error(&result));
        assert!(text(&result).starts_with("Error listing zones: Network error"));
    }
}
