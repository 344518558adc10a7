//! Get zone tool definition.
//!
//! Shows the full details of a single zone, including timestamps and name
//! server assignments.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::cloudflare::{CloudflareClient, Zone};
use crate::domains::tools::definitions::common::{format_timestamp, structured_result};
use crate::domains::tools::{DnsTool, ToolError};

/// Parameters for the get zone tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetZoneParams {
    /// Zone ID to get details for
    pub zone_id: String,
}

/// Get zone tool - fetches a single zone by id.
pub struct GetZoneTool;

#[async_trait::async_trait]
impl DnsTool for GetZoneTool {
    const NAME: &'static str = "cloudflare_get_zone";
    const DESCRIPTION: &'static str = "Get details for a specific DNS zone";
    const ACTION: &'static str = "getting zone details";
    const REQUIRED: &'static [&'static str] = &["zoneId"];

    type Params = GetZoneParams;

    #[instrument(skip_all, fields(zone_id = %params.zone_id))]
    async fn run(
        client: &CloudflareClient,
        params: GetZoneParams,
    ) -> Result<CallToolResult, ToolError> {
        let zone = client.get_zone(&params.zone_id).await?;
        info!("Fetched zone {}", zone.name);

        Ok(structured_result(render_zone(&zone), &zone))
    }
}

fn render_zone(zone: &Zone) -> String {
    let mut lines = vec![
        format!("Zone Details for {}:", zone.name),
        String::new(),
        format!("Zone ID: {}", zone.id),
        format!("Status: {}", zone.status),
        format!("Account: {} ({})", zone.account.name, zone.account.id),
        format!("Created: {}", format_timestamp(&zone.created_on)),
        format!("Modified: {}", format_timestamp(&zone.modified_on)),
        format!(
            "Activated: {}",
            zone.activated_on
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "Not activated".to_string())
        ),
        format!("Name servers: {}", zone.name_servers.join(", ")),
        format!(
            "Original name servers: {}",
            zone.original_name_servers.join(", ")
        ),
    ];

    if let Some(registrar) = zone.original_registrar.as_deref().filter(|r| !r.is_empty()) {
        lines.push(format!("Original registrar: {}", registrar));
    }
    if let Some(dnshost) = zone.original_dnshost.as_deref().filter(|h| !h.is_empty()) {
        lines.push(format!("Original DNS host: {}", dnshost));
    }
    // Remaining seconds while enabled, negative once it has expired.
    if let Some(mode) = zone.development_mode.filter(|m| *m != 0) {
        let state = if mode > 0 { "On" } else { "Off" };
        lines.push(format!("Development mode: {}", state));
    }

    lines.join("\n")
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

    fn zone_json() -> serde_json::Value {
        json!({
            "id": "zone123",
            "name": "example.com",
            "status": "active",
            "account": { "id": "acc1", "name": "Acme Corp" },
            "created_on": "2024-01-01T08:00:00.000000Z",
            "modified_on": "2024-02-01T09:15:00.000000Z",
            "activated_on": "2024-01-01T08:05:00.000000Z",
            "name_servers": ["ada.ns.cloudflare.com", "bob.ns.cloudflare.com"],
            "original_name_servers": ["ns1.registrar.net"],
            "original_registrar": "Example Registrar",
            "development_mode": 0
        })
    }

    #[tokio::test]
    async fn test_get_zone_renders_details() {
        let executor = Arc::new(RecordingExecutor::success(zone_json()));
        let client = client(&executor, None);

        let result = execute::<GetZoneTool>(&client, args(json!({ "zoneId": "zone123" }))).await;

        assert!(!is_error(&result));
        let text = text(&result);
        assert!(text.starts_with("Zone Details for example.com:"));
        assert!(text.contains("Account: Acme Corp (acc1)"));
        assert!(text.contains("Created: 2024-01-01 08:00:00 UTC"));
        assert!(text.contains("Activated: 2024-01-01 08:05:00 UTC"));
        assert!(text.contains("Original name servers: ns1.registrar.net"));
        assert!(text.contains("Original registrar: Example Registrar"));
        assert!(!text.contains("Development mode"));
        assert!(executor.requests()[0].url.ends_with("/zones/zone123"));
    }

    #[tokio::test]
    async fn test_get_zone_development_mode_and_pending() {
        let mut zone = zone_json();
        zone["development_mode"] = json!(7200);
        zone["activated_on"] = json!(null);
        let executor = Arc::new(RecordingExecutor::success(zone));
        let client = client(&executor, None);

        let result = execute::<GetZoneTool>(&client, args(json!({ "zoneId": "zone123" }))).await;

        let text = text(&result);
        assert!(text.contains("Development mode: On"));
        assert!(text.contains("Activated: Not activated"));
    }

    #[tokio::test]
    async fn test_get_zone_requires_zone_id() {
        let executor = Arc::new(RecordingExecutor::new());
        let client = client(&executor, Some("default-zone"));

        for arguments in [json!({}), json!({ "zoneId": 42 }), json!({ "zoneId": "" })] {
            let result = execute::<GetZoneTool>(&client, args(arguments)).await;
            assert!(is_error(&result));
            assert_eq!(
                text(&result),
                "Error getting zone details: zoneId parameter must be a string"
            );
        }
        assert_eq!(executor.request_count(), 0);
    }

    #[tokio::test]
    async fn test_get_zone_invalid_zone() {
        let executor = Arc::new(RecordingExecutor::responding(failure(&["Invalid zone"])));
        let client = client(&executor, None);

        let result = execute::<GetZoneTool>(&client, args(json!({ "zoneId": "nope" }))).await;

        assert!(is_error(&result));
        assert!(text(&result).contains("Invalid zone"));
    }
}
