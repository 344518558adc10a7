//! List DNS records tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::cloudflare::{CloudflareClient, DnsRecord};
use crate::domains::tools::definitions::common::{
    format_timestamp, format_ttl, structured_result, success_result, yes_no,
};
use crate::domains::tools::{DnsTool, ToolError};

/// Parameters for the list DNS records tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDnsRecordsParams {
    /// Zone ID to list records for (optional if set in config)
    pub zone_id: Option<String>,

    /// Filter by record type (e.g., A, AAAA, CNAME, MX, TXT)
    #[serde(rename = "type")]
    pub record_type: Option<String>,

    /// Filter by record name (e.g., www.example.com)
    pub name: Option<String>,
}

/// List DNS records tool.
pub struct ListDnsRecordsTool;

#[async_trait::async_trait]
impl DnsTool for ListDnsRecordsTool {
    const NAME: &'static str = "cloudflare_list_dns_records";
    const DESCRIPTION: &'static str = "List DNS records for a zone";
    const ACTION: &'static str = "listing DNS records";

    type Params = ListDnsRecordsParams;

    async fn run(
        client: &CloudflareClient,
        params: ListDnsRecordsParams,
    ) -> Result<CallToolResult, ToolError> {
        let records = client
            .list_dns_records(
                params.zone_id.as_deref(),
                params.record_type.as_deref(),
                params.name.as_deref(),
            )
            .await?;
        info!("Listed {} DNS records", records.len());

        if records.is_empty() {
            return Ok(success_result(
                "No DNS records found with the specified criteria.".to_string(),
            ));
        }

        let summary = render_records(&records);
        let data = serde_json::json!({ "count": records.len(), "records": records });
        Ok(structured_result(summary, &data))
    }
}

fn render_records(records: &[DnsRecord]) -> String {
    let entries: Vec<String> = records.iter().map(render_entry).collect();
    format!(
        "Found {} DNS records:\n\n{}",
        records.len(),
        entries.join("\n\n")
    )
}

fn render_entry(record: &DnsRecord) -> String {
    let mut lines = vec![
        format!("• {} ({})", record.name, record.record_type),
        format!("  - Content: {}", record.content),
        format!("  - TTL: {}", format_ttl(record.ttl)),
        format!("  - Proxied: {}", yes_no(record.proxied)),
        format!("  - ID: {}", record.id),
    ];
    if let Some(priority) = record.priority.filter(|p| *p != 0) {
        lines.push(format!("  - Priority: {}", priority));
    }
    if let Some(comment) = record.comment.as_deref().filter(|c| !c.is_empty()) {
        lines.push(format!("  - Comment: {}", comment));
    }
    lines.push(format!("  - Modified: {}", format_timestamp(&record.modified_on)));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::cloudflare::http::testing::RecordingExecutor;
    use crate::domains::tools::definitions::common::test_support::{
        args, client, failure, is_error, record_json, text,
    };
    use crate::domains::tools::execute;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_records_renders_entries() {
        let mut mx = record_json();
        mx["id"] = json!("rec456");
        mx["name"] = json!("example.com");
        mx["type"] = json!("MX");
        mx["content"] = json!("mail.example.com");
        mx["ttl"] = json!(3600);
        mx["priority"] = json!(10);
        mx["comment"] = json!("primary mail");
        let executor = Arc::new(RecordingExecutor::success(json!([record_json(), mx])));
        let client = client(&executor, Some("zone123"));

        let result = execute::<ListDnsRecordsTool>(&client, args(json!({}))).await;

        assert!(!is_error(&result));
        let text = text(&result);
        assert!(text.starts_with("Found 2 DNS records:"));
        assert!(text.contains("• www.example.com (A)\n  - Content: 203.0.113.5\n  - TTL: Auto"));
        assert!(text.contains("  - Proxied: No\n  - ID: rec123\n  - Modified: 2024-05-02 11:30:00 UTC"));
        assert!(text.contains("  - TTL: 3600"));
        assert!(text.contains("  - Priority: 10"));
        assert!(text.contains("  - Comment: primary mail"));
    }

    #[tokio::test]
    async fn test_list_records_empty_is_not_error() {
        let executor = Arc::new(RecordingExecutor::success(json!([])));
        let client = client(&executor, Some("zone123"));

        let result = execute::<ListDnsRecordsTool>(
            &client,
            args(json!({ "type": "CNAME", "name": "nothing.example.com" })),
        )
        .await;

        assert!(!is_error(&result));
        assert_eq!(
            text(&result),
            "No DNS records found with the specified criteria."
        );
        assert!(executor.requests()[0]
            .url
            .ends_with("/zones/zone123/dns_records?type=CNAME&name=nothing.example.com"));
    }

    #[tokio::test]
    async fn test_list_records_without_zone() {
        let executor = Arc::new(RecordingExecutor::new());
        let client = client(&executor, None);

        let result = execute::<ListDnsRecordsTool>(&client, args(json!({}))).await;

        assert!(is_error(&result));
        assert!(text(&result).starts_with("Error listing DNS records: Zone ID is required"));
        assert_eq!(executor.request_count(), 0);
    }

    #[tokio::test]
    async fn test_list_records_unknown_error() {
        let executor = Arc::new(RecordingExecutor::responding(failure(&[])));
        let client = client(&executor, Some("zone123"));

        let result = execute::<ListDnsRecordsTool>(&client, args(json!({}))).await;

        assert!(is_error(&result));
        assert!(text(&result).contains("Unknown error"));
    }
}
