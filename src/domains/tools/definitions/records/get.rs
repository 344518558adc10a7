//! Get DNS record tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use crate::domains::cloudflare::CloudflareClient;
use crate::domains::tools::definitions::common::{
    format_timestamp, record_summary, structured_result,
};
use crate::domains::tools::{DnsTool, ToolError};

/// Parameters for the get DNS record tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetDnsRecordParams {
    /// DNS record ID to fetch
    pub record_id: String,

    /// Zone ID (optional if set in config)
    pub zone_id: Option<String>,
}

/// Get DNS record tool.
pub struct GetDnsRecordTool;

#[async_trait::async_trait]
impl DnsTool for GetDnsRecordTool {
    const NAME: &'static str = "cloudflare_get_dns_record";
    const DESCRIPTION: &'static str = "Get details for a specific DNS record";
    const ACTION: &'static str = "getting DNS record";
    const REQUIRED: &'static [&'static str] = &["recordId"];

    type Params = GetDnsRecordParams;

    #[instrument(skip_all, fields(record_id = %params.record_id))]
    async fn run(
        client: &CloudflareClient,
        params: GetDnsRecordParams,
    ) -> Result<CallToolResult, ToolError> {
        let record = client
            .get_dns_record(&params.record_id, params.zone_id.as_deref())
            .await?;

        let mut summary = format!("DNS record details:\n\n{}", record_summary(&record));
        if let Some(zone_name) = record.zone_name.as_deref() {
            summary.push_str(&format!("\nZone: {}", zone_name));
        }
        summary.push_str(&format!(
            "\nCreated: {}\nModified: {}",
            format_timestamp(&record.created_on),
            format_timestamp(&record.modified_on)
        ));

        Ok(structured_result(summary, &record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::cloudflare::http::testing::RecordingExecutor;
    use crate::domains::tools::definitions::common::test_support::{
        args, client, is_error, record_json, text,
    };
    use crate::domains::tools::execute;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_record_renders_details() {
        let executor = Arc::new(RecordingExecutor::success(record_json()));
        let client = client(&executor, None);

        let result = execute::<GetDnsRecordTool>(
            &client,
            args(json!({ "recordId": "rec123", "zoneId": "zone123" })),
        )
        .await;

        assert!(!is_error(&result));
        let text = text(&result);
        assert!(text.contains("Name: www.example.com"));
        assert!(text.contains("Zone: example.com"));
        assert!(text.contains("Created: 2024-05-01 10:00:00 UTC"));
        assert!(text.contains("Modified: 2024-05-02 11:30:00 UTC"));
        assert!(executor.requests()[0]
            .url
            .ends_with("/zones/zone123/dns_records/rec123"));
    }

    #[tokio::test]
    async fn test_get_record_requires_record_id() {
        let executor = Arc::new(RecordingExecutor::new());
        let client = client(&executor, Some("zone123"));

        let result = execute::<GetDnsRecordTool>(&client, args(json!({ "recordId": true }))).await;

        assert!(is_error(&result));
        assert_eq!(
            text(&result),
            "Error getting DNS record: recordId parameter must be a string"
        );
        assert_eq!(executor.request_count(), 0);
    }
}
