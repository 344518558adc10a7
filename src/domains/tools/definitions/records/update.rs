//! Update DNS record tool definition.
//!
//! Sends a PATCH containing only the fields the caller supplied. Empty
//! `type`/`name`/`content` and a zero `ttl` mean "leave unchanged"; `priority`,
//! `proxied` and `comment` are sent whenever present, so `comment: ""` clears
//! the remote comment and `proxied: false` turns proxying off.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::domains::cloudflare::{CloudflareClient, DnsRecordPatch};
use crate::domains::tools::definitions::common::{
    whole_number,
    format_timestamp, record_summary, structured_result,
};
use crate::domains::tools::{DnsTool, ToolError};

/// Parameters for the update DNS record tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDnsRecordParams {
    /// DNS record ID to update
    pub record_id: String,

    /// Zone ID (optional if set in config)
    pub zone_id: Option<String>,

    /// Record type (e.g., A, AAAA, CNAME, MX, TXT)
    #[serde(rename = "type")]
    pub record_type: Option<String>,

    /// Record name (e.g., www.example.com or @)
    pub name: Option<String>,

    /// Record content (IP address, hostname, text content, etc.)
    pub content: Option<String>,

    /// Time to live in seconds (1 = auto, 120-7200)
    #[serde(default, deserialize_with = "whole_number")]
    pub ttl: Option<u32>,

    /// Priority for MX records
    #[serde(default, deserialize_with = "whole_number")]
    pub priority: Option<u16>,

    /// Whether the record should be proxied through Cloudflare
    pub proxied: Option<bool>,

    /// Comment for the record (an empty string clears it)
    pub comment: Option<String>,
}

/// Build the patch payload from the tool parameters.
pub fn build_patch(params: &UpdateDnsRecordParams) -> DnsRecordPatch {
    let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

    DnsRecordPatch {
        record_type: non_empty(&params.record_type),
        name: non_empty(&params.name),
        content: non_empty(&params.content),
        ttl: params.ttl.filter(|t| *t != 0),
        priority: params.priority,
        proxied: params.proxied,
        comment: params.comment.clone(),
    }
}

/// Update DNS record tool.
pub struct UpdateDnsRecordTool;

#[async_trait::async_trait]
impl DnsTool for UpdateDnsRecordTool {
    const NAME: &'static str = "cloudflare_update_dns_record";
    const DESCRIPTION: &'static str = "Update an existing DNS record";
    const ACTION: &'static str = "updating DNS record";
    const REQUIRED: &'static [&'static str] = &["recordId"];

    type Params = UpdateDnsRecordParams;

    #[instrument(skip_all, fields(record_id = %params.record_id))]
    async fn run(
        client: &CloudflareClient,
        params: UpdateDnsRecordParams,
    ) -> Result<CallToolResult, ToolError> {
        let patch = build_patch(&params);
        if patch.is_empty() {
            warn!("Update of {} carries no changes", params.record_id);
        }

        let record = client
            .update_dns_record(&params.record_id, &patch, params.zone_id.as_deref())
            .await?;
        info!("Updated DNS record {}", record.id);

        let summary = format!(
            "✅ Successfully updated DNS record:\n\n{}\nModified: {}",
            record_summary(&record),
            format_timestamp(&record.modified_on)
        );
        Ok(structured_result(summary, &record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::cloudflare::http::testing::RecordingExecutor;
    use crate::domains::tools::definitions::common::test_support::{
        args, client, failure, is_error, record_json, text,
    };
    use crate::domains::tools::execute;
    use reqwest::Method;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_update_empty_comment_sends_only_comment() {
        let executor = Arc::new(RecordingExecutor::success(record_json()));
        let client = client(&executor, Some("zone123"));

        let result = execute::<UpdateDnsRecordTool>(
            &client,
            args(json!({ "recordId": "rec123", "comment": "" })),
        )
        .await;

        assert!(!is_error(&result));
        let requests = executor.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::PATCH);
        assert!(requests[0].url.ends_with("/zones/zone123/dns_records/rec123"));
        assert_eq!(requests[0].body, Some(json!({ "comment": "" })));
    }

    #[tokio::test]
    async fn test_update_keeps_false_and_zero_values() {
        let executor = Arc::new(RecordingExecutor::success(record_json()));
        let client = client(&executor, Some("zone123"));

        execute::<UpdateDnsRecordTool>(
            &client,
            args(json!({
                "recordId": "rec123",
                "proxied": false,
                "priority": 0,
                "ttl": 0,
                "content": ""
            })),
        )
        .await;

        assert_eq!(
            executor.requests()[0].body,
            Some(json!({ "priority": 0, "proxied": false }))
        );
    }

    #[tokio::test]
    async fn test_update_renders_modified_record() {
        let mut updated = record_json();
        updated["content"] = json!("198.51.100.7");
        updated["ttl"] = json!(600);
        updated["proxied"] = json!(true);
        let executor = Arc::new(RecordingExecutor::success(updated));
        let client = client(&executor, Some("zone123"));

        let result = execute::<UpdateDnsRecordTool>(
            &client,
            args(json!({
                "recordId": "rec123",
                "content": "198.51.100.7",
                "ttl": 600,
                "proxied": true
            })),
        )
        .await;

        assert_eq!(
            executor.requests()[0].body,
            Some(json!({ "content": "198.51.100.7", "ttl": 600, "proxied": true }))
        );
        let text = text(&result);
        assert!(text.starts_with("✅ Successfully updated DNS record:"));
        assert!(text.contains("Content: 198.51.100.7"));
        assert!(text.contains("TTL: 600"));
        assert!(text.contains("Proxied: Yes"));
        assert!(text.contains("Modified: 2024-05-02 11:30:00 UTC"));
    }

    #[tokio::test]
    async fn test_update_requires_record_id() {
        let executor = Arc::new(RecordingExecutor::new());
        let client = client(&executor, Some("zone123"));

        let result =
            execute::<UpdateDnsRecordTool>(&client, args(json!({ "content": "1.2.3.4" }))).await;

        assert!(is_error(&result));
        assert_eq!(
            text(&result),
            "Error updating DNS record: recordId parameter must be a string"
        );
        assert_eq!(executor.request_count(), 0);
    }

    #[tokio::test]
    async fn test_update_without_zone() {
        let executor = Arc::new(RecordingExecutor::new());
        let client = client(&executor, None);

        let result =
            execute::<UpdateDnsRecordTool>(&client, args(json!({ "recordId": "rec123" }))).await;

        assert!(is_error(&result));
        assert!(text(&result).contains("Zone ID is required"));
        assert_eq!(executor.request_count(), 0);
    }

    #[tokio::test]
    async fn test_update_remote_error() {
        let executor = Arc::new(RecordingExecutor::responding(failure(&[
            "Record does not exist.",
        ])));
        let client = client(&executor, Some("zone123"));

        let result = execute::<UpdateDnsRecordTool>(
            &client,
            args(json!({ "recordId": "missing", "ttl": 120 })),
        )
        .await;

        assert!(is_error(&result));
        assert!(text(&result).contains("Record does not exist."));
    }
}
