//! Create DNS record tool definition.
//!
//! Builds a sparse creation payload: `ttl` is always sent (defaulting to
//! automatic), while `priority`, `proxied` and `comment` are only sent when the
//! caller provided them.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::cloudflare::{CloudflareClient, NewDnsRecord};
use crate::domains::tools::definitions::common::{
    whole_number,
    AUTO_TTL, format_timestamp, record_summary, structured_result,
};
use crate::domains::tools::{DnsTool, ToolError};

/// Parameters for the create DNS record tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDnsRecordParams {
    /// Zone ID to create record in (optional if set in config)
    pub zone_id: Option<String>,

    /// Record type (e.g., A, AAAA, CNAME, MX, TXT)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Record name (e.g., www.example.com or @)
    pub name: String,

    /// Record content (IP address, hostname, text content, etc.)
    pub content: String,

    /// Time to live in seconds (1 = auto, 120-7200)
    #[serde(default, deserialize_with = "whole_number")]
    #[schemars(extend("default" = 1))]
    pub ttl: Option<u32>,

    /// Priority for MX records
    #[serde(default, deserialize_with = "whole_number")]
    pub priority: Option<u16>,

    /// Whether the record should be proxied through Cloudflare
    #[schemars(extend("default" = false))]
    pub proxied: Option<bool>,

    /// Comment for the record
    pub comment: Option<String>,
}

/// Build the creation payload from the tool parameters.
///
/// A missing or zero `ttl` becomes automatic. A zero `priority` and an empty
/// `comment` are treated as not provided; `proxied` is kept whenever present,
/// including `false`.
pub fn build_new_record(params: &CreateDnsRecordParams) -> NewDnsRecord {
    let ttl = params.ttl.filter(|t| *t != 0).unwrap_or(AUTO_TTL);

    let mut record = NewDnsRecord::new(&params.record_type, &params.name, &params.content, ttl);
    record.priority = params.priority.filter(|p| *p != 0);
    record.proxied = params.proxied;
    record.comment = params.comment.clone().filter(|c| !c.is_empty());
    record
}

/// Create DNS record tool.
pub struct CreateDnsRecordTool;

#[async_trait::async_trait]
impl DnsTool for CreateDnsRecordTool {
    const NAME: &'static str = "cloudflare_create_dns_record";
    const DESCRIPTION: &'static str = "Create a new DNS record in a zone";
    const ACTION: &'static str = "creating DNS record";
    const REQUIRED: &'static [&'static str] = &["type", "name", "content"];

    type Params = CreateDnsRecordParams;

    #[instrument(skip_all, fields(name = %params.name, record_type = %params.record_type))]
    async fn run(
        client: &CloudflareClient,
        params: CreateDnsRecordParams,
    ) -> Result<CallToolResult, ToolError> {
        let payload = build_new_record(&params);
        let record = client
            .create_dns_record(&payload, params.zone_id.as_deref())
            .await?;
        info!("Created DNS record {}", record.id);

        let summary = format!(
            "✅ Successfully created DNS record:\n\n{}\nCreated: {}",
            record_summary(&record),
            format_timestamp(&record.created_on)
        );
        Ok(structured_result(summary, &record))
    }
}
