//! Delete DNS record tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::cloudflare::CloudflareClient;
use crate::domains::tools::definitions::common::structured_result;
use crate::domains::tools::{DnsTool, ToolError};

/// Parameters for the delete DNS record tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDnsRecordParams {
    /// DNS record ID to delete
    pub record_id: String,

    /// Zone ID (optional if set in config)
    pub zone_id: Option<String>,
}

/// Delete DNS record tool.
pub struct DeleteDnsRecordTool;

#[async_trait::async_trait]
impl DnsTool for DeleteDnsRecordTool {
    const NAME: &'static str = "cloudflare_delete_dns_record";
    const DESCRIPTION: &'static str = "Delete a DNS record";
    const ACTION: &'static str = "deleting DNS record";
    const REQUIRED: &'static [&'static str] = &["recordId"];

    type Params = DeleteDnsRecordParams;

    #[instrument(skip_all, fields(record_id = %params.record_id))]
    async fn run(
        client: &CloudflareClient,
        params: DeleteDnsRecordParams,
    ) -> Result<CallToolResult, ToolError> {
        let deleted = client
            .delete_dns_record(&params.record_id, params.zone_id.as_deref())
            .await?;
        info!("Deleted DNS record {}", deleted.id);

        let summary = format!("✅ Successfully deleted DNS record with ID: {}", deleted.id);
        Ok(structured_result(summary, &deleted))
    }
}
