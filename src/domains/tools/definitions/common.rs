//! Common utilities shared across the Cloudflare tools.
//!
//! Argument validation, result constructors and the text rendering helpers
//! used by several tools.

use chrono::{DateTime, Utc};
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domains::cloudflare::DnsRecord;
use crate::domains::tools::ToolError;

/// TTL value Cloudflare uses for "automatic".
pub const AUTO_TTL: u32 = 1;

/// Check required string parameters, then decode the full argument object.
pub fn parse_params<P: DeserializeOwned>(
    arguments: JsonObject,
    required: &[&str],
) -> Result<P, ToolError> {
    for field in required {
        let present = arguments
            .get(*field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty());
        if !present {
            return Err(ToolError::invalid_arguments(format!(
                "{} parameter must be a string",
                field
            )));
        }
    }

    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(format!("Invalid arguments: {}", e)))
}

/// Deserialize an optional whole number that may arrive as a JSON float.
///
/// `300` and `300.0` both decode to `300`; fractions, negatives and values
/// out of range for `T` are rejected.
pub fn whole_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if value < 0.0 || value.fract() != 0.0 {
        return Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {}",
            value
        )));
    }

    T::try_from(value as u64)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("{} is out of range", value)))
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result with a text summary plus structured content.
pub fn structured_result<T: Serialize>(summary: String, data: &T) -> CallToolResult {
    let mut result = success_result(summary);
    match serde_json::to_value(data) {
        Ok(value) => result.structured_content = Some(value),
        Err(e) => warn!("Could not attach structured content: {}", e),
    }
    result
}

/// Render a TTL, showing the automatic sentinel as `Auto`.
pub fn format_ttl(ttl: u32) -> String {
    if ttl == AUTO_TTL {
        "Auto".to_string()
    } else {
        ttl.to_string()
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Format an RFC 3339 timestamp for display; unparseable input is returned as is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Field summary shared by the single-record tools.
///
/// Priority and comment only appear when set to a non-empty value.
pub fn record_summary(record: &DnsRecord) -> String {
    let mut lines = vec![
        format!("Name: {}", record.name),
        format!("Type: {}", record.record_type),
        format!("Content: {}", record.content),
        format!("TTL: {}", format_ttl(record.ttl)),
        format!("Proxied: {}", yes_no(record.proxied)),
        format!("Record ID: {}", record.id),
    ];

    if let Some(priority) = record.priority.filter(|p| *p != 0) {
        lines.push(format!("Priority: {}", priority));
    }
    if let Some(comment) = record.comment.as_deref().filter(|c| !c.is_empty()) {
        lines.push(format!("Comment: {}", comment));
    }

    lines.join("\n")
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Helpers for tool tests.

    use std::sync::Arc;

    use rmcp::model::{CallToolResult, JsonObject, RawContent};
    use serde_json::{Value, json};

    use crate::domains::cloudflare::http::testing::RecordingExecutor;
    use crate::domains::cloudflare::{CF_API_BASE, CloudflareClient};

    pub fn client(executor: &Arc<RecordingExecutor>, zone: Option<&str>) -> CloudflareClient {
        CloudflareClient::new(
            "test-token",
            zone.map(String::from),
            CF_API_BASE,
            executor.clone(),
        )
        .unwrap()
    }

    pub fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected a JSON object"),
        }
    }

    pub fn text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    pub fn is_error(result: &CallToolResult) -> bool {
        result.is_error.unwrap_or(false)
    }

    pub fn record_json() -> Value {
        json!({
            "id": "rec123",
            "zone_id": "zone123",
            "zone_name": "example.com",
            "name": "www.example.com",
            "type": "A",
            "content": "203.0.113.5",
            "proxiable": true,
            "proxied": false,
            "ttl": 1,
            "created_on": "2024-05-01T10:00:00.000000Z",
            "modified_on": "2024-05-02T11:30:00.000000Z"
        })
    }

    pub fn failure(messages: &[&str]) -> Value {
        let errors: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "code": 1000, "message": m }))
            .collect();
        json!({ "success": false, "errors": errors, "messages": [], "result": null })
    }
}
