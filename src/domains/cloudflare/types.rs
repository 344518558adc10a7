//! Cloudflare API type definitions.
//!
//! Response DTOs mirror the JSON returned by the v4 API. Request payloads use
//! `Option` fields skipped when unset so that only what the caller chose to
//! send ends up on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Response Envelope
// ============================================================================

/// Envelope wrapping every Cloudflare API response.
///
/// `result` is kept as raw JSON and only decoded into the caller's type once
/// `success` has been checked.
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ResponseMessage>,
    #[serde(default)]
    pub messages: Vec<ResponseMessage>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}

/// An entry of the `errors` or `messages` arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub message_type: Option<String>,
}

/// Paging information attached to collection responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub total_pages: u32,
}

// ============================================================================
// Zones
// ============================================================================

/// A DNS zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub status: String,
    pub account: ZoneAccount,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub modified_on: String,
    /// Null while the zone is still pending.
    #[serde(default)]
    pub activated_on: Option<String>,
    #[serde(default)]
    pub name_servers: Vec<String>,
    #[serde(default)]
    pub original_name_servers: Vec<String>,
    #[serde(default)]
    pub original_registrar: Option<String>,
    #[serde(default)]
    pub original_dnshost: Option<String>,
    /// Seconds of development mode remaining; negative once expired.
    #[serde(default)]
    pub development_mode: Option<i64>,
}

/// The account owning a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneAccount {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

// ============================================================================
// DNS Records
// ============================================================================

/// A DNS record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub zone_name: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub proxiable: bool,
    #[serde(default)]
    pub proxied: bool,
    /// Time to live in seconds, `1` meaning automatic.
    pub ttl: u32,
    #[serde(default)]
    pub priority: Option<u16>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub modified_on: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RecordMeta>,
}

/// Provider-managed flags on a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_added: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_by_apps: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_by_argo_tunnel: Option<bool>,
}

/// Result of a record deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedRecord {
    pub id: String,
}

// ============================================================================
// Request Payloads
// ============================================================================

/// Body of a record creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NewDnsRecord {
    /// Start a record with the given ttl and no optional fields.
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            content: content.into(),
            ttl,
            priority: None,
            proxied: None,
            comment: None,
        }
    }
}

/// Body of a partial record update. Unset fields are left untouched remotely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DnsRecordPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl DnsRecordPatch {
    /// Whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
