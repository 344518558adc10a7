//! Typed client for the Cloudflare zone and DNS record endpoints.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::error::{CloudflareError, CloudflareResult};
use super::http::{ApiRequest, HttpExecutor, ReqwestExecutor};
use super::types::{
    CloudflareResponse, DeletedRecord, DnsRecord, DnsRecordPatch, NewDnsRecord, Zone,
};
use crate::core::config::Config;

/// Default base URL of the Cloudflare v4 API.
pub const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Cloudflare API client.
///
/// Holds the bearer token and an optional default zone id. Cheap to share
/// behind an `Arc`; nothing is mutated after construction.
#[derive(Clone)]
pub struct CloudflareClient {
    api_token: String,
    default_zone_id: Option<String>,
    base_url: String,
    executor: Arc<dyn HttpExecutor>,
}

impl std::fmt::Debug for CloudflareClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareClient")
            .field("api_token", &"[REDACTED]")
            .field("default_zone_id", &self.default_zone_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CloudflareClient {
    /// Create a client sending requests through `executor`.
    ///
    /// Fails with [`CloudflareError::MissingToken`] when the token is blank.
    pub fn new(
        api_token: impl Into<String>,
        default_zone_id: Option<String>,
        base_url: impl Into<String>,
        executor: Arc<dyn HttpExecutor>,
    ) -> CloudflareResult<Self> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(CloudflareError::MissingToken);
        }

        Ok(Self {
            api_token,
            default_zone_id: default_zone_id.filter(|z| !z.is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            executor,
        })
    }

    /// Create a reqwest-backed client from the server configuration.
    pub fn from_config(config: &Config) -> CloudflareResult<Self> {
        let user_agent = format!("{}/{}", config.server.name, config.server.version);
        let executor = ReqwestExecutor::new(&user_agent)?;

        Self::new(
            config.credentials.api_token.clone(),
            config.credentials.zone_id.clone(),
            config.api.base_url.clone(),
            Arc::new(executor),
        )
    }

    /// The zone used when a call does not name one.
    pub fn default_zone_id(&self) -> Option<&str> {
        self.default_zone_id.as_deref()
    }

    // ========================================================================
    // Zones
    // ========================================================================

    /// List all zones accessible to the API token.
    pub async fn list_zones(&self) -> CloudflareResult<Vec<Zone>> {
        self.request(Method::GET, "/zones", None).await
    }

    /// Get a single zone by id.
    pub async fn get_zone(&self, zone_id: &str) -> CloudflareResult<Zone> {
        let zone_id = path_id(zone_id)?;
        self.request(Method::GET, &format!("/zones/{zone_id}"), None)
            .await
    }

    // ========================================================================
    // DNS Records
    // ========================================================================

    /// List DNS records of a zone, optionally filtered by type and name.
    pub async fn list_dns_records(
        &self,
        zone_id: Option<&str>,
        record_type: Option<&str>,
        name: Option<&str>,
    ) -> CloudflareResult<Vec<DnsRecord>> {
        let zone_id = self.resolve_zone_id(zone_id)?;

        let filters: Vec<(&str, &str)> = [("type", record_type), ("name", name)]
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
            .collect();

        let mut endpoint = format!("/zones/{zone_id}/dns_records");
        if !filters.is_empty() {
            let query = serde_urlencoded::to_string(&filters)
                .map_err(|e| CloudflareError::Encode(e.to_string()))?;
            endpoint.push('?');
            endpoint.push_str(&query);
        }

        self.request(Method::GET, &endpoint, None).await
    }

    /// Get a single DNS record.
    pub async fn get_dns_record(
        &self,
        record_id: &str,
        zone_id: Option<&str>,
    ) -> CloudflareResult<DnsRecord> {
        let zone_id = self.resolve_zone_id(zone_id)?;
        let record_id = path_id(record_id)?;
        self.request(
            Method::GET,
            &format!("/zones/{zone_id}/dns_records/{record_id}"),
            None,
        )
        .await
    }

    /// Create a DNS record.
    pub async fn create_dns_record(
        &self,
        record: &NewDnsRecord,
        zone_id: Option<&str>,
    ) -> CloudflareResult<DnsRecord> {
        let zone_id = self.resolve_zone_id(zone_id)?;
        self.request(
            Method::POST,
            &format!("/zones/{zone_id}/dns_records"),
            Some(encode_body(record)?),
        )
        .await
    }

    /// Patch a DNS record with only the fields set in `patch`.
    pub async fn update_dns_record(
        &self,
        record_id: &str,
        patch: &DnsRecordPatch,
        zone_id: Option<&str>,
    ) -> CloudflareResult<DnsRecord> {
        let zone_id = self.resolve_zone_id(zone_id)?;
        let record_id = path_id(record_id)?;
        self.request(
            Method::PATCH,
            &format!("/zones/{zone_id}/dns_records/{record_id}"),
            Some(encode_body(patch)?),
        )
        .await
    }

    /// Delete a DNS record, returning the deleted record's id.
    pub async fn delete_dns_record(
        &self,
        record_id: &str,
        zone_id: Option<&str>,
    ) -> CloudflareResult<DeletedRecord> {
        let zone_id = self.resolve_zone_id(zone_id)?;
        let record_id = path_id(record_id)?;
        self.request(
            Method::DELETE,
            &format!("/zones/{zone_id}/dns_records/{record_id}"),
            None,
        )
        .await
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    /// Pick the explicit zone id, then the configured default.
    fn resolve_zone_id<'a>(&'a self, zone_id: Option<&'a str>) -> CloudflareResult<&'a str> {
        let zone_id = zone_id
            .filter(|z| !z.is_empty())
            .or(self.default_zone_id.as_deref())
            .ok_or(CloudflareError::MissingZoneId)?;
        path_id(zone_id)
    }

    /// Build an authenticated request for `endpoint`.
    pub fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> CloudflareResult<ApiRequest> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_token))
            .map_err(|e| CloudflareError::Encode(format!("invalid API token: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let carries_body = method == Method::POST || method == Method::PUT || method == Method::PATCH;

        Ok(ApiRequest {
            url: format!("{}{}", self.base_url, endpoint),
            body: body.filter(|_| carries_body),
            method,
            headers,
        })
    }

    #[instrument(skip(self, body))]
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> CloudflareResult<T> {
        let request = self.build_request(method, endpoint, body)?;
        debug!("{} {}", request.method, request.url);
        if let Some(body) = &request.body {
            debug!("Request body: {}", body);
        }

        let response = self.executor.execute(request).await?;
        debug!("Response body: {}", response);

        unwrap_envelope(&response)
    }
}

/// Accept an id only if it stays a single path segment.
///
/// Cloudflare ids are hex strings; anything beyond ASCII alphanumerics, `-`
/// and `_` could add segments, a query or a fragment to the endpoint.
fn path_id(id: &str) -> CloudflareResult<&str> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(id)
    } else {
        Err(CloudflareError::InvalidId(id.to_string()))
    }
}

fn encode_body<B: Serialize>(body: &B) -> CloudflareResult<Value> {
    serde_json::to_value(body).map_err(|e| CloudflareError::Encode(e.to_string()))
}

/// Decode a response envelope, failing when `success` is false.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> CloudflareResult<T> {
    let envelope: CloudflareResponse = serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse Cloudflare response: {}", e);
        CloudflareError::invalid_response(e.to_string())
    })?;

    if !envelope.success {
        let err = CloudflareError::from_messages(envelope.errors.iter().map(|e| &e.message));
        error!("{}", err);
        return Err(err);
    }

    serde_json::from_value(envelope.result).map_err(|e| {
        error!("Unexpected result shape: {}", e);
        CloudflareError::invalid_response(e.to_string())
    })
}
