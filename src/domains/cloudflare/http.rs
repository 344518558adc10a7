//! HTTP plumbing for the Cloudflare client.
//!
//! The client describes each call as an [`ApiRequest`] and hands it to an
//! [`HttpExecutor`], which returns the raw response body. Production code uses
//! [`ReqwestExecutor`]; tests substitute a recording executor.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde_json::Value;
use tracing::debug;

use super::error::CloudflareResult;

/// A fully built request, ready to be sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// JSON body; only ever set for POST, PUT and PATCH.
    pub body: Option<Value>,
}

/// Sends an [`ApiRequest`] and returns the response body as text.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> CloudflareResult<String>;
}

/// [`HttpExecutor`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    /// Create an executor sending the given `User-Agent`.
    pub fn new(user_agent: &str) -> CloudflareResult<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: ApiRequest) -> CloudflareResult<String> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        debug!("Response status: {}", response.status());

        Ok(response.text().await?)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording executor for tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::domains::cloudflare::CloudflareError;

    /// Returns canned bodies in order and remembers every request.
    #[derive(Default)]
    pub struct RecordingExecutor {
        responses: Mutex<VecDeque<String>>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl RecordingExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Executor answering once with the given JSON.
        pub fn responding(body: Value) -> Self {
            let executor = Self::new();
            executor.push_response(body);
            executor
        }

        /// Executor answering once with a successful envelope around `result`.
        pub fn success(result: Value) -> Self {
            Self::responding(serde_json::json!({
                "success": true,
                "errors": [],
                "messages": [],
                "result": result
            }))
        }

        pub fn push_response(&self, body: Value) {
            self.responses.lock().unwrap().push_back(body.to_string());
        }

        pub fn push_raw(&self, body: &str) {
            self.responses.lock().unwrap().push_back(body.to_string());
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HttpExecutor for RecordingExecutor {
        async fn execute(&self, request: ApiRequest) -> CloudflareResult<String> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| CloudflareError::network("connection refused"))
        }
    }
}
