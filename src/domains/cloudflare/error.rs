//! Cloudflare client error types.

use thiserror::Error;

/// Result type for Cloudflare client operations.
pub type CloudflareResult<T> = Result<T, CloudflareError>;

/// Errors that can occur while talking to the Cloudflare API.
#[derive(Debug, Error)]
pub enum CloudflareError {
    /// The client was constructed without an API token.
    #[error(
        "Cloudflare API token is required. Set the CLOUDFLARE_API_TOKEN environment variable."
    )]
    MissingToken,

    /// No zone id was passed and no default zone is configured.
    #[error("Zone ID is required. Provide it in the method call or set it in the config.")]
    MissingZoneId,

    /// A zone or record id that cannot be used as a single path segment.
    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),

    /// The API answered with `success: false`.
    #[error("Cloudflare API Error: {0}")]
    Api(String),

    /// The request never produced a readable response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the expected envelope or result shape.
    #[error("Invalid response from Cloudflare API: {0}")]
    InvalidResponse(String),

    /// The request body could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl CloudflareError {
    /// Create an API error from the messages of a failure envelope.
    ///
    /// Messages are joined with `", "`; an empty list yields `Unknown error`.
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let messages: Vec<String> = messages
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .collect();

        if messages.is_empty() {
            Self::Api("Unknown error".to_string())
        } else {
            Self::Api(messages.join(", "))
        }
    }

    /// Create a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}

impl From<reqwest::Error> for CloudflareError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_messages_joins_with_comma() {
        let err = CloudflareError::from_messages(["Invalid zone", "Bad token"]);
        assert_eq!(
            err.to_string(),
            "Cloudflare API Error: Invalid zone, Bad token"
        );
    }

    #[test]
    fn test_from_messages_empty_falls_back() {
        let err = CloudflareError::from_messages(Vec::<String>::new());
        assert_eq!(err.to_string(), "Cloudflare API Error: Unknown error");
    }
}
