//! Unified error handling
//!
//! Single error type for every backend family. Transport failures map onto
//! structured variants at the HTTP boundary and propagate to the caller
//! without retry or backoff; retry decisions belong to the caller.

/// Unified error type for construction and completion calls.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}")]
    RateLimit {
        provider: &'static str,
        retry_after: Option<u64>,
    },

    #[error("API error for {provider} (status {status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },

    #[error("Schema conversion failed: {message}")]
    SchemaConversion { message: String },
}

impl LlmError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an authentication error.
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create a rate limit error.
    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            provider,
            retry_after,
        }
    }

    /// Create an API error with an HTTP status.
    pub fn api(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Create a network error.
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create a timeout error.
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create a response parsing error.
    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    /// Create a schema conversion error.
    pub fn schema_conversion(message: impl Into<String>) -> Self {
        Self::SchemaConversion {
            message: message.into(),
        }
    }

    /// Whether a caller may reasonably retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimit { .. }
                | Self::Network { .. }
                | Self::Timeout { .. }
                | Self::Api {
                    status: 500..=599,
                    ..
                }
        )
    }

    /// HTTP status associated with the error, when one exists.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Authentication { .. } => Some(401),
            Self::RateLimit { .. } => Some(429),
            _ => None,
        }
    }

    /// Map an HTTP error status and body onto a structured variant.
    pub fn from_http_status(provider: &'static str, status: u16, body: &str) -> Self {
        match status {
            401 => Self::authentication(provider, "Invalid or missing API key"),
            403 => Self::authentication(provider, "Forbidden: insufficient permissions"),
            429 => Self::rate_limit(provider, extract_retry_after(body)),
            500..=599 => Self::api(provider, status, format!("Server error: {}", body)),
            _ => Self::api(provider, status, body),
        }
    }
}

/// Pull a retry-after hint out of an error body, top level or nested.
fn extract_retry_after(body: &str) -> Option<u64> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(retry_after) = json.get("retry_after").and_then(|v| v.as_u64()) {
        return Some(retry_after);
    }
    json.get("error")
        .and_then(|e| e.get("retry_after"))
        .and_then(|v| v.as_u64())
}
