//! Anthropic configuration

use std::env;

use crate::core::providers::error::LlmError;

/// Default endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// API version header value.
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Output-token ceiling attached to every request. The messages API has no
/// server-side default, so the field is mandatory.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

/// Anthropic client configuration.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key, sent via the x-api-key header.
    pub api_key: Option<String>,
    /// Base URL.
    pub base_url: String,
    /// API version header.
    pub api_version: String,
    /// Output-token ceiling for every request.
    pub max_output_tokens: u32,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Connect timeout in seconds.
    pub connect_timeout: u64,
    /// Log request and response bodies.
    pub debug: bool,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            request_timeout: 120,
            connect_timeout: 10,
            debug: false,
        }
    }
}

impl AnthropicConfig {
    /// Configuration with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Configuration from the process environment.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| {
            LlmError::configuration("ANTHROPIC_API_KEY environment variable is required")
        })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("ANTHROPIC_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(api_version) = env::var("ANTHROPIC_API_VERSION") {
            config.api_version = api_version;
        }
        Ok(config)
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the output-token ceiling.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Enable request/response body logging.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err("API key is required".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("Base URL must start with http:// or https://".to_string());
        }
        if self.max_output_tokens == 0 {
            return Err("Output-token ceiling must be greater than 0".to_string());
        }
        if self.request_timeout == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Full URL for an API endpoint.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
