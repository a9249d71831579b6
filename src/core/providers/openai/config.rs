//! OpenAI configuration
//!
//! Also covers local OpenAI-compatible serving (Ollama): same wire protocol,
//! different endpoint and credential requirements.

use std::env;

use crate::core::providers::error::LlmError;

/// Default hosted endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Local OpenAI-compatible serving endpoint.
pub const LOCAL_BASE_URL: &str = "http://localhost:11434/v1";

/// Placeholder key for local serving; the endpoint requires a key header but
/// never checks it.
pub const LOCAL_PLACEHOLDER_KEY: &str = "unused";

/// OpenAI client configuration.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key.
    pub api_key: Option<String>,
    /// Base URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Connect timeout in seconds.
    pub connect_timeout: u64,
    /// Log request and response bodies.
    pub debug: bool,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: 120,
            connect_timeout: 10,
            debug: false,
        }
    }
}

impl OpenAiConfig {
    /// Configuration for the hosted endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Configuration for a local OpenAI-compatible endpoint. No real
    /// credential is needed.
    pub fn local() -> Self {
        Self {
            api_key: Some(LOCAL_PLACEHOLDER_KEY.to_string()),
            base_url: LOCAL_BASE_URL.to_string(),
            ..Default::default()
        }
    }

    /// Configuration from the process environment.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            LlmError::configuration("OPENAI_API_KEY environment variable is required")
        })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = seconds;
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
