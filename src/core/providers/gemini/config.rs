//! Gemini configuration

use std::env;

use crate::core::providers::error::LlmError;

/// Default Google AI Studio endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini client configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, sent as a query parameter per the AI Studio convention.
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

impl Default for GeminiConfig {
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

impl GeminiConfig {
    /// Configuration with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Configuration from the process environment.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = env::var("GOOGLE_API_KEY").map_err(|_| {
            LlmError::configuration("GOOGLE_API_KEY environment variable is required")
        })?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
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

    /// Full URL for a model operation, key attached as a query parameter.
    pub fn endpoint(&self, model: &str, operation: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.base_url.trim_end_matches('/'),
            model,
            operation,
            self.api_key.as_deref().unwrap_or_default()
        )
    }
}
