//! Backend invokers
//!
//! One client module per backend family behind the [`CompletionBackend`]
//! trait. A facade owns exactly one backend, selected here at construction
//! by a factory keyed on the resolved provider kind; the other families'
//! clients are never allocated.

pub mod anthropic;
pub mod error;
pub mod gemini;
pub mod openai;

pub use error::LlmError;

use std::env;
use std::sync::Arc;

use crate::core::capabilities::{ModelCapabilities, ProviderKind};
use crate::core::schema::SchemaAdapter;
use crate::core::types::{CompletionRequest, CompletionResult};

/// A single backend invoker: translates, dispatches, and normalizes one
/// completion request against its backend.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync + std::fmt::Debug {
    /// Provider name for logs.
    fn provider(&self) -> &'static str;

    /// Perform exactly one completion call and normalize the reply.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, LlmError>;
}

/// Resolved credential set: up to three optional secrets, one per
/// client-sharing provider grouping.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub openai_key: Option<String>,
    pub google_key: Option<String>,
    pub anthropic_key: Option<String>,
}

impl Credentials {
    /// Resolve credentials: explicit parameters first, then the process-wide
    /// named fallbacks.
    pub fn resolve(
        openai_key: Option<String>,
        google_key: Option<String>,
        anthropic_key: Option<String>,
    ) -> Self {
        Self {
            openai_key: openai_key.or_else(|| env::var("OPENAI_API_KEY").ok()),
            google_key: google_key.or_else(|| env::var("GOOGLE_API_KEY").ok()),
            anthropic_key: anthropic_key.or_else(|| env::var("ANTHROPIC_API_KEY").ok()),
        }
    }
}

/// Construct the one backend for the resolved provider kind.
///
/// The absence of the credential the kind requires is a construction-time
/// configuration error; no network is touched here. `base_url` overrides
/// the backend's default endpoint.
pub(crate) fn create_backend(
    capabilities: &ModelCapabilities,
    credentials: &Credentials,
    schema_adapter: Arc<dyn SchemaAdapter>,
    base_url: Option<&str>,
) -> Result<Box<dyn CompletionBackend>, LlmError> {
    // A model without a true system role gets its system turns as user turns.
    let system_role = if capabilities.supports_system_role {
        capabilities.system_role_name
    } else {
        "user"
    };

    match capabilities.provider {
        ProviderKind::OpenAi => {
            let api_key = credentials.openai_key.clone().ok_or_else(|| {
                LlmError::configuration("To access this service you need to send an OpenAI key")
            })?;
            let mut config = openai::OpenAiConfig::new(api_key);
            if let Some(base_url) = base_url {
                config = config.with_base_url(base_url);
            }
            Ok(Box::new(openai::OpenAiClient::new(
                config,
                schema_adapter,
                "openai",
                system_role,
            )?))
        }
        ProviderKind::Ollama => {
            // Local serving: placeholder key, no real credential required.
            let mut config = openai::OpenAiConfig::local();
            if let Some(base_url) = base_url {
                config = config.with_base_url(base_url);
            }
            Ok(Box::new(openai::OpenAiClient::new(
                config,
                schema_adapter,
                "ollama",
                system_role,
            )?))
        }
        ProviderKind::Gemini => {
            let api_key = credentials.google_key.clone().ok_or_else(|| {
                LlmError::configuration("To access this service you need to send a Google key")
            })?;
            let mut config = gemini::GeminiConfig::new(api_key);
            if let Some(base_url) = base_url {
                config = config.with_base_url(base_url);
            }
            Ok(Box::new(gemini::GeminiClient::new(config, schema_adapter)?))
        }
        ProviderKind::Anthropic => {
            let api_key = credentials.anthropic_key.clone().ok_or_else(|| {
                LlmError::configuration(
                    "To access this service you need to send an Anthropic key",
                )
            })?;
            let mut config = anthropic::AnthropicConfig::new(api_key);
            if let Some(base_url) = base_url {
                config = config.with_base_url(base_url);
            }
            Ok(Box::new(anthropic::AnthropicClient::new(
                config,
                schema_adapter,
            )?))
        }
    }
}
