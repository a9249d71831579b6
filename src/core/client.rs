//! Completion facade
//!
//! The sole externally visible entry point. Construction resolves the
//! capability record and credentials once and instantiates exactly one
//! backend; a missing required credential fails here, never at call time.
//! After construction the client is immutable and safe for concurrent use:
//! all per-call data is local to the call.

use std::sync::Arc;

use crate::core::capabilities::{split_reasoning_suffix, ModelCapabilities, ProviderKind};
use crate::core::catalog::{self, ModelEntry, ParameterSpec, DEFAULT_MODEL};
use crate::core::providers::{create_backend, CompletionBackend, Credentials, LlmError};
use crate::core::schema::{JsonSchemaAdapter, SchemaAdapter, SchemaDescription};
use crate::core::types::{CompletionRequest, CompletionResult, ReasoningEffort, Turn};

/// Construction parameters for [`LlmClient`].
///
/// All fields are optional: keys fall back to the process-wide environment
/// names, the model falls back to [`DEFAULT_MODEL`], and the schema adapter
/// falls back to [`JsonSchemaAdapter`].
#[derive(Debug, Clone, Default)]
pub struct ClientParams {
    /// OpenAI API key (fallback: `OPENAI_API_KEY`).
    pub openai_key: Option<String>,
    /// Google API key (fallback: `GOOGLE_API_KEY`).
    pub google_key: Option<String>,
    /// Anthropic API key (fallback: `ANTHROPIC_API_KEY`).
    pub anthropic_key: Option<String>,
    /// Model identifier the client is bound to.
    pub model: Option<String>,
    /// Override for the backend's default endpoint.
    pub base_url: Option<String>,
    /// Substitute schema adapter collaborator.
    pub schema_adapter: Option<Arc<dyn SchemaAdapter>>,
}

impl ClientParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the OpenAI API key.
    pub fn with_openai_key(mut self, key: impl Into<String>) -> Self {
        self.openai_key = Some(key.into());
        self
    }

    /// Set the Google API key.
    pub fn with_google_key(mut self, key: impl Into<String>) -> Self {
        self.google_key = Some(key.into());
        self
    }

    /// Set the Anthropic API key.
    pub fn with_anthropic_key(mut self, key: impl Into<String>) -> Self {
        self.anthropic_key = Some(key.into());
        self
    }

    /// Override the backend endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Substitute the schema adapter collaborator.
    pub fn with_schema_adapter(mut self, adapter: Arc<dyn SchemaAdapter>) -> Self {
        self.schema_adapter = Some(adapter);
        self
    }
}

/// Provider-abstraction completion client.
#[derive(Debug)]
pub struct LlmClient {
    capabilities: ModelCapabilities,
    backend: Box<dyn CompletionBackend>,
}

impl LlmClient {
    /// Create a client bound to one model and one backend.
    ///
    /// Fails with [`LlmError::Configuration`] when the credential required
    /// by the resolved provider kind is absent. No network is touched.
    pub fn new(params: ClientParams) -> Result<Self, LlmError> {
        let model = params.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let capabilities = ModelCapabilities::resolve(&model);

        let credentials = Credentials::resolve(
            params.openai_key,
            params.google_key,
            params.anthropic_key,
        );

        let schema_adapter: Arc<dyn SchemaAdapter> = params
            .schema_adapter
            .unwrap_or_else(|| Arc::new(JsonSchemaAdapter::new()));

        let backend = create_backend(
            &capabilities,
            &credentials,
            schema_adapter,
            params.base_url.as_deref(),
        )?;

        tracing::info!(
            model = %capabilities.model,
            provider = capabilities.provider.name(),
            "LLM client initialized"
        );

        Ok(Self {
            capabilities,
            backend,
        })
    }

    /// Issue one completion call and return the normalized result.
    ///
    /// A recognized reasoning-effort suffix on `model` is split off; an
    /// explicit `reasoning_effort` argument wins over a suffix. Effort is
    /// forwarded only to OpenAI-family requests, and the temperature is
    /// clamped against the capability record before dispatch.
    pub async fn create_chat_completion(
        &self,
        turns: Vec<Turn>,
        model: &str,
        schema: Option<SchemaDescription>,
        temperature: Option<f32>,
        reasoning_effort: Option<ReasoningEffort>,
    ) -> Result<CompletionResult, LlmError> {
        let (base_model, suffix_effort) = split_reasoning_suffix(model);

        let reasoning_effort = match self.capabilities.provider {
            ProviderKind::OpenAi => reasoning_effort.or(suffix_effort),
            _ => None,
        };

        let request = CompletionRequest {
            model: base_model.to_string(),
            turns,
            schema,
            temperature: self.capabilities.effective_temperature(temperature),
            reasoning_effort,
        };

        tracing::debug!(
            provider = self.backend.provider(),
            model = %request.model,
            turns = request.turns.len(),
            structured = request.schema.is_some(),
            "dispatching completion"
        );

        self.backend.complete(&request).await
    }

    /// Capability record the client was constructed with.
    pub fn capabilities(&self) -> &ModelCapabilities {
        &self.capabilities
    }

    /// Static model catalog. Presentation only; unlisted identifiers are
    /// still attempted through the resolver's token rules.
    pub fn supported_models() -> &'static [ModelEntry] {
        catalog::MODELS
    }

    /// Static metadata describing the construction-time parameters.
    pub fn configurable_parameters() -> Vec<ParameterSpec> {
        catalog::configurable_parameters()
    }
}
