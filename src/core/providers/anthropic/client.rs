//! Anthropic client
//!
//! Speaks the messages API. Structured output is a forced single-tool
//! invocation whose input schema is the converted schema description; a
//! tool_use reply block normalizes to the JSON-stringified tool input on
//! the content branch. Every request carries the mandatory output-token
//! ceiling.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde_json::{json, Value};

use crate::core::providers::error::LlmError;
use crate::core::providers::CompletionBackend;
use crate::core::schema::SchemaAdapter;
use crate::core::types::{CompletionRequest, CompletionResult};

use super::config::AnthropicConfig;
use super::translate::to_anthropic_format;

const PROVIDER: &str = "anthropic";

/// Tool name under which structured output is requested.
const STRUCTURED_OUTPUT_TOOL: &str = "structured_output";

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    config: AnthropicConfig,
    http_client: Client,
    schema_adapter: Arc<dyn SchemaAdapter>,
}

impl AnthropicClient {
    /// Create the client.
    pub fn new(
        config: AnthropicConfig,
        schema_adapter: Arc<dyn SchemaAdapter>,
    ) -> Result<Self, LlmError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| {
                LlmError::network(PROVIDER, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
            schema_adapter,
        })
    }

    /// Build the messages API request body.
    fn build_request_body(&self, request: &CompletionRequest) -> Result<Value, LlmError> {
        let prompt = to_anthropic_format(&request.turns);

        let mut body = json!({
            "model": request.model,
            "messages": prompt.messages,
            "max_tokens": self.config.max_output_tokens,
        });

        if let Some(system) = prompt.system {
            body["system"] = json!(system);
        }

        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }

        if let Some(schema) = &request.schema {
            let converted = self.schema_adapter.convert(schema)?;
            body["tools"] = json!([{
                "name": STRUCTURED_OUTPUT_TOOL,
                "description": "Output structured data according to the schema",
                "input_schema": converted,
            }]);
            body["tool_choice"] = json!({"type": "tool", "name": STRUCTURED_OUTPUT_TOOL});
        }

        Ok(body)
    }

    /// Send the request and parse the reply body.
    async fn send_request(&self, body: Value) -> Result<Value, LlmError> {
        let url = self.config.endpoint("/v1/messages");

        if self.config.debug {
            tracing::debug!(provider = PROVIDER, url = %url, body = %body, "request");
        }

        let api_key = self.config.api_key.as_deref().unwrap_or_default();
        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.config.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::timeout(PROVIDER, e.to_string())
                } else {
                    LlmError::network(PROVIDER, e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let response_text = response.text().await.map_err(|e| {
            LlmError::network(PROVIDER, format!("Failed to read response: {}", e))
        })?;

        if self.config.debug {
            tracing::debug!(provider = PROVIDER, status, body = %response_text, "response");
        }

        if !(200..300).contains(&status) {
            return Err(LlmError::from_http_status(PROVIDER, status, &response_text));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            LlmError::response_parsing(PROVIDER, format!("Failed to parse JSON: {}", e))
        })
    }

    /// Normalize the first content block: tool invocations become the
    /// JSON-stringified tool input, anything else the block's text.
    fn normalize_response(&self, response: &Value) -> Result<CompletionResult, LlmError> {
        let block = response
            .get("content")
            .and_then(|content| content.get(0))
            .ok_or_else(|| LlmError::response_parsing(PROVIDER, "Missing content[0] block"))?;

        if block.get("type").and_then(|t| t.as_str()) == Some("tool_use") {
            let input = block.get("input").ok_or_else(|| {
                LlmError::response_parsing(PROVIDER, "tool_use block has no input")
            })?;
            return Ok(CompletionResult::Content(input.to_string()));
        }

        let text = block.get("text").and_then(|t| t.as_str()).ok_or_else(|| {
            LlmError::response_parsing(PROVIDER, "Content block carries no text")
        })?;

        Ok(CompletionResult::Content(text.to_string()))
    }
}

#[async_trait::async_trait]
impl CompletionBackend for AnthropicClient {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, LlmError> {
        let body = self.build_request_body(request)?;
        let response = self.send_request(body).await?;
        self.normalize_response(&response)
    }
}
