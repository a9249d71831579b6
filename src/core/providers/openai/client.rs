//! OpenAI client
//!
//! Serves both the hosted endpoint and local OpenAI-compatible serving; the
//! two differ only in configuration. System turns are emitted under the
//! role name the capability record resolved at construction.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde_json::{json, Value};

use crate::core::providers::error::LlmError;
use crate::core::providers::CompletionBackend;
use crate::core::schema::SchemaAdapter;
use crate::core::types::{CompletionRequest, CompletionResult, TurnRole};

use super::config::OpenAiConfig;

/// Name under which the structured-output response format is registered.
const RESPONSE_FORMAT_NAME: &str = "structured_response";

/// OpenAI chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    http_client: Client,
    schema_adapter: Arc<dyn SchemaAdapter>,
    /// Provider name used in logs and errors (`openai` or `ollama`).
    provider: &'static str,
    /// Role name emitted for system turns.
    system_role: &'static str,
}

impl OpenAiClient {
    /// Create the client.
    pub fn new(
        config: OpenAiConfig,
        schema_adapter: Arc<dyn SchemaAdapter>,
        provider: &'static str,
        system_role: &'static str,
    ) -> Result<Self, LlmError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| {
                LlmError::network(provider, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
            schema_adapter,
            provider,
            system_role,
        })
    }

    /// Build the chat completions request body.
    fn build_request_body(&self, request: &CompletionRequest) -> Result<Value, LlmError> {
        let messages: Vec<Value> = request
            .turns
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    TurnRole::System => self.system_role,
                    TurnRole::User => "user",
                    TurnRole::Assistant => "assistant",
                };
                json!({"role": role, "content": turn.content})
            })
            .collect();

        let mut body = json!({
            "model": request.model,
            "messages": messages,
        });

        if let Some(schema) = &request.schema {
            let converted = self.schema_adapter.convert(schema)?;
            body["response_format"] = json!({
                "type": "json_schema",
                "json_schema": {
                    "name": RESPONSE_FORMAT_NAME,
                    "strict": true,
                    "schema": converted,
                },
            });
        }

        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }

        if let Some(effort) = request.reasoning_effort {
            body["reasoning_effort"] = json!(effort.as_str());
        }

        Ok(body)
    }

    /// Send the request and parse the reply body.
    async fn send_request(&self, body: Value) -> Result<Value, LlmError> {
        let url = self.config.endpoint("/chat/completions");

        if self.config.debug {
            tracing::debug!(provider = self.provider, url = %url, body = %body, "request");
        }

        let api_key = self.config.api_key.as_deref().unwrap_or_default();
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status().as_u16();
        let response_text = response.text().await.map_err(|e| {
            LlmError::network(self.provider, format!("Failed to read response: {}", e))
        })?;

        if self.config.debug {
            tracing::debug!(provider = self.provider, status, body = %response_text, "response");
        }

        if !(200..300).contains(&status) {
            return Err(LlmError::from_http_status(self.provider, status, &response_text));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            LlmError::response_parsing(self.provider, format!("Failed to parse JSON: {}", e))
        })
    }

    fn map_transport_error(&self, error: reqwest::Error) -> LlmError {
        if error.is_timeout() {
            LlmError::timeout(self.provider, error.to_string())
        } else {
            LlmError::network(self.provider, error.to_string())
        }
    }

    /// Pass the first choice's message through unchanged: whichever of
    /// refusal, parsed, or content the backend returned becomes the
    /// matching result branch.
    fn normalize_response(&self, response: &Value) -> Result<CompletionResult, LlmError> {
        let message = response
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .ok_or_else(|| {
                LlmError::response_parsing(self.provider, "Missing choices[0].message")
            })?;

        if let Some(refusal) = message.get("refusal").and_then(|r| r.as_str()) {
            return Ok(CompletionResult::Refusal(refusal.to_string()));
        }

        if let Some(parsed) = message.get("parsed") {
            if !parsed.is_null() {
                return Ok(CompletionResult::Parsed(parsed.clone()));
            }
        }

        if let Some(content) = message.get("content").and_then(|c| c.as_str()) {
            return Ok(CompletionResult::Content(content.to_string()));
        }

        Err(LlmError::response_parsing(
            self.provider,
            "Message carries neither refusal, parsed, nor content",
        ))
    }
}

#[async_trait::async_trait]
impl CompletionBackend for OpenAiClient {
    fn provider(&self) -> &'static str {
        self.provider
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, LlmError> {
        let body = self.build_request_body(request)?;
        let response = self.send_request(body).await?;
        self.normalize_response(&response)
    }
}
