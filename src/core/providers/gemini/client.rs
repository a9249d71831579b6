//! Gemini client
//!
//! Speaks the generateContent API. Structured output uses raw JSON mode
//! (`responseMimeType` + `responseSchema`); the backend never returns a
//! pre-parsed object, so every reply normalizes to the content branch and
//! JSON parsing is deliberately left to the caller.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde_json::{json, Value};

use crate::core::providers::error::LlmError;
use crate::core::providers::CompletionBackend;
use crate::core::schema::SchemaAdapter;
use crate::core::types::{CompletionRequest, CompletionResult};

use super::config::GeminiConfig;
use super::translate::to_gemini_format;

const PROVIDER: &str = "gemini";

/// Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
    schema_adapter: Arc<dyn SchemaAdapter>,
}

impl GeminiClient {
    /// Create the client.
    pub fn new(
        config: GeminiConfig,
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

    /// Build the generateContent request body.
    fn build_request_body(&self, request: &CompletionRequest) -> Result<Value, LlmError> {
        let prompt = to_gemini_format(&request.turns);

        let mut body = json!({
            "contents": prompt.contents,
        });

        if let Some(instruction) = prompt.system_instruction {
            body["systemInstruction"] = json!({"parts": [{"text": instruction}]});
        }

        let mut generation_config = json!({});
        if let Some(temperature) = request.temperature {
            generation_config["temperature"] = json!(temperature);
        }
        if let Some(schema) = &request.schema {
            generation_config["responseMimeType"] = json!("application/json");
            generation_config["responseSchema"] = self.schema_adapter.convert(schema)?;
        }
        if generation_config
            .as_object()
            .is_some_and(|object| !object.is_empty())
        {
            body["generationConfig"] = generation_config;
        }

        Ok(body)
    }

    /// Send the request and parse the reply body.
    async fn send_request(&self, model: &str, body: Value) -> Result<Value, LlmError> {
        let url = self.config.endpoint(model, "generateContent");

        if self.config.debug {
            tracing::debug!(provider = PROVIDER, model, body = %body, "request");
        }

        let response = self
            .http_client
            .post(&url)
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

    /// Join the text parts of the first candidate into the content branch.
    fn normalize_response(&self, response: &Value) -> Result<CompletionResult, LlmError> {
        let parts = response
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .ok_or_else(|| {
                LlmError::response_parsing(PROVIDER, "Missing candidates[0].content.parts")
            })?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect();

        Ok(CompletionResult::Content(text))
    }
}

#[async_trait::async_trait]
impl CompletionBackend for GeminiClient {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, LlmError> {
        let body = self.build_request_body(request)?;
        let response = self.send_request(&request.model, body).await?;
        self.normalize_response(&response)
    }
}
