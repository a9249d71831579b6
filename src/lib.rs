//! # structllm
//!
//! A provider-abstraction layer for structured LLM completions: issue one
//! "generate a structured response" request against OpenAI, Gemini,
//! Anthropic, or a local OpenAI-compatible endpoint without knowing which
//! backend is active or how it encodes conversation turns, schema-constrained
//! output, or model-specific quirks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use structllm::{ClientParams, CompletionResult, LlmClient, Turn};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LlmClient::new(ClientParams::new().with_model("gemini-2.5-flash"))?;
//!
//!     let result = client
//!         .create_chat_completion(
//!             vec![Turn::system("Be terse."), Turn::user("Hello!")],
//!             "gemini-2.5-flash",
//!             None,
//!             Some(0.0),
//!             None,
//!         )
//!         .await?;
//!
//!     match result {
//!         CompletionResult::Content(text) => println!("{}", text),
//!         CompletionResult::Parsed(value) => println!("{}", value),
//!         CompletionResult::Refusal(reason) => eprintln!("refused: {}", reason),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Structured output
//!
//! Attach a [`SchemaDescription`] and the active backend encodes it its own
//! way: OpenAI as a strict `json_schema` response format, Gemini as raw JSON
//! mode with a response schema, Anthropic as a forced single-tool
//! invocation. The reply always normalizes into [`CompletionResult`] with
//! exactly one populated branch.

#![warn(clippy::all)]

pub mod core;

// Re-export the public surface.
pub use crate::core::capabilities::{split_reasoning_suffix, ModelCapabilities, ProviderKind};
pub use crate::core::catalog::{
    configurable_parameters, ModelEntry, ParameterSpec, SaveScope, UiElement, DEFAULT_MODEL,
    MODELS,
};
pub use crate::core::client::{ClientParams, LlmClient};
pub use crate::core::providers::{CompletionBackend, Credentials, LlmError};
pub use crate::core::schema::{
    JsonSchemaAdapter, SchemaAdapter, SchemaDescription, SchemaField, SchemaKind,
};
pub use crate::core::types::{CompletionRequest, CompletionResult, ReasoningEffort, Turn, TurnRole};

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
