//! Anthropic provider

pub mod client;
pub mod config;
pub mod translate;

pub use client::AnthropicClient;
pub use config::AnthropicConfig;
pub use translate::{to_anthropic_format, AnthropicMessage, AnthropicPrompt};
