//! Gemini provider

pub mod client;
pub mod config;
pub mod translate;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use translate::{to_gemini_format, GeminiContent, GeminiPart, GeminiPrompt};
