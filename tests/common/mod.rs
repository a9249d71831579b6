//! Common test utilities for structllm
//!
//! Mocked backend reply builders and client parameter factories. All
//! factories create real objects, not mocks; network mocking happens at the
//! HTTP layer with wiremock.

pub mod fixtures;

pub use fixtures::{
    claude_text_reply, claude_tool_reply, gemini_reply, openai_refusal_reply, openai_reply,
    params_against,
};
