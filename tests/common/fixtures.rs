//! Test fixtures
//!
//! Builders for well-formed mocked backend replies and for client
//! parameters pointed at a mocked endpoint.

use serde_json::{json, Value};
use structllm::ClientParams;

/// Client parameters for `model`, with every credential set and the backend
/// endpoint redirected to `base_url` (a wiremock server).
pub fn params_against(base_url: &str, model: &str) -> ClientParams {
    ClientParams::new()
        .with_model(model)
        .with_openai_key("sk-test")
        .with_google_key("g-test")
        .with_anthropic_key("sk-ant-test")
        .with_base_url(base_url)
}

/// A minimal well-formed chat completions reply carrying text content.
pub fn openai_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-5",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// A chat completions reply where the model declined the request.
pub fn openai_refusal_reply(reason: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-5",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": null, "refusal": reason},
            "finish_reason": "stop"
        }]
    })
}

/// A minimal well-formed generateContent reply.
pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 5, "candidatesTokenCount": 7, "totalTokenCount": 12}
    })
}

/// A minimal well-formed messages API reply carrying a text block.
pub fn claude_text_reply(text: &str) -> Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-20250514",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 5, "output_tokens": 7}
    })
}

/// A messages API reply answering a forced tool invocation.
pub fn claude_tool_reply(input: Value) -> Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-20250514",
        "content": [{
            "type": "tool_use",
            "id": "toolu_test",
            "name": "structured_output",
            "input": input
        }],
        "stop_reason": "tool_use",
        "usage": {"input_tokens": 5, "output_tokens": 7}
    })
}
