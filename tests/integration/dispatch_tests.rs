//! Dispatch integration tests
//!
//! Full round trips through the facade against mocked backends: request
//! bodies as they reach the wire, reply normalization, and the failure
//! policy. Every test asserts that exactly one result branch is populated.

use serde_json::{json, Value};
use structllm::{
    ClientParams, CompletionResult, LlmClient, LlmError, ReasoningEffort, SchemaDescription,
    SchemaField, Turn,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{
    claude_text_reply, claude_tool_reply, gemini_reply, openai_refusal_reply, openai_reply,
    params_against,
};

async fn recorded_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    serde_json::from_slice(&requests[0].body).expect("request body is JSON")
}

// ==================== OpenAI family ====================

/// gpt-5, no schema: the developer role name reaches the constructed
/// request and the unsupported temperature is omitted.
#[tokio::test]
async fn test_openai_dispatch_renames_system_and_omits_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_reply("hi")))
        .expect(1)
        .mount(&server)
        .await;

    let client = LlmClient::new(params_against(&server.uri(), "gpt-5")).unwrap();
    let result = client
        .create_chat_completion(
            vec![Turn::system("Be terse"), Turn::user("Hi")],
            "gpt-5",
            None,
            Some(0.0),
            None,
        )
        .await
        .unwrap();

    assert_eq!(result, CompletionResult::Content("hi".to_string()));

    let body = recorded_body(&server).await;
    assert_eq!(body["model"], "gpt-5");
    assert_eq!(body["messages"][0]["role"], "developer");
    assert_eq!(body["messages"][0]["content"], "Be terse");
    assert_eq!(body["messages"][1]["role"], "user");
    assert!(body.get("temperature").is_none());
    assert!(body.get("reasoning_effort").is_none());
    assert!(body.get("response_format").is_none());
}

/// A recognized effort suffix splits off the identifier and reaches the
/// request as reasoning_effort.
#[tokio::test]
async fn test_openai_dispatch_forwards_reasoning_effort_suffix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_reply("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = LlmClient::new(params_against(&server.uri(), "o3-mini high")).unwrap();
    let result = client
        .create_chat_completion(vec![Turn::user("Q")], "o3-mini high", None, Some(0.0), None)
        .await
        .unwrap();
    assert!(result.content().is_some());

    let body = recorded_body(&server).await;
    assert_eq!(body["model"], "o3-mini");
    assert_eq!(body["reasoning_effort"], "high");
    // Reasoning models never carry a temperature.
    assert!(body.get("temperature").is_none());
}

/// An explicit effort argument wins over the identifier suffix.
#[tokio::test]
async fn test_openai_dispatch_explicit_effort_wins() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_reply("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = LlmClient::new(params_against(&server.uri(), "o3")).unwrap();
    let _ = client
        .create_chat_completion(
            vec![Turn::user("Q")],
            "o3 low",
            None,
            None,
            Some(ReasoningEffort::High),
        )
        .await
        .unwrap();

    let body = recorded_body(&server).await;
    assert_eq!(body["model"], "o3");
    assert_eq!(body["reasoning_effort"], "high");
}

/// A refusal reply surfaces on the refusal branch, with the other branches
/// empty.
#[tokio::test]
async fn test_openai_dispatch_surfaces_refusal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(openai_refusal_reply("cannot comply")),
        )
        .mount(&server)
        .await;

    let client = LlmClient::new(params_against(&server.uri(), "gpt-4o")).unwrap();
    let result = client
        .create_chat_completion(vec![Turn::user("Q")], "gpt-4o", None, None, None)
        .await
        .unwrap();

    assert_eq!(result.refusal(), Some("cannot comply"));
    assert!(result.content().is_none());
    assert!(result.parsed().is_none());
}

/// llama/deepseek identifiers route through the local OpenAI-compatible
/// invoker and need no credential at all.
#[tokio::test]
async fn test_local_dispatch_without_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_reply("local hi")))
        .expect(1)
        .mount(&server)
        .await;

    let params = ClientParams::new()
        .with_model("llama3.3")
        .with_base_url(server.uri());
    let client = LlmClient::new(params).unwrap();

    let result = client
        .create_chat_completion(
            vec![Turn::system("S"), Turn::user("Q")],
            "llama3.3",
            None,
            Some(0.5),
            None,
        )
        .await
        .unwrap();
    assert_eq!(result, CompletionResult::Content("local hi".to_string()));

    let body = recorded_body(&server).await;
    // Local family keeps the plain system role name and its temperature.
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["temperature"], 0.5);
    // Effort never reaches non-OpenAI families.
    assert!(body.get("reasoning_effort").is_none());
}

// ==================== Gemini family ====================

/// Multiple system turns fold: first becomes the system instruction, the
/// second demotes to a user turn ahead of the question.
#[tokio::test]
async fn test_gemini_dispatch_folds_system_turns() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(query_param("key", "g-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("answer")))
        .expect(1)
        .mount(&server)
        .await;

    let client = LlmClient::new(params_against(&server.uri(), "gemini-2.5-flash")).unwrap();
    let result = client
        .create_chat_completion(
            vec![Turn::system("S1"), Turn::system("S2"), Turn::user("Q")],
            "gemini-2.5-flash",
            None,
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(result, CompletionResult::Content("answer".to_string()));

    let body = recorded_body(&server).await;
    assert_eq!(body["systemInstruction"]["parts"][0]["text"], "S1");
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "S2");
    assert_eq!(body["contents"][1]["role"], "user");
    assert_eq!(body["contents"][1]["parts"][0]["text"], "Q");
}

/// A schema turns into raw JSON mode; the reply text stays unparsed on the
/// content branch for the caller to parse.
#[tokio::test]
async fn test_gemini_dispatch_requests_raw_json_mode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-pro:generateContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_reply(r#"{"answer":"42"}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let schema = SchemaDescription::object([SchemaField::required(
        "answer",
        SchemaDescription::string(),
    )]);

    let client = LlmClient::new(params_against(&server.uri(), "gemini-2.5-pro")).unwrap();
    let result = client
        .create_chat_completion(
            vec![Turn::user("Q")],
            "gemini-2.5-pro",
            Some(schema),
            Some(0.0),
            None,
        )
        .await
        .unwrap();

    // Never pre-parsed: the caller does the JSON parsing.
    assert_eq!(result.content(), Some(r#"{"answer":"42"}"#));
    assert!(result.parsed().is_none());

    let body = recorded_body(&server).await;
    let config = &body["generationConfig"];
    assert_eq!(config["temperature"], 0.0);
    assert_eq!(config["responseMimeType"], "application/json");
    assert_eq!(
        config["responseSchema"]["properties"]["answer"]["type"],
        "string"
    );
}

// ==================== Anthropic family ====================

/// A schema forces a single structured-output tool; the tool_use reply
/// normalizes to the JSON-stringified tool input.
#[tokio::test]
async fn test_anthropic_dispatch_forces_tool_and_stringifies_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(claude_tool_reply(json!({"answer": "42", "score": 7}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let schema = SchemaDescription::object([
        SchemaField::required("answer", SchemaDescription::string()),
        SchemaField::required("score", SchemaDescription::integer()),
    ]);

    let client =
        LlmClient::new(params_against(&server.uri(), "claude-sonnet-4-20250514")).unwrap();
    let result = client
        .create_chat_completion(
            vec![Turn::system("S"), Turn::user("Q")],
            "claude-sonnet-4-20250514",
            Some(schema),
            Some(0.0),
            None,
        )
        .await
        .unwrap();

    let text = result.content().expect("content branch");
    assert_eq!(
        serde_json::from_str::<Value>(text).unwrap(),
        json!({"answer": "42", "score": 7})
    );

    let body = recorded_body(&server).await;
    assert_eq!(body["system"], "S");
    assert_eq!(body["max_tokens"], 8192);
    assert_eq!(body["tools"][0]["name"], "structured_output");
    assert_eq!(body["tool_choice"], json!({"type": "tool", "name": "structured_output"}));
}

/// Without a schema the reply text passes straight through.
#[tokio::test]
async fn test_anthropic_dispatch_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(claude_text_reply("plain")))
        .mount(&server)
        .await;

    let client =
        LlmClient::new(params_against(&server.uri(), "claude-opus-4-1-20250805")).unwrap();
    let result = client
        .create_chat_completion(
            vec![Turn::user("Q")],
            "claude-opus-4-1-20250805",
            None,
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(result, CompletionResult::Content("plain".to_string()));
}

// ==================== Failure policy ====================

/// Transport failures map to structured errors and propagate without retry:
/// exactly one request reaches the backend.
#[tokio::test]
async fn test_transport_errors_propagate_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"error": {"retry_after": 3}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = LlmClient::new(params_against(&server.uri(), "gpt-4o")).unwrap();
    let error = client
        .create_chat_completion(vec![Turn::user("Q")], "gpt-4o", None, None, None)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        LlmError::RateLimit {
            retry_after: Some(3),
            ..
        }
    ));
}

/// Auth failures surface as authentication errors.
#[tokio::test]
async fn test_auth_error_passthrough() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let client =
        LlmClient::new(params_against(&server.uri(), "claude-sonnet-4-20250514")).unwrap();
    let error = client
        .create_chat_completion(
            vec![Turn::user("Q")],
            "claude-sonnet-4-20250514",
            None,
            None,
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(error, LlmError::Authentication { .. }));
}

/// Schema conversion failures propagate before any network attempt.
#[tokio::test]
async fn test_schema_conversion_failure_before_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_reply("unreachable")))
        .expect(0)
        .mount(&server)
        .await;

    let degenerate = SchemaDescription::enumeration(Vec::<String>::new());
    let client = LlmClient::new(params_against(&server.uri(), "gpt-4o")).unwrap();
    let error = client
        .create_chat_completion(vec![Turn::user("Q")], "gpt-4o", Some(degenerate), None, None)
        .await
        .unwrap_err();

    assert!(matches!(error, LlmError::SchemaConversion { .. }));
}

/// A missing credential fails construction, before any network attempt.
#[tokio::test]
async fn test_missing_credential_fails_before_network() {
    if std::env::var("GOOGLE_API_KEY").is_ok() {
        // Environment fallback would mask the scenario.
        return;
    }

    let params = ClientParams::new()
        .with_model("gemini-2.5-flash")
        .with_openai_key("sk-test")
        .with_anthropic_key("sk-ant-test");

    assert!(matches!(
        LlmClient::new(params),
        Err(LlmError::Configuration { .. })
    ));
}
