//! Response types
//!
//! Every backend reply normalizes into [`CompletionResult`] at the dispatch
//! boundary. The enum is closed: exactly one branch is ever populated, so a
//! provider-specific reply shape can never escape the dispatcher.

use serde_json::Value;

/// Normalized result of one completion call.
///
/// Callers check the branches in the order content, parsed, refusal; the
/// accessors below support that pattern without matching on the enum.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionResult {
    /// Plain (or JSON-encoded) text the caller parses itself.
    Content(String),
    /// A pre-parsed structured object, when the backend returns one natively.
    Parsed(Value),
    /// The backend explicitly declined to produce the requested content.
    Refusal(String),
}

impl CompletionResult {
    /// Text content, when that branch is populated.
    pub fn content(&self) -> Option<&str> {
        match self {
            CompletionResult::Content(text) => Some(text),
            _ => None,
        }
    }

    /// Pre-parsed object, when that branch is populated.
    pub fn parsed(&self) -> Option<&Value> {
        match self {
            CompletionResult::Parsed(value) => Some(value),
            _ => None,
        }
    }

    /// Refusal message, when that branch is populated.
    pub fn refusal(&self) -> Option<&str> {
        match self {
            CompletionResult::Refusal(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the backend declined the request.
    pub fn is_refusal(&self) -> bool {
        matches!(self, CompletionResult::Refusal(_))
    }
}
