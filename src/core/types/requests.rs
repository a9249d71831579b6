//! Request types
//!
//! The provider-agnostic shapes a caller hands to the completion facade.
//! Turn order is semantically meaningful and is preserved end to end.

use serde::{Deserialize, Serialize};

use crate::core::schema::SchemaDescription;

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Role of the speaker.
    pub role: TurnRole,
    /// Text content. Empty content never reaches a backend that rejects it.
    pub content: String,
}

impl Turn {
    /// Create a system turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::System,
            content: content.into(),
        }
    }

    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Turn role enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Instruction turn.
    System,
    /// Caller turn.
    User,
    /// Prior model turn.
    Assistant,
}

impl std::fmt::Display for TurnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnRole::System => write!(f, "system"),
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Reasoning effort level for reasoning-style models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

impl ReasoningEffort {
    /// Wire name of the effort level.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningEffort::Low => "low",
            ReasoningEffort::Medium => "medium",
            ReasoningEffort::High => "high",
        }
    }

    /// Parse a recognized effort token; anything else is not an effort.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "low" => Some(ReasoningEffort::Low),
            "medium" => Some(ReasoningEffort::Medium),
            "high" => Some(ReasoningEffort::High),
            _ => None,
        }
    }
}

/// A fully resolved completion request handed to the selected backend.
///
/// Built fresh per call by the facade: the model identifier has had any
/// reasoning-effort suffix split off and the temperature has already been
/// clamped against the capability record.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Base model identifier (effort suffix removed).
    pub model: String,
    /// Ordered conversation turns.
    pub turns: Vec<Turn>,
    /// Declarative schema for structured output, if requested.
    pub schema: Option<SchemaDescription>,
    /// Sampling temperature, already clamped by capabilities.
    pub temperature: Option<f32>,
    /// Reasoning effort; only OpenAI-family requests forward it.
    pub reasoning_effort: Option<ReasoningEffort>,
}
