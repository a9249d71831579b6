//! Anthropic message translation
//!
//! Stateless reshaping of the provider-agnostic turn list into the messages
//! API request shape. System-turn folding mirrors the Gemini translator:
//! first system turn → dedicated `system` field, later system turns demote
//! to unmarked user turns at their original positions. Unlike Gemini,
//! empty-content turns are kept; the backend accepts them.

use serde::Serialize;

use crate::core::types::{Turn, TurnRole};

/// Translated prompt: optional system field plus ordered messages.
#[derive(Debug, Clone, PartialEq)]
pub struct AnthropicPrompt {
    /// First system turn, when one exists.
    pub system: Option<String>,
    /// Remaining turns in original relative order.
    pub messages: Vec<AnthropicMessage>,
}

/// One entry of the `messages` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnthropicMessage {
    /// `user` or `assistant`.
    pub role: &'static str,
    /// Text content.
    pub content: String,
}

/// Translate a turn list into the Anthropic request shape.
pub fn to_anthropic_format(turns: &[Turn]) -> AnthropicPrompt {
    let mut prompt = AnthropicPrompt {
        system: None,
        messages: Vec::new(),
    };

    let mut system_turns_seen = 0usize;
    for turn in turns {
        match turn.role {
            TurnRole::System => {
                system_turns_seen += 1;
                if system_turns_seen == 1 {
                    prompt.system = Some(turn.content.clone());
                } else {
                    prompt.messages.push(AnthropicMessage {
                        role: "user",
                        content: turn.content.clone(),
                    });
                }
            }
            TurnRole::User => prompt.messages.push(AnthropicMessage {
                role: "user",
                content: turn.content.clone(),
            }),
            TurnRole::Assistant => prompt.messages.push(AnthropicMessage {
                role: "assistant",
                content: turn.content.clone(),
            }),
        }
    }

    prompt
}
