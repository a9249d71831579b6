//! Gemini message translation
//!
//! Stateless reshaping of the provider-agnostic turn list into the
//! generateContent request shape. The first system turn becomes the
//! system instruction; any later system turn demotes to an ordinary user
//! turn at its original position. Turns with empty content are dropped
//! entirely because the backend rejects them.

use serde::Serialize;

use crate::core::types::{Turn, TurnRole};

/// Translated prompt: optional system instruction plus ordered contents.
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiPrompt {
    /// First non-empty system turn, when one exists.
    pub system_instruction: Option<String>,
    /// Remaining turns in original relative order.
    pub contents: Vec<GeminiContent>,
}

/// One entry of the `contents` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeminiContent {
    /// `user` or `model`.
    pub role: &'static str,
    /// Text parts.
    pub parts: Vec<GeminiPart>,
}

/// One text part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeminiPart {
    pub text: String,
}

impl GeminiContent {
    fn new(role: &'static str, text: &str) -> Self {
        Self {
            role,
            parts: vec![GeminiPart {
                text: text.to_string(),
            }],
        }
    }
}

/// Translate a turn list into the Gemini request shape.
pub fn to_gemini_format(turns: &[Turn]) -> GeminiPrompt {
    let mut prompt = GeminiPrompt {
        system_instruction: None,
        contents: Vec::new(),
    };

    let mut system_turns_seen = 0usize;
    for turn in turns {
        // Empty content throws a 500 inside the backend.
        if turn.content.is_empty() {
            continue;
        }
        match turn.role {
            TurnRole::System => {
                system_turns_seen += 1;
                if system_turns_seen == 1 {
                    prompt.system_instruction = Some(turn.content.clone());
                } else {
                    prompt
                        .contents
                        .push(GeminiContent::new("user", &turn.content));
                }
            }
            TurnRole::User => prompt
                .contents
                .push(GeminiContent::new("user", &turn.content)),
            TurnRole::Assistant => prompt
                .contents
                .push(GeminiContent::new("model", &turn.content)),
        }
    }

    prompt
}
