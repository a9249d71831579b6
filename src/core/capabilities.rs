//! Model capability resolution
//!
//! Derives an immutable capability record from a model identifier. Every
//! rule lives in an explicit table or switch in this file so each one is
//! independently auditable and unit-testable; no other module inspects the
//! identifier string.

use crate::core::types::ReasoningEffort;

/// Backend family a model identifier resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// OpenAI chat completions API. The default family.
    OpenAi,
    /// Google Gemini (AI Studio generateContent API).
    Gemini,
    /// Anthropic messages API.
    Anthropic,
    /// Local OpenAI-compatible serving endpoint (llama / deepseek models).
    Ollama,
}

impl ProviderKind {
    /// Stable provider name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Ollama => "ollama",
        }
    }
}

/// Ordered token → family rules. First match wins; identifiers matching no
/// rule fall through to [`ProviderKind::OpenAi`].
const PROVIDER_TOKEN_RULES: &[(&str, ProviderKind)] = &[
    ("gemini", ProviderKind::Gemini),
    ("claude", ProviderKind::Anthropic),
    ("llama", ProviderKind::Ollama),
    ("deepseek", ProviderKind::Ollama),
];

/// The one legacy identifier that supports neither structured output nor a
/// true system role.
const LEGACY_NO_SYSTEM_MODEL: &str = "o1-mini";

/// Temperature forced when a model lacks a true system role.
const NO_SYSTEM_ROLE_TEMPERATURE: f32 = 1.0;

/// Derived, immutable facts about what a model identifier supports.
///
/// Every field is a pure function of the identifier string. Two calls to
/// [`ModelCapabilities::resolve`] with the same identifier return
/// field-identical records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCapabilities {
    /// The identifier the record was derived from.
    pub model: String,
    /// Backend family.
    pub provider: ProviderKind,
    /// Whether schema-constrained output can be requested.
    pub supports_structured_output: bool,
    /// Whether the backend honors a dedicated system role.
    pub supports_system_role: bool,
    /// Whether a sampling temperature may be attached.
    pub supports_temperature: bool,
    /// Role name the backend expects for system turns.
    pub system_role_name: &'static str,
}

impl ModelCapabilities {
    /// Resolve the capability record for a model identifier. Total: every
    /// string resolves, unlisted identifiers included.
    pub fn resolve(model: &str) -> Self {
        let provider = resolve_provider_kind(model);

        let is_legacy = model == LEGACY_NO_SYSTEM_MODEL;

        Self {
            model: model.to_string(),
            provider,
            supports_structured_output: !is_legacy,
            supports_system_role: !is_legacy,
            supports_temperature: !is_reasoning_model(model) && !model.starts_with("gpt-5"),
            system_role_name: match provider {
                ProviderKind::OpenAi => "developer",
                ProviderKind::Gemini | ProviderKind::Anthropic | ProviderKind::Ollama => "system",
            },
        }
    }

    /// Clamp a requested temperature against the capability record.
    ///
    /// A model without a true system role gets its instructions as a user
    /// turn, so the temperature is forced to a fixed fallback; a model
    /// without temperature support drops the value entirely. The second rule
    /// is applied last.
    pub fn effective_temperature(&self, requested: Option<f32>) -> Option<f32> {
        let temperature = if self.supports_system_role {
            requested
        } else {
            Some(NO_SYSTEM_ROLE_TEMPERATURE)
        };

        if self.supports_temperature {
            temperature
        } else {
            None
        }
    }
}

/// Apply the ordered token rules; no match falls through to OpenAI.
fn resolve_provider_kind(model: &str) -> ProviderKind {
    for (token, kind) in PROVIDER_TOKEN_RULES {
        if model.contains(token) {
            return *kind;
        }
    }
    ProviderKind::OpenAi
}

/// Reasoning-style identifier convention: `o` followed by an ASCII digit
/// (o1, o3, o4-mini, ...).
fn is_reasoning_model(model: &str) -> bool {
    let mut chars = model.chars();
    chars.next() == Some('o') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Split a recognized reasoning-effort suffix off a model identifier.
///
/// The suffix is recognized only when the final space-separated token is a
/// known effort level (`"o3-mini high"` → `("o3-mini", High)`). Identifiers
/// without a recognized suffix come back unchanged.
pub fn split_reasoning_suffix(model: &str) -> (&str, Option<ReasoningEffort>) {
    if let Some((base, suffix)) = model.rsplit_once(' ') {
        if let Some(effort) = ReasoningEffort::parse(suffix.trim()) {
            return (base, Some(effort));
        }
    }
    (model, None)
}
