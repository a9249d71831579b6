//! Static model catalog and parameter metadata
//!
//! Presentation-only data: the catalog is never validated against at call
//! time, so an unlisted identifier is still attempted through the capability
//! resolver's token rules.

use serde::Serialize;

/// One selectable model in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    /// Display label.
    pub label: &'static str,
    /// Model identifier passed to the facade.
    pub value: &'static str,
}

/// Model used when a caller does not pick one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Supported model catalog.
pub const MODELS: &[ModelEntry] = &[
    ModelEntry { label: "GPT-5", value: "gpt-5" },
    ModelEntry { label: "GPT-5-mini", value: "gpt-5-mini" },
    ModelEntry { label: "GPT-5-nano", value: "gpt-5-nano" },
    ModelEntry { label: "GPT-4o", value: "gpt-4o" },
    ModelEntry { label: "GPT-4o-mini", value: "gpt-4o-mini" },
    ModelEntry { label: "GPT-4.1", value: "gpt-4.1" },
    ModelEntry { label: "GPT-4.1-mini", value: "gpt-4.1-mini" },
    ModelEntry { label: "GPT-4.1-nano", value: "gpt-4.1-nano" },
    ModelEntry { label: "Gemini 2.5-flash", value: "gemini-2.5-flash" },
    ModelEntry {
        label: "Gemini 2.5-flash-preview-09-2025",
        value: "gemini-2.5-flash-preview-09-2025",
    },
    ModelEntry { label: "Gemini 2.5-flash-lite", value: "gemini-2.5-flash-lite" },
    ModelEntry { label: "Gemini 2.5-pro", value: "gemini-2.5-pro" },
    ModelEntry { label: "Gemini 2.0", value: "gemini-2.0-flash" },
    ModelEntry { label: "Gemini 2.0-Lite", value: "gemini-2.0-flash-lite" },
    ModelEntry { label: "Gemini 1.5", value: "gemini-1.5-flash" },
    ModelEntry {
        label: "Claude Sonnet 4.5",
        value: "claude-sonnet-4-5-20250929",
    },
    ModelEntry {
        label: "Claude Opus 4.1",
        value: "claude-opus-4-1-20250805",
    },
    ModelEntry {
        label: "Claude Sonnet 4",
        value: "claude-sonnet-4-20250514",
    },
    ModelEntry { label: "o1", value: "o1" },
    ModelEntry { label: "o3-mini low", value: "o3-mini low" },
    ModelEntry { label: "o3-mini medium", value: "o3-mini medium" },
    ModelEntry { label: "o3-mini high", value: "o3-mini high" },
    ModelEntry { label: "o3", value: "o3" },
    ModelEntry { label: "o4-mini", value: "o4-mini" },
];

/// Widget hint for a configurable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UiElement {
    /// Masked text entry.
    Password,
    /// Selection from a fixed option list.
    Combobox,
}

/// Persistence scope for a configurable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveScope {
    /// Shared across every project of the user.
    Global,
    /// Scoped to the current project.
    Local,
}

/// Static description of one construction-time parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSpec {
    /// Parameter name as accepted by the facade.
    pub name: &'static str,
    /// Value type.
    pub param_type: &'static str,
    /// Whether a value must be supplied.
    pub required: bool,
    /// Default value, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<&'static str>,
    /// Widget hint.
    pub ui_element: UiElement,
    /// Persistence scope.
    pub save_for_user: SaveScope,
    /// Display label.
    pub label: &'static str,
    /// Help text.
    pub description: &'static str,
    /// Options for combobox parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [ModelEntry]>,
}

/// Static metadata describing the facade's construction-time knobs.
/// No network access.
pub fn configurable_parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            name: "openai_key",
            param_type: "string",
            required: false,
            default_value: None,
            ui_element: UiElement::Password,
            save_for_user: SaveScope::Global,
            label: "Open AI API Key",
            description: "Leave blank for the default, or your Open AI key - skprojectXXXXX",
            options: None,
        },
        ParameterSpec {
            name: "google_key",
            param_type: "string",
            required: false,
            default_value: None,
            ui_element: UiElement::Password,
            save_for_user: SaveScope::Global,
            label: "Google API Key",
            description: "Leave blank for the default, or your Google API key - XXXXXX",
            options: None,
        },
        ParameterSpec {
            name: "anthropic_key",
            param_type: "string",
            required: false,
            default_value: None,
            ui_element: UiElement::Password,
            save_for_user: SaveScope::Global,
            label: "Anthropic API Key",
            description: "Leave blank for the default, or your Anthropic API key - sk-ant-XXXXXX",
            options: None,
        },
        ParameterSpec {
            name: "model",
            param_type: "string",
            required: false,
            default_value: Some(DEFAULT_MODEL),
            ui_element: UiElement::Combobox,
            save_for_user: SaveScope::Local,
            label: "LLM Model",
            description: "The LLM model that you want to use to process your queries.",
            options: Some(MODELS),
        },
    ]
}
