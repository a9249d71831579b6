//! Declarative schema descriptions
//!
//! A schema description is the provider-agnostic, declarative shape of a
//! structured response: nested objects, arrays, enums, unions, and optional
//! fields, each carrying a description. The facade forwards descriptions
//! verbatim to a [`SchemaAdapter`], which converts them into the
//! provider-native representation. The adapter is a collaborator seam; the
//! crate ships [`JsonSchemaAdapter`] as the default implementation.

mod json_schema;

pub use json_schema::JsonSchemaAdapter;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::providers::error::LlmError;

/// A declarative, nested, typed schema node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDescription {
    /// Human-readable description forwarded to the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The node's shape.
    pub kind: SchemaKind,
}

/// Shape of a schema node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    String,
    Number,
    Integer,
    Boolean,
    /// Closed set of string values.
    Enum(Vec<String>),
    /// Homogeneous list of the element schema.
    Array(Box<SchemaDescription>),
    /// Named fields, each required unless marked optional.
    Object(Vec<SchemaField>),
    /// Any one of the listed alternatives.
    Union(Vec<SchemaDescription>),
}

/// One named field of an object schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field name.
    pub name: String,
    /// Field schema.
    pub schema: SchemaDescription,
    /// Whether the field may be omitted.
    #[serde(default)]
    pub optional: bool,
}

impl SchemaDescription {
    /// A string node.
    pub fn string() -> Self {
        Self::of(SchemaKind::String)
    }

    /// A number node.
    pub fn number() -> Self {
        Self::of(SchemaKind::Number)
    }

    /// An integer node.
    pub fn integer() -> Self {
        Self::of(SchemaKind::Integer)
    }

    /// A boolean node.
    pub fn boolean() -> Self {
        Self::of(SchemaKind::Boolean)
    }

    /// An enum node over the given string values.
    pub fn enumeration(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::of(SchemaKind::Enum(
            values.into_iter().map(Into::into).collect(),
        ))
    }

    /// An array node of the given element schema.
    pub fn array(element: SchemaDescription) -> Self {
        Self::of(SchemaKind::Array(Box::new(element)))
    }

    /// An object node with the given fields.
    pub fn object(fields: impl IntoIterator<Item = SchemaField>) -> Self {
        Self::of(SchemaKind::Object(fields.into_iter().collect()))
    }

    /// A union node over the given alternatives.
    pub fn union(alternatives: impl IntoIterator<Item = SchemaDescription>) -> Self {
        Self::of(SchemaKind::Union(alternatives.into_iter().collect()))
    }

    /// Attach a description to the node.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn of(kind: SchemaKind) -> Self {
        Self {
            description: None,
            kind,
        }
    }
}

impl SchemaField {
    /// A required field.
    pub fn required(name: impl Into<String>, schema: SchemaDescription) -> Self {
        Self {
            name: name.into(),
            schema,
            optional: false,
        }
    }

    /// An optional field.
    pub fn optional(name: impl Into<String>, schema: SchemaDescription) -> Self {
        Self {
            name: name.into(),
            schema,
            optional: true,
        }
    }
}

/// Converts a declarative schema description into the provider-native
/// structured-output representation.
///
/// Conversion failures surface as [`LlmError::SchemaConversion`] and
/// propagate to the caller unmodified.
pub trait SchemaAdapter: Send + Sync + std::fmt::Debug {
    /// Convert a description into a provider-native schema value.
    fn convert(&self, schema: &SchemaDescription) -> Result<Value, LlmError>;
}
