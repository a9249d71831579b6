//! Default schema adapter
//!
//! Converts a [`SchemaDescription`](super::SchemaDescription) into a JSON
//! schema value. All three backend families consume this dialect: OpenAI
//! wraps it in a `json_schema` response format, Gemini passes it as
//! `responseSchema`, Anthropic as a tool `input_schema`. Objects are closed
//! (`additionalProperties: false`) with every non-optional field listed in
//! `required`, which is the strict dialect OpenAI structured output expects.

use serde_json::{json, Map, Value};

use super::{SchemaAdapter, SchemaDescription, SchemaKind};
use crate::core::providers::error::LlmError;

/// Default [`SchemaAdapter`] producing JSON schema values.
#[derive(Debug, Clone, Default)]
pub struct JsonSchemaAdapter;

impl JsonSchemaAdapter {
    /// Create the adapter.
    pub fn new() -> Self {
        Self
    }

    fn convert_node(&self, node: &SchemaDescription) -> Result<Value, LlmError> {
        let mut converted = match &node.kind {
            SchemaKind::String => json!({"type": "string"}),
            SchemaKind::Number => json!({"type": "number"}),
            SchemaKind::Integer => json!({"type": "integer"}),
            SchemaKind::Boolean => json!({"type": "boolean"}),
            SchemaKind::Enum(values) => {
                if values.is_empty() {
                    return Err(LlmError::schema_conversion(
                        "enum description has no values",
                    ));
                }
                json!({"type": "string", "enum": values})
            }
            SchemaKind::Array(element) => {
                json!({"type": "array", "items": self.convert_node(element)?})
            }
            SchemaKind::Object(fields) => {
                let mut properties = Map::new();
                let mut required = Vec::new();
                for field in fields {
                    if properties.contains_key(&field.name) {
                        return Err(LlmError::schema_conversion(format!(
                            "duplicate object field '{}'",
                            field.name
                        )));
                    }
                    if !field.optional {
                        required.push(Value::String(field.name.clone()));
                    }
                    let _ = properties.insert(field.name.clone(), self.convert_node(&field.schema)?);
                }
                json!({
                    "type": "object",
                    "properties": properties,
                    "required": required,
                    "additionalProperties": false,
                })
            }
            SchemaKind::Union(alternatives) => {
                if alternatives.is_empty() {
                    return Err(LlmError::schema_conversion(
                        "union description has no alternatives",
                    ));
                }
                let converted: Result<Vec<Value>, LlmError> = alternatives
                    .iter()
                    .map(|alternative| self.convert_node(alternative))
                    .collect();
                json!({"anyOf": converted?})
            }
        };

        if let Some(description) = &node.description {
            if let Some(object) = converted.as_object_mut() {
                let _ = object.insert(
                    "description".to_string(),
                    Value::String(description.clone()),
                );
            }
        }

        Ok(converted)
    }
}

impl SchemaAdapter for JsonSchemaAdapter {
    fn convert(&self, schema: &SchemaDescription) -> Result<Value, LlmError> {
        self.convert_node(schema)
    }
}
