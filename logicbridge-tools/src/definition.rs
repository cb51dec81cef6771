//! Tool definition types for describing tools to LLMs.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A tool description as sent to a language model.
///
/// Carries the name, description, and JSON-schema parameters of one tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name, unique within a registry.
    pub name: String,

    /// Human-readable description shown to the model.
    pub description: String,

    /// JSON Schema for the tool's parameters.
    pub parameters: JsonValue,
}

impl ToolDefinition {
    /// Create a definition with an empty object schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    /// Set the parameter schema.
    #[must_use]
    pub fn with_parameters(mut self, parameters: impl Into<JsonValue>) -> Self {
        self.parameters = parameters.into();
        self
    }
}
