//! JSON schema construction for tool parameters.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Fluent builder for object-typed JSON schemas.
///
/// # Example
///
/// ```rust
/// use logicbridge_tools::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .string("location", "City to fetch the forecast for", true)
///     .description("Weather lookup arguments")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    properties: IndexMap<String, JsonValue>,
    required: Vec<String>,
    description: Option<String>,
}

impl SchemaBuilder {
    /// Create a new empty schema builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string property.
    #[must_use]
    pub fn string(mut self, name: &str, desc: &str, required: bool) -> Self {
        self.properties.insert(
            name.to_string(),
            serde_json::json!({
                "type": "string",
                "description": desc
            }),
        );
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    /// Add an integer property.
    #[must_use]
    pub fn integer(mut self, name: &str, desc: &str, required: bool) -> Self {
        self.properties.insert(
            name.to_string(),
            serde_json::json!({
                "type": "integer",
                "description": desc
            }),
        );
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    /// Add a property with an arbitrary schema.
    #[must_use]
    pub fn property(mut self, name: &str, schema: JsonValue, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required {
            self.required.push(name.to_string());
        }
        self
    }

    /// Set the schema description.
    #[must_use]
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Build the schema as a JSON value.
    #[must_use]
    pub fn build(self) -> JsonValue {
        let mut schema = serde_json::json!({
            "type": "object",
            "properties": self.properties,
        });
        if !self.required.is_empty() {
            schema["required"] = JsonValue::from(self.required);
        }
        if let Some(desc) = self.description {
            schema["description"] = JsonValue::String(desc);
        }
        schema
    }
}
