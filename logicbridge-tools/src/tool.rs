//! Core tool trait and return types.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Arc;

use crate::{definition::ToolDefinition, errors::ToolError};

/// Result type for tool execution.
pub type ToolResult = Result<ToolReturn, ToolError>;

/// Core trait for callable tools.
///
/// A tool exposes a definition (name, description, parameter schema) for
/// the model and an async `call` taking JSON arguments.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's definition.
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with the given arguments.
    async fn call(&self, args: JsonValue) -> ToolResult;

    /// Get the tool name.
    fn name(&self) -> String {
        self.definition().name
    }
}

/// Type-erased boxed tool.
pub type BoxedTool = Arc<dyn Tool>;

/// What a tool returns after execution.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolReturn {
    /// A plain text return.
    Text(String),
    /// A structured JSON return.
    Json(JsonValue),
}

impl ToolReturn {
    /// Create a text return.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Create a JSON return.
    #[must_use]
    pub fn json(value: JsonValue) -> Self {
        Self::Json(value)
    }

    /// Create a JSON return from a serializable value.
    pub fn from_value<T: serde::Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Get the content as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Json(_) => None,
        }
    }

    /// Get the content as JSON if applicable.
    #[must_use]
    pub fn as_json(&self) -> Option<&JsonValue> {
        match self {
            Self::Json(v) => Some(v),
            Self::Text(_) => None,
        }
    }
}
