//! Tool-layer error types.

use thiserror::Error;

/// Errors surfaced by the tool layer.
///
/// Workflow invocation failures never appear here; the adapter folds them
/// into the error envelope before they reach the agent runtime. What
/// remains are caller mistakes: bad arguments and unknown tool names.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool.
    #[error("Invalid arguments for '{tool_name}': {message}")]
    InvalidArguments {
        /// Name of the tool.
        tool_name: String,
        /// What was wrong.
        message: String,
    },

    /// Tool not found in the registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolError {
    /// Create an invalid-arguments error.
    #[must_use]
    pub fn invalid_args(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_args_message() {
        let err = ToolError::invalid_args("weatherflow", "missing 'location'");
        assert!(err.to_string().contains("weatherflow"));
        assert!(err.to_string().contains("missing 'location'"));
    }

    #[test]
    fn test_not_found() {
        let err = ToolError::not_found("unknown");
        assert!(err.to_string().contains("unknown"));
    }
}
