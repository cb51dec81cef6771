//! The invocation envelope handed back to an agent.
//!
//! A workflow invocation always resolves to one of two shapes. The agent
//! runtime never sees a raw error or an arbitrary response body; the
//! adapter in `logicbridge-tools` decodes the untyped JSON boundary into
//! this tagged type.

use serde::{Deserialize, Serialize};

/// Result of a workflow invocation, as consumed by an agent.
///
/// Serializes with a `status` tag:
///
/// ```json
/// {"status": "success", "location": "Seattle", "forecast": "sunny"}
/// {"status": "error", "location": "Seattle", "error": "bad request"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum InvocationEnvelope {
    /// The workflow reported success.
    Success {
        /// The input location, echoed back.
        location: String,
        /// Payload data returned by the workflow.
        forecast: String,
    },
    /// The workflow reported failure, or the invocation itself failed.
    Error {
        /// The input location, echoed back.
        location: String,
        /// Human-readable error message.
        #[serde(rename = "error")]
        message: String,
    },
}

impl InvocationEnvelope {
    /// Create a success envelope.
    pub fn success(location: impl Into<String>, forecast: impl Into<String>) -> Self {
        Self::Success {
            location: location.into(),
            forecast: forecast.into(),
        }
    }

    /// Create an error envelope.
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Whether this is a success envelope.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The echoed input location.
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::Success { location, .. } | Self::Error { location, .. } => location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_serialization() {
        let envelope = InvocationEnvelope::success("Seattle", "sunny");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "success",
                "location": "Seattle",
                "forecast": "sunny"
            })
        );
    }

    #[test]
    fn test_error_serialization() {
        let envelope = InvocationEnvelope::error("Seattle", "bad request");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "error",
                "location": "Seattle",
                "error": "bad request"
            })
        );
    }

    #[test]
    fn test_round_trip() {
        let envelope = InvocationEnvelope::error("Oslo", "timeout");
        let json = serde_json::to_string(&envelope).unwrap();
        let back: InvocationEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(envelope, back);
        assert!(!back.is_success());
        assert_eq!(back.location(), "Oslo");
    }
}
