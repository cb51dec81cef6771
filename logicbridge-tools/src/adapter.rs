//! The result adapter: untyped workflow responses in, tagged envelope out.
//!
//! This is the deliberate boundary between the workflow's response body and
//! the agent runtime. Whatever came back (a success body, a failure body,
//! an unexpected shape, or an invocation error), the agent only ever sees
//! the two-shape [`InvocationEnvelope`].

use serde_json::Value as JsonValue;

use logicbridge_core::{InvocationEnvelope, InvocationError};

/// Message used when a failing workflow supplies no error text.
pub const DEFAULT_ERROR_MESSAGE: &str = "Workflow invocation failed";

/// Adapt an invocation outcome into the agent-facing envelope.
///
/// A response body counts as success only when its `result` field equals
/// `"success"`; the forecast is taken from `weather_data`, falling back to
/// `data`. Any other shape is an error, with the message taken from the
/// body's `error` field when present. Invocation errors carry their display
/// text into the error envelope.
#[must_use]
pub fn adapt_invocation(
    location: &str,
    outcome: Result<JsonValue, InvocationError>,
) -> InvocationEnvelope {
    match outcome {
        Ok(body) => adapt_body(location, &body),
        Err(err) => InvocationEnvelope::error(location, err.to_string()),
    }
}

fn adapt_body(location: &str, body: &JsonValue) -> InvocationEnvelope {
    if body.get("result").and_then(JsonValue::as_str) == Some("success") {
        let forecast = body
            .get("weather_data")
            .or_else(|| body.get("data"))
            .map(render_field)
            .unwrap_or_default();
        return InvocationEnvelope::success(location, forecast);
    }

    let message = body
        .get("error")
        .map(render_field)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
    InvocationEnvelope::error(location, message)
}

/// Render a response field as plain text; non-string fields keep their
/// JSON rendering.
fn render_field(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
