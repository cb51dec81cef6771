//! Serde model of the generated OpenAPI 3.0 document.
//!
//! Only the subset of OpenAPI this system emits is modeled: one server,
//! one path, one POST operation, optional query parameters, and an
//! optional apiKey security scheme.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A generated OpenAPI 3.0 document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version string.
    pub openapi: String,

    /// Document metadata.
    pub info: Info,

    /// Server list; always exactly one entry here.
    pub servers: Vec<Server>,

    /// Path items keyed by path.
    pub paths: IndexMap<String, PathItem>,

    /// Reusable components (security schemes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    /// Global security requirements.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub security: Vec<IndexMap<String, Vec<String>>>,
}

/// Document title and version metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// Document title.
    pub title: String,
    /// Document description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Document version.
    pub version: String,
}

/// One server entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Base URL, query string already stripped.
    pub url: String,
}

/// One path item; only POST is emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathItem {
    /// The POST operation.
    pub post: Operation,
}

/// One operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Operation summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Operation identifier.
    #[serde(rename = "operationId")]
    pub operation_id: String,

    /// Query parameters reinjected from the callback URL (SAS variant).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<Parameter>,

    /// Request body schema.
    #[serde(rename = "requestBody")]
    pub request_body: RequestBody,

    /// Response descriptions keyed by status code.
    pub responses: IndexMap<String, Response>,
}

/// A query parameter with a defaulted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter location; always `query` here.
    #[serde(rename = "in")]
    pub location: String,
    /// Whether the parameter must be sent.
    pub required: bool,
    /// Parameter schema, carrying the default value.
    pub schema: JsonValue,
}

impl Parameter {
    /// A query parameter defaulting to the given value.
    pub fn query_with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: "query".to_string(),
            required: false,
            schema: serde_json::json!({
                "type": "string",
                "default": default.into()
            }),
        }
    }
}

/// The request body of the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    /// Whether a body is required.
    pub required: bool,
    /// Content keyed by media type; always `application/json` here.
    pub content: IndexMap<String, MediaType>,
}

/// Schema holder for one media type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    /// The JSON schema of the body.
    pub schema: JsonValue,
}

/// One response description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Human-readable description.
    pub description: String,
}

/// Reusable components; only security schemes are emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Components {
    /// Security schemes keyed by name.
    #[serde(rename = "securitySchemes")]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

/// An apiKey-style security scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    /// Scheme type; always `apiKey` here.
    #[serde(rename = "type")]
    pub scheme_type: String,
    /// Where the key is carried.
    #[serde(rename = "in")]
    pub location: String,
    /// Header name carrying the key.
    pub name: String,
}

impl SecurityScheme {
    /// The bearer-token-in-`Authorization`-header scheme used by the
    /// managed-identity variant.
    #[must_use]
    pub fn authorization_header() -> Self {
        Self {
            scheme_type: "apiKey".to_string(),
            location: "header".to_string(),
            name: "Authorization".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_security_scheme_shape() {
        let scheme = SecurityScheme::authorization_header();
        let json = serde_json::to_value(&scheme).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "apiKey",
                "in": "header",
                "name": "Authorization"
            })
        );
    }

    #[test]
    fn test_parameter_with_default() {
        let param = Parameter::query_with_default("custom", "val");
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["in"], "query");
        assert_eq!(json["schema"]["default"], "val");
    }
}
