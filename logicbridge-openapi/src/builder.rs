//! Descriptor construction from a resolved callback URL.

use indexmap::IndexMap;
use thiserror::Error;
use url::Url;

use crate::descriptor::{
    Components, Info, MediaType, OpenApiDocument, Operation, Parameter, PathItem, RequestBody,
    Response, SecurityScheme, Server,
};

/// Query parameter names carrying the SAS signature; never emitted into a
/// descriptor.
pub const SAS_PARAM_DENY_LIST: &[&str] = &["sv", "sig", "sr", "se", "sp"];

/// Name of the security scheme declared by the managed-identity variant.
const MANAGED_IDENTITY_SCHEME: &str = "managed_identity";

/// Errors from descriptor construction.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The callback URL could not be parsed.
    #[error("Invalid callback URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Builds the OpenAPI descriptor for one callback URL.
///
/// The document is generated once at registration time; the builder
/// performs no invocation.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    callback_url: Url,
    title: String,
    description: Option<String>,
    operation_id: String,
}

impl DescriptorBuilder {
    /// Create a builder for a resolved callback URL.
    pub fn new(callback_url: &str) -> Result<Self, DescriptorError> {
        let callback_url = Url::parse(callback_url)?;
        Ok(Self {
            callback_url,
            title: "Logic App workflow".to_string(),
            description: None,
            operation_id: "invokeWorkflow".to_string(),
        })
    }

    /// Set the document title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the document description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the operation ID.
    #[must_use]
    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = id.into();
        self
    }

    /// The callback URL with its query string stripped.
    #[must_use]
    pub fn server_url(&self) -> String {
        let mut url = self.callback_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.to_string()
    }

    /// Build the SAS-token variant.
    ///
    /// Every query parameter of the callback URL outside the signature
    /// deny-list is reinjected as a defaulted query parameter; the
    /// signature parameters are omitted entirely. No security scheme is
    /// declared.
    #[must_use]
    pub fn build_sas(&self) -> OpenApiDocument {
        let parameters = self
            .callback_url
            .query_pairs()
            .filter(|(name, _)| !SAS_PARAM_DENY_LIST.contains(&name.as_ref()))
            .map(|(name, value)| Parameter::query_with_default(name, value))
            .collect();

        self.document(parameters, None)
    }

    /// Build the managed-identity variant.
    ///
    /// No query credentials are embedded; the document declares an
    /// `Authorization` apiKey header security scheme and a matching global
    /// security requirement.
    #[must_use]
    pub fn build_managed_identity(&self) -> OpenApiDocument {
        self.document(Vec::new(), Some(SecurityScheme::authorization_header()))
    }

    fn document(
        &self,
        parameters: Vec<Parameter>,
        security_scheme: Option<SecurityScheme>,
    ) -> OpenApiDocument {
        let request_schema = serde_json::json!({
            "type": "object",
            "properties": {
                "Location": {
                    "type": "string",
                    "description": "The location to run the workflow for"
                }
            },
            "required": ["Location"]
        });

        let mut content = IndexMap::new();
        content.insert(
            "application/json".to_string(),
            MediaType {
                schema: request_schema,
            },
        );

        let mut responses = IndexMap::new();
        responses.insert(
            "200".to_string(),
            Response {
                description: "Workflow response".to_string(),
            },
        );

        let operation = Operation {
            summary: self.description.clone(),
            operation_id: self.operation_id.clone(),
            parameters,
            request_body: RequestBody {
                required: true,
                content,
            },
            responses,
        };

        let mut paths = IndexMap::new();
        paths.insert("/".to_string(), PathItem { post: operation });

        let (components, security) = match security_scheme {
            Some(scheme) => {
                let mut schemes = IndexMap::new();
                schemes.insert(MANAGED_IDENTITY_SCHEME.to_string(), scheme);

                let mut requirement = IndexMap::new();
                requirement.insert(MANAGED_IDENTITY_SCHEME.to_string(), Vec::new());

                (
                    Some(Components {
                        security_schemes: schemes,
                    }),
                    vec![requirement],
                )
            }
            None => (None, Vec::new()),
        };

        OpenApiDocument {
            openapi: "3.0.3".to_string(),
            info: Info {
                title: self.title.clone(),
                description: self.description.clone(),
                version: "1.0.0".to_string(),
            },
            servers: vec![Server {
                url: self.server_url(),
            }],
            paths,
            components,
            security,
        }
    }
}
