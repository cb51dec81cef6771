//! Error types for callback resolution and workflow invocation.
//!
//! The system has exactly two error families: resolution failures are fatal
//! to a registration attempt and propagate to the caller; invocation
//! failures are caught at the tool boundary and folded into the error
//! envelope, never re-raised to the agent runtime.

use thiserror::Error;

/// Errors from a credential provider.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The configured token source is missing.
    #[error("Token source not available: {0}")]
    MissingToken(String),

    /// Acquiring a token failed.
    #[error("Token acquisition failed: {0}")]
    AcquisitionFailed(String),
}

/// Errors from resolving a trigger's callback URL through the control plane.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Required client configuration is missing.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// The workflow or trigger does not exist.
    #[error("Workflow or trigger not found: {0}")]
    NotFound(String),

    /// The caller's credential lacks permission for the lookup.
    #[error("Not authorized to resolve callback URL for {0}")]
    NotAuthorized(String),

    /// The control plane returned an unexpected status.
    #[error("Control plane returned status {status}: {body}")]
    ControlPlane {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The network request to the control plane failed.
    #[error("Control plane request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response did not contain a callback URL.
    #[error("Control plane response missing callback URL value")]
    MissingCallbackUrl,

    /// The response body was not the expected shape.
    #[error("Malformed control plane response: {0}")]
    MalformedResponse(String),

    /// The credential provider failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl ResolutionError {
    /// Classify a non-success control-plane status code.
    #[must_use]
    pub fn from_status(status: u16, subject: &str, body: String) -> Self {
        match status {
            404 => Self::NotFound(subject.to_string()),
            401 | 403 => Self::NotAuthorized(subject.to_string()),
            _ => Self::ControlPlane { status, body },
        }
    }
}

/// Errors from invoking a workflow's callback URL.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The workflow was never registered with the client.
    #[error("Workflow not registered: {0}")]
    NotRegistered(String),

    /// The network request to the trigger endpoint failed.
    #[error("Workflow invocation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The trigger endpoint returned a non-success status.
    #[error("Workflow returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("Malformed workflow response: {0}")]
    MalformedResponse(String),

    /// Re-resolving an expired callback URL failed.
    #[error("Callback URL refresh failed: {0}")]
    Refresh(#[from] Box<ResolutionError>),
}

impl InvocationError {
    /// Create a not-registered error.
    #[must_use]
    pub fn not_registered(workflow: impl Into<String>) -> Self {
        Self::NotRegistered(workflow.into())
    }

    /// Whether the failure looks like an expired or revoked callback URL.
    ///
    /// The signed URL embeds its own authorization, so the trigger endpoint
    /// answers 401/403 once the signature lapses.
    #[must_use]
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
