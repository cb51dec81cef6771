//! Credential providers for control-plane calls.
//!
//! The client never constructs a credential itself; callers inject an
//! implementation of [`TokenCredential`]. Production code typically adapts
//! an Azure identity SDK here, tests use [`StaticTokenCredential`].

use async_trait::async_trait;
use logicbridge_core::CredentialError;

/// A bearer token for the management control plane.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
}

impl AccessToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The raw token value.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.token
    }
}

// Keep token bytes out of logs.
impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken").field("token", &"***").finish()
    }
}

/// Supplies bearer tokens for management control-plane requests.
#[async_trait]
pub trait TokenCredential: Send + Sync + std::fmt::Debug {
    /// Acquire a token for the ARM scope.
    async fn get_token(&self) -> Result<AccessToken, CredentialError>;
}

/// A credential holding a fixed token.
#[derive(Debug, Clone)]
pub struct StaticTokenCredential {
    token: AccessToken,
}

impl StaticTokenCredential {
    /// Create a credential from a fixed token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: AccessToken::new(token),
        }
    }
}

#[async_trait]
impl TokenCredential for StaticTokenCredential {
    async fn get_token(&self) -> Result<AccessToken, CredentialError> {
        Ok(self.token.clone())
    }
}

/// A credential reading the token from an environment variable at call time.
#[derive(Debug, Clone)]
pub struct EnvTokenCredential {
    var_name: String,
}

impl EnvTokenCredential {
    /// Default environment variable consulted by [`EnvTokenCredential::default`].
    pub const DEFAULT_VAR: &'static str = "AZURE_MANAGEMENT_TOKEN";

    /// Create a credential reading from the named environment variable.
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }
}

impl Default for EnvTokenCredential {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

#[async_trait]
impl TokenCredential for EnvTokenCredential {
    async fn get_token(&self) -> Result<AccessToken, CredentialError> {
        match std::env::var(&self.var_name) {
            Ok(token) if !token.is_empty() => Ok(AccessToken::new(token)),
            Ok(_) => Err(CredentialError::MissingToken(format!(
                "environment variable {} is empty",
                self.var_name
            ))),
            Err(_) => Err(CredentialError::MissingToken(format!(
                "environment variable {} is not set",
                self.var_name
            ))),
        }
    }
}
