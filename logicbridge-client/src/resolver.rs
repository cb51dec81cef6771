//! Callback URL resolution through the ARM control plane.
//!
//! One authenticated `listCallbackUrl` POST per (workflow, trigger) pair.
//! The response carries a pre-signed, time-limited URL in its `value` field;
//! everything else in the body is ignored.

use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use logicbridge_core::{ResolutionError, TriggerRef};

use crate::credential::TokenCredential;

/// Default base URL of the Azure management control plane.
pub const DEFAULT_MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";

/// ARM API version for the Microsoft.Logic provider.
pub const ARM_API_VERSION: &str = "2016-06-01";

/// `listCallbackUrl` response body. Only `value` matters here.
#[derive(Debug, Deserialize)]
struct ListCallbackUrlResponse {
    value: Option<String>,
}

/// Resolves trigger callback URLs through the management control plane.
#[derive(Debug, Clone)]
pub struct CallbackResolver {
    client: Client,
    credential: Arc<dyn TokenCredential>,
    management_endpoint: String,
}

impl CallbackResolver {
    /// Create a resolver using the default management endpoint.
    pub fn new(client: Client, credential: Arc<dyn TokenCredential>) -> Self {
        Self::with_endpoint(client, credential, DEFAULT_MANAGEMENT_ENDPOINT)
    }

    /// Create a resolver against a custom management endpoint.
    ///
    /// Sovereign clouds and tests override the default here.
    pub fn with_endpoint(
        client: Client,
        credential: Arc<dyn TokenCredential>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            credential,
            management_endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    /// The management endpoint this resolver talks to.
    #[must_use]
    pub fn management_endpoint(&self) -> &str {
        &self.management_endpoint
    }

    /// Resolve the callback URL for a trigger.
    ///
    /// Performs exactly one control-plane request; callers are responsible
    /// for caching the result.
    pub async fn resolve(&self, trigger: &TriggerRef) -> Result<String, ResolutionError> {
        let url = format!(
            "{}{}?api-version={}",
            self.management_endpoint,
            trigger.list_callback_url_path(),
            ARM_API_VERSION
        );

        let token = self.credential.get_token().await?;

        debug!(
            workflow = %trigger.workflow,
            trigger = %trigger.trigger_name,
            "resolving callback URL"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token.secret())
            .header("content-type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResolutionError::from_status(
                status.as_u16(),
                &trigger.workflow.to_string(),
                truncate(&body),
            ));
        }

        let body: ListCallbackUrlResponse = response
            .json()
            .await
            .map_err(|e| ResolutionError::MalformedResponse(e.to_string()))?;

        let callback_url = body
            .value
            .filter(|v| !v.is_empty())
            .ok_or(ResolutionError::MissingCallbackUrl)?;

        debug!(workflow = %trigger.workflow, "callback URL resolved");
        Ok(callback_url)
    }
}

fn truncate(body: &str) -> String {
    const MAX: usize = 512;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Cut on a char boundary; byte 512 may fall inside a multibyte char.
    let end = (0..=MAX)
        .rev()
        .find(|&i| body.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}...", &body[..end])
}
