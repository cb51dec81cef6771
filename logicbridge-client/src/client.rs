//! The Logic App client: registration, callback cache, invocation.
//!
//! `register` resolves a trigger's callback URL once and caches it keyed by
//! workflow name; `invoke` POSTs a JSON payload to the cached URL. A cached
//! URL is treated as valid for the life of the process, except that a
//! 401/403 from the trigger endpoint triggers a single re-resolution and
//! retry (the signature on the URL is time-limited).

use parking_lot::RwLock;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use logicbridge_core::{InvocationError, ResolutionError, TriggerRef, WorkflowIdentity};

use crate::credential::TokenCredential;
use crate::resolver::{CallbackResolver, DEFAULT_MANAGEMENT_ENDPOINT};

/// A cached callback registration.
#[derive(Debug, Clone)]
struct Registration {
    callback_url: String,
    trigger: TriggerRef,
}

/// Client for registering and invoking Logic App workflows.
///
/// One shared `reqwest::Client` serves both the control plane and the
/// trigger endpoints. The registration cache is interior-mutable, so the
/// client can be shared behind an `Arc` across tasks.
#[derive(Debug)]
pub struct LogicAppClient {
    http: Client,
    resolver: CallbackResolver,
    subscription_id: String,
    resource_group: String,
    registrations: RwLock<HashMap<String, Registration>>,
}

impl LogicAppClient {
    /// Start building a client with the given credential.
    pub fn builder(credential: Arc<dyn TokenCredential>) -> LogicAppClientBuilder {
        LogicAppClientBuilder::new(credential)
    }

    /// The workflow identity for a workflow name under this client's scope.
    #[must_use]
    pub fn workflow_identity(&self, workflow_name: &str) -> WorkflowIdentity {
        WorkflowIdentity::new(&self.subscription_id, &self.resource_group, workflow_name)
    }

    /// Whether a workflow has been registered.
    #[must_use]
    pub fn is_registered(&self, workflow_name: &str) -> bool {
        self.registrations.read().contains_key(workflow_name)
    }

    /// The cached callback URL for a workflow, if registered.
    #[must_use]
    pub fn callback_url(&self, workflow_name: &str) -> Option<String> {
        self.registrations
            .read()
            .get(workflow_name)
            .map(|r| r.callback_url.clone())
    }

    /// Register a workflow trigger, resolving and caching its callback URL.
    ///
    /// A second registration of the same workflow is served from the cache
    /// without a control-plane request. Returns the callback URL.
    pub async fn register(
        &self,
        workflow_name: &str,
        trigger_name: &str,
    ) -> Result<String, ResolutionError> {
        if let Some(registration) = self.registrations.read().get(workflow_name) {
            debug!(workflow = workflow_name, "registration served from cache");
            return Ok(registration.callback_url.clone());
        }

        let trigger = self.workflow_identity(workflow_name).trigger(trigger_name);
        let callback_url = self.resolver.resolve(&trigger).await?;

        self.registrations.write().insert(
            workflow_name.to_string(),
            Registration {
                callback_url: callback_url.clone(),
                trigger,
            },
        );

        Ok(callback_url)
    }

    /// Invoke a registered workflow with a JSON payload.
    ///
    /// Sends one POST to the cached callback URL and returns the parsed
    /// JSON response. On a 401/403 the callback URL is re-resolved once and
    /// the POST retried; any further failure surfaces as-is.
    pub async fn invoke(
        &self,
        workflow_name: &str,
        payload: &JsonValue,
    ) -> Result<JsonValue, InvocationError> {
        let registration = self
            .registrations
            .read()
            .get(workflow_name)
            .cloned()
            .ok_or_else(|| InvocationError::not_registered(workflow_name))?;

        match self.post(&registration.callback_url, payload).await {
            Err(err) if err.is_auth_rejection() => {
                warn!(
                    workflow = workflow_name,
                    "callback URL rejected, re-resolving once"
                );
                let fresh_url = self
                    .resolver
                    .resolve(&registration.trigger)
                    .await
                    .map_err(Box::new)?;
                self.registrations.write().insert(
                    workflow_name.to_string(),
                    Registration {
                        callback_url: fresh_url.clone(),
                        trigger: registration.trigger,
                    },
                );
                self.post(&fresh_url, payload).await
            }
            other => other,
        }
    }

    /// One POST of the payload to a callback URL.
    async fn post(&self, url: &str, payload: &JsonValue) -> Result<JsonValue, InvocationError> {
        debug!("invoking workflow trigger");

        let response = self
            .http
            .post(url)
            .header("content-type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(InvocationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.is_empty() {
            // 202 Accepted with no body is a normal async-workflow answer.
            return Ok(JsonValue::Null);
        }

        serde_json::from_str(&body)
            .map_err(|e| InvocationError::MalformedResponse(e.to_string()))
    }
}

/// Builder for [`LogicAppClient`].
#[derive(Debug)]
pub struct LogicAppClientBuilder {
    credential: Arc<dyn TokenCredential>,
    subscription_id: Option<String>,
    resource_group: Option<String>,
    management_endpoint: String,
    timeout: Option<Duration>,
}

impl LogicAppClientBuilder {
    /// Create a builder with the given credential.
    pub fn new(credential: Arc<dyn TokenCredential>) -> Self {
        Self {
            credential,
            subscription_id: None,
            resource_group: None,
            management_endpoint: DEFAULT_MANAGEMENT_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    /// Set the Azure subscription ID.
    #[must_use]
    pub fn subscription_id(mut self, id: impl Into<String>) -> Self {
        self.subscription_id = Some(id.into());
        self
    }

    /// Set the resource group name.
    #[must_use]
    pub fn resource_group(mut self, rg: impl Into<String>) -> Self {
        self.resource_group = Some(rg.into());
        self
    }

    /// Override the management endpoint (sovereign clouds, tests).
    #[must_use]
    pub fn management_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.management_endpoint = endpoint.into();
        self
    }

    /// Set a request timeout on the underlying HTTP client.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// Fails if subscription ID or resource group are missing, or if the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<LogicAppClient, ResolutionError> {
        let subscription_id = self
            .subscription_id
            .ok_or_else(|| ResolutionError::MissingConfig("subscription_id".to_string()))?;
        let resource_group = self
            .resource_group
            .ok_or_else(|| ResolutionError::MissingConfig("resource_group".to_string()))?;

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let resolver = CallbackResolver::with_endpoint(
            http.clone(),
            self.credential,
            self.management_endpoint,
        );

        Ok(LogicAppClient {
            http,
            resolver,
            subscription_id,
            resource_group,
            registrations: RwLock::new(HashMap::new()),
        })
    }
}
