//! Workflow identity types.
//!
//! A Logic App workflow lives at a fixed position in the Azure resource
//! hierarchy: subscription / resource group / workflow name. These types
//! carry those coordinates and format the management-plane resource path.

use serde::{Deserialize, Serialize};

/// The Azure resource coordinates of a Logic App workflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkflowIdentity {
    /// Azure subscription ID.
    pub subscription_id: String,
    /// Resource group containing the workflow.
    pub resource_group: String,
    /// Name of the workflow resource.
    pub workflow_name: String,
}

impl WorkflowIdentity {
    /// Create a new workflow identity.
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        workflow_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            workflow_name: workflow_name.into(),
        }
    }

    /// The ARM resource path of this workflow, without a leading host.
    #[must_use]
    pub fn resource_path(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Logic/workflows/{}",
            self.subscription_id, self.resource_group, self.workflow_name
        )
    }

    /// The `listCallbackUrl` path for a named trigger of this workflow.
    #[must_use]
    pub fn list_callback_url_path(&self, trigger_name: &str) -> String {
        format!(
            "{}/triggers/{}/listCallbackUrl",
            self.resource_path(),
            trigger_name
        )
    }

    /// Pair this identity with a trigger name.
    #[must_use]
    pub fn trigger(self, trigger_name: impl Into<String>) -> TriggerRef {
        TriggerRef {
            workflow: self,
            trigger_name: trigger_name.into(),
        }
    }
}

impl std::fmt::Display for WorkflowIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.subscription_id, self.resource_group, self.workflow_name
        )
    }
}

/// A workflow identity paired with the trigger to invoke.
///
/// This is the unit the resolver works on: one callback URL exists per
/// (workflow, trigger) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerRef {
    /// The workflow the trigger belongs to.
    pub workflow: WorkflowIdentity,
    /// Name of the HTTP trigger.
    pub trigger_name: String,
}

impl TriggerRef {
    /// Create a new trigger reference.
    pub fn new(workflow: WorkflowIdentity, trigger_name: impl Into<String>) -> Self {
        Self {
            workflow,
            trigger_name: trigger_name.into(),
        }
    }

    /// The workflow name this trigger belongs to.
    #[must_use]
    pub fn workflow_name(&self) -> &str {
        &self.workflow.workflow_name
    }

    /// The `listCallbackUrl` resource path for this trigger.
    #[must_use]
    pub fn list_callback_url_path(&self) -> String {
        self.workflow.list_callback_url_path(&self.trigger_name)
    }
}
