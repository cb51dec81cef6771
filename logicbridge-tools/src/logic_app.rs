//! The Logic App tool: a registered workflow exposed as an agent tool.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::debug;

use logicbridge_client::LogicAppClient;

use crate::{
    adapter::adapt_invocation,
    definition::ToolDefinition,
    errors::ToolError,
    schema::SchemaBuilder,
    tool::{Tool, ToolResult, ToolReturn},
};

/// A Logic App workflow exposed as a callable tool.
///
/// The tool takes one required `location` string argument, POSTs
/// `{"location": ...}` to the workflow's callback URL, and returns the
/// adapted envelope as a JSON tool return. Invocation failures never
/// propagate: they come back as an error envelope. The only `Err` this
/// tool produces is argument validation.
#[derive(Debug, Clone)]
pub struct LogicAppTool {
    client: Arc<LogicAppClient>,
    workflow_name: String,
    description: String,
}

impl LogicAppTool {
    /// Create a tool for a workflow already registered with the client.
    pub fn new(client: Arc<LogicAppClient>, workflow_name: impl Into<String>) -> Self {
        let workflow_name = workflow_name.into();
        Self {
            description: format!(
                "Invoke the '{workflow_name}' Logic App workflow for a location"
            ),
            client,
            workflow_name,
        }
    }

    /// Override the tool description shown to the model.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The workflow this tool invokes.
    #[must_use]
    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }
}

#[async_trait]
impl Tool for LogicAppTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(&self.workflow_name, &self.description).with_parameters(
            SchemaBuilder::new()
                .string("location", "The location to send to the workflow", true)
                .build(),
        )
    }

    async fn call(&self, args: JsonValue) -> ToolResult {
        let location = args["location"].as_str().ok_or_else(|| {
            ToolError::invalid_args(&self.workflow_name, "missing required 'location' parameter")
        })?;

        if location.trim().is_empty() {
            return Err(ToolError::invalid_args(
                &self.workflow_name,
                "'location' cannot be empty",
            ));
        }

        debug!(workflow = %self.workflow_name, location, "calling Logic App tool");

        let payload = serde_json::json!({ "location": location });
        let outcome = self.client.invoke(&self.workflow_name, &payload).await;
        let envelope = adapt_invocation(location, outcome);

        ToolReturn::from_value(&envelope).map_err(ToolError::from)
    }
}
