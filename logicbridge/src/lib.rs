//! # logicbridge
//!
//! Expose Azure Logic App workflows as callable tools for AI agents.
//!
//! A Logic App with an HTTP trigger is already a perfectly good tool for an
//! agent; the missing plumbing is small and this workspace provides it:
//! resolve the trigger's pre-signed callback URL once through the ARM
//! control plane, cache it, POST JSON payloads to it, and fold every
//! outcome into a fixed success/error envelope the agent consumes.
//!
//! Two integration styles are supported:
//!
//! - **Function calling**: [`LogicAppTool`] implements the [`Tool`] trait
//!   and is registered like any other tool.
//! - **OpenAPI descriptor**: [`DescriptorBuilder`] generates a minimal
//!   single-operation OpenAPI 3.0 document for runtimes that consume tool
//!   schemas instead of wrapper functions, with SAS-token or
//!   managed-identity authentication.
//!
//! ## Quick Start
//!
//! ```ignore
//! use logicbridge::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credential = Arc::new(EnvTokenCredential::default());
//!     let client = Arc::new(
//!         LogicAppClient::builder(credential)
//!             .subscription_id(std::env::var("AZURE_SUBSCRIPTION_ID")?)
//!             .resource_group(std::env::var("AZURE_RESOURCE_GROUP")?)
//!             .build()?,
//!     );
//!
//!     client
//!         .register("weatherflow", "When_a_HTTP_request_is_received")
//!         .await?;
//!
//!     let tool = LogicAppTool::new(client, "weatherflow");
//!     let result = tool
//!         .call(serde_json::json!({"location": "Seattle"}))
//!         .await?;
//!     println!("{:?}", result.as_json());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! logicbridge is organized as a workspace of focused crates:
//!
//! - [`logicbridge_core`] - Workflow identity, errors, the invocation envelope
//! - [`logicbridge_client`] - Credential trait, callback resolver, invoker
//! - [`logicbridge_tools`] - Tool trait, schemas, the Logic App tool
//! - [`logicbridge_openapi`] - OpenAPI descriptor builder

#![warn(missing_docs)]
#![deny(unsafe_code)]

// ============================================================================
// Crate Re-exports
// ============================================================================

/// Callback resolution and invocation client.
pub use logicbridge_client as client;

/// Agent tool layer.
pub use logicbridge_tools as tools;

/// OpenAPI descriptor builder.
pub use logicbridge_openapi as openapi;

// ============================================================================
// Flat Re-exports
// ============================================================================

pub use logicbridge_core::{
    CredentialError, InvocationEnvelope, InvocationError, ResolutionError, TriggerRef,
    WorkflowIdentity,
};

pub use logicbridge_client::{
    AccessToken, CallbackResolver, EnvTokenCredential, LogicAppClient, LogicAppClientBuilder,
    StaticTokenCredential, TokenCredential,
};

pub use logicbridge_tools::{
    adapt_invocation, LogicAppTool, SchemaBuilder, Tool, ToolDefinition, ToolError, ToolRegistry,
    ToolResult, ToolReturn,
};

pub use logicbridge_openapi::{DescriptorBuilder, DescriptorError, OpenApiDocument};

/// Commonly used imports.
pub mod prelude {
    pub use logicbridge_client::{
        EnvTokenCredential, LogicAppClient, StaticTokenCredential, TokenCredential,
    };
    pub use logicbridge_core::{InvocationEnvelope, WorkflowIdentity};
    pub use logicbridge_openapi::DescriptorBuilder;
    pub use logicbridge_tools::{LogicAppTool, Tool, ToolRegistry, ToolReturn};
}
