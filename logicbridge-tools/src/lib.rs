//! # logicbridge-tools
//!
//! The agent-facing tool layer: a [`Tool`] trait in the local idiom, a
//! JSON-schema [`SchemaBuilder`] for tool parameters, the [`LogicAppTool`]
//! that turns a registered workflow into a callable tool, and the result
//! adapter that folds every invocation outcome into the two-shape
//! [`InvocationEnvelope`](logicbridge_core::InvocationEnvelope).
//!
//! ## Defining the Logic App tool
//!
//! ```ignore
//! use logicbridge_tools::{LogicAppTool, Tool, ToolRegistry};
//! use std::sync::Arc;
//!
//! let tool = LogicAppTool::new(client.clone(), "weatherflow")
//!     .with_description("Fetch the forecast for a location");
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(tool);
//!
//! let definitions = registry.definitions(); // handed to the model
//! let result = registry
//!     .call("weatherflow", serde_json::json!({"location": "Seattle"}))
//!     .await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod adapter;
pub mod definition;
pub mod errors;
pub mod logic_app;
pub mod registry;
pub mod schema;
pub mod tool;

pub use adapter::adapt_invocation;
pub use definition::ToolDefinition;
pub use errors::ToolError;
pub use logic_app::LogicAppTool;
pub use registry::ToolRegistry;
pub use schema::SchemaBuilder;
pub use tool::{Tool, ToolResult, ToolReturn};
