//! # logicbridge-client
//!
//! Resolution and invocation client for Azure Logic App HTTP triggers.
//!
//! The flow is strictly linear: resolve a trigger's pre-signed callback URL
//! once through the ARM control plane, cache it, then POST JSON payloads to
//! it for the remainder of the process.
//!
//! ```ignore
//! use logicbridge_client::{LogicAppClient, StaticTokenCredential};
//! use logicbridge_core::WorkflowIdentity;
//! use std::sync::Arc;
//!
//! let credential = Arc::new(StaticTokenCredential::new("eyJ..."));
//! let client = LogicAppClient::builder(credential)
//!     .subscription_id("00000000-0000-0000-0000-000000000000")
//!     .resource_group("rg-agents")
//!     .build()?;
//!
//! client.register("weatherflow", "When_a_HTTP_request_is_received").await?;
//! let response = client
//!     .invoke("weatherflow", &serde_json::json!({"location": "Seattle"}))
//!     .await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod credential;
pub mod resolver;

pub use client::{LogicAppClient, LogicAppClientBuilder};
pub use credential::{AccessToken, EnvTokenCredential, StaticTokenCredential, TokenCredential};
pub use resolver::{CallbackResolver, ARM_API_VERSION, DEFAULT_MANAGEMENT_ENDPOINT};
