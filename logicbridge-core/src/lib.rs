//! # logicbridge-core
//!
//! Core types shared across the logicbridge workspace.
//!
//! This crate defines:
//!
//! - [`WorkflowIdentity`]: the Azure resource coordinates of a Logic App
//! - [`TriggerRef`]: a workflow paired with the trigger to invoke
//! - [`ResolutionError`] / [`InvocationError`]: the two error families of
//!   the system
//! - [`InvocationEnvelope`]: the tagged success/error shape handed to an
//!   agent after a workflow invocation

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod envelope;
pub mod errors;
pub mod workflow;

pub use envelope::InvocationEnvelope;
pub use errors::{CredentialError, InvocationError, ResolutionError};
pub use workflow::{TriggerRef, WorkflowIdentity};
