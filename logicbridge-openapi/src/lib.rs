//! # logicbridge-openapi
//!
//! Builds the single-operation OpenAPI 3.0 descriptor a tool-calling
//! runtime consumes to invoke a Logic App callback URL without a
//! hand-written wrapper function.
//!
//! Two authentication variants exist:
//!
//! - **SAS**: the signed query parameters stay out of the document (a fixed
//!   deny-list covers the signature parameters); every other query
//!   parameter of the callback URL is reinjected as a defaulted query
//!   parameter.
//! - **Managed identity**: no query credentials at all; the document
//!   declares an `Authorization` apiKey header security scheme and the
//!   runtime negotiates a bearer token.
//!
//! ```rust
//! use logicbridge_openapi::DescriptorBuilder;
//!
//! let doc = DescriptorBuilder::new("https://host/path?sv=1&sig=abc&custom=val")
//!     .unwrap()
//!     .title("weatherflow")
//!     .build_sas();
//! assert_eq!(doc.servers[0].url, "https://host/path");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builder;
pub mod descriptor;

pub use builder::{DescriptorBuilder, DescriptorError, SAS_PARAM_DENY_LIST};
pub use descriptor::{
    Operation, OpenApiDocument, Parameter, RequestBody, SecurityScheme, Server,
};
