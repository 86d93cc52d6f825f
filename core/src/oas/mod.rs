#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **spec**: Loading of the documented subset of an OpenAPI document.
//! - **naming**: Slug rules for operation and resource IDs.

pub mod naming;
pub mod spec;

pub use naming::{operation_file_name, operation_slug, resource_file_name, resource_slug};
pub use spec::{
    load_spec, HttpMethod, LoadedSpec, OpenApiSpec, Operation, OperationRef, Schema, SpecTag,
};
