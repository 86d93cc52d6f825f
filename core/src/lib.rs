#![deny(missing_docs)]

//! # Refdocs Core
//!
//! Core library for turning OpenAPI documents into documentation pages and
//! site navigation.

/// Shared error types.
pub mod error;

/// Site and locale configuration.
pub mod config;

/// Locale-aware string ordering.
pub mod collation;

/// OpenAPI (OAS) loading and identifier naming.
pub mod oas;

/// Page descriptors and page generation.
pub mod pages;

/// Cleaning of previously generated pages.
pub mod sync;

/// Navigation tree building, merging and validation.
pub mod navigation;

/// Generic `description` walker over JSON documents.
pub mod walk;

/// Markdown reflow of descriptions.
pub mod descriptions;

/// URL rewriting in descriptions.
pub mod links;

/// JSON overlay merging.
pub mod overlay;

pub use collation::Collation;
pub use config::{LocaleContext, SiteConfig};
pub use descriptions::{clean_descriptions, CleanStats, MarkdownReflow, Reflow, ReflowError};
pub use error::{AppError, AppResult};
pub use links::LinkRewriter;
pub use navigation::{NavigationBuilder, NavigationDocument, TagBuckets};
pub use oas::{load_spec, LoadedSpec, OpenApiSpec};
pub use overlay::deep_merge;
pub use pages::{generate_pages, GeneratedPages};
pub use sync::{clear_reference_directory, reconcile, SyncReport};
