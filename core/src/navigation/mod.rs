#![deny(missing_docs)]

//! # Navigation
//!
//! - **model**: The sidebar tree shape.
//! - **builder**: Tag grouping and ordering for one API version.
//! - **merge**: Splicing a version group into the site navigation document.
//! - **validate**: Checking referenced pages exist on disk.

pub mod builder;
pub mod merge;
pub mod model;
pub mod validate;

pub use builder::{EndpointEntry, NavigationBuilder, ResourceEntry, TagBucket, TagBuckets};
pub use merge::{
    diff_tag_pages, extract_tag_pages, MergeOutcome, NavChanges, NavigationDocument, TagPages,
};
pub use model::{NavEntry, NavGroup};
pub use validate::{validate_pages, PageValidation};
