#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Derives file-safe slugs from OpenAPI operation IDs and resource IDs.
//!
//! Versioned specs suffix their IDs (`get_files_id_v2025.0`); pages of every
//! version share one slug, so the suffix is dropped wherever it appears.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Extension of generated page files.
pub const PAGE_EXTENSION: &str = "mdx";

fn version_suffix_re() -> &'static Regex {
    static VERSION_SUFFIX_RE: OnceLock<Regex> = OnceLock::new();
    VERSION_SUFFIX_RE.get_or_init(|| Regex::new(r"_v[0-9]+\.[0-9]+").expect("Invalid regex"))
}

/// Removes every `_v<major>.<minor>` token from `id`.
pub fn strip_version_suffix(id: &str) -> Cow<'_, str> {
    version_suffix_re().replace_all(id, "")
}

/// Navigation slug of an operation: `get_files_id#sub` -> `get-files-id--sub`.
pub fn operation_slug(operation_id: &str) -> String {
    strip_version_suffix(operation_id)
        .replace('_', "-")
        .replace('#', "--")
}

/// Navigation slug of a resource: `file_full` -> `file-full`.
pub fn resource_slug(resource_id: &str) -> String {
    strip_version_suffix(resource_id).replace('_', "-")
}

/// Page file name of an operation (`get-files-id.mdx`).
pub fn operation_file_name(operation_id: &str) -> String {
    format!("{}.{}", operation_slug(operation_id), PAGE_EXTENSION)
}

/// Page file name of a resource (`file-full.mdx`).
pub fn resource_file_name(resource_id: &str) -> String {
    format!("{}.{}", resource_slug(resource_id), PAGE_EXTENSION)
}
