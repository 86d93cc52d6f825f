//! # Navigation Page Validation
//!
//! Checks that every page referenced by a navigation group has an `.mdx` file
//! next to the navigation document. Index pages are hand-authored and skipped.

use crate::navigation::model::NavGroup;
use crate::oas::naming::PAGE_EXTENSION;
use std::path::Path;

/// Result of [`validate_pages`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageValidation {
    /// Pages whose file exists.
    pub validated: Vec<String>,
    /// Pages whose file is missing.
    pub missing: Vec<String>,
}

/// Resolves each page of `group` against `docs_root`.
pub fn validate_pages(group: &NavGroup, docs_root: &Path) -> PageValidation {
    let mut out = PageValidation::default();

    for page in group.page_paths() {
        if page.ends_with("/index") {
            continue;
        }
        let file = docs_root.join(format!("{}.{}", page, PAGE_EXTENSION));
        if file.is_file() {
            out.validated.push(page.to_string());
        } else {
            out.missing.push(page.to_string());
        }
    }

    out
}
