#![deny(missing_docs)]

//! # Navigation Model
//!
//! The sidebar shape consumed by the documentation site: groups holding page
//! paths or nested groups.

use serde::{Deserialize, Serialize};

/// A navigation group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    /// Group label.
    pub group: String,
    /// Ordered children.
    pub pages: Vec<NavEntry>,
}

/// A child of a [`NavGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Page path without extension (`reference/get-files-id`).
    Page(String),
    /// Nested group.
    Group(NavGroup),
}

impl NavGroup {
    /// Creates a group.
    pub fn new(group: impl Into<String>, pages: Vec<NavEntry>) -> Self {
        Self {
            group: group.into(),
            pages,
        }
    }

    /// First page path, if the group starts with one.
    pub fn first_page(&self) -> Option<&str> {
        match self.pages.first() {
            Some(NavEntry::Page(p)) => Some(p),
            _ => None,
        }
    }

    /// Every page path in the tree, depth first.
    pub fn page_paths(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_paths(&self.pages, &mut out);
        out
    }
}

fn collect_paths<'a>(entries: &'a [NavEntry], out: &mut Vec<&'a str>) {
    for entry in entries {
        match entry {
            NavEntry::Page(p) => out.push(p),
            NavEntry::Group(g) => collect_paths(&g.pages, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_to_site_shape() {
        let group = NavGroup::new(
            " ",
            vec![
                NavEntry::Page("reference/index".into()),
                NavEntry::Group(NavGroup::new(
                    "Files",
                    vec![NavEntry::Group(NavGroup::new(
                        "Endpoints",
                        vec![NavEntry::Page("reference/get-files-id".into())],
                    ))],
                )),
            ],
        );

        assert_eq!(
            serde_json::to_value(&group).unwrap(),
            json!({
                "group": " ",
                "pages": [
                    "reference/index",
                    { "group": "Files", "pages": [
                        { "group": "Endpoints", "pages": ["reference/get-files-id"] }
                    ]}
                ]
            })
        );
        assert_eq!(group.first_page(), Some("reference/index"));
        assert_eq!(
            group.page_paths(),
            vec!["reference/index", "reference/get-files-id"]
        );
    }
}
