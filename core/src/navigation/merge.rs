#![deny(missing_docs)]

//! # Navigation Merge
//!
//! Splices a freshly built version group into the site navigation document
//! (`navigation.languages[].tabs[].groups[]`) and reports which tag groups
//! changed.
//!
//! A version group is identified only by its first page being the version's
//! index page. Two versions sharing an index path would overwrite each other.

use crate::error::{AppError, AppResult};
use crate::navigation::model::NavGroup;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// Page lists keyed by tag-group label, in navigation order.
pub type TagPages = IndexMap<String, Vec<String>>;

/// Collects the pages of every tag group inside a version group.
///
/// The first entry (the index page) is skipped. Only string pages of sub-groups count.
pub fn extract_tag_pages(group: &Value) -> TagPages {
    let mut out = TagPages::new();

    let Some(pages) = group.get("pages").and_then(Value::as_array) else {
        return out;
    };

    for page in pages.iter().skip(1) {
        let (Some(label), Some(children)) = (
            page.get("group").and_then(Value::as_str),
            page.get("pages").and_then(Value::as_array),
        ) else {
            continue;
        };

        let collected = children
            .iter()
            .filter_map(|child| child.get("pages").and_then(Value::as_array))
            .flatten()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();

        out.insert(label.to_string(), collected);
    }

    out
}

/// Tag groups that differ between two navigation states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavChanges {
    /// Tags only in the new state.
    pub added: Vec<String>,
    /// Tags in both states whose page lists differ (order matters).
    pub changed: Vec<String>,
    /// Tags only in the old state.
    pub removed: Vec<String>,
}

impl NavChanges {
    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.changed.is_empty() && self.removed.is_empty()
    }
}

impl fmt::Display for NavChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "   No changes detected");
        }
        for tag in &self.added {
            writeln!(f, "   + {}", tag)?;
        }
        for tag in &self.changed {
            writeln!(f, "   ~ {}", tag)?;
        }
        for tag in &self.removed {
            writeln!(f, "   - {}", tag)?;
        }
        Ok(())
    }
}

/// Compares tag page lists; `added` and `changed` follow `new` order.
pub fn diff_tag_pages(old: &TagPages, new: &TagPages) -> NavChanges {
    let mut changes = NavChanges::default();

    for (tag, pages) in new {
        match old.get(tag) {
            None => changes.added.push(tag.clone()),
            Some(previous) if previous != pages => changes.changed.push(tag.clone()),
            Some(_) => {}
        }
    }

    changes.removed = old
        .keys()
        .filter(|tag| !new.contains_key(*tag))
        .cloned()
        .collect();

    changes
}

/// What a merge did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// `language` of the entry holding the tab, when it has one.
    pub language: Option<String>,
    /// True when an existing group was replaced, false when one was appended.
    pub replaced: bool,
    /// Tag pages of the replaced group (empty when appended).
    pub previous: TagPages,
    /// Tag pages of the new group.
    pub current: TagPages,
}

impl MergeOutcome {
    /// Tag-level changes introduced by the merge.
    pub fn changes(&self) -> NavChanges {
        diff_tag_pages(&self.previous, &self.current)
    }
}

/// The site navigation document, kept as raw JSON so unrelated keys survive.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationDocument {
    root: Value,
}

impl NavigationDocument {
    /// Wraps an already parsed document.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Reads and parses the document at `path`.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::General(format!("Failed to read navigation file {:?}: {}", path, e))
        })?;
        let root = serde_json::from_str(&content).map_err(|e| AppError::parse(path, e))?;
        Ok(Self { root })
    }

    /// The underlying JSON.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Serialized form: two-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> AppResult<String> {
        let mut out = serde_json::to_string_pretty(&self.root)?;
        out.push('\n');
        Ok(out)
    }

    /// Writes the document to `path`.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Replaces the group of tab `tab_name` whose first page is `index_page`,
    /// or appends `group` to that tab when no group matches.
    ///
    /// Fails when the document has no `navigation.languages` or no tab is named `tab_name`.
    pub fn merge_group(
        &mut self,
        tab_name: &str,
        version: &str,
        index_page: &str,
        group: &NavGroup,
    ) -> AppResult<MergeOutcome> {
        let new_group = serde_json::to_value(group)?;
        let current = extract_tag_pages(&new_group);

        let languages = self
            .root
            .get_mut("navigation")
            .and_then(|n| n.get_mut("languages"))
            .and_then(Value::as_array_mut)
            .ok_or_else(|| AppError::Structure("missing navigation.languages".into()))?;

        for language in languages.iter_mut() {
            let language_name = language
                .get("language")
                .and_then(Value::as_str)
                .map(str::to_string);

            let Some(tab) = language
                .get_mut("tabs")
                .and_then(Value::as_array_mut)
                .and_then(|tabs| {
                    tabs.iter_mut()
                        .find(|t| t.get("tab").and_then(Value::as_str) == Some(tab_name))
                })
            else {
                continue;
            };

            let Some(tab) = tab.as_object_mut() else {
                continue;
            };
            let groups = tab
                .entry("groups")
                .or_insert_with(|| Value::Array(Vec::new()))
                .as_array_mut()
                .ok_or_else(|| {
                    AppError::Structure(format!("groups of tab \"{}\" is not an array", tab_name))
                })?;

            let position = groups.iter().position(|g| {
                g.get("pages")
                    .and_then(Value::as_array)
                    .and_then(|pages| pages.first())
                    .and_then(Value::as_str)
                    == Some(index_page)
            });

            let (replaced, previous) = match position {
                Some(i) => {
                    let previous = extract_tag_pages(&groups[i]);
                    groups[i] = new_group;
                    (true, previous)
                }
                None => {
                    groups.push(new_group);
                    (false, TagPages::new())
                }
            };

            return Ok(MergeOutcome {
                language: language_name,
                replaced,
                previous,
                current,
            });
        }

        Err(AppError::Structure(format!(
            "could not update group for version {} in tab \"{}\"",
            version, tab_name
        )))
    }
}
