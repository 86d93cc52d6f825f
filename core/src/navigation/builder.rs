#![deny(missing_docs)]

//! # Navigation Builder
//!
//! Groups the documented operations and resources of one API version by tag
//! and lays them out as a navigation tree:
//!
//! ```text
//! " "
//! ├── <prefix>/index
//! ├── <Tag A>
//! │   ├── Resources: pages sorted by title
//! │   └── Endpoints: pages sorted by method priority, then title
//! └── <Tag B> ...
//! ```
//!
//! Tags are sorted by display name. All comparisons go through [`Collation`].

use crate::collation::Collation;
use crate::config::LocaleContext;
use crate::navigation::model::{NavEntry, NavGroup};
use crate::oas::{operation_slug, resource_slug, HttpMethod, OpenApiSpec};
use indexmap::{IndexMap, IndexSet};
use std::cmp::Ordering;
use tracing::debug;

/// Label of the synthetic top-level group.
pub const ROOT_GROUP_LABEL: &str = " ";

/// An endpoint page. Two entries are the same page when all fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointEntry {
    /// Page slug.
    pub slug: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Display title.
    pub title: String,
}

/// A resource page. Two entries are the same page when all fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceEntry {
    /// Page slug.
    pub slug: String,
    /// Display title.
    pub title: String,
}

/// Pages filed under one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBucket {
    /// Resource pages.
    pub resources: Vec<ResourceEntry>,
    /// Endpoint pages.
    pub endpoints: Vec<EndpointEntry>,
}

impl TagBucket {
    fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.endpoints.is_empty()
    }
}

/// Tag buckets keyed by tag display name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBuckets {
    buckets: IndexMap<String, TagBucket>,
}

impl TagBuckets {
    /// Files every tagged operation and resource of `spec`.
    ///
    /// Entries without an ID, or whose `x-box-tag` has no declared tag, are dropped.
    pub fn from_spec(spec: &OpenApiSpec) -> Self {
        let titles = spec.tag_titles();
        let mut out = Self::default();

        for op in spec.operations() {
            let Some(operation_id) = op
                .operation
                .operation_id
                .as_deref()
                .filter(|id| !id.is_empty())
            else {
                continue;
            };
            let Some(tag) = op.operation.box_tag.as_deref().and_then(|t| titles.get(t)) else {
                debug!(operation_id, "operation has no resolvable tag; left out of navigation");
                continue;
            };

            let title = op
                .operation
                .summary
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(operation_id);

            out.bucket_mut(tag).endpoints.push(EndpointEntry {
                slug: operation_slug(operation_id),
                method: op.method,
                title: title.to_string(),
            });
        }

        for (name, schema) in spec.schemas() {
            let Some(resource_id) = schema
                .resource_id
                .as_deref()
                .filter(|id| !id.is_empty())
            else {
                continue;
            };
            let Some(tag) = schema.box_tag.as_deref().and_then(|t| titles.get(t)) else {
                debug!(schema = name, "resource has no resolvable tag; left out of navigation");
                continue;
            };

            let title = schema
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(name);

            out.bucket_mut(tag).resources.push(ResourceEntry {
                slug: resource_slug(resource_id),
                title: title.to_string(),
            });
        }

        out
    }

    fn bucket_mut(&mut self, tag: &str) -> &mut TagBucket {
        self.buckets.entry(tag.to_string()).or_default()
    }

    /// Appends the entries of `other`, tag by tag.
    pub fn merge(&mut self, other: TagBuckets) {
        for (tag, bucket) in other.buckets {
            let target = self.bucket_mut(&tag);
            target.resources.extend(bucket.resources);
            target.endpoints.extend(bucket.endpoints);
        }
    }

    /// Drops repeated entries, keeping the first occurrence.
    pub fn dedup(&mut self) {
        for bucket in self.buckets.values_mut() {
            let resources: IndexSet<ResourceEntry> = bucket.resources.drain(..).collect();
            bucket.resources = resources.into_iter().collect();
            let endpoints: IndexSet<EndpointEntry> = bucket.endpoints.drain(..).collect();
            bucket.endpoints = endpoints.into_iter().collect();
        }
    }

    /// The bucket of `tag`.
    pub fn get(&self, tag: &str) -> Option<&TagBucket> {
        self.buckets.get(tag)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no tag has any entry.
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(TagBucket::is_empty)
    }

    /// Resource entries across all tags.
    pub fn resource_count(&self) -> usize {
        self.buckets.values().map(|b| b.resources.len()).sum()
    }

    /// Endpoint entries across all tags.
    pub fn endpoint_count(&self) -> usize {
        self.buckets.values().map(|b| b.endpoints.len()).sum()
    }

    /// Iterates tags and buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagBucket)> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Builds the navigation group of one API version.
#[derive(Debug)]
pub struct NavigationBuilder<'a> {
    locale: &'a LocaleContext<'a>,
    collation: &'a Collation,
}

impl<'a> NavigationBuilder<'a> {
    /// Creates a builder for a locale.
    pub fn new(locale: &'a LocaleContext<'a>, collation: &'a Collation) -> Self {
        Self { locale, collation }
    }

    /// Resources ordered by title.
    pub fn sorted_resources<'b>(&self, bucket: &'b TagBucket) -> Vec<&'b ResourceEntry> {
        let mut resources: Vec<_> = bucket.resources.iter().collect();
        resources.sort_by(|a, b| self.collation.compare(&a.title, &b.title));
        resources
    }

    /// Endpoints ordered by method priority, then title.
    pub fn sorted_endpoints<'b>(&self, bucket: &'b TagBucket) -> Vec<&'b EndpointEntry> {
        let mut endpoints: Vec<_> = bucket.endpoints.iter().collect();
        endpoints.sort_by(|a, b| match a.method.cmp(&b.method) {
            Ordering::Equal => self.collation.compare(&a.title, &b.title),
            other => other,
        });
        endpoints
    }

    /// Tag names ordered by display name.
    pub fn sorted_tags<'b>(&self, buckets: &'b TagBuckets) -> Vec<&'b str> {
        let mut tags: Vec<&str> = buckets.iter().map(|(tag, _)| tag).collect();
        tags.sort_by(|a, b| self.collation.compare(a, b));
        tags
    }

    /// The group of one tag, or `None` when it has no pages.
    pub fn tag_group(&self, tag: &str, bucket: &TagBucket, version: &str) -> Option<NavGroup> {
        let prefix = self.locale.nav_prefix(version);
        let labels = self.locale.labels();
        let mut pages = Vec::new();

        if !bucket.resources.is_empty() {
            let resources = self
                .sorted_resources(bucket)
                .into_iter()
                .map(|r| NavEntry::Page(format!("{}/resources/{}", prefix, r.slug)))
                .collect();
            pages.push(NavEntry::Group(NavGroup::new(&labels.resources, resources)));
        }

        if !bucket.endpoints.is_empty() {
            let endpoints = self
                .sorted_endpoints(bucket)
                .into_iter()
                .map(|e| NavEntry::Page(format!("{}/{}", prefix, e.slug)))
                .collect();
            pages.push(NavEntry::Group(NavGroup::new(&labels.endpoints, endpoints)));
        }

        if pages.is_empty() {
            None
        } else {
            Some(NavGroup::new(tag, pages))
        }
    }

    /// The whole version group: index page first, then one group per tag.
    pub fn build(&self, buckets: &TagBuckets, version: &str) -> NavGroup {
        let mut pages = vec![NavEntry::Page(self.locale.index_page(version))];

        for tag in self.sorted_tags(buckets) {
            let Some(bucket) = buckets.get(tag) else {
                continue;
            };
            if let Some(group) = self.tag_group(tag, bucket, version) {
                pages.push(NavEntry::Group(group));
            }
        }

        NavGroup::new(ROOT_GROUP_LABEL, pages)
    }
}
