#![deny(missing_docs)]

//! # OpenAPI Specification Loading
//!
//! Deserializes the subset of an OpenAPI 3.x JSON document the documentation
//! pipeline reads: `info.version`, `paths`, `components.schemas` and `tags`,
//! including the `x-box-*` vendor extensions. Unknown fields are ignored.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP methods that can carry a documented operation.
///
/// Declaration order is the order operations are visited and the
/// priority used to sort endpoints in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

impl HttpMethod {
    /// All methods in priority order.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
    ];

    /// Uppercase wire name (`GET`).
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `info` object.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecInfo {
    /// API version, `YYYY.N`.
    pub version: String,
    /// API title.
    #[serde(default)]
    pub title: Option<String>,
}

/// One operation (HTTP method on a path).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// Operations without an ID get no page.
    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,
    /// Internal tag key linking to a [`SpecTag`].
    #[serde(rename = "x-box-tag", default)]
    pub box_tag: Option<String>,
    /// Short title.
    #[serde(default)]
    pub summary: Option<String>,
    /// Markdown description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A path item; only the method slots are read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    get: Option<Operation>,
    #[serde(default)]
    post: Option<Operation>,
    #[serde(default)]
    put: Option<Operation>,
    #[serde(default)]
    patch: Option<Operation>,
    #[serde(default)]
    delete: Option<Operation>,
    #[serde(default)]
    head: Option<Operation>,
    #[serde(default)]
    options: Option<Operation>,
}

impl PathItem {
    /// The operation bound to `method`, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
        }
    }
}

/// A `components.schemas` entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Present only on schemas documented as standalone resources.
    #[serde(rename = "x-box-resource-id", default)]
    pub resource_id: Option<String>,
    /// Internal tag key linking to a [`SpecTag`].
    #[serde(rename = "x-box-tag", default)]
    pub box_tag: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Markdown description.
    #[serde(default)]
    pub description: Option<String>,
}

/// The `components` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    /// Named schemas in document order.
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

/// A top-level tag mapping an internal key to a display name.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecTag {
    /// Display name.
    pub name: String,
    /// Internal key referenced by operations and schemas.
    #[serde(rename = "x-box-tag", default)]
    pub box_tag: Option<String>,
    /// Markdown description.
    #[serde(default)]
    pub description: Option<String>,
}

/// The parts of an OpenAPI document the pipeline consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenApiSpec {
    /// Document metadata.
    pub info: SpecInfo,
    /// Path items in document order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable components.
    #[serde(default)]
    pub components: Option<Components>,
    /// Tag declarations.
    #[serde(default)]
    pub tags: Vec<SpecTag>,
}

/// An operation together with where it lives in the document.
#[derive(Debug, Clone, Copy)]
pub struct OperationRef<'a> {
    /// URL path template (`/files/{file_id}`).
    pub path: &'a str,
    /// HTTP method.
    pub method: HttpMethod,
    /// The operation.
    pub operation: &'a Operation,
}

impl OpenApiSpec {
    /// Parses a JSON document. `origin` is used for error messages only.
    pub fn from_json(content: &str, origin: &Path) -> AppResult<Self> {
        serde_json::from_str(content).map_err(|e| AppError::parse(origin, e))
    }

    /// API version (`info.version`).
    pub fn version(&self) -> &str {
        &self.info.version
    }

    /// All operations, by path in document order, then by method priority.
    pub fn operations(&self) -> impl Iterator<Item = OperationRef<'_>> + '_ {
        self.paths.iter().flat_map(|(path, item)| {
            HttpMethod::ALL.into_iter().filter_map(move |method| {
                item.operation(method).map(|operation| OperationRef {
                    path,
                    method,
                    operation,
                })
            })
        })
    }

    /// All schemas in document order.
    pub fn schemas(&self) -> impl Iterator<Item = (&str, &Schema)> + '_ {
        self.components
            .iter()
            .flat_map(|c| c.schemas.iter().map(|(name, schema)| (name.as_str(), schema)))
    }

    /// Maps internal tag keys to display names. Later declarations win.
    pub fn tag_titles(&self) -> HashMap<&str, &str> {
        self.tags
            .iter()
            .filter_map(|tag| {
                tag.box_tag
                    .as_deref()
                    .map(|key| (key, tag.name.as_str()))
            })
            .collect()
    }
}

/// A specification read from disk.
#[derive(Debug, Clone)]
pub struct LoadedSpec {
    /// Where the document was read from.
    pub path: PathBuf,
    /// File name referenced by generated pages (`openapi.json`).
    pub file_name: String,
    /// The parsed document.
    pub spec: OpenApiSpec,
}

/// Reads and parses an OpenAPI JSON file.
pub fn load_spec(path: &Path) -> AppResult<LoadedSpec> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::General(format!("Failed to read OpenAPI file {:?}: {}", path, e))
    })?;
    let spec = OpenApiSpec::from_json(&content, path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(LoadedSpec {
        path: path.to_path_buf(),
        file_name,
        spec,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = r#"{
  "openapi": "3.0.2",
  "info": { "title": "Box Platform API", "version": "2025.0" },
  "tags": [
    { "name": "Files", "x-box-tag": "files" },
    { "name": "Untagged" }
  ],
  "paths": {
    "/files/{file_id}": {
      "parameters": [],
      "delete": { "operationId": "delete_files_id", "x-box-tag": "files" },
      "get": { "operationId": "get_files_id", "summary": "Get file information" }
    },
    "/folders": {
      "post": { "summary": "Create folder" }
    }
  },
  "components": {
    "schemas": {
      "File": { "x-box-resource-id": "file", "x-box-tag": "files", "title": "File" },
      "File--Mini": { "type": "object" }
    }
  }
}"#;

    fn spec() -> OpenApiSpec {
        OpenApiSpec::from_json(SPEC, Path::new("openapi.json")).unwrap()
    }

    #[test]
    fn test_version() {
        assert_eq!(spec().version(), "2025.0");
    }

    #[test]
    fn test_operations_follow_method_priority_within_a_path() {
        let spec = spec();
        let ops: Vec<_> = spec
            .operations()
            .map(|op| (op.path, op.method, op.operation.operation_id.clone()))
            .collect();

        assert_eq!(
            ops,
            vec![
                (
                    "/files/{file_id}",
                    HttpMethod::Get,
                    Some("get_files_id".to_string())
                ),
                (
                    "/files/{file_id}",
                    HttpMethod::Delete,
                    Some("delete_files_id".to_string())
                ),
                ("/folders", HttpMethod::Post, None),
            ]
        );
    }

    #[test]
    fn test_schemas_keep_document_order() {
        let spec = spec();
        let names: Vec<_> = spec.schemas().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["File", "File--Mini"]);
    }

    #[test]
    fn test_tag_titles_skip_tags_without_key() {
        let spec = spec();
        let titles = spec.tag_titles();
        assert_eq!(titles.get("files"), Some(&"Files"));
        assert_eq!(titles.len(), 1);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let spec =
            OpenApiSpec::from_json(r#"{"info":{"version":"2024.0"}}"#, Path::new("a.json"))
                .unwrap();
        assert_eq!(spec.operations().count(), 0);
        assert_eq!(spec.schemas().count(), 0);
        assert!(spec.tag_titles().is_empty());
    }

    #[test]
    fn test_invalid_json_names_the_file() {
        let err = OpenApiSpec::from_json("{ not json", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_spec_records_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi-v2025.0.json");
        fs::write(&path, SPEC).unwrap();

        let loaded = load_spec(&path).unwrap();
        assert_eq!(loaded.file_name, "openapi-v2025.0.json");
        assert_eq!(loaded.spec.version(), "2025.0");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Options.to_string(), "OPTIONS");
        assert!(HttpMethod::Get < HttpMethod::Delete);
    }
}
