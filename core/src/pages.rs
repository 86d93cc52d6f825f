#![deny(missing_docs)]

//! # Page Generation
//!
//! Turns every operation with an `operationId` and every schema carrying an
//! `x-box-resource-id` into an `.mdx` page whose front-matter points the site
//! renderer at the specification.
//!
//! Layout under the version directory:
//! - `<operation-slug>.mdx`
//! - `resources/<resource-slug>.mdx`

use crate::config::{LocaleContext, SiteConfig};
use crate::error::AppResult;
use crate::oas::{operation_file_name, resource_file_name, HttpMethod, LoadedSpec};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sub-directory holding resource pages.
pub const RESOURCES_DIR: &str = "resources";

/// Title used when an operation has neither summary nor ID.
const UNTITLED: &str = "Untitled";

/// What a page documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagePointer {
    /// An operation, rendered from `<spec> <METHOD> <path>`.
    Operation {
        /// Specification file name.
        spec_file: String,
        /// HTTP method.
        method: HttpMethod,
        /// URL path template.
        path: String,
    },
    /// A schema, rendered from `<spec> <SchemaName>`.
    Schema {
        /// Specification file name.
        spec_file: String,
        /// Key of the schema under `components.schemas`.
        schema_name: String,
    },
}

/// A page to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Target file.
    pub file: PathBuf,
    /// Front-matter title.
    pub title: String,
    /// Specification binding.
    pub pointer: PagePointer,
    /// Callout body rendered below the front-matter.
    pub note: Option<String>,
}

impl PageDescriptor {
    /// Renders the page text.
    pub fn render(&self) -> String {
        let mut out = String::from("---\n");
        out.push_str(&format!("title: \"{}\"\n", escape_front_matter(&self.title)));

        match &self.pointer {
            PagePointer::Operation {
                spec_file,
                method,
                path,
            } => {
                out.push_str(&format!("openapi: \"/{} {} {}\"\n", spec_file, method, path));
            }
            PagePointer::Schema {
                spec_file,
                schema_name,
            } => {
                out.push_str(&format!(
                    "openapi-schema: \"/{} {}\"\n",
                    spec_file, schema_name
                ));
            }
        }
        out.push_str("---\n");

        if let Some(note) = &self.note {
            out.push_str(&format!("\n<Note>\n{}\n</Note>\n", note));
        }
        out
    }
}

/// Front-matter values are single-line double-quoted strings.
fn escape_front_matter(value: &str) -> String {
    let single_line = if value.contains(['\r', '\n']) {
        value
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        value.to_string()
    };
    single_line.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Joins the version note and the SDK note of `locale`, if any.
fn operation_note(locale: &LocaleContext<'_>, version: &str) -> Option<String> {
    let notes: Vec<&str> = [locale.version_note(version), locale.sdk_note()]
        .into_iter()
        .flatten()
        .collect();

    if notes.is_empty() {
        None
    } else {
        Some(notes.join("\n\n"))
    }
}

/// One page per operation that has an `operationId`.
pub fn operation_pages(
    loaded: &LoadedSpec,
    output_dir: &Path,
    locale: &LocaleContext<'_>,
) -> Vec<PageDescriptor> {
    let version = loaded.spec.version();
    let note = operation_note(locale, version);

    loaded
        .spec
        .operations()
        .filter_map(|op| {
            let Some(operation_id) = op
                .operation
                .operation_id
                .as_deref()
                .filter(|id| !id.is_empty())
            else {
                debug!(
                    path = op.path,
                    method = %op.method,
                    "skipping operation without operationId"
                );
                return None;
            };

            let title = [op.operation.summary.as_deref(), Some(operation_id)]
                .into_iter()
                .flatten()
                .find(|t| !t.is_empty())
                .unwrap_or(UNTITLED);

            Some(PageDescriptor {
                file: output_dir.join(operation_file_name(operation_id)),
                title: title.to_string(),
                pointer: PagePointer::Operation {
                    spec_file: loaded.file_name.clone(),
                    method: op.method,
                    path: op.path.to_string(),
                },
                note: note.clone(),
            })
        })
        .collect()
}

/// One page per schema that carries an `x-box-resource-id`.
pub fn resource_pages(loaded: &LoadedSpec, output_dir: &Path) -> Vec<PageDescriptor> {
    let resources_dir = output_dir.join(RESOURCES_DIR);

    loaded
        .spec
        .schemas()
        .filter_map(|(name, schema)| {
            let resource_id = schema.resource_id.as_deref().filter(|id| !id.is_empty())?;
            let title = schema
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| name.to_string());

            Some(PageDescriptor {
                file: resources_dir.join(resource_file_name(resource_id)),
                title,
                pointer: PagePointer::Schema {
                    spec_file: loaded.file_name.clone(),
                    schema_name: name.to_string(),
                },
                note: None,
            })
        })
        .collect()
}

/// Writes `pages`, creating parent directories as needed.
///
/// With `overwrite` false, pages whose file already exists are skipped.
/// Returns the files actually written.
pub fn write_pages(pages: &[PageDescriptor], overwrite: bool) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(pages.len());

    for page in pages {
        if !overwrite && page.file.exists() {
            debug!(file = %page.file.display(), "keeping existing page");
            continue;
        }
        if let Some(parent) = page.file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&page.file, page.render())?;
        written.push(page.file.clone());
    }

    Ok(written)
}

/// Files written for one specification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedPages {
    /// Version directory the pages were written to.
    pub output_dir: PathBuf,
    /// Operation pages.
    pub operations: Vec<PathBuf>,
    /// Resource pages.
    pub resources: Vec<PathBuf>,
}

impl GeneratedPages {
    /// All written files, operations first.
    pub fn all(&self) -> impl Iterator<Item = &PathBuf> {
        self.operations.iter().chain(self.resources.iter())
    }
}

/// Generates and writes every page of one specification.
pub fn generate_pages(
    loaded: &LoadedSpec,
    reference_root: &Path,
    site: &SiteConfig,
    locale: &LocaleContext<'_>,
) -> AppResult<GeneratedPages> {
    let output_dir = site.version_directory(reference_root, loaded.spec.version());
    fs::create_dir_all(output_dir.join(RESOURCES_DIR))?;

    let overwrite = site.clean_before_generation;
    let operations = write_pages(&operation_pages(loaded, &output_dir, locale), overwrite)?;
    let resources = write_pages(&resource_pages(loaded, &output_dir), overwrite)?;

    Ok(GeneratedPages {
        output_dir,
        operations,
        resources,
    })
}
