#![deny(missing_docs)]

//! # Update Docs JSON Command
//!
//! Rebuilds the API reference navigation of every version found in the
//! matching OpenAPI files and splices it into the site navigation document.
//!
//! Specs sharing a version are merged into one group. The navigation document
//! is read once, updated per version, written once and parsed again to check
//! the result.

use crate::files::{display_name, SourceArgs};
use indexmap::IndexMap;
use refdocs_core::navigation::validate_pages;
use refdocs_core::{
    load_spec, AppError, AppResult, Collation, NavigationBuilder, NavigationDocument, SiteConfig,
    TagBuckets,
};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Arguments for the update-docs-json command.
#[derive(clap::Args, Debug, Clone)]
pub struct UpdateDocsArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Site navigation document to update.
    #[clap(short = 'j', long, default_value = "docs.json")]
    pub docs_json: PathBuf,

    /// Locale whose tab and labels are used.
    #[clap(short, long, default_value = "en")]
    pub locale: String,

    /// JSON file replacing the built-in site tables.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

/// Executes the navigation update.
pub fn execute(args: &UpdateDocsArgs) -> AppResult<()> {
    let site = SiteConfig::load_or_builtin(args.config.as_deref())?;
    let locale = site.locale(&args.locale)?;
    let collation = Collation::new(locale.tag())?;

    let files = args.source.find()?;
    if files.is_empty() {
        return Err(AppError::Config(args.source.nothing_found()));
    }

    let mut versions: IndexMap<String, TagBuckets> = IndexMap::new();
    for file in &files {
        let loaded = load_spec(file)?;
        let buckets = TagBuckets::from_spec(&loaded.spec);
        println!(
            "{}: version {}, {} tag(s)",
            display_name(file),
            loaded.spec.version(),
            buckets.len()
        );
        versions
            .entry(loaded.spec.version().to_string())
            .or_default()
            .merge(buckets);
    }

    let mut document = NavigationDocument::load(&args.docs_json)?;
    let docs_root = args
        .docs_json
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let builder = NavigationBuilder::new(&locale, &collation);

    let mut resources = 0;
    let mut endpoints = 0;

    for (version, buckets) in versions.iter_mut() {
        buckets.dedup();
        resources += buckets.resource_count();
        endpoints += buckets.endpoint_count();

        let group = builder.build(buckets, version);

        let validation = validate_pages(&group, docs_root);
        for page in &validation.missing {
            warn!(page = %page, "navigation page has no file");
        }
        println!(
            "Version {}: {} page(s) found, {} missing",
            version,
            validation.validated.len(),
            validation.missing.len()
        );

        let outcome =
            document.merge_group(locale.tab_name(), version, &locale.index_page(version), &group)?;
        println!(
            "Version {}: {} group in tab \"{}\"",
            version,
            if outcome.replaced { "replaced" } else { "added" },
            locale.tab_name()
        );
        print!("{}", outcome.changes());
    }

    document.save(&args.docs_json)?;
    NavigationDocument::load(&args.docs_json)?;

    println!(
        "Summary: {} file(s) processed, {} version(s) updated, {} resource(s), {} endpoint(s)",
        files.len(),
        versions.len(),
        resources,
        endpoints
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::fs;

    fn spec(version: &str, operation_id: &str, summary: &str) -> String {
        let mut paths = serde_json::Map::new();
        paths.insert(
            format!("/{}", operation_id),
            json!({
                "get": { "operationId": operation_id, "x-box-tag": "files", "summary": summary }
            }),
        );
        json!({
            "info": { "version": version },
            "tags": [{ "name": "Files", "x-box-tag": "files" }],
            "paths": paths
        })
        .to_string()
    }

    fn docs_json() -> Value {
        json!({
            "navigation": {
                "languages": [{
                    "language": "en",
                    "tabs": [{
                        "tab": "API reference",
                        "groups": [{ "group": " ", "pages": ["reference/v2025.0/index"] }]
                    }]
                }]
            }
        })
    }

    fn args(dir: &Path) -> UpdateDocsArgs {
        UpdateDocsArgs {
            source: SourceArgs {
                directory: dir.join("specs"),
                pattern: r"\.json$".into(),
            },
            docs_json: dir.join("docs.json"),
            locale: "en".into(),
            config: None,
        }
    }

    #[test]
    fn test_specs_of_one_version_share_a_group() {
        let dir = tempfile::tempdir().unwrap();
        let specs = dir.path().join("specs");
        fs::create_dir_all(&specs).unwrap();
        fs::write(specs.join("a.json"), spec("2025.0", "get_files_v2025.0", "List files")).unwrap();
        fs::write(specs.join("b.json"), spec("2025.0", "get_files_v2025.0", "List files")).unwrap();
        fs::write(specs.join("c.json"), spec("2024.0", "get_items", "List items")).unwrap();
        fs::write(
            dir.path().join("docs.json"),
            serde_json::to_string_pretty(&docs_json()).unwrap(),
        )
        .unwrap();

        execute(&args(dir.path())).unwrap();

        let saved: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("docs.json")).unwrap())
                .unwrap();
        let groups = &saved["navigation"]["languages"][0]["tabs"][0]["groups"];

        assert_eq!(
            groups[0]["pages"][1],
            json!({
                "group": "Files",
                "pages": [{ "group": "Endpoints", "pages": ["reference/v2025.0/get-files"] }]
            })
        );
        assert_eq!(groups[1]["pages"][0], json!("reference/index"));
        assert_eq!(groups.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_tab_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let specs = dir.path().join("specs");
        fs::create_dir_all(&specs).unwrap();
        fs::write(specs.join("a.json"), spec("2025.0", "get_files", "List files")).unwrap();
        fs::write(
            dir.path().join("docs.json"),
            json!({ "navigation": { "languages": [{ "tabs": [] }] } }).to_string(),
        )
        .unwrap();

        let err = execute(&args(dir.path())).unwrap_err();
        assert!(matches!(err, AppError::Structure(_)));
        assert!(err.to_string().contains("version 2025.0"));
    }
}
