#![deny(missing_docs)]

//! # Site Configuration
//!
//! Locale tables and layout constants shared by the page generator and the
//! navigation builder. A `SiteConfig` is built once per run (from the built-in
//! tables or a JSON file) and handed to every component that needs it.

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Localized labels for the two navigation sub-groups of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupLabels {
    /// Label of the sub-group listing resource pages.
    pub resources: String,
    /// Label of the sub-group listing endpoint pages.
    pub endpoints: String,
}

/// Tables for a single locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LocaleConfig {
    /// Display name of the navigation tab holding the API reference.
    pub tab_name: String,
    /// Sub-group labels.
    pub group_labels: GroupLabels,
    /// Prefix prepended to every navigation page path (`""`, `"ja/"`).
    #[serde(default)]
    pub path_prefix: String,
    /// Callout notes for endpoint pages, keyed by API version.
    #[serde(default)]
    pub version_notes: BTreeMap<String, String>,
    /// SDK versioning note placed under the version note.
    #[serde(default)]
    pub sdk_note: Option<String>,
}

/// Everything the generators need to know about the target site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// API version whose pages live at the reference root instead of `v<version>/`.
    pub base_version: String,
    /// Locale whose tables are used when the requested one has none.
    pub default_locale: String,
    /// First path segment of every navigation page (`reference`).
    pub reference_slug: String,
    /// Clear generated files before writing. When false, existing pages are kept.
    #[serde(default = "default_clean")]
    pub clean_before_generation: bool,
    /// Per-locale tables keyed by locale tag.
    pub locales: BTreeMap<String, LocaleConfig>,
}

fn default_clean() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SiteConfig {
    /// The tables shipped with the tool (`en` and `ja`).
    pub fn builtin() -> Self {
        let mut locales = BTreeMap::new();

        locales.insert(
            "en".to_string(),
            LocaleConfig {
                tab_name: "API reference".into(),
                group_labels: GroupLabels {
                    resources: "Resources".into(),
                    endpoints: "Endpoints".into(),
                },
                path_prefix: String::new(),
                version_notes: BTreeMap::from([(
                    "2024.0".to_string(),
                    "This endpoint is in the version **2024.0**. No changes are required to \
                     continue using it. For more details, see **[Box API versioning]\
                     (/guides/api-calls/api-versioning-strategy)**."
                        .to_string(),
                )]),
                sdk_note: Some(
                    "Learn more about [Box SDK versioning strategy](/guides/tooling/sdks/sdk-versioning/)."
                        .into(),
                ),
            },
        );

        locales.insert(
            "ja".to_string(),
            LocaleConfig {
                tab_name: "APIリファレンス".into(),
                group_labels: GroupLabels {
                    resources: "リソースの一覧".into(),
                    endpoints: "エンドポイント".into(),
                },
                path_prefix: "ja/".into(),
                version_notes: BTreeMap::from([(
                    "2024.0".to_string(),
                    "このリソースは、バージョン2024.0のエンドポイントで使用されています。 \
                     詳細については、 [**Box APIのバージョン管理**]\
                     (/ja/guides/api-calls/api-versioning-strategy/)を参照してください。"
                        .to_string(),
                )]),
                sdk_note: Some(
                    "「[Box SDKのバージョニング戦略](/ja/guides/tooling/sdks/sdk-versioning/)について詳しく学ぶ。」"
                        .into(),
                ),
            },
        );

        Self {
            base_version: "2024.0".into(),
            default_locale: "en".into(),
            reference_slug: "reference".into(),
            clean_before_generation: true,
            locales,
        }
    }

    /// Reads a configuration file replacing the built-in tables.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig =
            serde_json::from_str(&content).map_err(|e| AppError::parse(path, e))?;
        config.locale(&config.default_locale)?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the built-in tables.
    pub fn load_or_builtin(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    /// Resolves the tables for `locale`, falling back to the default locale.
    pub fn locale(&self, locale: &str) -> AppResult<LocaleContext<'_>> {
        let exact = self.locales.get(locale);
        let tables = exact
            .or_else(|| self.locales.get(&self.default_locale))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "No tables for locale '{}' and no default locale '{}'",
                    locale, self.default_locale
                ))
            })?;

        Ok(LocaleContext {
            site: self,
            tag: locale.to_string(),
            tables,
            exact,
        })
    }

    /// Whether `version` is the one documented at the reference root.
    pub fn is_base_version(&self, version: &str) -> bool {
        version == self.base_version
    }

    /// Directory holding the pages of `version` under `reference_root`.
    pub fn version_directory(&self, reference_root: &Path, version: &str) -> PathBuf {
        if self.is_base_version(version) {
            reference_root.to_path_buf()
        } else {
            reference_root.join(format!("v{}", version))
        }
    }
}

/// Site tables resolved for one locale.
///
/// Tab name, labels and path prefix fall back to the default locale.
/// Notes never fall back: a locale without notes gets bare pages.
#[derive(Debug, Clone)]
pub struct LocaleContext<'a> {
    site: &'a SiteConfig,
    tag: String,
    tables: &'a LocaleConfig,
    exact: Option<&'a LocaleConfig>,
}

impl<'a> LocaleContext<'a> {
    /// The requested locale tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Navigation tab holding the API reference.
    pub fn tab_name(&self) -> &'a str {
        &self.tables.tab_name
    }

    /// Sub-group labels.
    pub fn labels(&self) -> &'a GroupLabels {
        &self.tables.group_labels
    }

    /// Callout note for endpoint pages of `version`.
    pub fn version_note(&self, version: &str) -> Option<&'a str> {
        self.exact
            .and_then(|l| l.version_notes.get(version))
            .map(String::as_str)
    }

    /// SDK versioning note.
    pub fn sdk_note(&self) -> Option<&'a str> {
        self.exact.and_then(|l| l.sdk_note.as_deref())
    }

    /// Navigation path prefix of `version` (`ja/reference/v2025.0`).
    pub fn nav_prefix(&self, version: &str) -> String {
        let base = format!("{}{}", self.tables.path_prefix, self.site.reference_slug);
        if self.site.is_base_version(version) {
            base
        } else {
            format!("{}/v{}", base, version)
        }
    }

    /// Navigation path of the hand-authored landing page of `version`.
    pub fn index_page(&self, version: &str) -> String {
        format!("{}/index", self.nav_prefix(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_version_directory() {
        let site = SiteConfig::builtin();
        let root = Path::new("reference");
        assert_eq!(site.version_directory(root, "2024.0"), root);
        assert_eq!(
            site.version_directory(root, "2025.0"),
            root.join("v2025.0")
        );
    }

    #[test]
    fn test_index_pages_per_locale() {
        let site = SiteConfig::builtin();
        let en = site.locale("en").unwrap();
        let ja = site.locale("ja").unwrap();

        assert_eq!(en.index_page("2024.0"), "reference/index");
        assert_eq!(en.index_page("2025.0"), "reference/v2025.0/index");
        assert_eq!(ja.index_page("2025.0"), "ja/reference/v2025.0/index");
        assert_eq!(ja.tab_name(), "APIリファレンス");
    }

    #[test]
    fn test_unknown_locale_falls_back_without_notes() {
        let site = SiteConfig::builtin();
        let fr = site.locale("fr").unwrap();

        assert_eq!(fr.tag(), "fr");
        assert_eq!(fr.tab_name(), "API reference");
        assert_eq!(fr.labels().endpoints, "Endpoints");
        assert_eq!(fr.version_note("2024.0"), None);
        assert_eq!(fr.sdk_note(), None);
    }

    #[test]
    fn test_notes_are_version_specific() {
        let site = SiteConfig::builtin();
        let en = site.locale("en").unwrap();
        assert!(en.version_note("2024.0").unwrap().contains("**2024.0**"));
        assert!(en.version_note("2025.0").is_none());
        assert!(en.sdk_note().is_some());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
  "base-version": "2025.0",
  "default-locale": "en",
  "reference-slug": "api",
  "locales": {{
    "en": {{
      "tab-name": "API",
      "group-labels": {{ "resources": "Types", "endpoints": "Calls" }}
    }}
  }}
}}"#
        )
        .unwrap();

        let site = SiteConfig::load(file.path()).unwrap();
        assert!(site.clean_before_generation);
        assert!(site.is_base_version("2025.0"));
        let en = site.locale("en").unwrap();
        assert_eq!(en.index_page("2025.0"), "api/index");
        assert_eq!(en.labels().resources, "Types");
    }

    #[test]
    fn test_load_rejects_missing_default_locale() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base-version":"1.0","default-locale":"de","reference-slug":"r","locales":{{}}}}"#
        )
        .unwrap();

        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
