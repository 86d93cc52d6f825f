#![deny(missing_docs)]

//! # Input Files
//!
//! Discovery of OpenAPI files by directory and file-name pattern, and the
//! JSON read/write conventions shared by every subcommand.

use refdocs_core::{AppError, AppResult};
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where to look for OpenAPI files.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory containing the OpenAPI files.
    #[clap(short, long)]
    pub directory: PathBuf,

    /// Regular expression matched against file names (e.g. `^openapi.*\.json$`).
    #[clap(short, long)]
    pub pattern: String,
}

impl SourceArgs {
    /// Matching files, sorted by path.
    pub fn find(&self) -> AppResult<Vec<PathBuf>> {
        find_matching_files(&self.directory, &self.pattern)
    }

    /// Message printed when nothing matches.
    pub fn nothing_found(&self) -> String {
        format!(
            "No files matching '{}' found in {}",
            self.pattern,
            self.directory.display()
        )
    }
}

/// Regular files directly inside `directory` whose name matches `pattern`.
pub fn find_matching_files(directory: &Path, pattern: &str) -> AppResult<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(AppError::Config(format!(
            "Directory not found: {}",
            directory.display()
        )));
    }
    let regex = Regex::new(pattern)?;

    let files = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| regex.is_match(&e.file_name().to_string_lossy()))
        .map(|e| e.into_path())
        .collect();

    Ok(files)
}

/// Reads and parses a JSON file.
pub fn read_json(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::General(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| AppError::parse(path, e))
}

/// Writes `value` with two-space indentation and a trailing newline.
pub fn write_json(path: &Path, value: &Value) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

/// `file` relocated into `output`, or `file` itself when no output directory is given.
pub fn output_path(file: &Path, output: Option<&Path>) -> PathBuf {
    match (output, file.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => file.to_path_buf(),
    }
}

/// File name for progress lines.
pub fn display_name(file: &Path) -> String {
    file.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string())
}
