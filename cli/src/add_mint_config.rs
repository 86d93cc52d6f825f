#![deny(missing_docs)]

//! # Add Mint Config Command
//!
//! Deep-merges a shared JSON overlay (site-specific vendor extensions) into every
//! matching OpenAPI file.

use crate::files::{display_name, output_path, read_json, write_json, SourceArgs};
use refdocs_core::{deep_merge, AppError, AppResult};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Arguments for the add-mint-config command.
#[derive(clap::Args, Debug, Clone)]
pub struct AddMintConfigArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Directory for the merged files (defaults to overwriting the sources).
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// JSON object merged into every file.
    #[clap(short, long, default_value = "openapi-mint-config.json")]
    pub config_file: PathBuf,
}

/// Executes the overlay merge.
pub fn execute(args: &AddMintConfigArgs) -> AppResult<()> {
    let overlay = read_json(&args.config_file)?;
    if !overlay.is_object() {
        return Err(AppError::Config(format!(
            "{} must contain a JSON object",
            args.config_file.display()
        )));
    }

    let files = args.source.find()?;
    if files.is_empty() {
        println!("{}", args.source.nothing_found());
        return Ok(());
    }

    let mut failed = 0;
    for file in &files {
        match merge_file(file, args.output.as_deref(), &overlay) {
            Ok(target) => println!("{}: written to {}", display_name(file), target.display()),
            Err(e) => {
                eprintln!("Error processing {}: {}", file.display(), e);
                failed += 1;
            }
        }
    }

    println!(
        "Summary: {} of {} file(s) updated",
        files.len() - failed,
        files.len()
    );

    if failed > 0 {
        return Err(AppError::General(format!(
            "{} of {} file(s) could not be updated",
            failed,
            files.len()
        )));
    }
    Ok(())
}

fn merge_file(file: &Path, output: Option<&Path>, overlay: &Value) -> AppResult<PathBuf> {
    let mut document = read_json(file)?;
    deep_merge(&mut document, overlay);
    let target = output_path(file, output);
    write_json(&target, &document)?;
    Ok(target)
}
