#![deny(missing_docs)]

//! # Clean Descriptions Command
//!
//! Reflows every `description` field of the matching OpenAPI files. A file that
//! cannot be processed is reported and the remaining files are still cleaned.

use crate::files::{display_name, output_path, read_json, write_json, SourceArgs};
use refdocs_core::{clean_descriptions, AppError, AppResult, CleanStats, MarkdownReflow, Reflow};
use std::path::{Path, PathBuf};

/// Arguments for the clean-descriptions command.
#[derive(clap::Args, Debug, Clone)]
pub struct CleanDescriptionsArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Directory for the cleaned files (defaults to overwriting the sources).
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

/// Executes the description cleanup.
pub fn execute(args: &CleanDescriptionsArgs) -> AppResult<()> {
    let files = args.source.find()?;
    if files.is_empty() {
        println!("{}", args.source.nothing_found());
        return Ok(());
    }

    let reflow = MarkdownReflow;
    let mut total = CleanStats::default();
    let mut failed = 0;

    for file in &files {
        match clean_file(file, args.output.as_deref(), &reflow) {
            Ok(stats) => {
                println!(
                    "{}: {} description(s), {} changed",
                    display_name(file),
                    stats.visited,
                    stats.changed
                );
                total.visited += stats.visited;
                total.changed += stats.changed;
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", file.display(), e);
                failed += 1;
            }
        }
    }

    println!(
        "Summary: {} file(s), {} description(s), {} changed",
        files.len() - failed,
        total.visited,
        total.changed
    );

    if failed > 0 {
        return Err(AppError::General(format!(
            "{} of {} file(s) could not be cleaned",
            failed,
            files.len()
        )));
    }
    Ok(())
}

fn clean_file(file: &Path, output: Option<&Path>, reflow: &impl Reflow) -> AppResult<CleanStats> {
    let document = read_json(file)?;
    let (cleaned, stats) = clean_descriptions(&document, reflow);
    write_json(&output_path(file, output), &cleaned)?;
    Ok(stats)
}
