#![deny(missing_docs)]

//! # Replace Links Command
//!
//! Rewrites one URL to another in the `description` fields of the matching
//! OpenAPI files. Every file is checked before it is rewritten; the first
//! unreadable or invalid file stops the run.

use crate::files::{display_name, output_path, read_json, write_json, SourceArgs};
use refdocs_core::{AppResult, LinkRewriter};
use std::path::PathBuf;

/// Arguments for the replace-links command.
#[derive(clap::Args, Debug, Clone)]
pub struct ReplaceLinksArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// URL to replace (matched literally).
    #[clap(long)]
    pub old_url: String,

    /// Replacement URL.
    #[clap(long)]
    pub new_url: String,

    /// Directory for the rewritten files (defaults to overwriting the sources).
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

/// Executes the link rewrite.
pub fn execute(args: &ReplaceLinksArgs) -> AppResult<()> {
    let rewriter = LinkRewriter::new(&args.old_url, &args.new_url)?;

    let files = args.source.find()?;
    if files.is_empty() {
        println!("{}", args.source.nothing_found());
        return Ok(());
    }

    let mut total = 0;
    let mut rewritten = 0;

    for file in &files {
        let document = read_json(file)?;
        let (updated, count) = rewriter.replace_links(&document);

        if count == 0 {
            println!("{}: no links to replace", display_name(file));
            continue;
        }

        write_json(&output_path(file, args.output.as_deref()), &updated)?;
        println!("{}: {} link(s) replaced", display_name(file), count);
        total += count;
        rewritten += 1;
    }

    println!(
        "Summary: {} link(s) replaced in {} of {} file(s)",
        total,
        rewritten,
        files.len()
    );
    Ok(())
}
