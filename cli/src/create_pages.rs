#![deny(missing_docs)]

//! # Create API Pages Command
//!
//! Generates one `.mdx` page per operation and per resource schema of every
//! matching OpenAPI file.
//!
//! 1. **Clean**: Removes previously generated pages (index pages survive).
//! 2. **Generate**: Writes pages into the version directory of each spec.
//! 3. **Report**: Lists files that are new and files that were not recreated.

use crate::files::{display_name, SourceArgs};
use refdocs_core::{
    clear_reference_directory, generate_pages, load_spec, reconcile, AppError, AppResult,
    SiteConfig,
};
use std::path::{Path, PathBuf};

/// Arguments for the create-api-pages command.
#[derive(clap::Args, Debug, Clone)]
pub struct CreatePagesArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Root of the generated reference pages.
    #[clap(short, long, default_value = "reference")]
    pub reference_dir: PathBuf,

    /// Locale of the generated notes.
    #[clap(short, long, default_value = "en")]
    pub locale: String,

    /// JSON file replacing the built-in site tables.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

/// Executes the page generation.
pub fn execute(args: &CreatePagesArgs) -> AppResult<()> {
    let site = SiteConfig::load_or_builtin(args.config.as_deref())?;
    let locale = site.locale(&args.locale)?;

    let files = args.source.find()?;
    if files.is_empty() {
        return Err(AppError::Config(args.source.nothing_found()));
    }
    println!("Found {} OpenAPI file(s)", files.len());

    let removed = if site.clean_before_generation {
        let removed = clear_reference_directory(&args.reference_dir)?;
        println!(
            "Removed {} previously generated file(s) from {}",
            removed.len(),
            args.reference_dir.display()
        );
        removed
    } else {
        Vec::new()
    };

    let mut created = Vec::new();
    for file in &files {
        let loaded = load_spec(file)?;
        let generated = generate_pages(&loaded, &args.reference_dir, &site, &locale)?;
        println!(
            "{}: {} endpoint page(s), {} resource page(s) in {}",
            display_name(file),
            generated.operations.len(),
            generated.resources.len(),
            generated.output_dir.display()
        );
        created.extend(generated.all().cloned());
    }

    let report = reconcile(&removed, &created);
    print_files("New files", &report.new_files, &args.reference_dir);
    print_files("Orphaned files", &report.orphaned, &args.reference_dir);

    println!("Done: {} page(s) written", created.len());
    Ok(())
}

fn print_files(heading: &str, files: &[PathBuf], root: &Path) {
    if files.is_empty() {
        return;
    }
    println!("{} ({}):", heading, files.len());
    for file in files {
        println!("   {}", file.strip_prefix(root).unwrap_or(file).display());
    }
}
