#![deny(missing_docs)]

//! # Refdocs CLI
//!
//! Command Line Interface for the API reference documentation toolchain.
//!
//! Supported Commands:
//! - `create-api-pages`: OpenAPI -> one `.mdx` page per operation and resource.
//! - `update-docs-json`: OpenAPI -> navigation groups in the site `docs.json`.
//! - `clean-descriptions`: Reflows markdown in `description` fields.
//! - `replace-links`: Rewrites a URL in `description` fields.
//! - `add-mint-config`: Merges a shared JSON overlay into OpenAPI files.

use clap::{Parser, Subcommand};
use refdocs_core::AppResult;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

mod add_mint_config;
mod clean_descriptions;
mod create_pages;
mod files;
mod replace_links;
mod update_docs;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API reference documentation toolchain")]
struct Cli {
    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate reference pages from OpenAPI files.
    CreateApiPages(create_pages::CreatePagesArgs),
    /// Update the reference navigation in docs.json.
    UpdateDocsJson(update_docs::UpdateDocsArgs),
    /// Reflow markdown in description fields.
    CleanDescriptions(clean_descriptions::CleanDescriptionsArgs),
    /// Replace a URL in description fields.
    ReplaceLinks(replace_links::ReplaceLinksArgs),
    /// Merge a JSON overlay into OpenAPI files.
    AddMintConfig(add_mint_config::AddMintConfigArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // A subscriber may already be installed (tests).
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::CreateApiPages(args) => create_pages::execute(args),
        Commands::UpdateDocsJson(args) => update_docs::execute(args),
        Commands::CleanDescriptions(args) => clean_descriptions::execute(args),
        Commands::ReplaceLinks(args) => replace_links::execute(args),
        Commands::AddMintConfig(args) => add_mint_config::execute(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
