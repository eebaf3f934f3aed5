//! `license-exportr` — export per-variant dependency license metadata to CSV.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load export config ([`config::load_config`]).
//! 3. For each build variant, in order:
//!    a. load the variant's library catalog ([`catalog::load`]),
//!    b. write `licenses_<variant>_appning.csv` ([`report::csv`]).
//! 4. Print the export summary ([`report::terminal`]).
//!
//! Any failure — missing scan output, malformed JSON, a library referencing a
//! license id the catalog does not define, an unwritable report — aborts the
//! run immediately; remaining variants are not processed and a partially
//! written report is left as is.

mod catalog;
mod cli;
mod config;
mod models;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::Cli;
use config::load_config;
use report::terminal::ExportSummary;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve project path
    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    // Load export config
    let config = load_config(&path, cli.config.as_deref())?;

    // CLI overrides take precedence over the config file
    let variants = if cli.variants.is_empty() {
        config.export.variants
    } else {
        cli.variants
    };
    let output_dir = cli
        .output_dir
        .or(config.export.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut summaries = Vec::new();

    for variant in &variants {
        let catalog = catalog::load(&path, variant)?;
        let out = output_dir.join(format!("licenses_{}_appning.csv", variant));
        let written = report::csv::render(&catalog, &out)?;

        if !cli.quiet {
            eprintln!("  {} {} {} libraries", "→".cyan(), variant, written);
        }

        if cli.verbose && !cli.quiet {
            report::terminal::render_libraries(&catalog, variant)?;
        }

        summaries.push(ExportSummary {
            variant: variant.clone(),
            libraries: written,
            licenses: catalog.licenses.len(),
            output: out,
        });
    }

    if !cli.quiet {
        report::terminal::render_summary(&summaries);
    }

    Ok(())
}
