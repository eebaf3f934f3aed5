use std::path::PathBuf;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::models::LibraryCatalog;

/// What one variant's export produced, for the closing summary table.
pub struct ExportSummary {
    pub variant: String,
    pub libraries: usize,
    pub licenses: usize,
    pub output: PathBuf,
}

/// Render the closing summary: one row per exported variant.
pub fn render_summary(summaries: &[ExportSummary]) {
    println!(
        "\n {} v{}",
        "license-exportr".bold(),
        env!("CARGO_PKG_VERSION")
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Variant").add_attribute(Attribute::Bold),
            Cell::new("Libraries").add_attribute(Attribute::Bold),
            Cell::new("Licenses").add_attribute(Attribute::Bold),
            Cell::new("Report").add_attribute(Attribute::Bold),
        ]);

    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.variant),
            Cell::new(summary.libraries).set_alignment(CellAlignment::Right),
            Cell::new(summary.licenses).set_alignment(CellAlignment::Right),
            Cell::new(summary.output.display()),
        ]);
    }

    println!("{}", table);
}

/// Render every library of one variant with its resolved license (`--verbose`).
pub fn render_libraries(catalog: &LibraryCatalog, variant: &str) -> Result<()> {
    println!("\n {} {}\n", "[VARIANT]".cyan().bold(), variant);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Component").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Copyrights").add_attribute(Attribute::Bold),
            Cell::new("Repository").add_attribute(Attribute::Bold),
        ]);

    for lib in &catalog.libraries {
        let license = catalog
            .first_license(lib)?
            .map(|l| l.name.as_str())
            .unwrap_or("-");

        table.add_row(vec![
            Cell::new(&lib.name),
            Cell::new(license),
            Cell::new(lib.copyrights().trim()),
            Cell::new(lib.repository_url()),
        ]);
    }

    println!("{}", table);
    Ok(())
}
