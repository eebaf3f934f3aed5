use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::LibraryCatalog;

/// Location of the generated scan output for one build variant, relative to
/// the project root.
pub fn input_path(project: &Path, variant: &str) -> PathBuf {
    project
        .join("app/build/generated/aboutLibraries")
        .join(variant)
        .join("res/raw/aboutlibraries.json")
}

/// Read and parse a variant's library catalog.
///
/// A missing file or malformed JSON aborts the whole export; there is no
/// per-variant recovery.
pub fn load(project: &Path, variant: &str) -> Result<LibraryCatalog> {
    let path = input_path(project, variant);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read scan output {}", path.display()))?;
    let catalog: LibraryCatalog = serde_json::from_str(&content)
        .with_context(|| format!("malformed scan output {}", path.display()))?;
    Ok(catalog)
}
