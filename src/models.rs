use std::collections::HashMap;

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// One build variant's dependency scan output: the library inventory plus the
/// catalog of distinct licenses those libraries reference.
#[derive(Debug, Deserialize)]
pub struct LibraryCatalog {
    #[serde(default)]
    pub libraries: Vec<Library>,
    #[serde(default)]
    pub licenses: HashMap<String, License>,
}

#[derive(Debug, Deserialize)]
pub struct Library {
    pub name: String,
    #[serde(default)]
    pub licenses: Vec<String>,
    #[serde(default)]
    pub developers: Vec<Developer>,
    #[serde(default)]
    pub scm: Option<Scm>,
}

#[derive(Debug, Deserialize)]
pub struct Developer {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Scm {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

impl LibraryCatalog {
    /// Resolve a library's first referenced license against the catalog.
    ///
    /// `Ok(None)` when the library declares no licenses. A license id absent
    /// from the catalog is an error, not a fallback.
    pub fn first_license(&self, lib: &Library) -> Result<Option<&License>> {
        let Some(id) = lib.licenses.first() else {
            return Ok(None);
        };
        self.licenses
            .get(id)
            .map(Some)
            .ok_or_else(|| anyhow!("library '{}' references unknown license id '{}'", lib.name, id))
    }
}

impl Library {
    /// Developer names joined by ", ". A single space when no developer
    /// carries a name (the CSV column is never empty).
    pub fn copyrights(&self) -> String {
        let joined = self
            .developers
            .iter()
            .filter_map(|d| d.name.as_deref())
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() {
            " ".to_string()
        } else {
            joined
        }
    }

    /// `scm.url` when present, else the empty string.
    pub fn repository_url(&self) -> &str {
        self.scm
            .as_ref()
            .and_then(|s| s.url.as_deref())
            .unwrap_or("")
    }
}
