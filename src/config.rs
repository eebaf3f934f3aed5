use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.license-exportr/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Export settings.
    pub export: ExportConfig,
}

/// Defines which build variants are exported and where the reports land.
#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    /// Build variants to export, in order. Defaults to the two release
    /// flavors of the host app.
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,
    /// Directory the CSV files are written to. Defaults to the invoking
    /// directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_variants() -> Vec<String> {
    vec![
        "fossNormalRelease".to_string(),
        "fossAutomotiveRelease".to_string(),
    ]
}

impl Default for Config {
    /// Built-in defaults used when no config file is found.
    fn default() -> Self {
        Config {
            export: ExportConfig {
                variants: default_variants(),
                output_dir: None,
            },
        }
    }
}

/// Load the export configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.license-exportr/config.toml`
/// 3. `~/.config/license-exportr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = project_path.join(".license-exportr").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-exportr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
