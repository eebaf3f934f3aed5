use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-exportr",
    about = "Export dependency license metadata to per-variant CSV reports",
    version
)]
pub struct Cli {
    /// Project path containing the generated dependency scans
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file [default: ./.license-exportr/config.toml, fallback ~/.config/license-exportr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the CSV reports are written to [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Export only this build variant instead of the configured set (repeatable)
    #[arg(long = "variant", value_name = "VARIANT")]
    pub variants: Vec<String>,

    /// Also print every exported library per variant
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all status output
    #[arg(short, long)]
    pub quiet: bool,
}
