//! CLI argument parsing

use clap::Parser;

use crate::config::{api, defaults};

/// GitHub enterprise repository exporter CLI
#[derive(Parser, Debug)]
#[command(name = "ghexport")]
#[command(version)]
#[command(about = "Export repositories of a GitHub enterprise's organizations to an Excel workbook", long_about = None)]
pub struct Cli {
    /// Enterprise name; organizations whose login contains it are exported
    #[arg(short, long, env = "GITHUB_ENTERPRISE")]
    pub enterprise: String,

    /// GitHub personal access token
    #[arg(short, long, env = "GITHUB_PAT", hide_env_values = true)]
    pub token: String,

    /// Output workbook path
    #[arg(short, long, default_value = defaults::OUTPUT_FILE)]
    pub output: String,

    /// GitHub API base URL (override for GHES or mock servers)
    #[arg(long, default_value = api::BASE_URL)]
    pub api_url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}
