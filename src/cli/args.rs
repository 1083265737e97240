//! CLI argument definitions
//!
//! Command line options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::AppError;
use crate::logger::EventLog;

#[derive(Debug, Parser)]
#[command(name = "vmix-rename")]
#[command(
    about = "Rename the file vMix is recording after a project and notify Telegram",
    version
)]
#[command(after_help = "Telegram credentials are read from TOKEN and CHAT_IDS \
    (comma-separated), falling back to TELEGRAM_TOKEN and TELEGRAM_CHAT_IDS.")]
pub(crate) struct Cli {
    /// Project name used for the new file name
    pub(crate) project_name: Option<String>,

    /// vMix web API status endpoint
    #[arg(long, value_name = "URL")]
    pub(crate) api_url: Option<String>,

    /// Telegram Bot API base URL
    #[arg(long, value_name = "URL")]
    pub(crate) telegram_api: Option<String>,

    /// Always build "<project> - <date><ext>" instead of replacing the marker
    #[arg(long)]
    pub(crate) rebuild: bool,

    /// Placeholder in the vMix file name to replace (default: vMix_LAST_RECORD)
    #[arg(long, value_name = "TOKEN")]
    pub(crate) marker: Option<String>,

    /// Timezone for the date in rebuilt names (e.g., "Europe/Kyiv", "UTC", "local")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Log file (default: pmc_log.txt next to the executable)
    #[arg(long, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,

    /// Do not echo log lines to stderr
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.quiet && config.quiet {
            self.quiet = true;
        }

        // String options: only apply if CLI didn't set them
        if self.api_url.is_none() {
            self.api_url = config.api_url.clone();
        }
        if self.telegram_api.is_none() {
            self.telegram_api = config.telegram_api.clone();
        }
        if self.marker.is_none() {
            self.marker = config.marker.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.log_file.is_none() {
            self.log_file = config.log_file.clone();
        }

        self
    }

    /// The required project name; blank counts as missing
    pub(crate) fn project_name(&self) -> Result<&str, AppError> {
        self.project_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or(AppError::MissingProjectName)
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(EventLog::default_path)
    }
}
