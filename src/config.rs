use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::consts::{DEFAULT_API_URL, DEFAULT_TELEGRAM_API, REQUEST_TIMEOUT};
use crate::error::AppError;
use crate::rename::NamePolicy;
use crate::utils::Timezone;

/// Optional settings file. Telegram secrets only come from the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) api_url: Option<String>,
    #[serde(default)]
    pub(crate) telegram_api: Option<String>,
    #[serde(default)]
    pub(crate) replace_only: Option<bool>,
    #[serde(default)]
    pub(crate) marker: Option<String>,
    #[serde(default)]
    pub(crate) default_extension: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) log_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) quiet: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    if !quiet {
                        eprintln!("Warning: Failed to read {}: {}", path.display(), e);
                    }
                    continue;
                }
            };
            match Self::parse(&content) {
                Ok(config) => {
                    if !quiet {
                        eprintln!("Loaded config from {}", path.display());
                    }
                    return config;
                }
                Err(e) => {
                    if !quiet {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG style: ~/.config/vmix-rename/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("vmix-rename").join("config.toml"));
        }

        // 2. Platform config dir (AppData on Windows, Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("vmix-rename").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. ~/.vmix-rename.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".vmix-rename.toml"));
        }

        paths
    }
}

/// Everything a run needs besides the project name and the credentials
#[derive(Debug, Clone)]
pub(crate) struct RunConfig {
    pub(crate) api_url: String,
    pub(crate) telegram_api: String,
    pub(crate) policy: NamePolicy,
    pub(crate) timeout: Duration,
    pub(crate) timezone: Timezone,
}

impl RunConfig {
    /// Resolve from CLI values (already merged with the config file) and
    /// built-in defaults
    pub(crate) fn resolve(cli: &Cli, config: &Config) -> Result<Self, AppError> {
        let mut policy = NamePolicy::default();
        if cli.rebuild {
            policy.replace_only = false;
        } else if let Some(replace_only) = config.replace_only {
            policy.replace_only = replace_only;
        }
        if let Some(marker) = &cli.marker {
            policy.marker = marker.clone();
        }
        if let Some(ext) = config.default_extension.as_deref().map(str::trim)
            && !ext.is_empty()
        {
            policy.default_extension = if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{ext}")
            };
        }

        Ok(Self {
            api_url: cli
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            telegram_api: cli
                .telegram_api
                .clone()
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API.to_string()),
            policy,
            timeout: config
                .timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(REQUEST_TIMEOUT),
            timezone: Timezone::parse(cli.timezone.as_deref())?,
        })
    }
}
