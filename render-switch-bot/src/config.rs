//! Startup configuration
//!
//! Values come from an optional TOML file, then from command-line / environment
//! overrides (`ADMIN`, `API_KEYS`, `RENDER_API_BASE_URL`), which win.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use render_switch_core::services::DEFAULT_PARALLELISM;
use render_switch_core::types::ProviderOptions;
use serde::Deserialize;
use thiserror::Error;

/// Configuration errors abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("admin id is not set (config `admin_id` or env ADMIN)")]
    MissingAdmin,

    #[error("no API keys configured (config `api_keys` or env API_KEYS)")]
    NoApiKeys,

    #[error("invalid value for `{field}`: {detail}")]
    Invalid { field: &'static str, detail: String },
}

/// On-disk layout. Every key is optional so env-only setups work.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    admin_id: Option<i64>,
    api_keys: Vec<String>,
    api_base_url: Option<String>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
    parallelism: Option<usize>,
    clear_cache_on_deploy: Option<bool>,
}

/// Values taken from the command line or the environment.
#[derive(Default)]
pub struct ConfigOverrides {
    pub admin_id: Option<i64>,
    pub api_keys: Vec<String>,
    pub api_base_url: Option<String>,
}

/// Resolved configuration.
pub struct Config {
    pub admin_id: i64,
    pub api_keys: Vec<String>,
    pub provider: ProviderOptions,
    pub parallelism: usize,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("admin_id", &self.admin_id)
            .field("api_keys", &format_args!("<{} redacted>", self.api_keys.len()))
            .field("provider", &self.provider)
            .field("parallelism", &self.parallelism)
            .finish()
    }
}

/// `<config_dir>/render-switch/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("render-switch").join("config.toml"))
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => read_file(path)?,
            None => match default_config_path() {
                Some(path) if path.is_file() => read_file(&path)?,
                _ => FileConfig::default(),
            },
        };
        Self::resolve(file, overrides)
    }

    fn resolve(file: FileConfig, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let admin_id = overrides
            .admin_id
            .or(file.admin_id)
            .ok_or(ConfigError::MissingAdmin)?;

        let raw_keys = if overrides.api_keys.is_empty() {
            file.api_keys
        } else {
            overrides.api_keys
        };
        let api_keys: Vec<String> = raw_keys
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if api_keys.is_empty() {
            return Err(ConfigError::NoApiKeys);
        }

        let defaults = ProviderOptions::default();
        let base_url = overrides
            .api_base_url
            .or(file.api_base_url)
            .unwrap_or(defaults.base_url);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "api_base_url",
                detail: format!("'{base_url}' is not an http(s) URL"),
            });
        }

        let provider = ProviderOptions {
            base_url,
            connect_timeout: seconds(
                "connect_timeout_secs",
                file.connect_timeout_secs,
                defaults.connect_timeout,
            )?,
            request_timeout: seconds(
                "request_timeout_secs",
                file.request_timeout_secs,
                defaults.request_timeout,
            )?,
            clear_cache_on_deploy: file
                .clear_cache_on_deploy
                .unwrap_or(defaults.clear_cache_on_deploy),
        };

        let parallelism = file.parallelism.unwrap_or(DEFAULT_PARALLELISM);
        if parallelism == 0 {
            return Err(ConfigError::Invalid {
                field: "parallelism",
                detail: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            admin_id,
            api_keys,
            provider,
            parallelism,
        })
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn seconds(
    field: &'static str,
    value: Option<u64>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match value {
        None => Ok(default),
        Some(0) => Err(ConfigError::Invalid {
            field,
            detail: "must be at least 1 second".to_string(),
        }),
        Some(secs) => Ok(Duration::from_secs(secs)),
    }
}
