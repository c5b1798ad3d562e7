//! Configuration for the purrsync CLI.
//!
//! Layered loading (built-in defaults, then `config.toml`, then
//! `PURRSYNC_*` environment variables), platform path resolution, and
//! translation to `purrsync_api::TransportConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use purrsync_api::{DEFAULT_BASE_URL, TransportConfig};

const REDACTED: &str = "********";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Remote user whose favourites are listed.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Images requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Favourites file. Defaults to the platform data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    #[serde(default)]
    pub api: ApiSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            page_size: default_page_size(),
            store_path: None,
            api: ApiSettings::default(),
        }
    }
}

/// The `[api]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (plaintext; prefer `PURRSYNC_API__API_KEY`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout: default_timeout(),
        }
    }
}

fn default_user_id() -> String {
    "my-user57".into()
}
fn default_page_size() -> u32 {
    10
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Reject values the client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Validation {
                field: "page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.user_id.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "user_id".into(),
                reason: "cannot be empty".into(),
            });
        }
        url::Url::parse(&self.api.base_url).map_err(|e| ConfigError::Validation {
            field: "api.base_url".into(),
            reason: format!("invalid URL '{}': {e}", self.api.base_url),
        })?;
        Ok(())
    }

    /// Transport settings for `purrsync_api::CatApiClient`.
    pub fn to_transport(&self) -> TransportConfig {
        TransportConfig::default().with_timeout(Duration::from_secs(self.api.timeout))
    }

    /// The API key, if one is configured.
    pub fn api_key(&self) -> Option<SecretString> {
        self.api
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(SecretString::from)
    }

    /// The favourites file, falling back to the platform default.
    pub fn store_path(&self) -> PathBuf {
        self.store_path.clone().unwrap_or_else(default_store_path)
    }

    /// A copy safe to print: the API key is masked.
    pub fn redacted(&self) -> Self {
        let mut cfg = self.clone();
        if cfg.api.api_key.is_some() {
            cfg.api.api_key = Some(REDACTED.into());
        }
        cfg
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "purrsync", "purrsync")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || home_fallback(".config").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default location of the favourites file.
pub fn default_store_path() -> PathBuf {
    project_dirs().map_or_else(
        || home_fallback(".local/share").join("favourites.json"),
        |dirs| dirs.data_dir().join("favourites.json"),
    )
}

fn home_fallback(sub: &str) -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(sub);
    p.push("purrsync");
    p
}

// ── Loading ─────────────────────────────────────────────────────────

/// The provider stack for a config file at `path`.
///
/// Env keys nest on a double underscore: `PURRSYNC_API__TIMEOUT=5`.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PURRSYNC_").split("__"))
}

/// Load and validate config from a figment.
pub fn extract(figment: &Figment) -> Result<Config, ConfigError> {
    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    extract(&figment(&config_path()))
}
