//! Server configuration.
//!
//! Everything is read from environment variables, with an optional JSON
//! settings file for the user-facing toggles.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `PLACE_BIND` | listen address, default `127.0.0.1:3000` |
//! | `GEOCODER_URL` | geocoder base URL |
//! | `ROUTER_URL` | router base URL |
//! | `PLACE_CACHE_DIR` | durable cache directory (unset: memory only) |
//! | `PLACE_SETTINGS` | settings JSON file |
//! | `PLACE_OFFLINE_MODE` | overrides `offline_mode` from the settings file |

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cache::CacheConfig;
use crate::provider::ProviderConfig;

/// Default listen address.
const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has an unusable value
    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },

    /// Settings file exists but couldn't be read
    #[error("failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON
    #[error("invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User-facing toggles owned by the settings store. Read-only here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Skip the network entirely and answer from offline data.
    pub offline_mode: bool,
    /// Whether the presentation layer has shown its welcome screen.
    pub welcome_shown: bool,
}

impl Settings {
    /// Load settings from a JSON file. A missing file yields defaults.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Settings::load`], but logs failures and falls back to defaults.
    pub async fn load_or_default(path: &Path) -> Self {
        Self::load(path).await.unwrap_or_else(|e| {
            warn!(error = %e, "using default settings");
            Self::default()
        })
    }
}

/// Where the engine reads its settings from.
///
/// A file source is re-read on every call, so edits made by whoever owns
/// the store take effect without a restart.
#[derive(Debug, Clone)]
pub enum SettingsSource {
    /// Settings fixed at startup.
    Fixed(Settings),
    /// A JSON settings file, with an optional offline-mode override.
    File {
        path: PathBuf,
        offline_override: Option<bool>,
    },
}

impl SettingsSource {
    /// The settings in effect right now.
    pub async fn current(&self) -> Settings {
        match self {
            SettingsSource::Fixed(settings) => *settings,
            SettingsSource::File {
                path,
                offline_override,
            } => {
                let mut settings = Settings::load_or_default(path).await;
                if let Some(offline) = offline_override {
                    settings.offline_mode = *offline;
                }
                settings
            }
        }
    }
}

impl From<Settings> for SettingsSource {
    fn from(settings: Settings) -> Self {
        SettingsSource::Fixed(settings)
    }
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub provider: ProviderConfig,
    pub cache: CacheConfig,
    pub settings_path: Option<PathBuf>,
    /// Explicit offline-mode override; wins over the settings file.
    pub offline_mode: Option<bool>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_str = get("PLACE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_str.parse().map_err(|_| ConfigError::InvalidVar {
            var: "PLACE_BIND",
            value: bind_str.clone(),
        })?;

        let mut provider = ProviderConfig::default();
        if let Some(url) = get("GEOCODER_URL") {
            provider = provider.with_geocoder_url(url);
        }
        if let Some(url) = get("ROUTER_URL") {
            provider = provider.with_router_url(url);
        }

        let mut cache = CacheConfig::default();
        if let Some(dir) = get("PLACE_CACHE_DIR") {
            cache = cache.with_dir(dir);
        }

        let offline_mode = get("PLACE_OFFLINE_MODE")
            .map(|value| {
                parse_bool(&value).ok_or(ConfigError::InvalidVar {
                    var: "PLACE_OFFLINE_MODE",
                    value,
                })
            })
            .transpose()?;

        Ok(Self {
            bind,
            provider,
            cache,
            settings_path: get("PLACE_SETTINGS").map(PathBuf::from),
            offline_mode,
        })
    }

    /// The settings source: the file if one is configured, with the
    /// offline-mode override applied on top.
    pub fn settings_source(&self) -> SettingsSource {
        match &self.settings_path {
            Some(path) => SettingsSource::File {
                path: path.clone(),
                offline_override: self.offline_mode,
            },
            None => SettingsSource::Fixed(Settings {
                offline_mode: self.offline_mode.unwrap_or_default(),
                ..Settings::default()
            }),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
