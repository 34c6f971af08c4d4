use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::state::i18n::Language;
use crate::state::instant;
use crate::state::toggle::ToggleConfig;

pub const APP_NAME: &str = "wmilist";
const DEFAULT_BASE_URL: &str = "http://localhost:3356";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot resolve config directory; set WMILIST_CONFIG to the config file")]
    NoConfigDir,
    #[error("read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse TOML config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{key} in {path} is invalid: {reason}")]
    Invalid {
        path: PathBuf,
        key: &'static str,
        reason: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendSection,
    pub instant: InstantSection,
    pub ui: UiSection,
    pub toggle: ToggleConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackendSection {
    pub base_url: String,
    /// Record requests instead of sending them.
    pub offline: bool,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            offline: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InstantSection {
    pub delay_ms: u64,
}

impl Default for InstantSection {
    fn default() -> Self {
        Self {
            delay_ms: instant::DEFAULT_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub language: Language,
    /// JSON page description loaded at startup.
    pub page: Option<PathBuf>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = env::var_os("WMILIST_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let root = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(root.join(APP_NAME).join("config.toml"))
    }

    /// Loads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.instant.delay_ms == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                key: "instant.delay_ms",
                reason: "must be positive".to_string(),
            });
        }

        if let Err(err) = Url::parse(&self.backend.base_url) {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                key: "backend.base_url",
                reason: err.to_string(),
            });
        }

        Ok(())
    }

    pub fn instant_delay(&self) -> Duration {
        Duration::from_millis(self.instant.delay_ms)
    }
}
