//! Runtime settings.
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! or absent file is valid. The binary layers CLI flags and `WIGGIN_*`
//! environment variables on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Which data source feeds the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// ESI over HTTP.
    Live,
    /// Snapshot file or seeded synthetic data.
    #[default]
    Mock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockSettings {
    /// Snapshot JSON to replay.
    pub data_path: Option<PathBuf>,
    /// Generate a synthetic snapshot with this seed instead of reading a file.
    pub seed: Option<u64>,
}

impl Default for MockSettings {
    fn default() -> Self {
        MockSettings {
            data_path: Some(PathBuf::from("data/snapshot.json")),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EsiSettings {
    pub base_url: String,
    pub datasource: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for EsiSettings {
    fn default() -> Self {
        EsiSettings {
            base_url: "https://esi.evetech.net/latest".to_string(),
            datasource: "tranquility".to_string(),
            user_agent: concat!("wiggin/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Static universe dataset.
    pub universe_path: PathBuf,
    pub source: SourceKind,
    pub mock: MockSettings,
    pub esi: EsiSettings,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            universe_path: PathBuf::from("data/universe.json"),
            source: SourceKind::default(),
            mock: MockSettings::default(),
            esi: EsiSettings::default(),
            log_filter: "wiggin=info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::from_toml(&text, path)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Settings::load(path),
            None => Ok(Settings::default()),
        }
    }
}
