//! On-disk `launch.toml` schema

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actions::action::Action;
use crate::actions::pack::Pack;

/// Errors that can occur while loading a single configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Unable to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to parse TOML config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration for a single action.
///
/// `name` and `script` may be missing here; [`Action::validate`] rejects them later.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ConfigAction {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub script: Option<String>,
    pub shell: Option<String>,
    pub env: Option<HashMap<String, String>>,
}

impl From<ConfigAction> for Action {
    fn from(config: ConfigAction) -> Self {
        Action {
            name: config.name.unwrap_or_default(),
            desc: config.desc.filter(|d| !d.is_empty()),
            script: config.script.unwrap_or_default(),
            shell: config.shell.filter(|s| !s.is_empty()),
            env: config.env.unwrap_or_default(),
        }
    }
}

/// Root structure of a `launch.toml` file
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    pub default: Option<ConfigAction>,
    pub actions: Option<Vec<ConfigAction>>,
    pub env: Option<HashMap<String, String>>,
    pub shell: Option<String>,
}

impl Config {
    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Toml` if the content does not match the schema.
    pub fn parse(contents: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Loads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, `ConfigError::Read`
    /// if it cannot be read, or `ConfigError::Toml` if parsing fails.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        debug!("Read config file {}", path.display());
        Config::parse(&contents, path)
    }

    /// Convert into a [`Pack`], falling back to `default_shell` when no shell is set.
    #[must_use]
    pub fn into_pack(self, path: PathBuf, default_shell: &str) -> Pack {
        Pack {
            path,
            default: self.default.map(Action::from),
            actions: self
                .actions
                .unwrap_or_default()
                .into_iter()
                .map(Action::from)
                .collect(),
            env: self.env.unwrap_or_default(),
            shell: self
                .shell
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default_shell.to_string()),
        }
    }
}
