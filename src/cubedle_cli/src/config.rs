use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "cubedle";

/// User configuration, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where progress is saved. Defaults to the platform data directory.
    pub save_file: Option<PathBuf>,
    /// Paint stickers with ANSI colors.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            save_file: None,
            color: true,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse configuration file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push(APP_DIR);
        path.push("config.toml");
        Some(path)
    }

    /// Load the configuration from `path`, or from the default location when
    /// no path is given. Only an explicitly requested file has to exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_owned(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Config::default()),
            },
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if !required && e.kind() == io::ErrorKind::NotFound => {
                debug!("No configuration at {path:?}, using defaults");
                return Ok(Config::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        Self::parse(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The save file location, if one can be determined.
    pub fn save_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.save_file {
            return Some(path.clone());
        }
        let mut path = dirs::data_dir()?;
        path.push(APP_DIR);
        path.push("save.json");
        Some(path)
    }
}
