//! Configuration for the `ftpat` CLI, loaded from a TOML file.
//!
//! Search order mirrors the teacher CLI's: current directory, then the
//! user's `~/.config/ftpat/`, then the platform config directory.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

pub const CONFIG_FILE_NAME: &str = "ftpat.toml";

/// CLI-wide defaults that flags can still override.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default verbosity when `--verbose` is not passed.
    #[serde(default)]
    pub verbose: bool,

    /// Disable ANSI color in log output.
    #[serde(default)]
    pub no_color: bool,

    /// Default rendering mode when neither `-t` nor `-d` is passed.
    #[serde(default = "default_true")]
    pub tree: bool,

    #[serde(default = "default_true")]
    pub json: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self { verbose: false, no_color: false, tree: default_true(), json: default_true() }
    }
}

impl Config {
    /// Load configuration from the default search locations, falling back to
    /// built-in defaults if nothing is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file()? {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse configuration: {e}")))?;
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("ftpat").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("ftpat").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Result<Option<PathBuf>> {
        Ok(Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config))
    }
}
