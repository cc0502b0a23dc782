//! Configuration persistence
//!
//! The site has a single configuration file, `landing.toml`, kept in the
//! user's config directory. Loading a file that doesn't exist yet is not an
//! error; the app falls back to defaults.

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

const CONFIG_FILE: &str = "landing.toml";

/// Error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// No config directory on this platform
    NoConfigDir,
    /// IO error while reading/writing the config file
    Io(io::Error),
    /// The config file exists but isn't valid TOML
    Parse(toml::de::Error),
    /// The config values couldn't be serialized
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "no config directory available"),
            ConfigError::Io(e) => write!(f, "config file IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "config file is not valid TOML: {}", e),
            ConfigError::Serialize(e) => write!(f, "config could not be serialized: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

/// Path of the landing page's config file
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "sunfall", "site").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Load the landing page's configuration
///
/// Returns `Ok(None)` when no config has been saved yet; an error means the
/// file exists but couldn't be read or parsed.
pub fn load_config<T: DeserializeOwned>() -> Result<Option<T>, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::Io(e)),
    };
    Ok(Some(toml::from_str(&contents)?))
}

/// Save the landing page's configuration, creating the directory if needed
pub fn save_config<T: Serialize>(config: &T) -> Result<(), ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, toml::to_string_pretty(config)?)?;
    Ok(())
}
