//! Configuration load/save and built-in defaults.
//!
//! One JSON file holds every profile plus the global behavior flags. The
//! file is read fully at process start and rewritten fully after each
//! mutation. Field names are camelCase on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 60_000;
/// Default completion token limit.
const DEFAULT_MAX_TOKENS: u32 = 150;
/// Default sampling temperature.
const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Model assigned to freshly added profiles.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// A named bundle of completion-API credentials and model selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub api_key: String,
    pub model: String,
    pub system_message: String,
}

/// Persisted configuration: profiles plus global behavior flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub profiles: Vec<Profile>,
    pub active_profile: Option<String>,
    pub review_enabled: bool,
    pub verbose: bool,
    /// API request timeout in milliseconds.
    pub timeout: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    pub auto_push: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profiles: Vec::new(),
            active_profile: None,
            review_enabled: true,
            verbose: false,
            timeout: DEFAULT_TIMEOUT_MS,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            auto_push: true,
        }
    }
}

impl Config {
    /// Load the configuration from `path`, or return defaults if the file
    /// does not exist. A file that exists but fails to parse is fatal.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::ParseFailed {
                path: path.to_path_buf(),
                source,
            })?;

        // A hand-edited file can leave activeProfile naming no profile.
        if let Some(name) = config.active_profile.clone()
            && !config.profiles.iter().any(|p| p.name == name)
        {
            warn!("activeProfile '{name}' names no existing profile, clearing");
            config.active_profile = None;
        }

        Ok(config)
    }

    /// Write the configuration to `path` as pretty-printed JSON, creating
    /// the containing directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDirFailed {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(ConfigError::SerializeFailed)?;

        std::fs::write(path, json).map_err(|source| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The profile named by `activeProfile`, if any.
    pub fn active_profile(&self) -> Option<&Profile> {
        let name = self.active_profile.as_ref()?;
        self.profiles.iter().find(|p| &p.name == name)
    }

    /// Mutable variant of [`Config::active_profile`].
    pub fn active_profile_mut(&mut self) -> Option<&mut Profile> {
        let name = self.active_profile.clone()?;
        self.profiles.iter_mut().find(|p| p.name == name)
    }
}

/// Path to the config file: `~/.scriptor/config.json`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home.join(".scriptor").join("config.json"))
}

/// Validate a `--set-timeout` flag value: a strictly positive integer.
pub fn parse_timeout_ms(value: &str) -> Option<u64> {
    value.parse::<u64>().ok().filter(|&v| v > 0)
}

/// Validate a `--set-max-tokens` flag value: a strictly positive integer.
pub fn parse_max_tokens(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|&v| v > 0)
}

/// Validate a `--set-temperature` flag value: a float in `[0, 1]`.
pub fn parse_temperature(value: &str) -> Option<f32> {
    value
        .parse::<f32>()
        .ok()
        .filter(|v| (0.0..=1.0).contains(v))
}
