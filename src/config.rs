use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub run: RunConfig,
}

/// The benchmark's run parameters
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// Number of outer loops; one energy is emitted per loop
    pub loops: usize,
    /// Time steps per outer loop
    pub iterations: usize,
    /// Body whose velocity cancels the system's momentum
    pub reference_body: String,
    /// Registered advancer name or alias
    pub advancer: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            loops: 100,
            iterations: 20_000,
            reference_body: "sun".to_string(),
            advancer: "sequential".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Strict variant of [`Self::load_or_default`] for explicitly named files
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Platform config path, e.g. `~/.config/solarbench/config.toml` on Linux
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "solarbench").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the user's configuration file, or defaults if there is none
    pub fn load_from_user_config() -> Self {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(path),
            None => {
                info!("No user configuration directory available. Using defaults.");
                Self::default()
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
