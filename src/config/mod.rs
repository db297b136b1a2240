use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_CAPACITY: i64 = 10;

fn default_capacity() -> i64 {
    DEFAULT_CAPACITY
}
fn default_verbose() -> bool {
    false
}
fn default_json() -> bool {
    false
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Number of slots in the lot, 1 to `MAX_CAPACITY`.
    /// Validated when the lot is built, not here.
    #[serde(default = "default_capacity")]
    pub capacity: i64,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    /// Print status snapshots as JSON
    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            verbose: default_verbose(),
            json: default_json(),
        }
    }
}

impl FileConfig {
    /// Load the first config file found on the search path
    pub fn load() -> Option<Self> {
        Self::load_from(&get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly named config file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("parkade.toml"));
    paths.push(PathBuf::from(".parkade.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("parkade").join("config.toml"));
        paths.push(config_dir.join("parkade.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".parkade.toml"));
        paths.push(home.join(".config").join("parkade").join("config.toml"));
    }

    paths
}
