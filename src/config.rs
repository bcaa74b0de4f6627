// Config module: locates, loads and persists the small JSON record that
// keeps the GitHub token between runs. The record is an explicit value that
// the caller threads through the command; nothing here is global.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// File name probed in the home directory and then the current directory.
pub const CONFIG_FILE_NAME: &str = ".gist.config.json";

/// Persisted configuration. Only `token` is interpreted; unknown keys are
/// carried along so a rewrite never drops them.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `Config` together with the path it belongs to.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    pub config: Config,
}

/// Candidate locations in probe order: `$HOME` first, then `cwd`.
pub fn candidate_paths(home: Option<&Path>, cwd: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(home) = home {
        paths.push(home.join(CONFIG_FILE_NAME));
    }
    paths.push(cwd.join(CONFIG_FILE_NAME));
    paths
}

/// Candidates for the current user: home directory, then working directory.
pub fn default_candidates() -> Vec<PathBuf> {
    let home = dirs::home_dir();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    candidate_paths(home.as_deref(), &cwd)
}

impl ConfigFile {
    /// Parse the first existing candidate. When none exists, or the one
    /// found cannot be parsed, an empty record is written to the first
    /// candidate and returned instead.
    pub fn load_or_create(candidates: &[PathBuf]) -> Result<Self> {
        let fallback = candidates
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        if let Some(path) = candidates.iter().find(|p| p.is_file()) {
            match read_config(path) {
                Ok(config) => {
                    debug!("loaded config from {}", path.display());
                    return Ok(ConfigFile {
                        path: path.clone(),
                        config,
                    });
                }
                Err(e) => warn!("ignoring unreadable config {}: {:#}", path.display(), e),
            }
        }

        let file = ConfigFile {
            path: fallback,
            config: Config::default(),
        };
        file.save()?;
        debug!("created empty config at {}", file.path.display());
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn token(&self) -> &str {
        &self.config.token
    }

    /// Replace the token and write the whole record back to its path.
    pub fn set_token(&mut self, token: &str) -> Result<()> {
        self.config.token = token.to_string();
        self.save()
    }

    /// Write the full record to disk as pretty JSON.
    pub fn save(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write config file {}", self.path.display()))?;
        Ok(())
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&data).context("Parsing config json")?;
    Ok(config)
}
