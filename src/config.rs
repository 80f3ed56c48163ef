use crate::error::{C9aiError, Result};
use crate::model::Model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-user directory under the home directory.
const CONFIG_DIR_NAME: &str = ".c9ai";

/// Persisted user configuration (`~/.c9ai/config.json`).
///
/// The file is a last-write-wins singleton: every save overwrites it whole.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub default_model: Model,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// Never fails: a missing or malformed file yields the defaults
    /// (`claude` as the default model).
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Overwrite `path` with the current state and a fresh timestamp.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.last_updated = Some(Utc::now());
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Directory layout rooted at `~/.c9ai`.
#[derive(Debug, Clone)]
pub struct Paths {
    root: PathBuf,
}

impl Paths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout under the current user's home directory.
    pub fn from_home() -> Result<Self> {
        let home = home_dir().ok_or(C9aiError::NoHomeDir)?;
        Ok(Self::new(home.join(CONFIG_DIR_NAME)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Scripts the `run` intent verb may execute.
    pub fn tools_dir(&self) -> PathBuf {
        self.root.join("tools")
    }

    pub fn models_dir(&self) -> PathBuf {
        self.root.join("models")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }

    pub fn history_file(&self) -> PathBuf {
        self.root.join("history.txt")
    }

    /// Create the directory tree. Failure here is fatal at startup.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [
            self.root.clone(),
            self.tools_dir(),
            self.models_dir(),
            self.logs_dir(),
        ] {
            std::fs::create_dir_all(&dir).map_err(|source| C9aiError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

/// Get the home directory
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
