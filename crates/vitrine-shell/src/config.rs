// File: src/config.rs
// Purpose: Configuration parsing from vitrine.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vitrine_router::HistoryMode;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShellConfig {
    #[serde(default)]
    pub app: AppConfig,
}

/// Shell behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which route table to mount (default: "storefront")
    #[serde(default)]
    pub table: TableChoice,

    /// How routable paths are carried in URLs (default: "history")
    #[serde(default)]
    pub history_mode: HistoryModeChoice,

    /// Path rendered on startup (default: "/")
    #[serde(default = "default_start_path")]
    pub start_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table: TableChoice::default(),
            history_mode: HistoryModeChoice::default(),
            start_path: default_start_path(),
        }
    }
}

/// Which of the two declared route tables the shell mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableChoice {
    #[default]
    Storefront,
    Workbench,
}

/// Config-file spelling of [`HistoryMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryModeChoice {
    #[default]
    History,
    Hash,
}

impl From<HistoryModeChoice> for HistoryMode {
    fn from(choice: HistoryModeChoice) -> Self {
        match choice {
            HistoryModeChoice::History => HistoryMode::History,
            HistoryModeChoice::Hash => HistoryMode::Hash,
        }
    }
}

fn default_start_path() -> String {
    "/".to_string()
}

impl ShellConfig {
    /// Loads configuration from a specific file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;

        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Loads `vitrine.toml` from the working directory, falling back to
    /// defaults when the file is absent.
    pub fn load_default() -> Result<Self> {
        let path = Path::new("vitrine.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
