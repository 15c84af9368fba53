//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::i18n::Language;

const APP_DIR_ENV: &str = "TODO_TRACKER_DIR";
const TASKS_FILE_NAME: &str = "tasks.txt";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Language,

    /// Overrides the default `<app dir>/tasks.txt`. A leading `~/` expands
    /// to the home directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }

    /// Where tasks are read from and written to
    pub fn tasks_path(&self) -> Result<PathBuf> {
        match &self.tasks_file {
            Some(file) => Ok(expand_home(file)),
            None => Ok(get_app_dir()?.join(TASKS_FILE_NAME)),
        }
    }
}

/// `$TODO_TRACKER_DIR`, else the platform config directory on Linux,
/// else `~/.todo-tracker`. Created if missing.
pub fn get_app_dir() -> Result<PathBuf> {
    let dir = if let Some(dir) = std::env::var_os(APP_DIR_ENV).filter(|v| !v.is_empty()) {
        PathBuf::from(dir)
    } else {
        default_app_dir()?
    };

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create app directory {}", dir.display()))?;
    Ok(dir)
}

#[cfg(target_os = "linux")]
fn default_app_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("todo-tracker"))
        .context("Could not determine config directory")
}

#[cfg(not(target_os = "linux"))]
fn default_app_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".todo-tracker"))
        .context("Could not determine home directory")
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
