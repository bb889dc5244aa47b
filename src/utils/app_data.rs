use crate::output::Background;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "kotoba";
const CONFIG_FILE: &str = "config.json";
const DICTIONARY_FILE: &str = "dictionary.json";

/// A setting that can be forced on, off, or guessed from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Yes,
    No,
    #[default]
    Auto,
}

/// Output mode as configured; `Auto` picks by terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputModeSetting {
    Human,
    Tab,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundSetting {
    Dark,
    Light,
    #[default]
    Auto,
}

impl BackgroundSetting {
    /// Resolve `Auto` from the BACKGROUND environment variable, then dark
    pub fn resolve(&self) -> Background {
        match self {
            BackgroundSetting::Dark => Background::Dark,
            BackgroundSetting::Light => Background::Light,
            BackgroundSetting::Auto => match std::env::var("BACKGROUND") {
                Ok(value) if value.eq_ignore_ascii_case("light") => Background::Light,
                _ => Background::Dark,
            },
        }
    }
}

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dictionary file; defaults to dictionary.json in the app data directory
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    #[serde(default)]
    pub output_mode: OutputModeSetting,

    #[serde(default)]
    pub color: Toggle,

    #[serde(default)]
    pub background: BackgroundSetting,
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, or return default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Dictionary to open: configured path, else the default location
    pub fn dictionary_path(&self) -> Result<PathBuf> {
        match &self.dictionary {
            Some(path) => Ok(path.clone()),
            None => Ok(get_app_data_dir()?.join(DICTIONARY_FILE)),
        }
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_app_data_dir()?.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME))
}
