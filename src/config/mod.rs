//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! The Unsplash access key is deliberately optional here: the CLI flag and the
//! `UNSPLASH_ACCESS_KEY` environment variable take precedence over the file
//! (see `main.rs`), so a key stored in plain text on disk is a convenience,
//! not a requirement.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

pub const DEFAULT_API_BASE_URL: &str = "https://api.unsplash.com";
pub const DEFAULT_PAGE_SIZE: u32 = 12;
/// The upstream API rejects per_page values above 30.
pub const MAX_PAGE_SIZE: u32 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub access_key: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub theme: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            access_key: None,
            api_base_url: Some(DEFAULT_API_BASE_URL.to_string()),
            page_size: Some(DEFAULT_PAGE_SIZE),
            theme: None,
        }
    }
}

impl Config {
    /// The API base URL, falling back to the public Unsplash endpoint.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// The page size clamped into the range the upstream API accepts.
    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    load_with_dir(None)
}

/// Loads the configuration, honoring an optional directory override from the CLI.
pub fn load_with_dir(config_dir: Option<&Path>) -> Result<Config> {
    let path = match config_dir {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => get_default_config_path(),
    };
    if let Some(path) = path {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
