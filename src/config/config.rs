use super::FingerprintConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySettings {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_registry_timeout")]
    pub timeout_secs: u64,
}

fn default_registry_timeout() -> u64 {
    30
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_registry_timeout(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fingerprint: FingerprintConfig,
    #[serde(default)]
    pub registry: RegistrySettings,
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "decodingus", "genome-fingerprint")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

impl AppConfig {
    /// Read the per-user config file, falling back to defaults when it is
    /// absent or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = config_path() {
            if config_path.exists() {
                match Self::from_file(&config_path) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("Ignoring {}: {:#}", config_path.display(), e),
                }
            }
        }
        AppConfig::default()
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.fingerprint.validate()?;
        Ok(config)
    }
}
