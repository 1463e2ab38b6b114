pub mod general;
pub mod keybindings;
pub mod theme;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub use general::{DockerConfig, GeneralConfig};
pub use keybindings::{check_collisions, validate_keybindings, KeybindingsConfig};
pub use theme::{ColorPair, StatusColors, ThemeConfig};

const APP_DIR: &str = "docktile";
const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_CONFIG: &str = include_str!("defaults.toml");

/// Everything read from `config.toml`. Missing tables fall back to the embedded defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub docker: DockerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded defaults must parse")
    }
}

impl AppConfig {
    /// Defaults overlaid with the user file when there is one. An unreadable or invalid user file is
    /// reported on stderr and the defaults are used as is.
    pub fn load() -> Self {
        let Some(path) = config_root().map(|root| root.join(APP_DIR).join(CONFIG_FILE)) else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            eprintln!("Warning: ignoring {}: {e:#}", path.display());
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;
        let overrides: AppConfig =
            toml::from_str(&contents).with_context(|| format!("invalid config at {}", path.display()))?;
        let mut config = Self::default();
        config.merge(overrides);
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        config_root().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR).join(CONFIG_FILE)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        write_creating_parent(path, &toml::to_string_pretty(self)?)
    }

    /// Writes the commented defaults to [`AppConfig::default_path`]. Never overwrites.
    pub fn init_default() -> anyhow::Result<PathBuf> {
        let path = Self::default_path();
        anyhow::ensure!(!path.exists(), "Config already exists at {}", path.display());
        write_creating_parent(&path, DEFAULT_CONFIG)?;
        Ok(path)
    }

    /// Whole sections replace ours; key bindings overlay one action at a time.
    fn merge(&mut self, user: AppConfig) {
        let AppConfig { general, docker, theme, keybindings } = user;
        self.general = general;
        self.docker = docker;
        self.theme = theme;
        self.keybindings.overlay(keybindings);
    }

    pub fn tick_rate_ms(&self) -> u64 {
        self.general.tick_rate_ms
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.general.refresh_interval_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.general.fetch_timeout_ms)
    }
}

pub type Config = AppConfig;

fn config_root() -> Option<PathBuf> {
    dirs::config_dir()
}

fn write_creating_parent(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("could not create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("could not write {}", path.display()))
}

#[cfg(test)]
mod tests;
