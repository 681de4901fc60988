// ABOUTME: Configuration management for genie-onboard
// Loads optional TOML settings for simulated backend delays and UI behaviour

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::components::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Simulated backend behaviour
    #[serde(default)]
    pub backend: BackendConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Delay before a simulated login succeeds (default: 1500ms)
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,

    /// Delay before a simulated signup succeeds (default: 2000ms)
    #[serde(default = "default_signup_delay")]
    pub signup_delay_ms: u64,

    /// Delay before a simulated application submission succeeds (default: 3000ms)
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
}

impl BackendConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn signup_delay(&self) -> Duration {
        Duration::from_millis(self.signup_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay(),
            signup_delay_ms: default_signup_delay(),
            submit_delay_ms: default_submit_delay(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme
    #[serde(default)]
    pub theme: Theme,

    /// How long a rejected auth form shakes (default: 500ms)
    #[serde(default = "default_shake_duration")]
    pub shake_duration_ms: u64,

    /// Event loop tick rate (default: 250ms)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl UiConfig {
    pub fn shake_duration(&self) -> Duration {
        Duration::from_millis(self.shake_duration_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            shake_duration_ms: default_shake_duration(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_login_delay() -> u64 {
    1500
}

fn default_signup_delay() -> u64 {
    2000
}

fn default_submit_delay() -> u64 {
    3000
}

fn default_shake_duration() -> u64 {
    500
}

fn default_tick_rate() -> u64 {
    250
}

impl AppConfig {
    /// Load from ~/.genie-onboard/config.toml, or defaults if the file is absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Get the user's application directory
    pub fn app_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".genie-onboard"))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            backend: BackendConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
