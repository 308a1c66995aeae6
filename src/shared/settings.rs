use serde::{Deserialize, Serialize};
use tokio::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use directories::ProjectDirs;

use super::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppSettings {
    pub hotkeys: HotkeySettings,
    pub host: HostSettings,
    pub refresh: RefreshSettings,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeySettings {
    /// Accelerator that toggles the quick access popup
    pub toggle_window: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Endpoint returning the ordered history as JSON
    pub history_url: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshSettings {
    pub interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub label: String,
    pub compact_width: u32,
    pub compact_height: u32,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            toggle_window: "CommandOrControl+Shift+V".to_string(),
        }
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            history_url: "http://127.0.0.1:7878/history".to_string(),
            timeout_ms: 1500,
        }
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self { interval_ms: 2000 }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            label: "main".to_string(),
            compact_width: 1000,
            compact_height: 800,
        }
    }
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl HostSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "clipboard-history", "clipboard-history")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    /// Load from the default location, creating the file on first run
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !fs::try_exists(path).await? {
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await
            .map_err(|e| AppError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::Io(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).await
            .map_err(|e| AppError::Io(format!("Failed to write settings file: {}", e)))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.refresh.interval_ms == 0 {
            return Err(AppError::Config("refresh.interval_ms must be greater than 0".to_string()));
        }
        if self.host.history_url.trim().is_empty() {
            return Err(AppError::Config("host.history_url must not be empty".to_string()));
        }
        if self.hotkeys.toggle_window.trim().is_empty() {
            return Err(AppError::Config("hotkeys.toggle_window must not be empty".to_string()));
        }
        Ok(())
    }
}
