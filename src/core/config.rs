use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Presentation preferences the host's alert handler consults when deciding
/// dismissal timing and sound. The dispatch mechanism itself never reads
/// these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertPreferences {
    /// Seconds before a non-persistent alert is auto-dismissed.
    #[serde(default = "default_auto_dismiss_secs")]
    pub auto_dismiss_secs: u64,
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
}

fn default_auto_dismiss_secs() -> u64 {
    4
}

fn default_sound_enabled() -> bool {
    true
}

impl Default for AlertPreferences {
    fn default() -> Self {
        Self {
            auto_dismiss_secs: 4,
            sound_enabled: true,
        }
    }
}

/// Settings persisted as settings.json in the app config directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub alert_preferences: AlertPreferences,
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    /// Load settings, falling back to defaults when the file is missing,
    /// unreadable, or not valid JSON.
    pub fn load(&self) -> Settings {
        match fs::read_to_string(&self.config_path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("settings.json did not parse ({}); using defaults", e);
                Settings::default()
            }),
            Err(_) => Settings::default(),
        }
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}
