//! Runtime configuration and persisted preferences.

use serde::{Deserialize, Serialize};

/// Environment-driven settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_url: String,
}

impl AppConfig {
    pub fn from_environment() -> Self {
        let server_url = std::env::var("FLAGDECK_SERVER")
            .unwrap_or_else(|_| "http://localhost:5002".to_string());
        Self { server_url }
    }
}

/// Client-side state that survives restarts: the sidebar notes and the
/// dark-mode flag, round-tripped verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prefs {
    pub dark_mode: bool,
    pub notes: String,
}

impl Default for Prefs {
    fn default() -> Self {
        // Dark is the default when nothing is stored.
        Self {
            dark_mode: true,
            notes: String::new(),
        }
    }
}

impl Prefs {
    pub fn load() -> Self {
        if let Some(config_dir) = dirs::config_dir() {
            let prefs_path = config_dir.join("flagdeck").join("prefs.json");
            if prefs_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&prefs_path) {
                    if let Ok(prefs) = serde_json::from_str(&content) {
                        return prefs;
                    }
                    log::warn!("ignoring unreadable preferences at {}", prefs_path.display());
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("flagdeck");
            std::fs::create_dir_all(&app_dir)?;
            let prefs_path = app_dir.join("prefs.json");
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(prefs_path, content)?;
        }
        Ok(())
    }
}
