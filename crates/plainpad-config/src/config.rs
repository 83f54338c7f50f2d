//! Application configuration: load and sanitize.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::print::PrintConfig;

/// Config file name, looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "plainpad.json";

/// How the UI picks between dark and light visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Follow the operating system preference.
    System,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "System" => Some(Self::System),
            "Dark" => Some(Self::Dark),
            "Light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `System`, `Dark` or `Light`.
    pub theme: String,
    pub font_size: f32,
    pub window_width: f32,
    pub window_height: f32,
    /// strftime-style format of the time part of Edit > Time/Date.
    pub time_format: String,
    /// strftime-style format of the date part of Edit > Time/Date.
    pub date_format: String,
    pub print: PrintConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "System".to_string(),
            font_size: 14.0,
            window_width: 800.0,
            window_height: 600.0,
            time_format: "%H:%M".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            print: PrintConfig::default(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path: exe directory + `plainpad.json`.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`.
    /// Returns defaults on any error (missing file, parse error, etc.).
    /// The file is never written.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::warn!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                Ok(mut config) => {
                    config.sanitize();
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {e}", path.display());
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {e}", path.display());
            }
        }
        Self::default()
    }

    /// The parsed theme; `sanitize` guarantees this never falls back for loaded configs.
    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_name(&self.theme).unwrap_or(ThemeMode::System)
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.font_size = self.font_size.clamp(6.0, 72.0);
        self.window_width = self.window_width.clamp(320.0, 7680.0);
        self.window_height = self.window_height.clamp(240.0, 4320.0);

        if ThemeMode::from_name(&self.theme).is_none() {
            self.theme = "System".to_string();
        }
        if self.time_format.trim().is_empty() {
            self.time_format = Self::default().time_format;
        }
        if self.date_format.trim().is_empty() {
            self.date_format = Self::default().date_format;
        }
        self.print.sanitize();
    }
}
