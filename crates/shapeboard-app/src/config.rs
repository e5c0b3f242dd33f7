//! Application configuration.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use shapeboard_core::{BoardConfig, SerializableColor};

/// Application configuration.
///
/// Loaded from JSON; every field is optional and falls back to the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Preferred container size; shrunk to fit the window.
    pub container_width: f32,
    pub container_height: f32,
    pub background_color: SerializableColor,
    pub container_color: SerializableColor,
    /// Suppress the browser's default action for keys the board handles
    /// (Backspace navigating back). Web only.
    pub prevent_default_keys: bool,
    pub board: BoardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "ShapeBoard".to_string(),
            width: 1024,
            height: 720,
            container_width: 800.0,
            container_height: 500.0,
            background_color: SerializableColor::rgb(243, 244, 246),
            container_color: SerializableColor::rgb(255, 255, 255),
            prevent_default_keys: false,
            board: BoardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)?;
        config.board.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path);
        Ok(config)
    }
}
