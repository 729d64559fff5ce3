//! Configuration persistence for polysnip settings
//!
//! Stored as JSON under the platform config directory. Loading is
//! forgiving: any missing or malformed file falls back to defaults.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Serializable color for the polygon overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for OverlayColor {
    fn default() -> Self {
        // Red, matching the default outline and handle ring color
        Self {
            r: 1.0,
            g: 0.0,
            b: 0.0,
        }
    }
}

impl OverlayColor {
    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

/// Save location for exported clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaveLocation {
    #[default]
    Pictures,
    Documents,
}

/// Persisted user settings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolysnipConfig {
    pub save_location: SaveLocation,
    pub overlay_color: OverlayColor,
}

impl PolysnipConfig {
    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("polysnip").join("config.json"))
    }

    /// Load the stored config, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!("ignoring malformed config {}: {err}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write the config to disk, logging failures instead of propagating
    pub fn save(&self) {
        let Some(path) = Self::path() else {
            return;
        };
        let write = || -> anyhow::Result<()> {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&path, serde_json::to_string_pretty(self)?)?;
            Ok(())
        };
        if let Err(err) = write() {
            log::warn!("failed to save config to {}: {err}", path.display());
        }
    }
}
