/// Viewer configuration
///
/// Everything tunable about the viewer lives here. It is read as JSON from
/// the user's config directory; a missing or broken file means defaults.
///
/// - Linux: ~/.config/spin-viewer/config.json
/// - macOS: ~/Library/Application Support/spin-viewer/config.json
/// - Windows: %APPDATA%\spin-viewer\config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::fetch::frame::DEFAULT_MAX_EDGE;
use crate::state::catalog::{
    default_variants, FrameSource, Variant, DEFAULT_BASE_URL, DEFAULT_PRODUCT_ID, NUM_FRAMES,
};
use crate::state::preload::DEFAULT_PRELOAD_DELAY;
use crate::state::rotation::DEFAULT_SENSITIVITY;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Image endpoint, without the product segment
    pub base_url: String,
    /// Product identifier on the image endpoint
    pub product_id: String,
    /// Heading shown next to the spinner
    pub title: String,
    /// Frames in one full rotation
    pub frame_count: usize,
    /// Pixels of drag per frame step (higher = slower spin)
    pub sensitivity: f32,
    /// Wait before preloading the other variants, in milliseconds
    pub preload_delay_ms: u64,
    /// Decoded frames are scaled down to fit this edge length
    pub max_frame_edge: u32,
    /// Selectable fabrics
    pub variants: Vec<Variant>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            title: "Archibald chair".to_string(),
            frame_count: NUM_FRAMES,
            sensitivity: DEFAULT_SENSITIVITY,
            preload_delay_ms: DEFAULT_PRELOAD_DELAY.as_millis() as u64,
            max_frame_edge: DEFAULT_MAX_EDGE,
            variants: default_variants(),
        }
    }
}

impl ViewerConfig {
    /// Convert to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Replace values the viewer cannot work with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.frame_count == 0 {
            log::warn!("⚠️  frame_count must be at least 1, using {}", defaults.frame_count);
            self.frame_count = defaults.frame_count;
        }
        if !(self.sensitivity.is_finite() && self.sensitivity > 0.0) {
            log::warn!("⚠️  sensitivity must be positive, using {}", defaults.sensitivity);
            self.sensitivity = defaults.sensitivity;
        }
        if self.variants.is_empty() {
            log::warn!("⚠️  No variants configured, using the built-in catalog");
            self.variants = defaults.variants;
        }

        self
    }

    pub fn preload_delay(&self) -> Duration {
        Duration::from_millis(self.preload_delay_ms)
    }

    pub fn frame_source(&self) -> FrameSource {
        FrameSource {
            base_url: self.base_url.clone(),
            product_id: self.product_id.clone(),
            frame_count: self.frame_count,
        }
    }

    /// Path of the config file
    pub fn path() -> Result<PathBuf, ConfigError> {
        let mut path = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
        path.push("spin-viewer");
        path.push("config.json");
        Ok(path)
    }

    /// Read the config file
    ///
    /// A missing file is not an error: the defaults are written out so they
    /// can be edited, and returned.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        if !path.exists() {
            let config = Self::default();
            match config.save_to(&path) {
                Ok(()) => log::info!("📝 Wrote default config to {}", path.display()),
                Err(e) => log::warn!("⚠️  Could not write default config: {}", e),
            }
            return Ok(config);
        }

        let json = std::fs::read_to_string(&path)?;
        let config = Self::from_json(&json)?;
        log::info!("📁 Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write the config as JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read the config file, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("⚠️  {}, using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_catalog() {
        let config = ViewerConfig::default();
        assert_eq!(config.frame_count, 32);
        assert_eq!(config.sensitivity, 20.0);
        assert_eq!(config.preload_delay(), Duration::from_millis(1000));
        assert_eq!(config.variants.len(), 4);
    }

    #[test]
    fn test_serialization() {
        let mut config = ViewerConfig::default();
        config.sensitivity = 12.5;
        config.title = "Stool".to_string();

        let json = config.to_json().unwrap();
        let restored = ViewerConfig::from_json(&json).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ViewerConfig::from_json(r#"{ "frame_count": 24 }"#).unwrap();
        assert_eq!(config.frame_count, 24);
        assert_eq!(config.product_id, DEFAULT_PRODUCT_ID);
        assert_eq!(config.variants, default_variants());
    }

    #[test]
    fn test_unusable_values_are_replaced() {
        let config =
            ViewerConfig::from_json(r#"{ "frame_count": 0, "sensitivity": -3.0, "variants": [] }"#)
                .unwrap();
        assert_eq!(config.frame_count, NUM_FRAMES);
        assert_eq!(config.sensitivity, DEFAULT_SENSITIVITY);
        assert_eq!(config.variants.len(), 4);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ViewerConfig::from_json("{ nope").is_err());
    }

    #[test]
    fn test_save_and_reload_from_disk() {
        let dir = std::env::temp_dir().join(format!("spin-viewer-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");

        let mut config = ViewerConfig::default();
        config.preload_delay_ms = 250;
        config.save_to(&path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        assert_eq!(ViewerConfig::from_json(&json).unwrap(), config);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_frame_source_uses_config() {
        let config =
            ViewerConfig::from_json(r#"{ "product_id": "STOOL", "frame_count": 3 }"#).unwrap();
        let source = config.frame_source();
        let set = source.frame_set(&config.variants[0]);
        assert_eq!(set.len(), 3);
        assert!(set.url(0).unwrap().contains("/STOOL/frames/1?"));
    }
}
