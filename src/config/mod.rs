// SPDX-License-Identifier: MPL-2.0
//! Viewport preferences persisted to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[carousel]` - Drag resistance and snap duration
//! - `[zoom]` - Maximum scale, snap-back and settle duration
//! - `[gestures]` - Touch double-tap behavior
//!
//! Every field is optional; missing values fall back to the constants in
//! [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `SWIPE_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to the platform config directory (`SwipeLens/settings.toml`)
//!
//! # Examples
//!
//! ```no_run
//! use swipe_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.zoom.enable_snap_back = Some(true);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::domain::{AnimationDuration, MaxScale, ResistanceFactor};
use crate::error::{Error, Result};
use defaults::{
    DEFAULT_MAX_SCALE, DEFAULT_RESISTANCE_FACTOR, DEFAULT_SNAP_DURATION_MS,
    DEFAULT_ZOOM_DURATION_MS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SwipeLens";

/// Environment variable that overrides the config directory.
pub const ENV_CONFIG_DIR: &str = "SWIPE_LENS_CONFIG_DIR";

/// Warning key returned when an existing file cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Fraction of the overshoot kept when dragging past either end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistance: Option<f32>,

    /// Snap transition duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_duration_ms: Option<u32>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            resistance: Some(DEFAULT_RESISTANCE_FACTOR),
            snap_duration_ms: Some(DEFAULT_SNAP_DURATION_MS),
        }
    }
}

/// Zoom and pan settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoomConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_scale: Option<f32>,

    /// Return to identity at the end of every gesture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_snap_back: Option<bool>,

    /// Settle and double-click transition duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_scale: Some(DEFAULT_MAX_SCALE),
            enable_snap_back: Some(false),
            duration_ms: Some(DEFAULT_ZOOM_DURATION_MS),
        }
    }
}

/// Gesture recognition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GesturesConfig {
    /// Whether a touch double-tap toggles zoom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_zoom: Option<bool>,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            double_tap_zoom: Some(true),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub zoom: ZoomConfig,

    #[serde(default)]
    pub gestures: GesturesConfig,
}

impl Config {
    /// Drag resistance, clamped into range.
    #[must_use]
    pub fn resistance(&self) -> ResistanceFactor {
        self.carousel
            .resistance
            .map(ResistanceFactor::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn snap_duration(&self) -> AnimationDuration {
        AnimationDuration::new(
            self.carousel
                .snap_duration_ms
                .unwrap_or(DEFAULT_SNAP_DURATION_MS),
        )
    }

    #[must_use]
    pub fn max_scale(&self) -> MaxScale {
        self.zoom.max_scale.map(MaxScale::new).unwrap_or_default()
    }

    #[must_use]
    pub fn enable_snap_back(&self) -> bool {
        self.zoom.enable_snap_back.unwrap_or(false)
    }

    #[must_use]
    pub fn zoom_duration(&self) -> AnimationDuration {
        AnimationDuration::new(self.zoom.duration_ms.unwrap_or(DEFAULT_ZOOM_DURATION_MS))
    }

    #[must_use]
    pub fn double_tap_zoom(&self) -> bool {
        self.gestures.double_tap_zoom.unwrap_or(true)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Resolves the config directory.
///
/// Priority: explicit override, then `SWIPE_LENS_CONFIG_DIR` (if set and
/// non-empty), then the platform config directory.
fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            carousel: CarouselConfig {
                resistance: Some(0.5),
                snap_duration_ms: Some(250),
            },
            zoom: ZoomConfig {
                max_scale: Some(4.0),
                enable_snap_back: Some(true),
                duration_ms: Some(150),
            },
            gestures: GesturesConfig {
                double_tap_zoom: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[zoom]\nmax_scale = 3.0\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.zoom.max_scale, Some(3.0));
        assert_eq!(loaded.zoom.enable_snap_back, None);
        assert_eq!(loaded.carousel, CarouselConfig::default());
        assert!(!loaded.enable_snap_back());
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = Config {
            carousel: CarouselConfig {
                resistance: Some(4.0),
                snap_duration_ms: Some(60_000),
            },
            zoom: ZoomConfig {
                max_scale: Some(0.5),
                enable_snap_back: None,
                duration_ms: None,
            },
            gestures: GesturesConfig::default(),
        };
        assert_abs_diff_eq!(config.resistance().value(), 1.0);
        assert_eq!(config.snap_duration().millis(), 2000);
        assert_abs_diff_eq!(config.max_scale().value(), 1.0);
        assert_eq!(config.zoom_duration().millis(), DEFAULT_ZOOM_DURATION_MS);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_abs_diff_eq!(config.resistance().value(), DEFAULT_RESISTANCE_FACTOR);
        assert_abs_diff_eq!(config.max_scale().value(), DEFAULT_MAX_SCALE);
        assert_eq!(config.snap_duration().millis(), DEFAULT_SNAP_DURATION_MS);
        assert!(!config.enable_snap_back());
        assert!(config.double_tap_zoom());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.zoom.enable_snap_back = Some(true);
        config.carousel.snap_duration_ms = Some(0);

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert!(loaded.enable_snap_back());
        assert!(loaded.snap_duration().is_instant());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
        assert_eq!(config, Config::default());
    }
}
