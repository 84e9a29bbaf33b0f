// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[showcase]` - Startup view, counter timing, backdrop animation
//! - `[embed]` - Embedding surface probe behavior
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ANALYTICS_HUB_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use analytics_hub::config::{self, Config};
//!
//! use std::path::PathBuf;
//!
//! let dir = PathBuf::from("/tmp/analytics-hub");
//! let (mut config, _warning) = config::load_with_override(Some(dir.clone()));
//! config.general.language = Some("fr".to_string());
//! config::save_with_override(&config, Some(dir)).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::showcase::ViewId;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Newtypes
// =============================================================================

/// Counter animation length, always within
/// `MIN_COUNTER_DURATION_MS..=MAX_COUNTER_DURATION_MS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterDuration(u64);

impl CounterDuration {
    /// Creates a duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_COUNTER_DURATION_MS, MAX_COUNTER_DURATION_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for CounterDuration {
    fn default() -> Self {
        Self(DEFAULT_COUNTER_DURATION_MS)
    }
}

/// Embed probe timeout, always within
/// `MIN_EMBED_TIMEOUT_SECS..=MAX_EMBED_TIMEOUT_SECS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedTimeout(u32);

impl EmbedTimeout {
    /// Creates a timeout, clamping to the valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_EMBED_TIMEOUT_SECS, MAX_EMBED_TIMEOUT_SECS))
    }

    #[must_use]
    pub fn secs(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for EmbedTimeout {
    fn default() -> Self {
        Self(DEFAULT_EMBED_TIMEOUT_SECS)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Showcase presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowcaseConfig {
    /// View shown at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view: Option<ViewId>,

    /// Counter animation length in milliseconds.
    #[serde(
        default = "default_counter_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub counter_duration_ms: Option<u64>,

    /// Whether the decorative backdrop starts animated.
    #[serde(
        default = "default_animate_backdrop",
        skip_serializing_if = "Option::is_none"
    )]
    pub animate_backdrop: Option<bool>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            default_view: None,
            counter_duration_ms: default_counter_duration_ms(),
            animate_backdrop: default_animate_backdrop(),
        }
    }
}

impl ShowcaseConfig {
    /// Startup view, falling back to the first registry entry.
    #[must_use]
    pub fn start_view(&self) -> ViewId {
        self.default_view.unwrap_or_default()
    }

    #[must_use]
    pub fn counter_duration(&self) -> CounterDuration {
        self.counter_duration_ms
            .map_or_else(CounterDuration::default, CounterDuration::new)
    }

    #[must_use]
    pub fn backdrop_animated(&self) -> bool {
        self.animate_backdrop.unwrap_or(true)
    }
}

/// Embedding surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedConfig {
    /// Probe embed URLs over the network. When off, content counts as
    /// loaded immediately.
    #[serde(default = "default_probe", skip_serializing_if = "Option::is_none")]
    pub probe: Option<bool>,

    /// Probe timeout in seconds.
    #[serde(
        default = "default_embed_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u32>,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            probe: default_probe(),
            timeout_secs: default_embed_timeout_secs(),
        }
    }
}

impl EmbedConfig {
    #[must_use]
    pub fn probe_enabled(&self) -> bool {
        self.probe.unwrap_or(true)
    }

    #[must_use]
    pub fn timeout(&self) -> EmbedTimeout {
        self.timeout_secs
            .map_or_else(EmbedTimeout::default, EmbedTimeout::new)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Showcase presentation settings.
    #[serde(default)]
    pub showcase: ShowcaseConfig,

    /// Embedding surface settings.
    #[serde(default)]
    pub embed: EmbedConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_counter_duration_ms() -> Option<u64> {
    Some(DEFAULT_COUNTER_DURATION_MS)
}

fn default_animate_backdrop() -> Option<bool> {
    Some(true)
}

fn default_probe() -> Option<bool> {
    Some(true)
}

fn default_embed_timeout_secs() -> Option<u32> {
    Some(DEFAULT_EMBED_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from `base_dir`, or from the resolved settings
/// directory when `None`.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                ),
            };
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

/// Saves the configuration to `base_dir`, or to the resolved settings
/// directory when `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
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
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            showcase: ShowcaseConfig {
                default_view: Some(ViewId::Dashboard),
                counter_duration_ms: Some(1500),
                animate_backdrop: Some(false),
            },
            embed: EmbedConfig {
                probe: Some(false),
                timeout_secs: Some(30),
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

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_view_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[showcase]\ndefault_view = \"gallery\"\n")
            .expect("failed to write config");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[embed]\nprobe = false\n").expect("valid config");
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.showcase, ShowcaseConfig::default());
        assert!(!config.embed.probe_enabled());
        assert_eq!(config.embed.timeout().secs(), DEFAULT_EMBED_TIMEOUT_SECS);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.showcase.start_view(), ViewId::Story);
        assert_eq!(config.showcase.counter_duration().millis(), 2000);
        assert!(config.showcase.backdrop_animated());
        assert!(config.embed.probe_enabled());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let showcase = ShowcaseConfig {
            counter_duration_ms: Some(60_000),
            ..ShowcaseConfig::default()
        };
        assert_eq!(
            showcase.counter_duration().millis(),
            MAX_COUNTER_DURATION_MS
        );

        let embed = EmbedConfig {
            timeout_secs: Some(0),
            ..EmbedConfig::default()
        };
        assert_eq!(embed.timeout().secs(), MIN_EMBED_TIMEOUT_SECS);
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }
}
