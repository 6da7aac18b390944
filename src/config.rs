//! Configuration for tintshell
//!
//! Config file location: ~/.config/tintshell/config.toml
//!
//! The file is an input only. A missing file means defaults, and the
//! application never writes it back; nothing survives a session.

use crate::types::{DisplayMode, Variant};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Default panel height in terminal rows.
pub const DEFAULT_PANEL_HEIGHT: u16 = 12;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: Variant,
    pub mode: ModePreference,
    pub panel: PanelOptions,
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("tintshell");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }
}

/// How the initial display mode is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModePreference {
    /// Follow the host color-scheme preference.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ModePreference {
    /// Resolve against the host preference signal.
    pub fn resolve(self, prefers_dark: bool) -> DisplayMode {
        match self {
            ModePreference::Auto => {
                if prefers_dark {
                    DisplayMode::Dark
                } else {
                    DisplayMode::Light
                }
            }
            ModePreference::Light => DisplayMode::Light,
            ModePreference::Dark => DisplayMode::Dark,
        }
    }
}

/// Options for the resizable panel.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    pub height: u16,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            height: DEFAULT_PANEL_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.mode, ModePreference::Auto);
        assert_eq!(config.panel.height, DEFAULT_PANEL_HEIGHT);
    }

    #[test]
    fn test_mode_preference_resolution() {
        assert_eq!(ModePreference::Auto.resolve(true), DisplayMode::Dark);
        assert_eq!(ModePreference::Auto.resolve(false), DisplayMode::Light);
        assert_eq!(ModePreference::Light.resolve(true), DisplayMode::Light);
        assert_eq!(ModePreference::Dark.resolve(false), DisplayMode::Dark);
    }

    #[test]
    fn test_partial_config_parses_with_defaults() {
        let config: Config = toml::from_str("variant = \"vivid\"").unwrap();
        assert_eq!(config.variant, Variant::Vivid);
        assert_eq!(config.mode, ModePreference::Auto);
        assert_eq!(config.panel.height, DEFAULT_PANEL_HEIGHT);
    }

    #[test]
    fn test_full_config_parses() {
        let content = r#"
            variant = "harvest"
            mode = "dark"

            [panel]
            height = 20
        "#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.variant, Variant::Harvest);
        assert_eq!(config.mode, ModePreference::Dark);
        assert_eq!(config.panel.height, 20);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!(toml::from_str::<Config>("variant = \"solarized\"").is_err());
    }
}
