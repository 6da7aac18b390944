//! Core data types for tintshell
//!
//! This module defines the shared value types used throughout the application.

use serde::{Deserialize, Serialize};

/// Light/dark display mode of the application.
///
/// Resolved once at startup from the host preference (or an override) and
/// flipped only by the user's toggle. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }
}

/// Palette variant of the shell.
///
/// Each variant fixes the color palette, the tab strip labels, and whether
/// the palette card is shown below the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Classic,
    Harvest,
    Vivid,
}

impl Variant {
    pub fn all() -> &'static [Variant] {
        &[Variant::Classic, Variant::Harvest, Variant::Vivid]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Harvest => "harvest",
            Variant::Vivid => "vivid",
        }
    }

    /// Parse a variant name as given on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "harvest" => Some(Variant::Harvest),
            "vivid" => Some(Variant::Vivid),
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Variant::Classic => Variant::Harvest,
            Variant::Harvest => Variant::Vivid,
            Variant::Vivid => Variant::Classic,
        }
    }

    /// Fixed tab strip labels for this variant.
    pub fn tab_labels(&self) -> &'static [&'static str] {
        match self {
            Variant::Classic => &["Tab 1", "Tab 2", "Tab 3"],
            Variant::Harvest | Variant::Vivid => &["Tab 1", "Tab 2"],
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tab_labels().len()
    }

    /// Only the Vivid variant renders the palette card below the panel.
    pub fn has_palette_card(&self) -> bool {
        matches!(self, Variant::Vivid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle_is_symmetric() {
        assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
        assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
        assert_eq!(DisplayMode::Light.toggled().toggled(), DisplayMode::Light);
    }

    #[test]
    fn test_mode_defaults_to_light() {
        assert_eq!(DisplayMode::default(), DisplayMode::Light);
    }

    #[test]
    fn test_variant_cycle() {
        let variant = Variant::Classic;
        assert_eq!(variant.next(), Variant::Harvest);
        assert_eq!(variant.next().next(), Variant::Vivid);
        assert_eq!(variant.next().next().next(), Variant::Classic);
    }

    #[test]
    fn test_variant_tab_counts() {
        assert_eq!(Variant::Classic.tab_count(), 3);
        assert_eq!(Variant::Harvest.tab_count(), 2);
        assert_eq!(Variant::Vivid.tab_count(), 2);
    }

    #[test]
    fn test_variant_from_name() {
        assert_eq!(Variant::from_name("vivid"), Some(Variant::Vivid));
        assert_eq!(Variant::from_name("Harvest"), Some(Variant::Harvest));
        assert_eq!(Variant::from_name("mui"), None);
    }

    #[test]
    fn test_only_vivid_has_palette_card() {
        assert!(Variant::Vivid.has_palette_card());
        assert!(!Variant::Classic.has_palette_card());
        assert!(!Variant::Harvest.has_palette_card());
    }
}
