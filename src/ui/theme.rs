//! Theme derivation for tintshell
//!
//! A theme is a pure function of the palette variant and the display mode.
//! The palette tables below are literal per variant; nothing else feeds the
//! derivation, so re-deriving after a toggle always yields the same values.

use crate::types::{DisplayMode, Variant};
use ratatui::style::{Color, Modifier, Style};
use serde::{Serialize, Serializer};

/// 24-bit palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Lowercase CSS-style hex form, e.g. `#1976d2`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn color(&self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb.color()
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Complete derived theme for one (variant, mode) pair.
///
/// `secondary`, `text_dim`, and `font_family` exist only in the variants
/// that define them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub mode: DisplayMode,
    pub primary: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Rgb>,
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dim: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<&'static str>,
}

impl Theme {
    /// Derive the theme for a variant and display mode.
    pub fn derive(variant: Variant, mode: DisplayMode) -> Self {
        match variant {
            Variant::Classic => Self::classic(mode),
            Variant::Harvest => Self::harvest(mode),
            Variant::Vivid => Self::vivid(mode),
        }
    }

    /// Classic palette: the plain blue shell. No secondary color, no font.
    fn classic(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self {
                mode,
                primary: Rgb(25, 118, 210),     // #1976d2
                secondary: None,
                background: Rgb(255, 255, 255), // #ffffff
                surface: Rgb(245, 245, 245),    // #f5f5f5
                text: Rgb(0, 0, 0),             // #000000
                text_dim: None,
                font_family: None,
            },
            DisplayMode::Dark => Self {
                mode,
                primary: Rgb(144, 202, 249),    // #90caf9
                secondary: None,
                background: Rgb(18, 18, 18),    // #121212
                surface: Rgb(30, 30, 30),       // #1e1e1e
                text: Rgb(255, 255, 255),       // #ffffff
                text_dim: None,
                font_family: None,
            },
        }
    }

    /// Harvest palette: green/orange on a cream background.
    fn harvest(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self {
                mode,
                primary: Rgb(76, 175, 80),      // #4caf50
                secondary: Some(Rgb(255, 167, 38)), // #ffa726
                background: Rgb(243, 229, 171), // #f3e5ab
                surface: Rgb(255, 243, 224),    // #fff3e0
                text: Rgb(55, 71, 79),          // #37474f
                text_dim: Some(Rgb(255, 112, 67)), // #ff7043
                font_family: Some("Arial, sans-serif"),
            },
            DisplayMode::Dark => Self {
                mode,
                primary: Rgb(255, 152, 0),      // #ff9800
                secondary: Some(Rgb(3, 169, 244)), // #03a9f4
                background: Rgb(18, 18, 18),    // #121212
                surface: Rgb(30, 30, 30),       // #1e1e1e
                text: Rgb(255, 255, 255),       // #ffffff
                text_dim: Some(Rgb(129, 212, 250)), // #81d4fa
                font_family: Some("Arial, sans-serif"),
            },
        }
    }

    /// Vivid palette: saturated accents, the only variant with the card.
    fn vivid(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self {
                mode,
                primary: Rgb(60, 145, 230),     // #3c91e6
                secondary: Some(Rgb(255, 127, 17)), // #ff7f11
                background: Rgb(245, 241, 237), // #f5f1ed
                surface: Rgb(250, 227, 217),    // #fae3d9
                text: Rgb(35, 35, 35),          // #232323
                text_dim: None,
                font_family: Some("Arial, sans-serif"),
            },
            DisplayMode::Dark => Self {
                mode,
                primary: Rgb(155, 93, 229),     // #9b5de5
                secondary: Some(Rgb(241, 91, 181)), // #f15bb5
                background: Rgb(0, 0, 0),       // #000000
                surface: Rgb(26, 26, 26),       // #1a1a1a
                text: Rgb(255, 255, 255),       // #ffffff
                text_dim: None,
                font_family: Some("Arial, sans-serif"),
            },
        }
    }

    /// Contrast foreground for primary-filled regions.
    ///
    /// Light-mode primaries are saturated (white text), dark-mode primaries
    /// are pastel (black text).
    fn on_primary(&self) -> Color {
        match self.mode {
            DisplayMode::Light => Color::Rgb(255, 255, 255),
            DisplayMode::Dark => Color::Rgb(0, 0, 0),
        }
    }

    /// Dimmed foreground; falls back to the regular text color for variants
    /// without a secondary text color.
    fn dim_color(&self) -> Color {
        self.text_dim.unwrap_or(self.text).color()
    }

    // Style helpers for the rendered regions

    /// Default background fill.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text.color()).bg(self.background.color())
    }

    /// Header bar fill (primary-colored, like the original app bar).
    pub fn header(&self) -> Style {
        Style::default().fg(self.on_primary()).bg(self.primary.color())
    }

    /// Header title style.
    pub fn header_title(&self) -> Style {
        self.header().add_modifier(Modifier::BOLD)
    }

    /// Mode toggle glyph in the header.
    pub fn toggle_button(&self) -> Style {
        self.header().add_modifier(Modifier::BOLD)
    }

    /// Panel fill (surface-colored).
    pub fn panel(&self) -> Style {
        Style::default().fg(self.text.color()).bg(self.surface.color())
    }

    /// Panel bottom border, doubling as the drag handle.
    pub fn divider(&self) -> Style {
        Style::default().fg(self.dim_color()).bg(self.surface.color())
    }

    /// Tab style (active).
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.primary.color())
            .bg(self.surface.color())
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Tab style (inactive).
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.dim_color()).bg(self.surface.color())
    }

    /// Card body on the surface background.
    pub fn card(&self) -> Style {
        Style::default().fg(self.text.color()).bg(self.surface.color())
    }

    /// Card title style.
    pub fn card_title(&self) -> Style {
        Style::default()
            .fg(self.primary.color())
            .bg(self.surface.color())
            .add_modifier(Modifier::BOLD)
    }

    /// Primary color sample text.
    pub fn swatch_primary(&self) -> Style {
        Style::default().fg(self.primary.color()).bg(self.surface.color())
    }

    /// Secondary color sample text; primary-colored when the variant has no
    /// secondary.
    pub fn swatch_secondary(&self) -> Style {
        Style::default()
            .fg(self.secondary.unwrap_or(self.primary).color())
            .bg(self.surface.color())
    }

    /// Primary-filled inert button.
    pub fn button_primary(&self) -> Style {
        Style::default()
            .fg(self.on_primary())
            .bg(self.primary.color())
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary-filled inert button.
    pub fn button_secondary(&self) -> Style {
        Style::default()
            .fg(self.on_primary())
            .bg(self.secondary.unwrap_or(self.primary).color())
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar fill.
    pub fn status(&self) -> Style {
        Style::default().fg(self.dim_color()).bg(self.surface.color())
    }

    /// Status bar text (dimmed hints).
    pub fn status_hint(&self) -> Style {
        self.status()
    }

    /// Status bar right-hand info.
    pub fn status_info(&self) -> Style {
        Style::default()
            .fg(self.primary.color())
            .bg(self.surface.color())
            .add_modifier(Modifier::BOLD)
    }
}
