//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme derivation and style helpers
//! - Reusable widgets
//! - Main render loop

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render;
pub use theme::Theme;
