//! Light / dark page theme
//!
//! The theme flag only swaps between two fixed palettes; nothing is persisted.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Current page theme. Dark on startup unless overridden.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Parse a CLI value (`dark` / `light`, case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            ThemeMode::Dark => ThemePalette::DARK,
            ThemeMode::Light => ThemePalette::LIGHT,
        }
    }

    /// Label for the toggle button: names the theme you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Light",
            ThemeMode::Light => "Dark",
        }
    }
}

/// Fixed colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub background: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent_text: Color,
    pub panel: Color,
    pub chip: Color,
}

impl ThemePalette {
    // slate-900 / slate-100 / slate-800
    pub const DARK: ThemePalette = ThemePalette {
        background: Color::srgb(0.059, 0.090, 0.165),
        text: Color::srgb(0.945, 0.961, 0.976),
        muted_text: Color::srgb(0.796, 0.835, 0.882),
        accent_text: Color::srgb(0.655, 0.545, 0.980),
        panel: Color::srgb(0.118, 0.161, 0.231),
        chip: Color::srgb(0.118, 0.161, 0.231),
    };

    // white / slate-900 / slate-100
    pub const LIGHT: ThemePalette = ThemePalette {
        background: Color::WHITE,
        text: Color::srgb(0.059, 0.090, 0.165),
        muted_text: Color::srgb(0.278, 0.333, 0.412),
        accent_text: Color::srgb(0.486, 0.227, 0.929),
        panel: Color::srgb(0.945, 0.961, 0.976),
        chip: Color::srgb(0.886, 0.910, 0.941),
    };
}

/// Which palette entry a themed text node uses.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemedText {
    Primary,
    Muted,
    Accent,
}

impl ThemedText {
    pub fn color(self, palette: &ThemePalette) -> Color {
        match self {
            ThemedText::Primary => palette.text,
            ThemedText::Muted => palette.muted_text,
            ThemedText::Accent => palette.accent_text,
        }
    }
}

/// Which palette entry a themed background node uses.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemedPanel {
    Card,
    Chip,
}

impl ThemedPanel {
    pub fn color(self, palette: &ThemePalette) -> Color {
        match self {
            ThemedPanel::Card => palette.panel,
            ThemedPanel::Chip => palette.chip,
        }
    }
}
