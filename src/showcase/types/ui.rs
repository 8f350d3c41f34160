//! UI components for the page shell
//!
//! Markers for the header, hero column and the caption overlaid on the scene.

use bevy::prelude::*;

/// Column holding the hero, projects, about and contact sections.
#[derive(Component)]
pub struct HeroColumn;

/// Header button that flips the theme.
#[derive(Component)]
pub struct ThemeToggleButton;

/// Text inside the theme toggle button.
#[derive(Component)]
pub struct ThemeToggleLabel;

/// Box overlaid on the bottom-left corner of the scene viewport.
#[derive(Component)]
pub struct HoverCaptionBox;

/// Caption text that reflects the hover flag.
#[derive(Component)]
pub struct HoverCaptionText;

/// Dot beside the caption that reflects the hover flag.
#[derive(Component)]
pub struct HoverCaptionDot;

// ============================================================================
// Sections and links
// ============================================================================

/// Anchored part of the scrolling page column.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSection {
    Projects,
    About,
    Contact,
}

impl PageSection {
    pub const NAV: [PageSection; 3] = [PageSection::Projects, PageSection::About, PageSection::Contact];

    /// Header navigation label.
    pub fn label(self) -> &'static str {
        match self {
            PageSection::Projects => "Projects",
            PageSection::About => "About",
            PageSection::Contact => "Contact",
        }
    }
}

/// Button that scrolls the page column to a section.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLink(pub PageSection);

/// Button pointing outside the page (resume, case study, code).
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

impl ExternalLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// `#` and empty targets lead nowhere.
    pub fn is_placeholder(&self) -> bool {
        let url = self.url.trim();
        url.is_empty() || url == "#"
    }
}

/// Scroll offset (logical px) that brings a section's top edge to the top
/// of the column. Tops are in physical px, as laid out this frame.
pub fn section_scroll_target(
    current_scroll: f32,
    section_top: f32,
    column_top: f32,
    inverse_scale_factor: f32,
) -> f32 {
    (current_scroll + (section_top - column_top) * inverse_scale_factor).max(0.0)
}

// ============================================================================
// Contact form
// ============================================================================

/// Editable box of the contact form. Nothing is ever sent.
#[derive(Component, Debug, Clone, PartialEq, Eq, Default)]
pub struct FormField {
    pub placeholder: String,
    pub value: String,
    /// Enter inserts a newline instead of being ignored.
    pub multiline: bool,
}

impl FormField {
    pub fn new(placeholder: impl Into<String>, multiline: bool) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
            multiline,
        }
    }

    /// Text to draw and whether it is the placeholder.
    pub fn display(&self, focused: bool) -> (String, bool) {
        match (self.value.is_empty(), focused) {
            (true, false) => (self.placeholder.clone(), true),
            (_, true) => (format!("{}|", self.value), false),
            (false, false) => (self.value.clone(), false),
        }
    }
}

/// Text node inside a [`FormField`].
#[derive(Component)]
pub struct FormFieldText;

/// The "Send message" button. Display only.
#[derive(Component)]
pub struct SendMessageButton;

/// Form field receiving keyboard input, if any.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusedField(pub Option<Entity>);

// ============================================================================
// Entrance animation
// ============================================================================

/// Fade (and optional upward slide) played once when the page appears.
/// Removed from the entity when finished.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    /// Seconds after startup before the fade begins.
    pub delay: f32,
    pub duration: f32,
    /// Starting offset below the resting position, logical px.
    pub rise: f32,
}

impl FadeIn {
    pub const DEFAULT_DURATION: f32 = 0.5;

    pub fn after(delay: f32) -> Self {
        Self {
            delay,
            duration: Self::DEFAULT_DURATION,
            rise: 0.0,
        }
    }

    pub fn lasting(self, duration: f32) -> Self {
        Self { duration, ..self }
    }

    pub fn rising(self, rise: f32) -> Self {
        Self { rise, ..self }
    }

    /// 0 before the delay, 1 once finished.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return if elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    /// Eased opacity.
    pub fn alpha(&self, elapsed: f32) -> f32 {
        let t = self.progress(elapsed);
        1.0 - (1.0 - t) * (1.0 - t)
    }

    pub fn offset(&self, elapsed: f32) -> f32 {
        self.rise * (1.0 - self.alpha(elapsed))
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        self.progress(elapsed) >= 1.0
    }
}
