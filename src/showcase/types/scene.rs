//! Decorative scene state
//!
//! The mesh state is fully described by the accumulated spin angles, the
//! elapsed time (for the float) and the hover flag.

use bevy::prelude::*;

use super::settings::{FloatSetting, ShowcaseSettings, SpinSetting};

/// Marker for the torus knot mesh entity.
#[derive(Component)]
pub struct ShowcaseMesh;

/// Marker for the floating group that encloses the mesh and receives pointer events.
#[derive(Component)]
pub struct ShowcaseGroup;

/// Accumulated rotation of the mesh in radians.
///
/// Both angles only ever grow: each frame adds `dt * rate` with `dt >= 0`
/// and validated non-negative rates.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

impl Spin {
    pub fn advance(&mut self, dt: f32, rates: &SpinSetting) {
        let dt = dt.max(0.0);
        self.x += dt * rates.x_rate;
        self.y += dt * rates.y_rate;
    }

    /// XYZ Euler rotation with no roll.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

/// Gentle bob and wobble applied to the group around its rest position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Floating {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Seconds added to the clock so several floaters don't move in lockstep.
    pub phase: f32,
    pub rest: Vec3,
}

impl Floating {
    pub fn from_setting(setting: &FloatSetting, phase: f32, rest: Vec3) -> Self {
        Self {
            speed: setting.speed,
            rotation_intensity: setting.rotation_intensity,
            float_intensity: setting.float_intensity,
            phase,
            rest,
        }
    }

    /// Group transform at `elapsed` seconds.
    pub fn transform_at(&self, elapsed: f32) -> Transform {
        let a = (self.phase + elapsed) / 4.0 * self.speed;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            a.cos() / 8.0 * self.rotation_intensity,
            a.sin() / 8.0 * self.rotation_intensity,
            a.sin() / 20.0 * self.rotation_intensity,
        );
        let bob = a.sin() / 10.0 * self.float_intensity;
        Transform::from_translation(self.rest + Vec3::Y * bob).with_rotation(rotation)
    }
}

/// Whether the pointer is currently over the showcase group.
///
/// Only the pointer-over / pointer-out observers on the group write this.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    pub hovered: bool,
}

/// The two surface colours of the mesh.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MeshPalette {
    pub idle: Color,
    pub hover: Color,
    pub follow_hover: bool,
}

impl MeshPalette {
    pub fn from_settings(settings: &ShowcaseSettings) -> Result<Self, String> {
        Ok(Self {
            idle: super::settings::parse_color(&settings.mesh.color_idle)?,
            hover: super::settings::parse_color(&settings.mesh.color_hover)?,
            follow_hover: settings.mesh.follow_hover,
        })
    }

    pub fn color_for(&self, hovered: bool) -> Color {
        if hovered && self.follow_hover {
            self.hover
        } else {
            self.idle
        }
    }
}

impl Default for MeshPalette {
    fn default() -> Self {
        Self {
            idle: Color::srgb_u8(0x7c, 0x3a, 0xed),
            hover: Color::srgb_u8(0xff, 0x6b, 0x6b),
            follow_hover: true,
        }
    }
}

/// Caption shown over the viewport for a hover state.
pub fn hover_caption(hovered: bool) -> &'static str {
    if hovered {
        "Interactive — touch to transform"
    } else {
        "3D live preview"
    }
}

/// Indicator dot colour next to the caption (rose-400 / violet-400).
pub fn hover_dot_color(hovered: bool) -> Color {
    if hovered {
        Color::srgb_u8(0xfb, 0x71, 0x85)
    } else {
        Color::srgb_u8(0xa7, 0x8b, 0xfa)
    }
}
