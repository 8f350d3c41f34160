//! Camera-related types and components
//!
//! This module contains the camera markers, the orbit controller state and the
//! on-screen rectangle the 3D scene is drawn into.

use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Keeps the camera a little off the poles so `looking_at` stays well defined.
pub const POLAR_EPSILON: f32 = 0.01;

/// Spherical orbit around `target`, using the usual y-up convention:
/// `azimuth` is measured around +Y from +Z, `polar` down from +Y.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub polar: f32,
    /// Left button went down inside the viewport and has not been released.
    pub dragging: bool,
    /// Right button went down inside the viewport and has not been released.
    pub panning: bool,
    /// Drag rotation (left, up) not yet applied while damping eases it out.
    pub pending: Vec2,
}

/// Frame length the damping factor is expressed against.
const DAMPING_REFERENCE_DT: f32 = 1.0 / 60.0;

impl OrbitCamera {
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target,
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            dragging: false,
            panning: false,
            pending: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target + self.radius * Vec3::new(sin_polar * sin_az, cos_polar, sin_polar * cos_az)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }

    pub fn is_interacting(&self) -> bool {
        self.dragging || self.panning
    }

    /// Azimuth step for auto-rotation. `speed` 2.0 is one turn every 30 seconds.
    pub fn auto_rotate_angle(speed: f32, dt: f32) -> f32 {
        TAU / 60.0 * speed * dt
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.azimuth = (self.azimuth - angle).rem_euclid(TAU);
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.polar = (self.polar - angle).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
    }

    fn drag_angles(delta: Vec2, viewport_height: f32, rotate_speed: f32) -> Vec2 {
        TAU * delta / viewport_height.max(1.0) * rotate_speed
    }

    /// Pointer drag of `delta` logical pixels. Dragging the full viewport
    /// height turns the camera once around.
    pub fn drag(&mut self, delta: Vec2, viewport_height: f32, rotate_speed: f32) {
        let angles = Self::drag_angles(delta, viewport_height, rotate_speed);
        self.rotate_left(angles.x);
        self.rotate_up(angles.y);
    }

    /// Like [`Self::drag`], but the rotation is queued and applied over the
    /// next frames by [`Self::apply_damping`].
    pub fn queue_drag(&mut self, delta: Vec2, viewport_height: f32, rotate_speed: f32) {
        self.pending += Self::drag_angles(delta, viewport_height, rotate_speed);
    }

    /// Apply part of the queued rotation. `damping_factor` is the share applied
    /// per 60 Hz frame; the rest carries over, so the camera eases to a stop.
    pub fn apply_damping(&mut self, dt: f32, damping_factor: f32) {
        if self.pending == Vec2::ZERO {
            return;
        }
        let keep = (1.0 - damping_factor.clamp(0.0, 1.0)).powf(dt.max(0.0) / DAMPING_REFERENCE_DT);
        let step = self.pending * (1.0 - keep);
        self.rotate_left(step.x);
        self.rotate_up(step.y);
        self.pending -= step;
        if self.pending.length() < 1e-5 {
            self.pending = Vec2::ZERO;
        }
    }

    /// Mouse wheel zoom; positive `scroll` moves closer.
    pub fn zoom(&mut self, scroll: f32, min_distance: f32, max_distance: f32) {
        self.radius = (self.radius * 0.95_f32.powf(scroll)).clamp(min_distance, max_distance);
    }

    /// Move the target in the camera plane so the point under the cursor follows it.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32, fov_radians: f32) {
        let transform = self.transform();
        let height = viewport_height.max(1.0);
        let world_per_pixel = 2.0 * self.radius * (fov_radians / 2.0).tan() / height;
        let right = transform.right().as_vec3();
        let up = transform.up().as_vec3();
        self.target += (-right * delta.x + up * delta.y) * world_per_pixel;
    }
}

/// Header strip above the page columns, logical pixels.
pub const HEADER_HEIGHT: f32 = 72.0;
/// Outer page margin, logical pixels.
pub const PAGE_MARGIN: f32 = 24.0;
/// Windows at least this wide put the scene beside the hero column.
pub const WIDE_LAYOUT_MIN_WIDTH: f32 = 900.0;
/// Tallest the scene gets in the stacked layout.
pub const STACKED_SCENE_MAX_HEIGHT: f32 = 480.0;

/// Where the 3D scene is drawn, in logical window pixels (origin top-left).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneViewport {
    pub rect: Rect,
    /// Scene sits to the right of the hero column rather than above it.
    pub wide: bool,
    /// Logical window size the layout was computed for.
    pub window: Vec2,
}

impl Default for SceneViewport {
    fn default() -> Self {
        Self::layout(Vec2::new(1280.0, 760.0))
    }
}

impl SceneViewport {
    pub fn layout(window: Vec2) -> Self {
        let wide = window.x >= WIDE_LAYOUT_MIN_WIDTH;
        let top = HEADER_HEIGHT + PAGE_MARGIN;
        let (min, max) = if wide {
            (
                Vec2::new(window.x * 0.5 + PAGE_MARGIN * 0.5, top),
                Vec2::new(window.x - PAGE_MARGIN, window.y - PAGE_MARGIN),
            )
        } else {
            let height = (window.y * 0.45).min(STACKED_SCENE_MAX_HEIGHT);
            (
                Vec2::new(PAGE_MARGIN, top),
                Vec2::new(window.x - PAGE_MARGIN, top + height),
            )
        };
        // Degenerate windows still get a one-pixel viewport.
        let max = max.max(min + Vec2::ONE);
        Self {
            rect: Rect::from_corners(min, max),
            wide,
            window,
        }
    }

    /// Scrolling page column: left of the scene when wide, below it otherwise.
    pub fn hero_rect(&self) -> Rect {
        let (min, max) = if self.wide {
            (
                Vec2::new(PAGE_MARGIN, HEADER_HEIGHT + PAGE_MARGIN),
                Vec2::new(self.rect.min.x - PAGE_MARGIN, self.window.y - PAGE_MARGIN),
            )
        } else {
            (
                Vec2::new(PAGE_MARGIN, self.rect.max.y + PAGE_MARGIN),
                Vec2::new(self.window.x - PAGE_MARGIN, self.window.y - PAGE_MARGIN),
            )
        };
        Rect::from_corners(min, max.max(min))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    /// Physical position and size for `Camera::viewport`.
    pub fn to_physical(&self, scale_factor: f32) -> (UVec2, UVec2) {
        let position = (self.rect.min * scale_factor).round().as_uvec2();
        let size = (self.rect.size() * scale_factor).round().as_uvec2().max(UVec2::ONE);
        (position, size)
    }
}
