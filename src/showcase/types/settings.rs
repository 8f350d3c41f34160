//! Application settings types and persistence
//!
//! Every constant of the decorative scene lives here so a RON file can tweak
//! the scene without a rebuild. Missing fields fall back to the defaults below.

use bevy::log::{info, warn};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::theme::ThemeMode;

// ============================================================================
// Window
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSetting {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSetting {
    fn default() -> Self {
        Self {
            title: "Azmain Sheikh · Portfolio".to_string(),
            width: 1280,
            height: 760,
        }
    }
}

// ============================================================================
// Mesh
// ============================================================================

/// Torus knot geometry and surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshSetting {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    pub p: u32,
    pub q: u32,
    pub metallic: f32,
    pub roughness: f32,
    /// Surface colour while the pointer is away.
    pub color_idle: String,
    /// Surface colour while the pointer hovers the group.
    pub color_hover: String,
    /// When false the mesh keeps `color_idle` even while hovered.
    pub follow_hover: bool,
}

impl Default for MeshSetting {
    fn default() -> Self {
        Self {
            radius: 0.9,
            tube: 0.35,
            tubular_segments: 256,
            radial_segments: 32,
            p: 2,
            q: 3,
            metallic: 0.8,
            roughness: 0.15,
            color_idle: "#7c3aed".to_string(),
            color_hover: "#ff6b6b".to_string(),
            follow_hover: true,
        }
    }
}

/// Upper bound on either segment count; keeps vertex and index counts well
/// inside `u32`.
pub const MAX_SEGMENTS: u32 = 4096;
/// Upper bound on the `p` / `q` winding numbers.
pub const MAX_WINDING: u32 = 64;

/// Below these counts the knot starts to look faceted.
pub const RECOMMENDED_TUBULAR_SEGMENTS: u32 = 200;
pub const RECOMMENDED_RADIAL_SEGMENTS: u32 = 24;

// ============================================================================
// Motion
// ============================================================================

/// Angular velocity of the mesh, radians per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinSetting {
    pub x_rate: f32,
    pub y_rate: f32,
}

impl Default for SpinSetting {
    fn default() -> Self {
        Self {
            x_rate: 0.2,
            y_rate: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatSetting {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Start the bob at a random phase instead of zero.
    pub randomize_phase: bool,
}

impl Default for FloatSetting {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_intensity: 0.5,
            float_intensity: 0.8,
            randomize_phase: true,
        }
    }
}

// ============================================================================
// Camera
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSetting {
    pub distance: f32,
    pub fov_degrees: f32,
    pub auto_rotate: bool,
    /// Same unit as three.js `autoRotateSpeed`: 2.0 is one turn per 30 s.
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    /// Ease drags out instead of stopping dead.
    pub enable_damping: bool,
    /// Share of the remaining drag rotation applied per 60 Hz frame.
    pub damping_factor: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSetting {
    fn default() -> Self {
        Self {
            distance: 6.0,
            fov_degrees: 50.0,
            auto_rotate: true,
            auto_rotate_speed: 0.6,
            rotate_speed: 1.0,
            enable_damping: true,
            damping_factor: 0.05,
            enable_zoom: false,
            enable_pan: false,
            min_distance: 2.5,
            max_distance: 15.0,
        }
    }
}

// ============================================================================
// Lighting / ground
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingSetting {
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    pub directional_position: [f32; 3],
    pub point_intensity: f32,
    pub point_position: [f32; 3],
}

impl Default for LightingSetting {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.6,
            directional_intensity: 1.0,
            directional_position: [5.0, 8.0, 5.0],
            point_intensity: 0.3,
            point_position: [-10.0, -10.0, -10.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundSetting {
    pub size: f32,
    pub height: f32,
    pub color: String,
}

impl Default for GroundSetting {
    fn default() -> Self {
        Self {
            size: 50.0,
            height: -1.5,
            color: "#0f172a".to_string(),
        }
    }
}

// ============================================================================
// Root settings
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseSettings {
    pub window: WindowSetting,
    pub theme: ThemeMode,
    pub mesh: MeshSetting,
    pub spin: SpinSetting,
    pub float: FloatSetting,
    pub orbit: OrbitSetting,
    pub lighting: LightingSetting,
    pub ground: GroundSetting,
    /// `tracing` env-filter directives handed to Bevy's `LogPlugin`.
    pub log_filter: String,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            window: WindowSetting::default(),
            theme: ThemeMode::Dark,
            mesh: MeshSetting::default(),
            spin: SpinSetting::default(),
            float: FloatSetting::default(),
            orbit: OrbitSetting::default(),
            lighting: LightingSetting::default(),
            ground: GroundSetting::default(),
            log_filter: "info,wgpu=error,naga=warn".to_string(),
        }
    }
}

/// Parse a CSS colour string (`#7c3aed`, `rgb(...)`, `coral`) into a Bevy colour.
pub fn parse_color(text: &str) -> Result<Color, String> {
    let c = csscolorparser::parse(text).map_err(|e| format!("Invalid colour '{text}': {e}"))?;
    Ok(Color::srgba(c.r as f32, c.g as f32, c.b as f32, c.a as f32))
}

fn check_finite(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{name} must be a finite number"))
    }
}

/// Where the effective settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    File(PathBuf),
    /// The config file was not found; built-in defaults are in use.
    Defaults { missing: PathBuf },
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsSource::File(path) => write!(f, "{}", path.display()),
            SettingsSource::Defaults { .. } => write!(f, "built-in defaults"),
        }
    }
}

impl ShowcaseSettings {
    /// Parse settings from RON text and validate them.
    pub fn from_ron_str(text: &str) -> Result<Self, String> {
        let settings: Self =
            ron::from_str(text).map_err(|e| format!("Failed to parse settings: {e}"))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a RON file.
    ///
    /// Returns `Ok(None)` when the file does not exist; the caller decides
    /// whether defaults are acceptable.
    pub fn load(path: &Path) -> Result<Option<Self>, String> {
        if !path.exists() {
            return Ok(None);
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        Self::from_ron_str(&text).map(Some)
    }

    /// Log a one-line summary plus any quality warnings.
    pub fn log_summary(&self, source: &SettingsSource) {
        if let SettingsSource::Defaults { missing } = source {
            warn!("Settings file {} not found, using defaults", missing.display());
        }
        info!(
            "Settings from {source}: knot {}x{} segments, spin ({}, {}) rad/s, theme {:?}",
            self.mesh.tubular_segments,
            self.mesh.radial_segments,
            self.spin.x_rate,
            self.spin.y_rate,
            self.theme
        );
        for warning in self.warnings() {
            warn!("{warning}");
        }
    }

    pub fn to_ron_string(&self) -> Result<String, String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("Failed to serialize settings: {e}"))
    }

    pub fn validate(&self) -> Result<(), String> {
        let mesh = &self.mesh;
        check_finite("mesh.radius", mesh.radius)?;
        check_finite("mesh.tube", mesh.tube)?;
        if mesh.radius <= 0.0 || mesh.tube <= 0.0 {
            return Err("mesh.radius and mesh.tube must be positive".to_string());
        }
        if mesh.tubular_segments < 3 || mesh.radial_segments < 3 {
            return Err("mesh segments must be at least 3 in both directions".to_string());
        }
        if mesh.tubular_segments > MAX_SEGMENTS || mesh.radial_segments > MAX_SEGMENTS {
            return Err(format!("mesh segments must be at most {MAX_SEGMENTS} in both directions"));
        }
        if mesh.p == 0 || mesh.q == 0 {
            return Err("mesh.p and mesh.q must be non-zero".to_string());
        }
        if mesh.p > MAX_WINDING || mesh.q > MAX_WINDING {
            return Err(format!("mesh.p and mesh.q must be at most {MAX_WINDING}"));
        }
        if !(0.0..=1.0).contains(&mesh.metallic) || !(0.0..=1.0).contains(&mesh.roughness) {
            return Err("mesh.metallic and mesh.roughness must lie in 0..=1".to_string());
        }
        parse_color(&mesh.color_idle)?;
        parse_color(&mesh.color_hover)?;
        parse_color(&self.ground.color)?;

        // Rotation only ever accumulates forward.
        check_finite("spin.x_rate", self.spin.x_rate)?;
        check_finite("spin.y_rate", self.spin.y_rate)?;
        if self.spin.x_rate < 0.0 || self.spin.y_rate < 0.0 {
            return Err("spin rates must not be negative".to_string());
        }

        check_finite("float.speed", self.float.speed)?;
        check_finite("float.rotation_intensity", self.float.rotation_intensity)?;
        check_finite("float.float_intensity", self.float.float_intensity)?;

        let orbit = &self.orbit;
        check_finite("orbit.distance", orbit.distance)?;
        check_finite("orbit.auto_rotate_speed", orbit.auto_rotate_speed)?;
        check_finite("orbit.rotate_speed", orbit.rotate_speed)?;
        if !(orbit.damping_factor > 0.0 && orbit.damping_factor <= 1.0) {
            return Err("orbit.damping_factor must lie in (0, 1]".to_string());
        }
        if !(orbit.fov_degrees > 0.0 && orbit.fov_degrees < 180.0) {
            return Err("orbit.fov_degrees must lie in (0, 180)".to_string());
        }
        if !(orbit.min_distance > 0.0 && orbit.min_distance <= orbit.max_distance) {
            return Err("orbit distance limits must satisfy 0 < min <= max".to_string());
        }
        if orbit.distance <= 0.0 {
            return Err("orbit.distance must be positive".to_string());
        }

        let lighting = &self.lighting;
        for (name, value) in [
            ("lighting.ambient_intensity", lighting.ambient_intensity),
            ("lighting.directional_intensity", lighting.directional_intensity),
            ("lighting.point_intensity", lighting.point_intensity),
        ] {
            check_finite(name, value)?;
            if value < 0.0 {
                return Err(format!("{name} must not be negative"));
            }
        }

        if !(self.ground.size > 0.0) {
            return Err("ground.size must be positive".to_string());
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err("window dimensions must be non-zero".to_string());
        }

        Ok(())
    }

    /// Non-fatal quality hints, logged at startup.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.mesh.tubular_segments < RECOMMENDED_TUBULAR_SEGMENTS {
            out.push(format!(
                "mesh.tubular_segments = {} (below {}), the knot may look faceted",
                self.mesh.tubular_segments, RECOMMENDED_TUBULAR_SEGMENTS
            ));
        }
        if self.mesh.radial_segments < RECOMMENDED_RADIAL_SEGMENTS {
            out.push(format!(
                "mesh.radial_segments = {} (below {}), the tube may look faceted",
                self.mesh.radial_segments, RECOMMENDED_RADIAL_SEGMENTS
            ));
        }
        out
    }
}
