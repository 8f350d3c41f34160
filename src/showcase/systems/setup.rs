//! Scene setup system
//!
//! This module contains the startup system that builds the 3D scene:
//! cameras, the lighting rig, the floating torus knot and the ground plane.

use bevy::picking::mesh_picking::MeshPickingCamera;
use bevy::picking::Pickable;
use bevy::prelude::*;
use rand::Rng;

use crate::showcase::meshes::{create_ground, create_torus_knot};
use crate::showcase::types::*;

use super::hover::{on_showcase_out, on_showcase_over};

// The settings use the unitless intensities of the page this scene was
// designed for; these factors map them onto Bevy's photometric units.
pub const AMBIENT_BRIGHTNESS_SCALE: f32 = 500.0;
pub const DIRECTIONAL_LUX_SCALE: f32 = 10_000.0;
pub const POINT_LUMEN_SCALE: f32 = 1_000_000.0;

/// Point light reach, comfortably past the scene origin.
const POINT_LIGHT_RANGE: f32 = 40.0;

/// Main setup system - initializes the 3D scene
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ShowcaseSettings>,
    palette: Res<MeshPalette>,
    hover: Res<HoverState>,
) {
    let lighting = &settings.lighting;

    // Camera - orbits the origin; its viewport is fitted to the layout each resize.
    let orbit = OrbitCamera::from_position(Vec3::new(0.0, 0.0, settings.orbit.distance), Vec3::ZERO);
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 0,
            ..default()
        },
        Projection::from(PerspectiveProjection {
            fov: settings.orbit.fov_degrees.to_radians(),
            ..default()
        }),
        orbit.transform(),
        orbit,
        AmbientLight {
            color: Color::WHITE,
            brightness: lighting.ambient_intensity * AMBIENT_BRIGHTNESS_SCALE,
            ..default()
        },
        MeshPickingCamera,
        MainCamera,
    ));

    // Page UI draws on top of the scene across the whole window.
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
    ));

    // Key light, above-front, casting shadows
    commands.spawn((
        DirectionalLight {
            illuminance: lighting.directional_intensity * DIRECTIONAL_LUX_SCALE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(lighting.directional_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Dim rim fill from the opposite corner
    commands.spawn((
        PointLight {
            intensity: lighting.point_intensity * POINT_LUMEN_SCALE,
            range: POINT_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(lighting.point_position)),
    ));

    let phase = if settings.float.randomize_phase {
        rand::thread_rng().gen_range(0.0..10_000.0)
    } else {
        0.0
    };
    let floating = Floating::from_setting(&settings.float, phase, Vec3::ZERO);

    let knot_material = materials.add(StandardMaterial {
        base_color: palette.color_for(hover.hovered),
        metallic: settings.mesh.metallic,
        perceptual_roughness: settings.mesh.roughness,
        ..default()
    });

    // The group receives the pointer events that bubble up from the knot.
    commands
        .spawn((
            floating.transform_at(0.0),
            Visibility::default(),
            floating,
            ShowcaseGroup,
            Name::new("Showcase group"),
        ))
        .observe(on_showcase_over)
        .observe(on_showcase_out)
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(create_torus_knot(&settings.mesh))),
                MeshMaterial3d(knot_material),
                Transform::default(),
                Spin::default(),
                Pickable::default(),
                ShowcaseMesh,
                Name::new("Torus knot"),
            ));
        });

    // Ground - matte, only there to catch the shadow
    let ground_color = parse_color(&settings.ground.color).unwrap_or_else(|e| {
        warn!("{e}");
        Color::srgb_u8(0x0f, 0x17, 0x2a)
    });
    commands.spawn((
        Mesh3d(meshes.add(create_ground(settings.ground.size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ground_color,
            metallic: 0.0,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, settings.ground.height, 0.0),
        Pickable::IGNORE,
        Name::new("Ground"),
    ));

    info!(
        "Scene ready: torus knot {}x{}, follow hover: {}",
        settings.mesh.tubular_segments, settings.mesh.radial_segments, palette.follow_hover
    );
}
