//! Camera control systems
//!
//! This module contains the orbit controller (auto-rotation, damped drag,
//! optional zoom and pan) and the system that fits the scene viewport to the window.

use bevy::camera::Viewport;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::showcase::types::*;

/// Pixel-unit scroll deltas are divided by this to approximate wheel lines.
const PIXELS_PER_SCROLL_LINE: f32 = 100.0;

/// System to orbit the camera around the showcase
pub fn orbit_camera(
    settings: Res<ShowcaseSettings>,
    viewport: Res<SceneViewport>,
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    let orbit_settings = &settings.orbit;
    let cursor_in_scene = windows
        .single()
        .ok()
        .and_then(|window| window.cursor_position())
        .is_some_and(|cursor| viewport.contains(cursor));
    let height = viewport.rect.height();

    for (mut orbit, mut transform) in camera_query.iter_mut() {
        // Drags only start inside the scene, but continue wherever the pointer goes.
        if mouse.just_pressed(MouseButton::Left) && cursor_in_scene {
            orbit.dragging = true;
        }
        if !mouse.pressed(MouseButton::Left) {
            orbit.dragging = false;
        }
        if orbit_settings.enable_pan && mouse.just_pressed(MouseButton::Right) && cursor_in_scene {
            orbit.panning = true;
        }
        if !orbit_settings.enable_pan || !mouse.pressed(MouseButton::Right) {
            orbit.panning = false;
        }

        if motion.delta != Vec2::ZERO {
            if orbit.dragging {
                if orbit_settings.enable_damping {
                    orbit.queue_drag(motion.delta, height, orbit_settings.rotate_speed);
                } else {
                    orbit.drag(motion.delta, height, orbit_settings.rotate_speed);
                }
            } else if orbit.panning {
                orbit.pan(motion.delta, height, orbit_settings.fov_degrees.to_radians());
            }
        }

        if orbit_settings.enable_zoom && cursor_in_scene && scroll.delta.y != 0.0 {
            let lines = match scroll.unit {
                MouseScrollUnit::Line => scroll.delta.y,
                MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_SCROLL_LINE,
            };
            orbit.zoom(lines, orbit_settings.min_distance, orbit_settings.max_distance);
        }

        if orbit_settings.enable_damping {
            orbit.apply_damping(time.delta_secs(), orbit_settings.damping_factor);
        }

        if orbit_settings.auto_rotate && !orbit.is_interacting() {
            let angle = OrbitCamera::auto_rotate_angle(orbit_settings.auto_rotate_speed, time.delta_secs());
            orbit.rotate_left(angle);
        }

        *transform = orbit.transform();
    }
}

/// Recompute the scene rectangle on window resize and push it to the camera
/// viewport, the caption overlay and the hero column.
pub fn fit_scene_viewport(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut viewport: ResMut<SceneViewport>,
    mut cameras: Query<&mut Camera, With<MainCamera>>,
    mut caption_query: Query<&mut Node, (With<HoverCaptionBox>, Without<HeroColumn>)>,
    mut hero_query: Query<&mut Node, (With<HeroColumn>, Without<HoverCaptionBox>)>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let window_size = Vec2::new(window.width(), window.height());
    let layout = SceneViewport::layout(window_size);
    viewport.set_if_neq(layout);

    let (physical_position, physical_size) = layout.to_physical(window.scale_factor());
    for mut camera in cameras.iter_mut() {
        camera.viewport = Some(Viewport {
            physical_position,
            physical_size,
            ..default()
        });
    }

    for mut node in caption_query.iter_mut() {
        node.left = Val::Px(layout.rect.min.x + CAPTION_INSET);
        node.bottom = Val::Px(window_size.y - layout.rect.max.y + CAPTION_INSET);
    }

    let hero = layout.hero_rect();
    for mut node in hero_query.iter_mut() {
        node.left = Val::Px(hero.min.x);
        node.top = Val::Px(hero.min.y);
        node.width = Val::Px(hero.width());
        node.height = Val::Px(hero.height());
    }
}

/// Gap between the caption box and the viewport corner, logical pixels.
pub const CAPTION_INSET: f32 = 16.0;
