//! Tests for the showcase scene systems, driven through a headless app with a
//! manually advanced clock.

use std::f32::consts::TAU;
use std::time::Duration;

use bevy::camera::NormalizedRenderTarget;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::input::ButtonState;
use bevy::picking::backend::HitData;
use bevy::picking::events::{Out, Over, Pointer};
use bevy::picking::pointer::{Location, PointerId};
use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_mesh::VertexAttributeValues;

use portfolio3d::showcase::types::*;
use portfolio3d::showcase::{
    apply_hover_color, apply_theme, fade_in_page, float_showcase_group, focus_form_fields,
    on_showcase_out, on_showcase_over, orbit_camera, render_form_fields, scroll_page_column,
    setup_scene, spin_showcase_mesh, toggle_theme, type_into_form, update_hover_caption,
    SCROLL_LINE_HEIGHT,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn scene_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>()
        .insert_resource(ShowcaseSettings::default())
        .insert_resource(MeshPalette::default())
        .init_resource::<HoverState>()
        .init_resource::<Assets<StandardMaterial>>()
        .add_systems(Update, (spin_showcase_mesh, apply_hover_color));
    app
}

fn spawn_knot(app: &mut App) -> (Entity, Handle<StandardMaterial>) {
    let handle = app
        .world_mut()
        .resource_mut::<Assets<StandardMaterial>>()
        .add(StandardMaterial {
            base_color: MeshPalette::default().idle,
            ..default()
        });
    let entity = app
        .world_mut()
        .spawn((
            Transform::default(),
            Spin::default(),
            MeshMaterial3d(handle.clone()),
            ShowcaseMesh,
        ))
        .id();
    (entity, handle)
}

fn step(app: &mut App, dt: Duration) {
    app.world_mut().resource_mut::<Time>().advance_by(dt);
    app.update();
}

fn spin_of(app: &App, entity: Entity) -> Spin {
    *app.world().get::<Spin>(entity).expect("knot has a Spin")
}

fn color_of(app: &App, handle: &Handle<StandardMaterial>) -> Color {
    app.world()
        .resource::<Assets<StandardMaterial>>()
        .get(handle)
        .expect("material exists")
        .base_color
}

fn set_hovered(app: &mut App, hovered: bool) {
    app.world_mut()
        .resource_mut::<HoverState>()
        .set_if_neq(HoverState { hovered });
}

#[test]
fn test_rotation_accumulates_and_stays_violet() {
    let mut app = scene_app();
    let (knot, material) = spawn_knot(&mut app);

    for dt in [0, 100, 100] {
        step(&mut app, Duration::from_millis(dt));
    }

    let spin = spin_of(&app, knot);
    assert!(approx(spin.x, 0.04), "x rotation was {}", spin.x);
    assert!(approx(spin.y, 0.10), "y rotation was {}", spin.y);
    assert_eq!(color_of(&app, &material), Color::srgb_u8(0x7c, 0x3a, 0xed));

    let transform = app.world().get::<Transform>(knot).unwrap();
    assert_eq!(transform.rotation, spin.rotation());
}

#[test]
fn test_hover_mid_sequence_swaps_colour_without_touching_rotation() {
    let palette = MeshPalette::default();
    let mut app = scene_app();
    let (knot, material) = spawn_knot(&mut app);

    step(&mut app, Duration::from_millis(100));
    assert_eq!(color_of(&app, &material), palette.idle);

    set_hovered(&mut app, true);
    step(&mut app, Duration::from_millis(100));
    assert_eq!(color_of(&app, &material), palette.hover);

    step(&mut app, Duration::from_millis(100));
    assert_eq!(color_of(&app, &material), palette.hover);

    let spin = spin_of(&app, knot);
    assert!(approx(spin.x, 0.2 * 0.3));
    assert!(approx(spin.y, 0.5 * 0.3));
}

#[test]
fn test_zero_dt_freezes_rotation_but_not_colour() {
    let palette = MeshPalette::default();
    let mut app = scene_app();
    let (knot, material) = spawn_knot(&mut app);

    for frame in 0..4 {
        set_hovered(&mut app, frame % 2 == 1);
        step(&mut app, Duration::ZERO);
        let expected = if frame % 2 == 1 { palette.hover } else { palette.idle };
        assert_eq!(color_of(&app, &material), expected, "frame {frame}");
        assert_eq!(spin_of(&app, knot), Spin::default());
    }
}

#[test]
fn test_rerendering_same_frame_is_idempotent() {
    let mut app = scene_app();
    let (knot, material) = spawn_knot(&mut app);
    step(&mut app, Duration::from_millis(250));

    step(&mut app, Duration::ZERO);
    let spin = spin_of(&app, knot);
    let transform = *app.world().get::<Transform>(knot).unwrap();
    let color = color_of(&app, &material);

    step(&mut app, Duration::ZERO);
    assert_eq!(spin_of(&app, knot), spin);
    assert_eq!(*app.world().get::<Transform>(knot).unwrap(), transform);
    assert_eq!(color_of(&app, &material), color);
}

#[test]
fn test_rotation_never_decreases() {
    let mut app = scene_app();
    let (knot, _) = spawn_knot(&mut app);
    let mut previous = spin_of(&app, knot);

    for ms in [16, 0, 33, 7, 0, 100, 1] {
        step(&mut app, Duration::from_millis(ms));
        let spin = spin_of(&app, knot);
        assert!(spin.x >= previous.x && spin.y >= previous.y);
        previous = spin;
    }
}

#[test]
fn test_static_palette_ignores_hover() {
    let mut app = scene_app();
    app.insert_resource(MeshPalette {
        follow_hover: false,
        ..MeshPalette::default()
    });
    let (_, material) = spawn_knot(&mut app);

    set_hovered(&mut app, true);
    step(&mut app, Duration::from_millis(16));
    assert_eq!(color_of(&app, &material), MeshPalette::default().idle);
}

#[test]
fn test_float_follows_elapsed_time() {
    let mut app = App::new();
    app.init_resource::<Time>()
        .add_systems(Update, float_showcase_group);

    let floating = Floating::from_setting(&FloatSetting::default(), 0.0, Vec3::ZERO);
    let group = app
        .world_mut()
        .spawn((Transform::default(), floating))
        .id();

    step(&mut app, Duration::from_millis(1500));
    let transform = *app.world().get::<Transform>(group).unwrap();
    let expected = floating.transform_at(1.5);
    assert!((transform.translation - expected.translation).length() < 1e-5);
    assert!(transform.rotation.angle_between(expected.rotation) < 1e-4);
}

#[test]
fn test_caption_tracks_hover() {
    let mut app = App::new();
    app.init_resource::<HoverState>()
        .add_systems(Update, update_hover_caption);

    let text = app
        .world_mut()
        .spawn((Text::new(""), HoverCaptionText))
        .id();
    let dot = app
        .world_mut()
        .spawn((BackgroundColor(Color::BLACK), HoverCaptionDot))
        .id();

    app.update();
    assert_eq!(app.world().get::<Text>(text).unwrap().0, "3D live preview");
    assert_eq!(app.world().get::<BackgroundColor>(dot).unwrap().0, hover_dot_color(false));

    set_hovered(&mut app, true);
    app.update();
    assert_eq!(
        app.world().get::<Text>(text).unwrap().0,
        "Interactive — touch to transform"
    );
    assert_eq!(app.world().get::<BackgroundColor>(dot).unwrap().0, hover_dot_color(true));
}

fn orbit_app() -> (App, Entity) {
    orbit_app_with(ShowcaseSettings::default())
}

fn orbit_app_with(settings: ShowcaseSettings) -> (App, Entity) {
    let mut app = App::new();
    app.init_resource::<Time>()
        .insert_resource(settings)
        .init_resource::<SceneViewport>()
        .init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<AccumulatedMouseMotion>()
        .init_resource::<AccumulatedMouseScroll>()
        .add_systems(Update, orbit_camera);

    let orbit = OrbitCamera::from_position(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO);
    let camera = app
        .world_mut()
        .spawn((orbit.transform(), orbit, MainCamera))
        .id();
    (app, camera)
}

#[test]
fn test_orbit_auto_rotates_slowly() {
    let (mut app, camera) = orbit_app();
    step(&mut app, Duration::from_secs(1));

    let orbit = *app.world().get::<OrbitCamera>(camera).unwrap();
    let turned = TAU - orbit.azimuth;
    assert!((turned - TAU / 100.0).abs() < 1e-4, "turned {turned}");
    assert!((orbit.radius - 6.0).abs() < 1e-5);

    let transform = app.world().get::<Transform>(camera).unwrap();
    assert!((transform.translation - orbit.position()).length() < 1e-5);
}

#[test]
fn test_orbit_drag_pauses_auto_rotation() {
    let mut settings = ShowcaseSettings::default();
    settings.orbit.enable_damping = false;
    let (mut app, camera) = orbit_app_with(settings);
    let height = app.world().resource::<SceneViewport>().rect.height();

    app.world_mut().get_mut::<OrbitCamera>(camera).unwrap().dragging = true;
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.world_mut().resource_mut::<AccumulatedMouseMotion>().delta = Vec2::new(height / 4.0, 0.0);

    step(&mut app, Duration::from_secs(1));

    let orbit = *app.world().get::<OrbitCamera>(camera).unwrap();
    assert!(orbit.dragging);
    // A quarter of the viewport height is a quarter turn; no auto-rotation on top.
    assert!((orbit.azimuth - 0.75 * TAU).abs() < 1e-4, "azimuth {}", orbit.azimuth);

    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .release(MouseButton::Left);
    app.world_mut().resource_mut::<AccumulatedMouseMotion>().delta = Vec2::ZERO;
    step(&mut app, Duration::from_secs(1));
    let orbit = *app.world().get::<OrbitCamera>(camera).unwrap();
    assert!(!orbit.dragging);
    assert!((orbit.azimuth - (0.75 * TAU - TAU / 100.0)).abs() < 1e-4);
}

#[test]
fn test_orbit_drag_eases_out_after_release() {
    let (mut app, camera) = orbit_app();
    let height = app.world().resource::<SceneViewport>().rect.height();

    app.world_mut().get_mut::<OrbitCamera>(camera).unwrap().dragging = true;
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.world_mut().resource_mut::<AccumulatedMouseMotion>().delta = Vec2::new(height / 4.0, 0.0);
    step(&mut app, Duration::from_millis(16));

    let orbit = *app.world().get::<OrbitCamera>(camera).unwrap();
    let turned = TAU - orbit.azimuth;
    assert!(turned > 0.0 && turned < TAU / 8.0, "first frame turned {turned}");
    assert!(orbit.pending.x > 0.0);

    // Hold still with the button down: the drag keeps easing in, no auto-rotation.
    app.world_mut().resource_mut::<AccumulatedMouseMotion>().delta = Vec2::ZERO;
    for _ in 0..600 {
        step(&mut app, Duration::from_millis(16));
    }
    let orbit = *app.world().get::<OrbitCamera>(camera).unwrap();
    assert!((TAU - orbit.azimuth - TAU / 4.0).abs() < 1e-3, "azimuth {}", orbit.azimuth);
    assert_eq!(orbit.pending, Vec2::ZERO);
}

#[test]
fn test_zoom_disabled_by_default() {
    let (mut app, camera) = orbit_app();
    app.world_mut().resource_mut::<AccumulatedMouseScroll>().delta = Vec2::new(0.0, 5.0);
    step(&mut app, Duration::from_millis(16));
    let orbit = app.world().get::<OrbitCamera>(camera).unwrap();
    assert!((orbit.radius - 6.0).abs() < 1e-5);
}

#[test]
fn test_theme_toggle_repaints_page() {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(ThemeMode::Dark)
        .insert_resource(ClearColor(ThemePalette::DARK.background))
        .add_systems(Update, (toggle_theme, apply_theme.after(toggle_theme)));

    let label = app
        .world_mut()
        .spawn((Text::new("Light"), ThemeToggleLabel))
        .id();
    let heading = app
        .world_mut()
        .spawn((TextColor(ThemePalette::DARK.text), ThemedText::Primary))
        .id();
    let card = app
        .world_mut()
        .spawn((BackgroundColor(ThemePalette::DARK.panel), ThemedPanel::Card))
        .id();

    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyT);
    app.update();

    assert_eq!(*app.world().resource::<ThemeMode>(), ThemeMode::Light);
    assert_eq!(app.world().resource::<ClearColor>().0, ThemePalette::LIGHT.background);
    assert_eq!(app.world().get::<TextColor>(heading).unwrap().0, ThemePalette::LIGHT.text);
    assert_eq!(
        app.world().get::<BackgroundColor>(card).unwrap().0,
        ThemePalette::LIGHT.panel
    );
    assert_eq!(app.world().get::<Text>(label).unwrap().0, "Dark");

    // Holding the key does not flip it back.
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    app.update();
    assert_eq!(*app.world().resource::<ThemeMode>(), ThemeMode::Light);
}

// ----------------------------------------------------------------------------
// Pointer events
// ----------------------------------------------------------------------------

fn pointer<E: Clone + std::fmt::Debug + Reflect>(event: E, entity: Entity) -> Pointer<E> {
    let location = Location {
        target: NormalizedRenderTarget::Image(Handle::<Image>::default().into()),
        position: Vec2::new(640.0, 360.0),
    };
    Pointer::new(PointerId::Mouse, location, event, entity)
}

fn hovered(app: &App) -> bool {
    app.world().resource::<HoverState>().hovered
}

#[test]
fn test_pointer_events_on_knot_bubble_to_group() {
    let mut app = App::new();
    app.init_resource::<HoverState>();

    let world = app.world_mut();
    let camera = world.spawn_empty().id();
    let group = world
        .spawn((Transform::default(), ShowcaseGroup))
        .observe(on_showcase_over)
        .observe(on_showcase_out)
        .id();
    let knot = world
        .spawn((Transform::default(), ShowcaseMesh, ChildOf(group)))
        .id();
    let stray = world.spawn(Transform::default()).id();
    let hit = HitData::new(camera, 1.0, None, None);

    app.world_mut().trigger(pointer(Over { hit: hit.clone() }, stray));
    assert!(!hovered(&app), "unrelated entity must not set hover");

    app.world_mut().trigger(pointer(Over { hit: hit.clone() }, knot));
    assert!(hovered(&app));

    app.world_mut().trigger(pointer(Out { hit: hit.clone() }, stray));
    assert!(hovered(&app), "unrelated entity must not clear hover");

    app.world_mut().trigger(pointer(Out { hit }, knot));
    assert!(!hovered(&app));
}

// ----------------------------------------------------------------------------
// Scene setup
// ----------------------------------------------------------------------------

fn setup_app() -> App {
    let mut app = App::new();
    app.insert_resource(ShowcaseSettings::default())
        .insert_resource(MeshPalette::default())
        .init_resource::<HoverState>()
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .add_systems(Startup, setup_scene);
    app.update();
    app
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn test_setup_camera_and_lights() {
    let mut app = setup_app();
    let world = app.world_mut();

    let cameras: Vec<(Transform, Projection, AmbientLight)> = world
        .query_filtered::<(&Transform, &Projection, &AmbientLight), With<MainCamera>>()
        .iter(world)
        .map(|(t, p, a)| (*t, p.clone(), a.clone()))
        .collect();
    assert_eq!(cameras.len(), 1);
    let (transform, projection, ambient) = &cameras[0];
    assert!(approx_vec(transform.translation, Vec3::new(0.0, 0.0, 6.0)));
    let Projection::Perspective(perspective) = projection else {
        panic!("scene camera should use a perspective projection");
    };
    assert!((perspective.fov - 50f32.to_radians()).abs() < 1e-5);
    assert!((ambient.brightness - 0.6 * 500.0).abs() < 1e-3);

    let directional: Vec<(DirectionalLight, Transform)> = world
        .query::<(&DirectionalLight, &Transform)>()
        .iter(world)
        .map(|(l, t)| (l.clone(), *t))
        .collect();
    assert_eq!(directional.len(), 1);
    assert!(directional[0].0.shadows_enabled);
    assert!((directional[0].0.illuminance - 10_000.0).abs() < 1e-2);
    assert!(approx_vec(directional[0].1.translation, Vec3::new(5.0, 8.0, 5.0)));

    let points: Vec<(PointLight, Transform)> = world
        .query::<(&PointLight, &Transform)>()
        .iter(world)
        .map(|(l, t)| (l.clone(), *t))
        .collect();
    assert_eq!(points.len(), 1);
    assert!((points[0].0.intensity - 0.3 * 1_000_000.0).abs() < 1.0);
    assert!(approx_vec(points[0].1.translation, Vec3::new(-10.0, -10.0, -10.0)));
}

#[test]
fn test_setup_knot_material_and_group() {
    let mut app = setup_app();
    let world = app.world_mut();

    let knots: Vec<(Handle<StandardMaterial>, Entity)> = world
        .query_filtered::<(&MeshMaterial3d<StandardMaterial>, &ChildOf), With<ShowcaseMesh>>()
        .iter(world)
        .map(|(m, c)| (m.0.clone(), c.parent()))
        .collect();
    assert_eq!(knots.len(), 1);
    let (material, group) = &knots[0];

    assert!(world.get::<ShowcaseGroup>(*group).is_some());
    assert!(world.get::<Floating>(*group).is_some());

    let material = world
        .resource::<Assets<StandardMaterial>>()
        .get(material)
        .expect("knot material exists");
    assert_eq!(material.metallic, 0.8);
    assert_eq!(material.perceptual_roughness, 0.15);
    assert_eq!(material.base_color, MeshPalette::default().idle);
}

#[test]
fn test_setup_ground_plane() {
    let mut app = setup_app();
    let world = app.world_mut();

    let grounds: Vec<(Transform, Handle<Mesh>, Pickable)> = world
        .query::<(&Name, &Transform, &Mesh3d, &Pickable)>()
        .iter(world)
        .filter(|(name, ..)| name.as_str() == "Ground")
        .map(|(_, t, m, p)| (*t, m.0.clone(), p.clone()))
        .collect();
    assert_eq!(grounds.len(), 1);
    let (transform, mesh, pickable) = &grounds[0];

    assert_eq!(transform.translation.y, -1.5);
    assert!(!pickable.is_hoverable && !pickable.should_block_lower);

    let mesh = world.resource::<Assets<Mesh>>().get(mesh).expect("ground mesh exists");
    let Some(VertexAttributeValues::Float32x3(positions)) = mesh.attribute(Mesh::ATTRIBUTE_POSITION)
    else {
        panic!("ground should have positions");
    };
    let half = positions
        .iter()
        .fold(0.0f32, |acc, p| acc.max(p[0].abs()).max(p[2].abs()));
    assert!((half - 25.0).abs() < 1e-4);
}

// ----------------------------------------------------------------------------
// Page behaviour
// ----------------------------------------------------------------------------

#[test]
fn test_page_fades_in_and_settles() {
    let mut app = App::new();
    app.init_resource::<Time>().add_systems(Update, fade_in_page);

    let entity = app
        .world_mut()
        .spawn((
            Node::default(),
            TextColor(Color::WHITE),
            FadeIn::after(0.2).rising(16.0),
        ))
        .id();

    step(&mut app, Duration::from_millis(100));
    assert_eq!(app.world().get::<TextColor>(entity).unwrap().0.alpha(), 0.0);
    assert_eq!(app.world().get::<Node>(entity).unwrap().top, Val::Px(16.0));

    step(&mut app, Duration::from_millis(350));
    let alpha = app.world().get::<TextColor>(entity).unwrap().0.alpha();
    assert!(alpha > 0.0 && alpha < 1.0, "alpha {alpha}");

    step(&mut app, Duration::from_secs(1));
    assert_eq!(app.world().get::<TextColor>(entity).unwrap().0.alpha(), 1.0);
    assert_eq!(app.world().get::<Node>(entity).unwrap().top, Val::Px(0.0));
    assert!(app.world().get::<FadeIn>(entity).is_none());
}

fn typed(c: &str) -> KeyboardInput {
    KeyboardInput {
        key_code: KeyCode::KeyA,
        logical_key: Key::Character(c.into()),
        state: ButtonState::Pressed,
        text: Some(c.into()),
        repeat: false,
        window: Entity::PLACEHOLDER,
    }
}

fn field_text(app: &App, text: Entity) -> (String, ThemedText) {
    (
        app.world().get::<Text>(text).unwrap().0.clone(),
        *app.world().get::<ThemedText>(text).unwrap(),
    )
}

#[test]
fn test_contact_form_typing() {
    let mut app = App::new();
    app.init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<FocusedField>()
        .insert_resource(ThemeMode::Dark)
        .insert_resource(ClearColor(ThemePalette::DARK.background))
        .add_message::<KeyboardInput>()
        .add_systems(
            Update,
            (focus_form_fields, type_into_form, toggle_theme, apply_theme, render_form_fields).chain(),
        );

    let field = app
        .world_mut()
        .spawn((Interaction::Pressed, FormField::new("Email", false)))
        .id();
    let text = app
        .world_mut()
        .spawn((
            Text::new("Email"),
            TextColor(ThemePalette::DARK.muted_text),
            ThemedText::Muted,
            FormFieldText,
            ChildOf(field),
        ))
        .id();

    app.update();
    assert_eq!(app.world().resource::<FocusedField>().0, Some(field));
    assert_eq!(field_text(&app, text), ("|".to_string(), ThemedText::Primary));

    // `t` goes into the field instead of flipping the theme.
    for c in ["h", "i", "t"] {
        app.world_mut().write_message(typed(c));
    }
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyT);
    app.update();
    assert_eq!(app.world().get::<FormField>(field).unwrap().value, "hit");
    assert_eq!(*app.world().resource::<ThemeMode>(), ThemeMode::Dark);

    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(KeyCode::KeyT);
    keys.clear();
    keys.press(KeyCode::Backspace);
    app.update();
    assert_eq!(field_text(&app, text).0, "hi|");

    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(KeyCode::Backspace);
    keys.clear();
    keys.press(KeyCode::Escape);
    app.update();
    assert_eq!(app.world().resource::<FocusedField>().0, None);
    assert_eq!(field_text(&app, text), ("hi".to_string(), ThemedText::Primary));

    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(KeyCode::Escape);
    keys.clear();
    keys.press(KeyCode::KeyT);
    app.update();
    assert_eq!(*app.world().resource::<ThemeMode>(), ThemeMode::Light);
}

#[test]
fn test_wheel_scrolls_page_column_only_over_it() {
    let mut app = App::new();
    app.init_resource::<SceneViewport>()
        .init_resource::<AccumulatedMouseScroll>()
        .add_systems(Update, scroll_page_column);

    let mut window = Window::default();
    window.set_cursor_position(Some(Vec2::new(100.0, 300.0)));
    let window = app.world_mut().spawn((window, PrimaryWindow)).id();
    let column = app
        .world_mut()
        .spawn((ScrollPosition::default(), HeroColumn))
        .id();
    let offset = |app: &App| app.world().get::<ScrollPosition>(column).unwrap().0.y;

    app.world_mut().resource_mut::<AccumulatedMouseScroll>().delta = Vec2::new(0.0, -3.0);
    app.update();
    assert_eq!(offset(&app), 3.0 * SCROLL_LINE_HEIGHT);

    app.world_mut().resource_mut::<AccumulatedMouseScroll>().delta = Vec2::new(0.0, 5.0);
    app.update();
    assert_eq!(offset(&app), 0.0);

    // Over the scene the wheel belongs to the orbit camera.
    app.world_mut()
        .get_mut::<Window>(window)
        .unwrap()
        .set_cursor_position(Some(Vec2::new(1000.0, 400.0)));
    app.world_mut().resource_mut::<AccumulatedMouseScroll>().delta = Vec2::new(0.0, -3.0);
    app.update();
    assert_eq!(offset(&app), 0.0);
}
