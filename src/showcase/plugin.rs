//! Wires resources and systems of the showcase into a Bevy app.

use bevy::picking::mesh_picking::{MeshPickingPlugin, MeshPickingSettings};
use bevy::prelude::*;

use crate::showcase::systems::*;
use crate::showcase::types::*;

pub struct ShowcasePlugin {
    pub settings: ShowcaseSettings,
    /// Where the settings came from, for the startup log.
    pub source: SettingsSource,
}

impl ShowcasePlugin {
    pub fn new(settings: ShowcaseSettings, source: SettingsSource) -> Self {
        Self { settings, source }
    }
}

impl Plugin for ShowcasePlugin {
    fn build(&self, app: &mut App) {
        self.settings.log_summary(&self.source);

        let palette = MeshPalette::from_settings(&self.settings).unwrap_or_else(|e| {
            warn!("{e}");
            MeshPalette::default()
        });

        if !app.is_plugin_added::<MeshPickingPlugin>() {
            app.add_plugins(MeshPickingPlugin);
        }

        app
            // Only the knot and the scene camera take part in mesh picking.
            .insert_resource(MeshPickingSettings {
                require_markers: true,
                ..default()
            })
            .insert_resource(self.settings.clone())
            .insert_resource(palette)
            .insert_resource(self.settings.theme)
            .insert_resource(ClearColor(self.settings.theme.palette().background))
            .insert_resource(PortfolioContent::load())
            .init_resource::<HoverState>()
            .init_resource::<SceneViewport>()
            .init_resource::<FocusedField>()
            .add_systems(Startup, (setup_scene, setup_page))
            .add_systems(
                Update,
                (
                    fit_scene_viewport,
                    orbit_camera.after(fit_scene_viewport),
                    scroll_page_column.after(fit_scene_viewport),
                    follow_section_links,
                    follow_external_links,
                    spin_showcase_mesh,
                    float_showcase_group,
                    apply_hover_color,
                    update_hover_caption,
                ),
            )
            .add_systems(
                Update,
                (
                    focus_form_fields,
                    type_into_form,
                    press_send_message,
                    toggle_theme,
                    apply_theme,
                    render_form_fields,
                    fade_in_page,
                )
                    .chain(),
            );
    }
}
