//! Hover handling for the showcase group.
//!
//! Pointer-over / pointer-out observers flip `HoverState`; presentation
//! systems follow the flag in the same frame.

use bevy::picking::events::{Out, Over, Pointer};
use bevy::prelude::*;

use crate::showcase::types::*;

pub fn on_showcase_over(_over: On<Pointer<Over>>, mut hover: ResMut<HoverState>) {
    if hover.set_if_neq(HoverState { hovered: true }) {
        debug!("Pointer entered showcase");
    }
}

pub fn on_showcase_out(_out: On<Pointer<Out>>, mut hover: ResMut<HoverState>) {
    if hover.set_if_neq(HoverState { hovered: false }) {
        debug!("Pointer left showcase");
    }
}

/// Swap the knot's surface colour when the hover flag (or palette) changes.
pub fn apply_hover_color(
    hover: Res<HoverState>,
    palette: Res<MeshPalette>,
    mesh_query: Query<&MeshMaterial3d<StandardMaterial>, With<ShowcaseMesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !hover.is_changed() && !palette.is_changed() {
        return;
    }

    let color = palette.color_for(hover.hovered);
    for mat_handle in &mesh_query {
        let Some(material) = materials.get_mut(mat_handle) else {
            continue;
        };
        material.base_color = color;
    }
}

/// Keep the caption overlay in step with the hover flag.
pub fn update_hover_caption(
    hover: Res<HoverState>,
    mut texts: Query<&mut Text, With<HoverCaptionText>>,
    mut dots: Query<&mut BackgroundColor, With<HoverCaptionDot>>,
) {
    if !hover.is_changed() {
        return;
    }

    for mut text in texts.iter_mut() {
        text.0 = hover_caption(hover.hovered).to_string();
    }
    for mut dot in dots.iter_mut() {
        dot.0 = hover_dot_color(hover.hovered);
    }
}
