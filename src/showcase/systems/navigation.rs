//! Page navigation
//!
//! Header and hero links scroll the page column to their section; the mouse
//! wheel scrolls it directly while the cursor is over it.

use bevy::input::mouse::{AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform};
use bevy::window::PrimaryWindow;

use crate::showcase::types::*;

/// Logical pixels scrolled per wheel line.
pub const SCROLL_LINE_HEIGHT: f32 = 40.0;

/// Scroll the page column when a section link is pressed.
pub fn follow_section_links(
    links: Query<(&Interaction, &SectionLink), Changed<Interaction>>,
    sections: Query<(&PageSection, &ComputedNode, &UiGlobalTransform)>,
    mut columns: Query<
        (&mut ScrollPosition, &ComputedNode, &UiGlobalTransform),
        (With<HeroColumn>, Without<PageSection>),
    >,
) {
    for (interaction, link) in links.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }

        let Some((_, section_node, section_transform)) =
            sections.iter().find(|(section, _, _)| **section == link.0)
        else {
            warn!("No {:?} section on the page", link.0);
            continue;
        };

        for (mut scroll, column_node, column_transform) in columns.iter_mut() {
            let section_top = section_transform.translation.y - section_node.size().y * 0.5;
            let column_top = column_transform.translation.y - column_node.size().y * 0.5;
            scroll.0.y = section_scroll_target(
                scroll.0.y,
                section_top,
                column_top,
                column_node.inverse_scale_factor(),
            );
            debug!("Scrolled to {:?} ({}px)", link.0, scroll.0.y);
        }
    }
}

/// Wheel scrolling for the page column. The scene keeps the wheel for zoom.
pub fn scroll_page_column(
    scroll: Res<AccumulatedMouseScroll>,
    viewport: Res<SceneViewport>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut columns: Query<&mut ScrollPosition, With<HeroColumn>>,
) {
    if scroll.delta.y == 0.0 {
        return;
    }
    let Some(cursor) = windows.single().ok().and_then(|window| window.cursor_position()) else {
        return;
    };
    if !viewport.hero_rect().contains(cursor) {
        return;
    }

    let pixels = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y * SCROLL_LINE_HEIGHT,
        MouseScrollUnit::Pixel => scroll.delta.y,
    };
    for mut position in columns.iter_mut() {
        // Layout clamps the far end to the content height.
        position.0.y = (position.0.y - pixels).max(0.0);
    }
}

/// Links leaving the page. There is no browser to hand them to, so the
/// target is logged; `#` placeholders do nothing.
pub fn follow_external_links(links: Query<(&Interaction, &ExternalLink), Changed<Interaction>>) {
    for (interaction, link) in links.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if link.is_placeholder() {
            debug!("{} has no target yet", link.label);
        } else {
            info!("{}: {}", link.label, link.url);
        }
    }
}
