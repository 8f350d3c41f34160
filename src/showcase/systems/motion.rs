//! Per-frame motion of the showcase: the knot's spin and the group's float.

use bevy::prelude::*;

use crate::showcase::types::*;

/// Advance the knot's rotation by `dt * rate` on X and Y.
pub fn spin_showcase_mesh(
    time: Res<Time>,
    settings: Res<ShowcaseSettings>,
    mut query: Query<(&mut Spin, &mut Transform), With<ShowcaseMesh>>,
) {
    let dt = time.delta_secs();
    for (mut spin, mut transform) in query.iter_mut() {
        spin.advance(dt, &settings.spin);
        transform.rotation = spin.rotation();
    }
}

/// Bob and wobble the group from the elapsed clock.
pub fn float_showcase_group(time: Res<Time>, mut query: Query<(&Floating, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (floating, mut transform) in query.iter_mut() {
        *transform = floating.transform_at(elapsed);
    }
}
