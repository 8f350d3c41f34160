pub mod torus_knot;

use bevy::prelude::*;

pub use torus_knot::{create_torus_knot, TorusKnot};

/// Flat square ground, facing up.
pub fn create_ground(size: f32) -> Mesh {
    Mesh::from(Plane3d::default().mesh().size(size, size))
}
