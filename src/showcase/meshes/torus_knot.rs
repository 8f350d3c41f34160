use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy_mesh::{Indices, Mesh, PrimitiveTopology};
use std::f32::consts::TAU;

use crate::showcase::types::{MeshSetting, MAX_SEGMENTS, MAX_WINDING};

/// Parameters of a (p, q) torus knot tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusKnot {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    pub p: u32,
    pub q: u32,
}

impl Default for TorusKnot {
    fn default() -> Self {
        Self {
            radius: 0.9,
            tube: 0.35,
            tubular_segments: 256,
            radial_segments: 32,
            p: 2,
            q: 3,
        }
    }
}

impl From<&MeshSetting> for TorusKnot {
    fn from(setting: &MeshSetting) -> Self {
        Self {
            radius: setting.radius,
            tube: setting.tube,
            tubular_segments: setting.tubular_segments,
            radial_segments: setting.radial_segments,
            p: setting.p,
            q: setting.q,
        }
        .clamped()
    }
}

impl TorusKnot {
    /// Same knot with segment counts in `3..=MAX_SEGMENTS` and windings in
    /// `1..=MAX_WINDING`.
    pub fn clamped(self) -> Self {
        Self {
            tubular_segments: self.tubular_segments.clamp(3, MAX_SEGMENTS),
            radial_segments: self.radial_segments.clamp(3, MAX_SEGMENTS),
            p: self.p.clamp(1, MAX_WINDING),
            q: self.q.clamp(1, MAX_WINDING),
            ..self
        }
    }

    pub fn vertex_count(&self) -> usize {
        let knot = self.clamped();
        (knot.tubular_segments as usize + 1) * (knot.radial_segments as usize + 1)
    }

    pub fn index_count(&self) -> usize {
        let knot = self.clamped();
        knot.tubular_segments as usize * knot.radial_segments as usize * 6
    }

    /// Point on the knot's centre curve at parameter `u` (0..p*2π).
    pub fn curve_point(&self, u: f32) -> Vec3 {
        let (su, cu) = u.sin_cos();
        let qu_over_p = self.q as f32 / self.p as f32 * u;
        let cs = qu_over_p.cos();
        Vec3::new(
            self.radius * (2.0 + cs) * 0.5 * cu,
            self.radius * (2.0 + cs) * 0.5 * su,
            self.radius * qu_over_p.sin() * 0.5,
        )
    }

    pub fn mesh(&self) -> Mesh {
        let knot = self.clamped();
        let tubular = knot.tubular_segments;
        let radial = knot.radial_segments;

        let mut positions = Vec::with_capacity(knot.vertex_count());
        let mut normals = Vec::with_capacity(knot.vertex_count());
        let mut uvs = Vec::with_capacity(knot.vertex_count());

        for j in 0..=tubular {
            let u = j as f32 / tubular as f32 * knot.p as f32 * TAU;
            let p1 = knot.curve_point(u);
            let p2 = knot.curve_point(u + 0.01);

            // Frame along the curve: tangent, then binormal and normal.
            let tangent = p2 - p1;
            let binormal = tangent.cross(p2 + p1).normalize_or_zero();
            let normal = binormal.cross(tangent).normalize_or_zero();

            for i in 0..=radial {
                let v = i as f32 / radial as f32 * TAU;
                let cx = -knot.tube * v.cos();
                let cy = knot.tube * v.sin();
                let vertex = p1 + normal * cx + binormal * cy;

                positions.push(vertex.to_array());
                normals.push((vertex - p1).normalize_or_zero().to_array());
                uvs.push([i as f32 / radial as f32, j as f32 / tubular as f32]);
            }
        }

        let mut indices = Vec::with_capacity(knot.index_count());
        let stride = radial + 1;
        for j in 1..=tubular {
            for i in 1..=radial {
                let a = stride * (j - 1) + (i - 1);
                let b = stride * j + (i - 1);
                let c = stride * j + i;
                let d = stride * (j - 1) + i;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
    }
}

pub fn create_torus_knot(setting: &MeshSetting) -> Mesh {
    TorusKnot::from(setting).mesh()
}
