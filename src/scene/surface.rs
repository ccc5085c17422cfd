//! Water Surface Simulator
//!
//! A regular vertex grid whose z displacement is recomputed every frame
//! from the animation clock: `z = sin(2t + x·0.5) · 0.1`. Displacement is
//! bounded to ±[`WAVE_AMPLITUDE`] by construction and is never persisted;
//! the surface state is fully determined by `t`.
//!
//! Vertex normals are recomputed after every displacement pass so the
//! surface still shades correctly, unconditionally each frame.

use std::borrow::Cow;

use glam::{Affine3A, Quat, Vec3};

use crate::render::backend::{MaterialDescriptor, MeshDescriptor, ShapeDescriptor};
use crate::utils::hex_color;

/// Side length of the water plane in world units.
pub const SURFACE_SIZE: f32 = 20.0;
/// Grid subdivisions per side (33×33 vertices).
pub const SURFACE_SEGMENTS: u32 = 32;
/// Peak vertical displacement of the wave.
pub const WAVE_AMPLITUDE: f32 = 0.1;
/// Temporal frequency of the wave, radians per second.
pub const WAVE_SPEED: f32 = 2.0;
/// Spatial frequency of the wave along x.
pub const WAVE_SCALE: f32 = 0.5;

const WATER_COLOR: u32 = 0x0069_94;

/// The procedurally displaced water grid.
///
/// Vertices live in the plane's local space (x right, y across, z up out
/// of the plane); [`transform`](Self::transform) places the plane
/// horizontally at y = −1 in the world.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u16>,
}

impl Default for SurfaceMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceMesh {
    /// Builds the flat grid at rest (`t` never advanced).
    #[must_use]
    pub fn new() -> Self {
        let half = SURFACE_SIZE / 2.0;
        let grid = SURFACE_SEGMENTS;
        let grid1 = grid + 1;
        let step = SURFACE_SIZE / grid as f32;

        let mut positions = Vec::with_capacity((grid1 * grid1) as usize);
        let mut normals = Vec::with_capacity((grid1 * grid1) as usize);

        for iy in 0..grid1 {
            let y = iy as f32 * step - half;
            for ix in 0..grid1 {
                let x = ix as f32 * step - half;
                positions.push([x, y, 0.0]);
                normals.push([0.0, 0.0, 1.0]);
            }
        }

        let mut indices = Vec::with_capacity((grid * grid * 6) as usize);
        for iy in 0..grid {
            for ix in 0..grid {
                let a = ix + grid1 * iy;
                let b = ix + grid1 * (iy + 1);
                let c = (ix + 1) + grid1 * (iy + 1);
                let d = (ix + 1) + grid1 * iy;

                indices.push(a as u16);
                indices.push(b as u16);
                indices.push(d as u16);

                indices.push(b as u16);
                indices.push(c as u16);
                indices.push(d as u16);
            }
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Recomputes every vertex displacement for elapsed time `t`, then
    /// refreshes the vertex normals.
    pub fn advance(&mut self, t: f32) {
        for p in &mut self.positions {
            p[2] = (t * WAVE_SPEED + p[0] * WAVE_SCALE).sin() * WAVE_AMPLITUDE;
        }
        self.compute_vertex_normals();
    }

    /// Area-weighted face-normal accumulation, then normalization.
    fn compute_vertex_normals(&mut self) {
        for n in &mut self.normals {
            *n = [0.0, 0.0, 0.0];
        }

        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let a = Vec3::from(self.positions[ia]);
            let b = Vec3::from(self.positions[ib]);
            let c = Vec3::from(self.positions[ic]);
            let face = (b - a).cross(c - a);

            for idx in [ia, ib, ic] {
                self.normals[idx][0] += face.x;
                self.normals[idx][1] += face.y;
                self.normals[idx][2] += face.z;
            }
        }

        for n in &mut self.normals {
            let v = Vec3::from(*n);
            // Degenerate accumulation falls back to the flat normal.
            *n = if v.length_squared() > 0.0 {
                v.normalize().to_array()
            } else {
                [0.0, 0.0, 1.0]
            };
        }
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Static world placement: rotated flat (−π/2 about x) at y = −1.
    #[must_use]
    pub fn transform(&self) -> Affine3A {
        Affine3A::from_rotation_translation(
            Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
            Vec3::new(0.0, -1.0, 0.0),
        )
    }

    /// Backend descriptor: translucent water that receives shadows.
    #[must_use]
    pub fn descriptor(&self) -> MeshDescriptor {
        MeshDescriptor {
            name: Cow::Borrowed("water_surface"),
            shape: ShapeDescriptor::Plane {
                width: SURFACE_SIZE,
                height: SURFACE_SIZE,
                width_segments: SURFACE_SEGMENTS,
                height_segments: SURFACE_SEGMENTS,
            },
            material: MaterialDescriptor {
                color: hex_color(WATER_COLOR),
                opacity: 0.7,
                roughness: 0.1,
                metalness: 0.1,
            },
            cast_shadows: false,
            receive_shadows: true,
        }
    }
}
