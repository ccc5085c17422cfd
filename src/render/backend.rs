//! Rendering Backend Abstraction
//!
//! The viewer core never talks to a GPU directly. It drives an abstract
//! [`RenderBackend`] — mesh/light primitives, camera state, an output
//! surface — supplied by the host's graphics library. This module specifies
//! how the backend is driven, not how it is implemented.
//!
//! Backends hand out slotmap keys for every resource they create; the
//! [`SceneContext`](crate::scene::SceneContext) is the sole owner of those
//! handles for its entire lifetime.

use std::borrow::Cow;

use glam::{Affine3A, Mat4, Vec3};

use crate::errors::Result;
use crate::scene::light::Light;

slotmap::new_key_type! {
    /// Handle to a backend-owned mesh resource.
    pub struct MeshHandle;
    /// Handle to a backend-owned light resource.
    pub struct LightHandle;
}

/// Output-surface options requested from the backend at creation time.
#[derive(Debug, Clone, Copy)]
pub struct BackendOptions {
    pub antialias: bool,
    /// Transparent output surface (the viewer composites over the page).
    pub alpha: bool,
    /// Soft shadow maps for the directional light.
    pub shadow_maps: bool,
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            antialias: true,
            alpha: true,
            shadow_maps: true,
        }
    }
}

/// Primitive shapes the scene is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDescriptor {
    Cylinder {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Sphere {
        radius: f32,
        segments: u32,
    },
    /// A subdivided plane whose vertices the core updates every frame.
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

/// Standard-material parameters, the subset this scene needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialDescriptor {
    pub color: Vec3,
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
}

impl MaterialDescriptor {
    /// Opaque matte material of the given color.
    #[must_use]
    pub fn matte(color: Vec3) -> Self {
        Self {
            color,
            opacity: 1.0,
            roughness: 0.8,
            metalness: 0.0,
        }
    }
}

/// Everything a backend needs to create one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshDescriptor {
    pub name: Cow<'static, str>,
    pub shape: ShapeDescriptor,
    pub material: MaterialDescriptor,
    pub cast_shadows: bool,
    pub receive_shadows: bool,
}

/// The abstract rendering capability the viewer core drives.
///
/// One frame is drawn by pushing the current camera, mesh transforms and
/// surface vertices, then calling [`render`](Self::render). All methods are
/// called from the single rendering thread; implementations need no
/// internal locking.
pub trait RenderBackend {
    /// Creates a mesh resource. Fails if the graphics capability is
    /// unavailable or resource creation fails.
    fn create_mesh(&mut self, desc: &MeshDescriptor) -> Result<MeshHandle>;

    /// Creates a light resource.
    fn create_light(&mut self, light: &Light) -> Result<LightHandle>;

    /// Sets the scene clear/background color.
    fn set_background(&mut self, color: Vec3);

    /// Overwrites the world transform of a mesh.
    fn set_mesh_transform(&mut self, mesh: MeshHandle, transform: Affine3A);

    /// Replaces the vertex positions and normals of a mesh, in its local
    /// space. Used for the per-frame water displacement.
    fn update_mesh_vertices(
        &mut self,
        mesh: MeshHandle,
        positions: &[[f32; 3]],
        normals: &[[f32; 3]],
    );

    /// Sets the view and projection matrices for subsequent frames.
    fn set_camera(&mut self, view: Mat4, projection: Mat4);

    /// Resizes the output surface to the given logical dimensions.
    fn resize(&mut self, width: u32, height: u32);

    /// Draws one frame with the current state.
    fn render(&mut self) -> Result<()>;

    /// Releases every resource this backend owns. Must be idempotent;
    /// calling it on a backend that never created anything is a no-op.
    fn dispose(&mut self);
}
