//! Scene Context
//!
//! [`SceneContext`] composes the rig, the water surface, the camera, the
//! lights and the background into a renderable frame, and owns every
//! graphics-resource handle the backend hands out. No other component
//! touches those handles, so there is no locking anywhere in the core.

use glam::Vec3;
use log::{debug, info};

use crate::errors::{Result, VizError};
use crate::kinematics::pose::Joint;
use crate::render::backend::{LightHandle, MeshHandle, RenderBackend};
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::rig::Rig;
use crate::scene::surface::SurfaceMesh;
use crate::utils::hex_color;

const SKY_COLOR: u32 = 0x87ceeb;

/// Viewer lifecycle. `Error` is terminal and only reachable from
/// `Initializing`; nothing leaves `Disposed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Initializing,
    Running,
    Disposed,
    Error,
}

impl Lifecycle {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Lifecycle::Uninitialized => "uninitialized",
            Lifecycle::Initializing => "initializing",
            Lifecycle::Running => "running",
            Lifecycle::Disposed => "disposed",
            Lifecycle::Error => "error",
        }
    }
}

/// Backend handles owned by an initialized context.
struct SceneHandles {
    lights: Vec<LightHandle>,
    parts: [MeshHandle; 6],
    surface: MeshHandle,
}

/// Owner of everything that makes up one renderable frame.
pub struct SceneContext {
    pub background: Vec3,
    pub camera: Camera,
    pub rig: Rig,
    pub surface: SurfaceMesh,

    ambient: Light,
    sun: Light,
    handles: Option<SceneHandles>,
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneContext {
    /// Creates the scene description. No backend resources are acquired
    /// until [`initialize`](Self::initialize).
    #[must_use]
    pub fn new() -> Self {
        let white = Vec3::ONE;
        Self {
            background: hex_color(SKY_COLOR),
            camera: Camera::new_perspective(75.0, 1.0, 0.1, 1000.0),
            rig: Rig::new(),
            surface: SurfaceMesh::new(),
            ambient: Light::new_ambient(white, 0.6),
            sun: Light::new_directional(white, 0.8, Vec3::new(5.0, 10.0, 5.0)).with_shadows(),
            handles: None,
        }
    }

    /// Whether backend resources are currently held.
    #[inline]
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.handles.is_some()
    }

    /// Creates all owned backend resources sized to the mount surface.
    ///
    /// Fails if the mount has zero extent or any backend resource cannot be
    /// created; partially created resources are released before returning.
    pub fn initialize<B: RenderBackend>(
        &mut self,
        backend: &mut B,
        width: u32,
        height: u32,
    ) -> Result<()> {
        if self.handles.is_some() {
            return Err(VizError::InvalidState {
                expected: "uninitialized scene",
                actual: "initialized scene",
            });
        }
        if width == 0 || height == 0 {
            return Err(VizError::InitializationFailure {
                reason: format!("mount surface has zero extent ({width}x{height})"),
            });
        }

        match self.create_resources(backend) {
            Ok(handles) => {
                self.handles = Some(handles);
            }
            Err(err) => {
                // Roll back whatever the backend did manage to create.
                backend.dispose();
                return Err(err);
            }
        }

        backend.set_background(self.background);
        backend.resize(width, height);
        self.camera.set_aspect(width as f32 / height as f32);

        info!("Scene initialized ({width}x{height})");
        Ok(())
    }

    fn create_resources<B: RenderBackend>(&self, backend: &mut B) -> Result<SceneHandles> {
        let lights = vec![
            backend.create_light(&self.ambient)?,
            backend.create_light(&self.sun)?,
        ];

        let mut parts = [MeshHandle::default(); 6];
        for (slot, part) in parts.iter_mut().zip(self.rig.parts()) {
            *slot = backend.create_mesh(&part.descriptor())?;
        }

        let surface = backend.create_mesh(&self.surface.descriptor())?;
        backend.set_mesh_transform(surface, self.surface.transform());

        Ok(SceneHandles {
            lights,
            parts,
            surface,
        })
    }

    /// Draws one frame from the current camera, rig and surface state.
    pub fn render<B: RenderBackend>(&mut self, backend: &mut B) -> Result<()> {
        let Some(handles) = &self.handles else {
            return Err(VizError::InvalidState {
                expected: "initialized scene",
                actual: "uninitialized scene",
            });
        };

        backend.set_camera(self.camera.view_matrix(), self.camera.projection_matrix());

        for (handle, joint) in handles.parts.iter().zip(Joint::ALL) {
            backend.set_mesh_transform(*handle, self.rig.part_transform(joint));
        }

        backend.update_mesh_vertices(
            handles.surface,
            self.surface.positions(),
            self.surface.normals(),
        );

        backend.render()
    }

    /// Releases every owned backend resource. Idempotent: a second call,
    /// or a call on a never-initialized context, is a no-op.
    pub fn dispose<B: RenderBackend>(&mut self, backend: &mut B) {
        if let Some(handles) = self.handles.take() {
            debug!(
                "releasing {} lights and {} meshes",
                handles.lights.len(),
                handles.parts.len() + 1
            );
            backend.dispose();
            info!("Scene disposed");
        } else {
            debug!("dispose() on a context holding no resources; nothing to do");
        }
    }

    #[must_use]
    pub fn ambient_light(&self) -> &Light {
        &self.ambient
    }

    #[must_use]
    pub fn sun_light(&self) -> &Light {
        &self.sun
    }
}
