//! Headless Recording Backend
//!
//! A [`RenderBackend`] that records every call instead of touching a GPU.
//! It serves two purposes: the no-graphics fallback path on hosts without a
//! usable GPU context, and the test double the integration suite inspects
//! to verify what the core pushed each frame.

use glam::{Affine3A, Mat4, Vec3};
use slotmap::SlotMap;

use crate::errors::{Result, VizError};
use crate::render::backend::{
    BackendOptions, LightHandle, MeshDescriptor, MeshHandle, RenderBackend,
};
use crate::scene::light::Light;

/// Recorded state of one mesh.
#[derive(Debug, Clone)]
pub struct MeshRecord {
    pub descriptor: MeshDescriptor,
    pub transform: Affine3A,
    /// Number of vertex uploads received via `update_mesh_vertices`.
    pub vertex_uploads: u64,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

/// Recorded state of one light.
#[derive(Debug, Clone)]
pub struct LightRecord {
    pub color: Vec3,
    pub intensity: f32,
    pub cast_shadows: bool,
}

/// In-memory backend that records draw state. See the module docs.
#[derive(Debug)]
pub struct HeadlessBackend {
    options: BackendOptions,
    available: bool,
    fail_creations: u32,
    fail_renders: u32,

    meshes: SlotMap<MeshHandle, MeshRecord>,
    lights: SlotMap<LightHandle, LightRecord>,
    background: Vec3,
    camera: Option<(Mat4, Mat4)>,
    size: (u32, u32),
    frames_rendered: u64,
    disposals: u32,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new(BackendOptions::default())
    }
}

impl HeadlessBackend {
    /// Creates an available backend with the given output options.
    #[must_use]
    pub fn new(options: BackendOptions) -> Self {
        Self {
            options,
            available: true,
            fail_creations: 0,
            fail_renders: 0,
            meshes: SlotMap::with_key(),
            lights: SlotMap::with_key(),
            background: Vec3::ZERO,
            camera: None,
            size: (0, 0),
            frames_rendered: 0,
            disposals: 0,
        }
    }

    /// Creates a backend whose every resource creation fails, standing in
    /// for a host without the graphics capability.
    #[must_use]
    pub fn unavailable() -> Self {
        let mut backend = Self::new(BackendOptions::default());
        backend.available = false;
        backend
    }

    /// Makes the next `n` resource creations fail, then recover.
    pub fn fail_next_creations(&mut self, n: u32) {
        self.fail_creations = n;
    }

    /// Makes the next `n` render calls fail, then recover.
    pub fn fail_next_renders(&mut self, n: u32) {
        self.fail_renders = n;
    }

    fn check_creation(&mut self) -> Result<()> {
        if !self.available {
            return Err(VizError::BackendUnavailable(
                "graphics capability not present".into(),
            ));
        }
        if self.fail_creations > 0 {
            self.fail_creations -= 1;
            return Err(VizError::BackendUnavailable(
                "injected resource creation failure".into(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    #[must_use]
    pub fn options(&self) -> BackendOptions {
        self.options
    }

    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    #[must_use]
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    #[must_use]
    pub fn mesh(&self, handle: MeshHandle) -> Option<&MeshRecord> {
        self.meshes.get(handle)
    }

    #[must_use]
    pub fn light(&self, handle: LightHandle) -> Option<&LightRecord> {
        self.lights.get(handle)
    }

    /// Finds a mesh record by descriptor name.
    #[must_use]
    pub fn mesh_by_name(&self, name: &str) -> Option<&MeshRecord> {
        self.meshes.values().find(|m| m.descriptor.name == name)
    }

    #[must_use]
    pub fn background(&self) -> Vec3 {
        self.background
    }

    /// Last `(view, projection)` pair pushed, if any.
    #[must_use]
    pub fn camera(&self) -> Option<(Mat4, Mat4)> {
        self.camera
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Number of `dispose` calls that actually released resources.
    #[must_use]
    pub fn disposals(&self) -> u32 {
        self.disposals
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_mesh(&mut self, desc: &MeshDescriptor) -> Result<MeshHandle> {
        self.check_creation()?;
        Ok(self.meshes.insert(MeshRecord {
            descriptor: desc.clone(),
            transform: Affine3A::IDENTITY,
            vertex_uploads: 0,
            positions: Vec::new(),
            normals: Vec::new(),
        }))
    }

    fn create_light(&mut self, light: &Light) -> Result<LightHandle> {
        self.check_creation()?;
        Ok(self.lights.insert(LightRecord {
            color: light.color,
            intensity: light.intensity,
            cast_shadows: light.cast_shadows,
        }))
    }

    fn set_background(&mut self, color: Vec3) {
        self.background = color;
    }

    fn set_mesh_transform(&mut self, mesh: MeshHandle, transform: Affine3A) {
        if let Some(record) = self.meshes.get_mut(mesh) {
            record.transform = transform;
        }
    }

    fn update_mesh_vertices(
        &mut self,
        mesh: MeshHandle,
        positions: &[[f32; 3]],
        normals: &[[f32; 3]],
    ) {
        if let Some(record) = self.meshes.get_mut(mesh) {
            record.vertex_uploads += 1;
            record.positions = positions.to_vec();
            record.normals = normals.to_vec();
        }
    }

    fn set_camera(&mut self, view: Mat4, projection: Mat4) {
        self.camera = Some((view, projection));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn render(&mut self) -> Result<()> {
        if self.fail_renders > 0 {
            self.fail_renders -= 1;
            return Err(VizError::BackendUnavailable(
                "injected render failure".into(),
            ));
        }
        self.frames_rendered += 1;
        Ok(())
    }

    fn dispose(&mut self) {
        if self.meshes.is_empty() && self.lights.is_empty() {
            return;
        }
        self.meshes.clear();
        self.lights.clear();
        self.camera = None;
        self.disposals += 1;
    }
}
