//! Viewport Resize Adapter
//!
//! Reacts to mount-surface size changes: updates the camera's aspect ratio
//! and resizes the backend output. The host's ambient resize event is
//! modeled as an explicit subscription owned here, activated when scene
//! initialization completes and deactivated during teardown.

use log::debug;

use crate::render::backend::RenderBackend;
use crate::scene::context::SceneContext;

/// Minimum logical height substituted when the mount surface reports a
/// zero or unavailable height.
pub const FALLBACK_HEIGHT: u32 = 600;

/// The drawable surface the viewer is mounted on, as seen from the core.
///
/// The host owns the actual surface; the core only reads its size and, in
/// the initialization-failure path, asks it to show a static message in
/// place of the viewport.
pub trait MountSurface {
    /// Current logical size. A zero height means "unavailable"; resize
    /// handling substitutes [`FALLBACK_HEIGHT`].
    fn size(&self) -> (u32, u32);

    /// Replaces the viewport with a static fallback message.
    fn show_fallback(&mut self, message: &str);
}

/// Resize subscription state plus the projection/output update it applies.
#[derive(Debug, Default)]
pub struct ResizeAdapter {
    active: bool,
}

impl ResizeAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to host resize notifications. Called once scene
    /// initialization has completed.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Drops the subscription during teardown.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Applies one resize notification: camera aspect from the mount's
    /// current size (height falling back to [`FALLBACK_HEIGHT`]) and a
    /// matching backend output resize. Ignored while inactive.
    pub fn apply<B: RenderBackend>(
        &self,
        mount: &dyn MountSurface,
        scene: &mut SceneContext,
        backend: &mut B,
    ) {
        if !self.active {
            debug!("resize before initialization completed; ignored");
            return;
        }

        let (width, height) = mount.size();
        let width = width.max(1);
        let height = if height == 0 { FALLBACK_HEIGHT } else { height };

        scene.camera.set_aspect(width as f32 / height as f32);
        backend.resize(width, height);
    }
}
