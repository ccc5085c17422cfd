//! Viewer Facade
//!
//! [`StrokeViewer`] is the boundary surface the hosting page talks to:
//! lifecycle entry points (`initialize` / `teardown`), stroke selection,
//! the frame-callback entry (`tick`) and resize notifications. Everything
//! else in the crate sits behind it.
//!
//! Initialization failures never propagate to the host: the viewer retries
//! once, then settles in the `Error` state and renders a static fallback
//! message in place of the viewport.

pub mod scheduler;
pub mod viewport;

pub use scheduler::{RenderScheduler, SchedulerState, TickDriver, TickHandle};
pub use viewport::{FALLBACK_HEIGHT, MountSurface, ResizeAdapter};

use log::{debug, error, info, warn};

use crate::kinematics::strokes::StrokeType;
use crate::render::backend::RenderBackend;
use crate::scene::context::{Lifecycle, SceneContext};

/// Message shown in place of the viewport when initialization fails for
/// good.
pub const FALLBACK_MESSAGE: &str =
    "Unable to load the 3D stroke viewer: the rendering backend is unavailable.";

/// The interactive 3D swim-stroke viewer.
///
/// Single-threaded and cooperatively scheduled: all work runs on the
/// host's rendering thread, driven by the tick driver's frame callback.
pub struct StrokeViewer<B: RenderBackend, D: TickDriver> {
    backend: B,
    driver: D,
    scene: SceneContext,
    scheduler: RenderScheduler,
    resize: ResizeAdapter,
    stroke: StrokeType,
    lifecycle: Lifecycle,
}

impl<B: RenderBackend, D: TickDriver> StrokeViewer<B, D> {
    /// Creates an uninitialized viewer showing freestyle by default.
    #[must_use]
    pub fn new(backend: B, driver: D) -> Self {
        Self {
            backend,
            driver,
            scene: SceneContext::new(),
            scheduler: RenderScheduler::new(),
            resize: ResizeAdapter::new(),
            stroke: StrokeType::Freestyle,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    #[inline]
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[inline]
    #[must_use]
    pub fn selected_stroke(&self) -> StrokeType {
        self.stroke
    }

    /// Switches the active stroke. Takes effect on the next tick; the
    /// animation clock and the scheduler are untouched.
    pub fn select_stroke(&mut self, stroke: StrokeType) {
        debug!("stroke selected: {}", stroke.display_name());
        self.stroke = stroke;
    }

    /// Brings the viewer up on the given mount surface and starts the
    /// frame loop.
    ///
    /// On failure the attempt is repeated exactly once; if that also fails
    /// the viewer transitions to [`Lifecycle::Error`], shows a fallback
    /// message on the mount, and the scheduler is never started. The
    /// resulting lifecycle state is returned; no error escapes to the
    /// host.
    pub fn initialize(&mut self, mount: &mut dyn MountSurface) -> Lifecycle {
        match self.lifecycle {
            Lifecycle::Uninitialized => {}
            Lifecycle::Disposed => {
                warn!("initialize() after teardown; ignored");
                return self.lifecycle;
            }
            other => {
                warn!("initialize() in state {}; ignored", other.name());
                return self.lifecycle;
            }
        }

        self.lifecycle = Lifecycle::Initializing;
        info!("Initializing rendering backend...");

        // One bounded retry: the mount may not have been attached yet, or
        // the backend may come up on the second attempt.
        let mut last_err = None;
        for attempt in 1..=2 {
            let (width, height) = mount.size();
            match self.scene.initialize(&mut self.backend, width, height) {
                Ok(()) => {
                    self.lifecycle = Lifecycle::Running;
                    self.resize.activate();
                    self.scheduler.start(&mut self.driver);
                    info!("Viewer running");
                    return self.lifecycle;
                }
                Err(err) => {
                    warn!("initialization attempt {attempt} failed: {err}");
                    last_err = Some(err);
                }
            }
        }

        if let Some(err) = last_err {
            error!("initialization failed permanently: {err}");
        }
        self.lifecycle = Lifecycle::Error;
        mount.show_fallback(FALLBACK_MESSAGE);
        self.lifecycle
    }

    /// Frame-callback entry point, invoked by the host for every tick the
    /// driver scheduled.
    pub fn tick(&mut self) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        if let Err(err) = self.scheduler.tick(
            self.stroke,
            &mut self.scene,
            &mut self.backend,
            &mut self.driver,
        ) {
            // A failed frame is logged, not escalated; the next tick gets
            // a fresh chance.
            error!("frame render failed: {err}");
        }
    }

    /// Host resize notification. Ignored until initialization completes.
    pub fn handle_resize(&mut self, mount: &dyn MountSurface) {
        self.resize
            .apply(mount, &mut self.scene, &mut self.backend);
    }

    /// Stops the frame loop, drops the resize subscription and releases
    /// every graphics resource. Idempotent; the viewer ends in
    /// [`Lifecycle::Disposed`] regardless of its previous state.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            debug!("teardown() on a disposed viewer; nothing to do");
            return;
        }
        self.scheduler.stop(&mut self.driver);
        self.resize.deactivate();
        self.scene.dispose(&mut self.backend);
        self.lifecycle = Lifecycle::Disposed;
        info!("Viewer torn down");
    }

    // ========================================================================
    // Introspection (hosts and tests)
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn scene(&self) -> &SceneContext {
        &self.scene
    }

    #[inline]
    #[must_use]
    pub fn scheduler(&self) -> &RenderScheduler {
        &self.scheduler
    }

    #[inline]
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    #[must_use]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    #[must_use]
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
