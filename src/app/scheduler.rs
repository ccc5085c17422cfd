//! Render Scheduler
//!
//! Drives the continuous frame loop. The host's frame-synchronized
//! callback mechanism is abstracted behind [`TickDriver`]; the scheduler
//! holds the driver's pending [`TickHandle`] as ordinary owned state and
//! cancels it on [`stop`](RenderScheduler::stop).
//!
//! Within a tick, pose computation and surface advance both happen before
//! rendering; their order relative to each other is unobservable.

use log::debug;

use crate::errors::Result;
use crate::kinematics::strokes::{StrokeType, compute_pose};
use crate::render::backend::RenderBackend;
use crate::scene::context::SceneContext;
use crate::utils::clock::AnimationClock;

/// Opaque identifier of one scheduled tick, handed out by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// The host's frame scheduling facility (requestAnimationFrame or an
/// equivalent frame-synchronized callback source).
pub trait TickDriver {
    /// Schedules one future tick and returns its cancellation handle.
    fn request_tick(&mut self) -> TickHandle;

    /// Cancels a previously scheduled tick. Cancelling takes effect before
    /// the tick fires; a tick already in flight completes.
    fn cancel_tick(&mut self, handle: TickHandle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

/// Start/stop state machine that owns the animation clock.
pub struct RenderScheduler {
    state: SchedulerState,
    clock: AnimationClock,
    pending: Option<TickHandle>,
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Stopped,
            clock: AnimationClock::new(),
            pending: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    #[inline]
    #[must_use]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Starts the loop by requesting the first tick. No-op when already
    /// running.
    pub fn start(&mut self, driver: &mut dyn TickDriver) {
        if self.is_running() {
            debug!("start() while already running; ignored");
            return;
        }
        self.state = SchedulerState::Running;
        self.pending = Some(driver.request_tick());
    }

    /// Stops the loop and cancels the pending tick, if any. Safe to call
    /// repeatedly or before [`start`](Self::start).
    pub fn stop(&mut self, driver: &mut dyn TickDriver) {
        if let Some(handle) = self.pending.take() {
            driver.cancel_tick(handle);
        }
        self.state = SchedulerState::Stopped;
    }

    /// Runs one frame: advance the clock, recompute pose and surface,
    /// reposition the orbiting camera, render, and schedule the next tick.
    ///
    /// The next tick is requested even when rendering fails, so a
    /// transient backend error does not stall a loop that still reports
    /// [`Running`](SchedulerState::Running).
    ///
    /// A tick arriving after [`stop`](Self::stop) is silently dropped, so
    /// cancellation observed by the driver and cancellation observed here
    /// agree.
    pub fn tick<B: RenderBackend>(
        &mut self,
        stroke: StrokeType,
        scene: &mut SceneContext,
        backend: &mut B,
        driver: &mut dyn TickDriver,
    ) -> Result<()> {
        if !self.is_running() {
            return Ok(());
        }
        self.pending = None;

        self.clock.advance();
        let t = self.clock.elapsed();

        let pose = compute_pose(stroke, t);
        scene.rig.apply_pose(&pose);
        scene.surface.advance(t);
        scene.camera.set_orbit(t);

        let rendered = scene.render(backend);

        self.pending = Some(driver.request_tick());
        rendered
    }
}
