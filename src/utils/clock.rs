/// Fixed per-tick time increment in seconds (~60 fps).
pub const FRAME_STEP: f32 = 0.016;

/// Monotonic animation clock advanced by a fixed step each scheduler tick.
///
/// The clock starts at zero when the viewer is created and never resets
/// while the viewer is running, including across stroke changes. All
/// animated state (pose, surface displacement, camera orbit) is derived
/// from this single elapsed-time scalar, which keeps every subsystem in
/// phase with the others.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    elapsed: f32,
    frame_count: u64,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    /// Creates a new clock at `t = 0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Advances the clock by [`FRAME_STEP`] and bumps the frame counter.
    pub fn advance(&mut self) {
        self.elapsed += FRAME_STEP;
        self.frame_count += 1;
    }

    /// Total elapsed time in seconds since the clock was created.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Total number of ticks since the clock was created.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
