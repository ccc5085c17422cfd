pub mod clock;

pub use clock::{AnimationClock, FRAME_STEP};

use glam::Vec3;

/// Converts a packed `0xRRGGBB` color into a linear-ish [0, 1] RGB vector.
///
/// Good enough for the handful of fixed palette colors this scene uses.
#[must_use]
pub fn hex_color(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}
