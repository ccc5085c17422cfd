pub mod pose;
pub mod strokes;

pub use pose::{Joint, Pose};
pub use strokes::{StrokeType, compute_pose};
