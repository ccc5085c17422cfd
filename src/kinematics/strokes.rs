//! Stroke Kinematics
//!
//! Closed-form periodic driving functions for the four competitive swimming
//! strokes. [`compute_pose`] is a pure function of `(stroke, t)`: no state
//! is carried between calls, so the same arguments always produce the same
//! pose and the scheduler may evaluate it at any non-negative time.
//!
//! Each stroke has a static baseline component (e.g. backstroke rotates the
//! body π about the vertical axis) that the periodic terms are added to, so
//! evaluating a formula at `t = 0` yields exactly that stroke's baseline.

use std::f32::consts::{FRAC_PI_6, PI};

use crate::kinematics::pose::Pose;

/// The four supported swimming strokes.
///
/// Exactly one stroke is active in a viewer at any time. The enumeration is
/// closed: an out-of-range stroke is unrepresentable, which is how the core
/// realizes the "malformed pose request is fatal at the call boundary"
/// policy without any runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeType {
    Freestyle,
    Backstroke,
    Breaststroke,
    Butterfly,
}

impl StrokeType {
    /// All strokes, in menu order.
    pub const ALL: [StrokeType; 4] = [
        StrokeType::Freestyle,
        StrokeType::Backstroke,
        StrokeType::Breaststroke,
        StrokeType::Butterfly,
    ];

    /// Human-readable stroke name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            StrokeType::Freestyle => "Freestyle",
            StrokeType::Backstroke => "Backstroke",
            StrokeType::Breaststroke => "Breaststroke",
            StrokeType::Butterfly => "Butterfly",
        }
    }

    /// One-line description shown alongside the viewer.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            StrokeType::Freestyle => {
                "Also known as front crawl, the fastest swimming stroke"
            }
            StrokeType::Backstroke => {
                "Swimming on your back with alternating arm movements"
            }
            StrokeType::Breaststroke => "A symmetrical stroke with frog-like kick",
            StrokeType::Butterfly => {
                "The most challenging stroke with simultaneous arm movements"
            }
        }
    }

    /// Technique pointers for the stroke card.
    #[must_use]
    pub fn technique_tips(self) -> &'static [&'static str] {
        match self {
            StrokeType::Freestyle => &[
                "Keep your body horizontal and streamlined",
                "Alternate arm movements in a windmill pattern",
                "Breathe to the side every 2-3 strokes",
                "Use a flutter kick with relaxed ankles",
                "Rotate your body slightly with each stroke",
            ],
            StrokeType::Backstroke => &[
                "Lie flat on your back with ears in the water",
                "Alternate arm movements above the water",
                "Keep your head still and look up",
                "Use a flutter kick similar to freestyle",
                "Maintain a steady rhythm and breathing",
            ],
            StrokeType::Breaststroke => &[
                "Keep your body horizontal in the water",
                "Synchronize arm and leg movements",
                "Pull arms in a circular motion",
                "Use a frog-like kick (whip kick)",
                "Glide after each stroke cycle",
            ],
            StrokeType::Butterfly => &[
                "Both arms move simultaneously in a circular motion",
                "Use a dolphin kick (both legs together)",
                "Keep your body undulating through the water",
                "Breathe forward when arms are out of water",
                "Maintain strong core strength and rhythm",
            ],
        }
    }
}

/// Computes the full-body pose for `stroke` at elapsed time `t` (seconds).
///
/// Pure and deterministic. Joint angles stay within each stroke's amplitude
/// constants by construction; nothing here clamps.
#[must_use]
pub fn compute_pose(stroke: StrokeType, t: f32) -> Pose {
    match stroke {
        StrokeType::Freestyle => freestyle(t),
        StrokeType::Backstroke => backstroke(t),
        StrokeType::Breaststroke => breaststroke(t),
        StrokeType::Butterfly => butterfly(t),
    }
}

/// Alternating windmill arms, fast flutter kick, body roll for breathing.
fn freestyle(t: f32) -> Pose {
    let phase = t * 2.5;

    let mut pose = Pose::identity();
    pose.left_arm.x = phase.sin() * 1.4;
    pose.right_arm.x = (phase + PI).sin() * 1.4;
    // Arm sweep, forward and backward around the resting splay.
    pose.left_arm.z = FRAC_PI_6 + phase.cos() * 0.5;
    pose.right_arm.z = -FRAC_PI_6 + (phase + PI).cos() * 0.5;

    pose.left_leg.x = (t * 5.0).sin() * 0.5;
    pose.right_leg.x = (t * 5.0 + PI).sin() * 0.5;

    pose.body.y = (t * 0.8).sin() * 0.4;
    pose.body.x = -0.1 + (t * 0.3).sin() * 0.05;
    // Head turns to the side for breathing, in phase with the body roll.
    pose.head.y = (t * 0.8).sin() * 0.3;
    pose
}

/// Negated antiphase arm circles above the body, flutter kick, head still.
fn backstroke(t: f32) -> Pose {
    let phase = t * 2.3;

    let mut pose = Pose::identity();
    pose.left_arm.x = -phase.sin() * 1.2;
    pose.right_arm.x = -(phase + PI).sin() * 1.2;
    pose.left_arm.z = phase.sin() * 0.6;
    pose.right_arm.z = -(phase + PI).sin() * 0.6;

    pose.left_leg.x = (t * 4.5).sin() * 0.4;
    pose.right_leg.x = (t * 4.5 + PI).sin() * 0.4;

    // Lying on the back: the body carries a π turn about the vertical axis.
    pose.body.x = 0.1 + (t * 0.2).sin() * 0.05;
    pose.body.y = PI + (t * 0.2).sin() * 0.1;
    pose.head.x = 0.2;
    pose
}

/// Symmetrical pull and frog kick, everything driven by one phase.
fn breaststroke(t: f32) -> Pose {
    let phase = t * 1.6;
    let pull = phase.sin();

    let mut pose = Pose::identity();
    pose.left_arm.x = pull * 0.9;
    pose.right_arm.x = pull * 0.9;
    // Arms spread wide then pull together.
    pose.left_arm.z = 0.6 + pull * 0.5;
    pose.right_arm.z = -0.6 - pull * 0.5;

    pose.left_leg.x = pull * 1.0;
    pose.right_leg.x = pull * 1.0;
    pose.left_leg.z = pull * 0.5;
    pose.right_leg.z = -pull * 0.5;

    pose.body.x = -0.05 + pull * 0.1;
    // Head lifts to breathe during the pull.
    pose.head.x = -pull * 0.2;
    pose
}

/// Simultaneous arm sweep with a dolphin kick at doubled frequency.
fn butterfly(t: f32) -> Pose {
    let phase = t * 2.0;
    let motion = phase.sin();
    let kick = (phase * 2.0).sin();

    let mut pose = Pose::identity();
    pose.left_arm.x = motion * 1.6;
    pose.right_arm.x = motion * 1.6;
    pose.left_arm.z = motion * 0.8;
    pose.right_arm.z = -motion * 0.8;

    // Two kicks per arm cycle.
    pose.left_leg.x = kick * 0.8;
    pose.right_leg.x = kick * 0.8;

    pose.body.x = -0.2 + motion * 0.3;
    pose.body.y = (phase * 0.8).sin() * 0.2;
    pose.head.x = -motion * 0.4;
    pose.head_lift = Some(motion * 0.1);
    pose
}
