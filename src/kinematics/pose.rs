use std::f32::consts::FRAC_PI_6;

use glam::Vec3;

/// The fixed joint set of the articulated swimmer figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Body,
    Head,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl Joint {
    /// All joints, in rig order.
    pub const ALL: [Joint; 6] = [
        Joint::Body,
        Joint::Head,
        Joint::LeftArm,
        Joint::RightArm,
        Joint::LeftLeg,
        Joint::RightLeg,
    ];

    /// Stable name used for backend resource labels.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Joint::Body => "body",
            Joint::Head => "head",
            Joint::LeftArm => "left_arm",
            Joint::RightArm => "right_arm",
            Joint::LeftLeg => "left_leg",
            Joint::RightLeg => "right_leg",
        }
    }
}

/// One full-body pose: an XYZ Euler rotation (radians) per joint, plus an
/// optional vertical head offset used by the butterfly breathing bob.
///
/// Every joint is always present. Rotations are finite by construction:
/// the stroke formulas in [`strokes`](crate::kinematics::strokes) are sums
/// of bounded sinusoids and are never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub body: Vec3,
    pub head: Vec3,
    pub left_arm: Vec3,
    pub right_arm: Vec3,
    pub left_leg: Vec3,
    pub right_leg: Vec3,
    /// Vertical offset of the head from the rig's neutral head height.
    pub head_lift: Option<f32>,
}

impl Pose {
    /// The all-zero pose with no head offset.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            body: Vec3::ZERO,
            head: Vec3::ZERO,
            left_arm: Vec3::ZERO,
            right_arm: Vec3::ZERO,
            left_leg: Vec3::ZERO,
            right_leg: Vec3::ZERO,
            head_lift: None,
        }
    }

    /// The resting pose shown before any stroke is selected: identity
    /// rotations plus the default outward arm splay.
    #[must_use]
    pub fn neutral() -> Self {
        let mut pose = Self::identity();
        pose.left_arm.z = FRAC_PI_6;
        pose.right_arm.z = -FRAC_PI_6;
        pose
    }

    /// Returns the rotation of the given joint.
    #[inline]
    #[must_use]
    pub fn rotation(&self, joint: Joint) -> Vec3 {
        match joint {
            Joint::Body => self.body,
            Joint::Head => self.head,
            Joint::LeftArm => self.left_arm,
            Joint::RightArm => self.right_arm,
            Joint::LeftLeg => self.left_leg,
            Joint::RightLeg => self.right_leg,
        }
    }

    /// Overwrites the rotation of the given joint.
    pub fn set_rotation(&mut self, joint: Joint, rotation: Vec3) {
        match joint {
            Joint::Body => self.body = rotation,
            Joint::Head => self.head = rotation,
            Joint::LeftArm => self.left_arm = rotation,
            Joint::RightArm => self.right_arm = rotation,
            Joint::LeftLeg => self.left_leg = rotation,
            Joint::RightLeg => self.right_leg = rotation,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}
