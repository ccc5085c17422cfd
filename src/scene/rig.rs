//! Articulated Swimmer Rig
//!
//! The rig holds the figure's six-part hierarchy: static per-part geometry
//! and material descriptors, plus the single current [`Pose`]. Poses are
//! applied by wholesale overwrite, never blended; the visual smoothness of
//! the animation comes entirely from the frame rate.

use std::borrow::Cow;
use std::f32::consts::PI;

use glam::{Affine3A, EulerRot, Quat, Vec3};
use uuid::Uuid;

use crate::kinematics::pose::{Joint, Pose};
use crate::render::backend::{MaterialDescriptor, MeshDescriptor, ShapeDescriptor};
use crate::utils::hex_color;

const TORSO_COLOR: u32 = 0xff6b6b;
const SKIN_COLOR: u32 = 0xffdbac;

/// Static descriptor of one figure part.
#[derive(Debug, Clone)]
pub struct RigPart {
    pub uuid: Uuid,
    pub joint: Joint,
    pub shape: ShapeDescriptor,
    pub material: MaterialDescriptor,
    /// Rest position of the part's pivot, world units.
    pub rest_position: Vec3,
    /// Static rotation component never driven by poses (the slight forward
    /// angle of the arms).
    pub rest_rotation: Vec3,
}

impl RigPart {
    /// Backend descriptor for this part. Every part casts shadows.
    #[must_use]
    pub fn descriptor(&self) -> MeshDescriptor {
        MeshDescriptor {
            name: Cow::Borrowed(self.joint.name()),
            shape: self.shape,
            material: self.material,
            cast_shadows: true,
            receive_shadows: false,
        }
    }
}

/// The articulated figure: six parts and one current pose.
///
/// The rig is exclusively owned by the scene context for its entire
/// lifetime; it must exist and be attached before the scheduler's first
/// tick.
#[derive(Debug, Clone)]
pub struct Rig {
    parts: [RigPart; 6],
    pose: Pose,
    neutral_head_height: f32,
}

impl Default for Rig {
    fn default() -> Self {
        Self::new()
    }
}

impl Rig {
    /// Builds the swimmer figure in its neutral pose.
    #[must_use]
    pub fn new() -> Self {
        let skin = MaterialDescriptor::matte(hex_color(SKIN_COLOR));
        let torso = MaterialDescriptor::matte(hex_color(TORSO_COLOR));

        let arm_shape = ShapeDescriptor::Cylinder {
            radius: 0.1,
            height: 0.8,
            radial_segments: 8,
        };
        let leg_shape = ShapeDescriptor::Cylinder {
            radius: 0.12,
            height: 0.9,
            radial_segments: 8,
        };

        let parts = [
            RigPart {
                uuid: Uuid::new_v4(),
                joint: Joint::Body,
                shape: ShapeDescriptor::Cylinder {
                    radius: 0.3,
                    height: 1.2,
                    radial_segments: 8,
                },
                material: torso,
                rest_position: Vec3::new(0.0, 0.5, 0.0),
                rest_rotation: Vec3::ZERO,
            },
            RigPart {
                uuid: Uuid::new_v4(),
                joint: Joint::Head,
                shape: ShapeDescriptor::Sphere {
                    radius: 0.25,
                    segments: 16,
                },
                material: skin,
                rest_position: Vec3::new(0.0, 1.3, 0.0),
                rest_rotation: Vec3::ZERO,
            },
            RigPart {
                uuid: Uuid::new_v4(),
                joint: Joint::LeftArm,
                shape: arm_shape,
                material: skin,
                rest_position: Vec3::new(-0.5, 0.8, 0.0),
                rest_rotation: Vec3::new(0.0, -PI / 12.0, 0.0),
            },
            RigPart {
                uuid: Uuid::new_v4(),
                joint: Joint::RightArm,
                shape: arm_shape,
                material: skin,
                rest_position: Vec3::new(0.5, 0.8, 0.0),
                rest_rotation: Vec3::new(0.0, PI / 12.0, 0.0),
            },
            RigPart {
                uuid: Uuid::new_v4(),
                joint: Joint::LeftLeg,
                shape: leg_shape,
                material: torso,
                rest_position: Vec3::new(-0.2, -0.3, 0.0),
                rest_rotation: Vec3::ZERO,
            },
            RigPart {
                uuid: Uuid::new_v4(),
                joint: Joint::RightLeg,
                shape: leg_shape,
                material: torso,
                rest_position: Vec3::new(0.2, -0.3, 0.0),
                rest_rotation: Vec3::ZERO,
            },
        ];

        Self {
            parts,
            pose: Pose::neutral(),
            neutral_head_height: 1.3,
        }
    }

    /// Overwrites all six joint rotations and the head offset with `pose`.
    /// No interpolation between frames.
    pub fn apply_pose(&mut self, pose: &Pose) {
        self.pose = *pose;
    }

    /// Restores the identity pose plus the default arm splay shown before
    /// any stroke is selected, and puts the head back at its recorded
    /// neutral height.
    pub fn reset_to_neutral(&mut self) {
        self.pose = Pose::neutral();
    }

    #[inline]
    #[must_use]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[RigPart; 6] {
        &self.parts
    }

    #[must_use]
    pub fn part(&self, joint: Joint) -> &RigPart {
        // Joint::ALL is in rig order.
        &self.parts[Joint::ALL.iter().position(|j| *j == joint).unwrap_or(0)]
    }

    #[inline]
    #[must_use]
    pub fn neutral_head_height(&self) -> f32 {
        self.neutral_head_height
    }

    /// World transform of one part under the current pose: rest position
    /// (plus the head's vertical offset) and rest rotation composed with
    /// the posed joint rotation, XYZ Euler order.
    #[must_use]
    pub fn part_transform(&self, joint: Joint) -> Affine3A {
        let part = self.part(joint);
        let euler = part.rest_rotation + self.pose.rotation(joint);
        let rotation = Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z);

        let mut translation = part.rest_position;
        if joint == Joint::Head {
            if let Some(lift) = self.pose.head_lift {
                translation.y = self.neutral_head_height + lift;
            }
        }

        Affine3A::from_rotation_translation(rotation, translation)
    }
}
