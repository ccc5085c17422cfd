//! # strokeviz
//!
//! An interactive 3D swim-stroke viewer core: four swimming strokes
//! animated on an articulated figure above a procedurally rippling water
//! surface, drawn through a backend-agnostic rendering interface.
//!
//! The crate supplies the update loop, the stroke kinematics, the surface
//! wave simulation, the scene/resource lifecycle and the adaptive viewport
//! handling; the host supplies a [`RenderBackend`], a [`MountSurface`] and
//! a frame-synchronized [`TickDriver`].

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod app;
pub mod errors;
pub mod kinematics;
pub mod render;
pub mod scene;
pub mod utils;

pub use app::{
    FALLBACK_HEIGHT, FALLBACK_MESSAGE, MountSurface, RenderScheduler, ResizeAdapter,
    SchedulerState, StrokeViewer, TickDriver, TickHandle,
};
pub use errors::{Result, VizError};
pub use kinematics::{Joint, Pose, StrokeType, compute_pose};
pub use render::{
    BackendOptions, HeadlessBackend, LightHandle, MaterialDescriptor, MeshDescriptor, MeshHandle,
    RenderBackend, ShapeDescriptor,
};
pub use scene::{Camera, Lifecycle, Light, LightKind, Rig, SceneContext, SurfaceMesh};
pub use utils::clock::{AnimationClock, FRAME_STEP};
