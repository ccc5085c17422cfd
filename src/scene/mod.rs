pub mod camera;
pub mod context;
pub mod light;
pub mod rig;
pub mod surface;

pub use camera::Camera;
pub use context::{Lifecycle, SceneContext};
pub use light::{Light, LightKind, ShadowConfig};
pub use rig::{Rig, RigPart};
pub use surface::SurfaceMesh;
