pub mod backend;
pub mod headless;

pub use backend::{
    BackendOptions, LightHandle, MaterialDescriptor, MeshDescriptor, MeshHandle, RenderBackend,
    ShapeDescriptor,
};
pub use headless::HeadlessBackend;
