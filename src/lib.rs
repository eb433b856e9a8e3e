pub mod camera;
pub mod cli;
pub mod demo;
pub mod hierarchy;
pub mod loaders;
pub mod scene;
pub mod snapshot;
pub mod traits;
pub mod types;

pub use camera::Camera;
pub use scene::{Scene, SceneObject};
pub use snapshot::{RestoreReport, StateSnapshot};
pub use types::{
    CameraState, CustomProjection, FovAxis, Frustum, ObjectVisualState, Ortho, Perspective,
    Projection, ProjectionKind,
};
