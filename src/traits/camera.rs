use glam::Vec3;

use crate::types::{CustomProjection, Frustum, Ortho, Perspective, ProjectionKind};

/// Camera pose and projection access
///
/// Each projection kind owns exactly one parameter group, addressed by the
/// accessor of the same name. Groups for inactive kinds keep their values but
/// carry no meaning until their kind is selected again.
pub trait ViewCamera {
    fn eye(&self) -> Vec3;
    fn set_eye(&mut self, eye: Vec3);

    fn look(&self) -> Vec3;
    fn set_look(&mut self, look: Vec3);

    fn up(&self) -> Vec3;
    fn set_up(&mut self, up: Vec3);

    /// Active projection mode, or `None` for a mode this crate does not model
    fn projection_kind(&self) -> Option<ProjectionKind>;
    fn set_projection_kind(&mut self, kind: ProjectionKind);

    fn perspective(&self) -> Perspective;
    fn set_perspective(&mut self, perspective: Perspective);

    fn ortho(&self) -> Ortho;
    fn set_ortho(&mut self, ortho: Ortho);

    fn frustum(&self) -> Frustum;
    fn set_frustum(&mut self, frustum: Frustum);

    fn custom_projection(&self) -> CustomProjection;
    fn set_custom_projection(&mut self, custom: CustomProjection);
}
