use glam::Vec3;

use crate::traits::ViewCamera;
use crate::types::{CustomProjection, Frustum, Ortho, Perspective, Projection, ProjectionKind};

pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const DEFAULT_LOOK: Vec3 = Vec3::ZERO;
pub const DEFAULT_UP: Vec3 = Vec3::Y;

/// In-memory camera holding one parameter group per projection kind
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub look: Vec3,
    pub up: Vec3,
    pub projection: ProjectionKind,
    pub perspective: Perspective,
    pub ortho: Ortho,
    pub frustum: Frustum,
    pub custom: CustomProjection,
}

impl Camera {
    pub fn new(eye: Vec3, look: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            look,
            up,
            ..Self::default()
        }
    }

    /// Select the projection's kind and overwrite its parameter group
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.apply_projection(projection);
        self
    }

    pub fn apply_projection(&mut self, projection: Projection) {
        self.projection = projection.kind();
        match projection {
            Projection::Perspective(p) => self.perspective = p,
            Projection::Ortho(o) => self.ortho = o,
            Projection::Frustum(f) => self.frustum = f,
            Projection::Custom(c) => self.custom = c,
        }
    }

    /// Parameters of the active projection
    pub fn active_projection(&self) -> Projection {
        match self.projection {
            ProjectionKind::Perspective => Projection::Perspective(self.perspective),
            ProjectionKind::Ortho => Projection::Ortho(self.ortho),
            ProjectionKind::Frustum => Projection::Frustum(self.frustum),
            ProjectionKind::Custom => Projection::Custom(self.custom),
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.look - self.eye).normalize_or_zero()
    }

    /// Translate eye and look together
    pub fn pan(&mut self, offset: Vec3) {
        self.eye += offset;
        self.look += offset;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: DEFAULT_EYE,
            look: DEFAULT_LOOK,
            up: DEFAULT_UP,
            projection: ProjectionKind::Perspective,
            perspective: Perspective::default(),
            ortho: Ortho::default(),
            frustum: Frustum::default(),
            custom: CustomProjection::default(),
        }
    }
}

impl ViewCamera for Camera {
    fn eye(&self) -> Vec3 {
        self.eye
    }

    fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    fn look(&self) -> Vec3 {
        self.look
    }

    fn set_look(&mut self, look: Vec3) {
        self.look = look;
    }

    fn up(&self) -> Vec3 {
        self.up
    }

    fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    fn projection_kind(&self) -> Option<ProjectionKind> {
        Some(self.projection)
    }

    fn set_projection_kind(&mut self, kind: ProjectionKind) {
        self.projection = kind;
    }

    fn perspective(&self) -> Perspective {
        self.perspective
    }

    fn set_perspective(&mut self, perspective: Perspective) {
        self.perspective = perspective;
    }

    fn ortho(&self) -> Ortho {
        self.ortho
    }

    fn set_ortho(&mut self, ortho: Ortho) {
        self.ortho = ortho;
    }

    fn frustum(&self) -> Frustum {
        self.frustum
    }

    fn set_frustum(&mut self, frustum: Frustum) {
        self.frustum = frustum;
    }

    fn custom_projection(&self) -> CustomProjection {
        self.custom
    }

    fn set_custom_projection(&mut self, custom: CustomProjection) {
        self.custom = custom;
    }
}
