use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Camera projection mode tag
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    Perspective,
    Ortho,
    Frustum,
    Custom,
}

/// Axis the perspective field-of-view is measured along
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FovAxis {
    X,
    Y,
    #[default]
    Min,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Perspective {
    /// Field of view in degrees
    pub fov: f32,
    #[serde(default)]
    pub fov_axis: FovAxis,
    pub near: f32,
    pub far: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            fov: 60.0,
            fov_axis: FovAxis::Min,
            near: 0.1,
            far: 2000.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ortho {
    pub scale: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Ortho {
    fn default() -> Self {
        Self {
            scale: 1.0,
            near: 0.1,
            far: 2000.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Frustum {
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            top: 1.0,
            bottom: -1.0,
            near: 0.1,
            far: 10000.0,
        }
    }
}

/// Arbitrary projection matrix (column-major)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomProjection {
    pub matrix: Mat4,
}

impl Default for CustomProjection {
    fn default() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }
}

/// Parameters of exactly one projection mode
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Projection {
    Perspective(Perspective),
    Ortho(Ortho),
    Frustum(Frustum),
    Custom(CustomProjection),
}

impl Projection {
    pub const fn kind(&self) -> ProjectionKind {
        match self {
            Projection::Perspective(_) => ProjectionKind::Perspective,
            Projection::Ortho(_) => ProjectionKind::Ortho,
            Projection::Frustum(_) => ProjectionKind::Frustum,
            Projection::Custom(_) => ProjectionKind::Custom,
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective(Perspective::default())
    }
}

/// Captured camera pose and projection
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraState {
    pub eye: Vec3,
    pub look: Vec3,
    pub up: Vec3,
    /// `None` when the camera was in a mode that could not be captured
    pub projection: Option<Projection>,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            look: Vec3::ZERO,
            up: Vec3::Y,
            projection: None,
        }
    }
}

/// Captured visual state of one renderable object
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectVisualState {
    pub object_id: String,
    /// Parent hops to the scene root at capture time
    pub depth: usize,
    pub visible: bool,
    pub edges: bool,
    pub xrayed: bool,
    pub highlighted: bool,
    pub selected: bool,
    pub clippable: bool,
    pub pickable: bool,
    pub colorize: Vec3,
    pub opacity: f32,
}

impl Default for ObjectVisualState {
    fn default() -> Self {
        Self {
            object_id: String::new(),
            depth: 0,
            visible: false,
            edges: false,
            xrayed: false,
            highlighted: false,
            selected: false,
            clippable: false,
            pickable: false,
            colorize: Vec3::ONE,
            opacity: 1.0,
        }
    }
}
