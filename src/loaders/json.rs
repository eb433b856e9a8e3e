use anyhow::{Context, Result};
use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::{Camera, DEFAULT_EYE, DEFAULT_LOOK, DEFAULT_UP};
use crate::scene::{Scene, SceneObject};
use crate::types::Projection;

/// Scene file contents: one camera plus objects, parents listed before children
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDescription,
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub eye: Vec3,
    pub look: Vec3,
    pub up: Vec3,
    pub projection: Projection,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            eye: DEFAULT_EYE,
            look: DEFAULT_LOOK,
            up: DEFAULT_UP,
            projection: Projection::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectDescription {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub edges: bool,
    #[serde(default)]
    pub xrayed: bool,
    #[serde(default)]
    pub highlighted: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(default = "default_true")]
    pub clippable: bool,
    #[serde(default = "default_true")]
    pub pickable: bool,
    #[serde(default = "default_colorize")]
    pub colorize: Vec3,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

fn default_true() -> bool {
    true
}

fn default_colorize() -> Vec3 {
    Vec3::ONE
}

fn default_opacity() -> f32 {
    1.0
}

impl From<&ObjectDescription> for SceneObject {
    fn from(desc: &ObjectDescription) -> Self {
        SceneObject {
            id: desc.id.clone(),
            parent: desc.parent.clone(),
            visible: desc.visible,
            edges: desc.edges,
            xrayed: desc.xrayed,
            highlighted: desc.highlighted,
            selected: desc.selected,
            clippable: desc.clippable,
            pickable: desc.pickable,
            colorize: desc.colorize,
            opacity: desc.opacity,
        }
    }
}

impl SceneDescription {
    /// Build a live scene from this description
    pub fn build(&self) -> Result<Scene> {
        let camera = Camera::new(self.camera.eye, self.camera.look, self.camera.up)
            .with_projection(self.camera.projection);

        let mut scene = Scene::new(camera);
        for desc in &self.objects {
            scene
                .add_object(SceneObject::from(desc))
                .with_context(|| format!("Invalid object entry: {}", desc.id))?;
        }
        Ok(scene)
    }
}

/// Parses a scene description from JSON text and builds the scene
pub fn parse_scene(json: &str) -> Result<Scene> {
    let description: SceneDescription =
        serde_json::from_str(json).context("Failed to parse scene description")?;
    description.build()
}

/// Loads a scene description file and builds the scene
pub fn load_scene_file(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {:?}", path))?;
    let scene = parse_scene(&text).with_context(|| format!("Failed to load scene file: {:?}", path))?;
    debug!("loaded {} objects from {:?}", scene.len(), path);
    Ok(scene)
}
