use std::collections::HashMap;

use anyhow::{bail, Result};
use glam::Vec3;

use crate::camera::Camera;
use crate::traits::{Renderable, SceneGraph};

/// In-memory renderable object
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub id: String,
    pub parent: Option<String>,
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

impl SceneObject {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            visible: true,
            edges: false,
            xrayed: false,
            highlighted: false,
            selected: false,
            clippable: true,
            pickable: true,
            colorize: Vec3::ONE,
            opacity: 1.0,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Re-link this object under another parent (or make it a root)
    pub fn set_parent(&mut self, parent: Option<String>) {
        self.parent = parent;
    }
}

/// In-memory scene: objects kept in insertion order with an id index
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub camera: Camera,
    objects: Vec<SceneObject>,
    index: HashMap<String, usize>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an object; its parent, if any, must already be present
    pub fn add_object(&mut self, object: SceneObject) -> Result<()> {
        if self.index.contains_key(&object.id) {
            bail!("Duplicate object id: {}", object.id);
        }
        if let Some(parent) = &object.parent {
            if !self.index.contains_key(parent) {
                bail!("Object {} references unknown parent {}", object.id, parent);
            }
        }
        self.index.insert(object.id.clone(), self.objects.len());
        self.objects.push(object);
        Ok(())
    }

    /// Remove an object by id. Children keep their parent link, which then
    /// no longer resolves.
    pub fn remove_object(&mut self, id: &str) -> Option<SceneObject> {
        let position = self.index.remove(id)?;
        let removed = self.objects.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|o| o.id.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SceneObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SceneObject> {
        self.objects.iter_mut()
    }
}

impl SceneGraph for Scene {
    type Camera = Camera;
    type Object = SceneObject;

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn object(&self, id: &str) -> Option<&SceneObject> {
        self.index.get(id).map(|&i| &self.objects[i])
    }

    fn object_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.objects[i]),
            None => None,
        }
    }
}

impl Renderable for SceneObject {
    fn id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn edges(&self) -> bool {
        self.edges
    }

    fn set_edges(&mut self, edges: bool) {
        self.edges = edges;
    }

    fn xrayed(&self) -> bool {
        self.xrayed
    }

    fn set_xrayed(&mut self, xrayed: bool) {
        self.xrayed = xrayed;
    }

    fn highlighted(&self) -> bool {
        self.highlighted
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    fn selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn clippable(&self) -> bool {
        self.clippable
    }

    fn set_clippable(&mut self, clippable: bool) {
        self.clippable = clippable;
    }

    fn pickable(&self) -> bool {
        self.pickable
    }

    fn set_pickable(&mut self, pickable: bool) {
        self.pickable = pickable;
    }

    fn colorize(&self) -> Vec3 {
        self.colorize
    }

    fn set_colorize(&mut self, colorize: Vec3) {
        self.colorize = colorize;
    }

    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }
}
