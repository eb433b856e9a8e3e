use anyhow::Result;
use glam::Vec3;

use crate::camera::Camera;
use crate::scene::{Scene, SceneObject};
use crate::types::{Perspective, Projection};

/// Builds a small building: one storey holding `walls` walls, each wall
/// holding a door and a window.
pub fn create_building_scene(walls: usize) -> Result<Scene> {
    let camera = Camera::new(
        Vec3::new(10.45, 17.38, -98.31),
        Vec3::new(43.09, 0.5, -26.76),
        Vec3::new(0.06, 0.96, 0.16),
    )
    .with_projection(Projection::Perspective(Perspective::default()));

    let mut scene = Scene::new(camera);
    scene.add_object(SceneObject::new("building"))?;
    scene.add_object(SceneObject::new("storey0").with_parent("building"))?;

    for i in 0..walls {
        let wall = format!("wall{}", i);
        scene.add_object(SceneObject::new(wall.clone()).with_parent("storey0"))?;
        scene.add_object(SceneObject::new(format!("door{}", i)).with_parent(wall.clone()))?;
        scene.add_object(SceneObject::new(format!("window{}", i)).with_parent(wall))?;
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::object_depth;
    use crate::traits::SceneGraph;

    #[test]
    fn test_building_scene_object_count() {
        let scene = create_building_scene(4).unwrap();
        // building + storey + 4 * (wall, door, window)
        assert_eq!(scene.len(), 14);
    }

    #[test]
    fn test_building_scene_depths() {
        let scene = create_building_scene(1).unwrap();
        let door = scene.object("door0").unwrap();
        assert_eq!(object_depth(&scene, door), 3);
    }
}
