use log::warn;

use crate::traits::{Renderable, SceneGraph};

/// Count parent hops from `object` up to a root of `scene`
///
/// A parent id that no longer resolves ends the walk. The walk is capped at
/// the scene's object count, since any longer chain must revisit an object.
pub fn object_depth<S: SceneGraph>(scene: &S, object: &S::Object) -> usize {
    depth_with_limit(scene, object, scene.object_count())
}

/// Depth walk with an explicit hop limit
pub fn depth_with_limit<S: SceneGraph>(scene: &S, object: &S::Object, max_hops: usize) -> usize {
    let mut depth = 0;
    let mut parent_id = object.parent_id();

    while let Some(id) = parent_id {
        let Some(parent) = scene.object(id) else {
            break;
        };
        if depth == max_hops {
            warn!(
                "parent cycle detected above object '{}', depth capped at {}",
                object.id(),
                max_hops
            );
            break;
        }
        depth += 1;
        parent_id = parent.parent_id();
    }

    depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::scene::{Scene, SceneObject};

    fn chain_scene() -> Scene {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(SceneObject::new("site")).unwrap();
        scene
            .add_object(SceneObject::new("building").with_parent("site"))
            .unwrap();
        scene
            .add_object(SceneObject::new("storey").with_parent("building"))
            .unwrap();
        scene
    }

    #[test]
    fn test_root_has_depth_zero() {
        let scene = chain_scene();
        let site = scene.object("site").unwrap();
        assert_eq!(object_depth(&scene, site), 0);
    }

    #[test]
    fn test_depth_counts_hops() {
        let scene = chain_scene();
        let storey = scene.object("storey").unwrap();
        assert_eq!(object_depth(&scene, storey), 2);
    }

    #[test]
    fn test_limit_caps_walk() {
        let scene = chain_scene();
        let storey = scene.object("storey").unwrap();
        assert_eq!(depth_with_limit(&scene, storey, 1), 1);
    }

    #[test]
    fn test_dangling_parent_ends_walk() {
        let mut scene = chain_scene();
        scene.remove_object("building");
        let storey = scene.object("storey").unwrap();
        assert_eq!(object_depth(&scene, storey), 0);
    }
}
