use scene_state::hierarchy::object_depth;
use scene_state::traits::SceneGraph;
use scene_state::{Camera, Scene, SceneObject, StateSnapshot};

fn cyclic_scene() -> Scene {
    let mut scene = Scene::new(Camera::default());
    scene.add_object(SceneObject::new("a")).unwrap();
    scene.add_object(SceneObject::new("b").with_parent("a")).unwrap();
    scene.add_object(SceneObject::new("c").with_parent("b")).unwrap();
    // Close the loop a -> c -> b -> a
    scene.object_mut("a").unwrap().set_parent(Some("c".to_string()));
    scene
}

#[test]
fn test_cycle_depth_is_capped_at_object_count() {
    let scene = cyclic_scene();
    for id in ["a", "b", "c"] {
        let object = scene.object(id).unwrap();
        assert_eq!(object_depth(&scene, object), 3);
    }
}

#[test]
fn test_self_parent_terminates() {
    let mut scene = Scene::new(Camera::default());
    scene.add_object(SceneObject::new("loop")).unwrap();
    scene.add_object(SceneObject::new("other")).unwrap();
    scene.object_mut("loop").unwrap().set_parent(Some("loop".to_string()));

    let object = scene.object("loop").unwrap();
    assert_eq!(object_depth(&scene, object), 2);
}

#[test]
fn test_save_and_restore_complete_on_cyclic_scene() {
    let mut scene = cyclic_scene();
    let mut snapshot = StateSnapshot::new();
    snapshot.save(&scene);
    assert_eq!(snapshot.len(), 3);

    for object in scene.iter_mut() {
        object.visible = false;
    }
    let report = snapshot.restore(&mut scene);
    assert_eq!(report.restored, 3);
    assert!(scene.iter().all(|o| o.visible));
}

#[test]
fn test_orphaned_child_becomes_root_depth() {
    let mut scene = Scene::new(Camera::default());
    scene.add_object(SceneObject::new("wall")).unwrap();
    scene.add_object(SceneObject::new("door").with_parent("wall")).unwrap();
    scene.add_object(SceneObject::new("handle").with_parent("door")).unwrap();

    scene.remove_object("wall");

    let mut snapshot = StateSnapshot::new();
    snapshot.save(&scene);
    assert_eq!(snapshot.object("door").unwrap().depth, 0);
    assert_eq!(snapshot.object("handle").unwrap().depth, 1);
}
