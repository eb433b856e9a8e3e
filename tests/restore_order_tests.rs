use std::cell::Cell;

use scene_state::traits::SceneGraph;
use scene_state::{Camera, SceneObject, StateSnapshot};

/// Scene that counts full walks and logs the order of restore writes.
/// Relies on the default `object_count`.
#[derive(Default)]
struct RecordingScene {
    camera: Camera,
    items: Vec<SceneObject>,
    walks: Cell<usize>,
    writes: Vec<String>,
}

impl RecordingScene {
    fn push(&mut self, object: SceneObject) {
        self.items.push(object);
    }
}

impl SceneGraph for RecordingScene {
    type Camera = Camera;
    type Object = SceneObject;

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.walks.set(self.walks.get() + 1);
        self.items.iter()
    }

    fn object(&self, id: &str) -> Option<&SceneObject> {
        self.items.iter().find(|o| o.id == id)
    }

    fn object_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        self.writes.push(id.to_string());
        self.items.iter_mut().find(|o| o.id == id)
    }
}

/// Leaves enumerate before their ancestors
fn leaves_first_scene() -> RecordingScene {
    let mut scene = RecordingScene::default();
    scene.push(SceneObject::new("handle").with_parent("door"));
    scene.push(SceneObject::new("window").with_parent("wall"));
    scene.push(SceneObject::new("door").with_parent("wall"));
    scene.push(SceneObject::new("wall").with_parent("building"));
    scene.push(SceneObject::new("building"));
    scene
}

#[test]
fn test_restore_writes_roots_first() {
    let mut scene = leaves_first_scene();
    let mut snapshot = StateSnapshot::new();
    snapshot.save(&scene);

    let report = snapshot.restore(&mut scene);

    assert_eq!(report.restored, 5);
    assert_eq!(
        scene.writes,
        vec!["building", "wall", "window", "door", "handle"]
    );
}

#[test]
fn test_restore_order_follows_capture_not_live_order() {
    let mut scene = leaves_first_scene();
    let mut snapshot = StateSnapshot::new();
    snapshot.save(&scene);

    scene.items.reverse();
    snapshot.restore(&mut scene);

    let position = |id: &str| scene.writes.iter().position(|w| w == id).unwrap();
    assert!(position("building") < position("wall"));
    assert!(position("wall") < position("door"));
    assert!(position("door") < position("handle"));
}

#[test]
fn test_save_walks_objects_a_bounded_number_of_times() {
    let mut scene = RecordingScene::default();
    scene.push(SceneObject::new("root"));
    for i in 0..1000 {
        scene.push(SceneObject::new(format!("obj{}", i)).with_parent("root"));
    }

    let mut snapshot = StateSnapshot::new();
    snapshot.save(&scene);

    assert_eq!(snapshot.len(), 1001);
    assert!(
        scene.walks.get() <= 2,
        "save walked the object collection {} times",
        scene.walks.get()
    );
}
