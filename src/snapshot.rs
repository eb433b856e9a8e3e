use log::{debug, trace};

use crate::hierarchy::depth_with_limit;
use crate::traits::{Renderable, SceneGraph, ViewCamera};
use crate::types::{CameraState, ObjectVisualState, Projection, ProjectionKind};

/// Outcome counts of a restore
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Records written back to a live object
    pub restored: usize,
    /// Records whose object no longer exists
    pub missing: usize,
}

/// Reusable snapshot of a scene's camera and per-object visual state.
///
/// Record slots are reused across calls to [`StateSnapshot::save`]; the
/// stored records are always ordered by ascending depth, roots first.
#[derive(Clone, Debug, Default)]
pub struct StateSnapshot {
    /// `None` until the first save
    camera: Option<CameraState>,
    records: Vec<ObjectVisualState>,
    active: usize,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite this snapshot with the scene's current state
    pub fn save<S: SceneGraph>(&mut self, scene: &S) {
        self.camera = Some(capture_camera(scene.camera()));

        // One walk for the cycle cap, one for the capture
        let max_hops = scene.object_count();
        self.active = 0;
        for object in scene.objects() {
            let depth = depth_with_limit(scene, object, max_hops);
            let i = self.active;
            if i == self.records.len() {
                self.records.push(ObjectVisualState::default());
            }
            capture_object(&mut self.records[i], object, depth);
            self.active += 1;
        }

        self.records.truncate(self.active);
        self.records.sort_by_key(|record| record.depth);

        debug!(
            "saved {} objects (capacity {}), projection {:?}",
            self.active,
            self.records.capacity(),
            self.camera.and_then(|c| c.projection).map(|p| p.kind())
        );
    }

    /// Push the captured state back into the scene.
    ///
    /// Records whose object has been removed since the save are skipped.
    /// A snapshot that was never saved leaves the camera untouched.
    pub fn restore<S: SceneGraph>(&self, scene: &mut S) -> RestoreReport {
        if let Some(camera) = &self.camera {
            restore_camera(camera, scene.camera_mut());
        }

        let mut report = RestoreReport::default();
        for record in self.objects() {
            match scene.object_mut(&record.object_id) {
                Some(object) => {
                    apply_object(record, object);
                    report.restored += 1;
                }
                None => {
                    trace!("object '{}' no longer in scene, skipped", record.object_id);
                    report.missing += 1;
                }
            }
        }

        debug!(
            "restored {} objects, {} missing",
            report.restored, report.missing
        );
        report
    }

    /// Captured camera, `None` before the first save
    pub fn camera(&self) -> Option<&CameraState> {
        self.camera.as_ref()
    }

    /// Captured records in restore order
    pub fn objects(&self) -> &[ObjectVisualState] {
        &self.records[..self.active]
    }

    /// Captured record for `id`, if any
    pub fn object(&self, id: &str) -> Option<&ObjectVisualState> {
        self.objects().iter().find(|record| record.object_id == id)
    }

    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Allocated record slots
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Drop all records, keeping the allocation
    pub fn clear(&mut self) {
        self.records.clear();
        self.active = 0;
        self.camera = None;
    }
}

fn capture_camera<C: ViewCamera>(camera: &C) -> CameraState {
    let projection = match camera.projection_kind() {
        Some(ProjectionKind::Perspective) => Some(Projection::Perspective(camera.perspective())),
        Some(ProjectionKind::Ortho) => Some(Projection::Ortho(camera.ortho())),
        Some(ProjectionKind::Frustum) => Some(Projection::Frustum(camera.frustum())),
        Some(ProjectionKind::Custom) => Some(Projection::Custom(camera.custom_projection())),
        None => {
            debug!("camera projection mode not recognized, not captured");
            None
        }
    };
    CameraState {
        eye: camera.eye(),
        look: camera.look(),
        up: camera.up(),
        projection,
    }
}

fn capture_object<O: Renderable>(record: &mut ObjectVisualState, object: &O, depth: usize) {
    record.object_id.clear();
    record.object_id.push_str(object.id());
    record.depth = depth;
    record.visible = object.visible();
    record.edges = object.edges();
    record.xrayed = object.xrayed();
    record.highlighted = object.highlighted();
    record.selected = object.selected();
    record.clippable = object.clippable();
    record.pickable = object.pickable();
    record.colorize = object.colorize();
    record.opacity = object.opacity();
}

fn apply_object<O: Renderable>(record: &ObjectVisualState, object: &mut O) {
    object.set_visible(record.visible);
    object.set_edges(record.edges);
    object.set_xrayed(record.xrayed);
    object.set_highlighted(record.highlighted);
    object.set_selected(record.selected);
    object.set_clippable(record.clippable);
    object.set_pickable(record.pickable);
    object.set_colorize(record.colorize);
    object.set_opacity(record.opacity);
}

fn restore_camera<C: ViewCamera>(state: &CameraState, camera: &mut C) {
    camera.set_eye(state.eye);
    camera.set_look(state.look);
    camera.set_up(state.up);

    let Some(projection) = state.projection else {
        return;
    };
    camera.set_projection_kind(projection.kind());
    match projection {
        Projection::Perspective(p) => camera.set_perspective(p),
        Projection::Ortho(o) => camera.set_ortho(o),
        Projection::Frustum(f) => camera.set_frustum(f),
        Projection::Custom(c) => camera.set_custom_projection(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::scene::{Scene, SceneObject};

    #[test]
    fn test_empty_snapshot() {
        let snapshot = StateSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
        assert!(snapshot.camera().is_none());
    }

    #[test]
    fn test_save_reuses_id_buffers() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(SceneObject::new("a")).unwrap();

        let mut snapshot = StateSnapshot::new();
        snapshot.save(&scene);
        let capacity = snapshot.capacity();

        scene.remove_object("a");
        scene.add_object(SceneObject::new("b")).unwrap();
        snapshot.save(&scene);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.objects()[0].object_id, "b");
        assert_eq!(snapshot.capacity(), capacity);
    }

    #[test]
    fn test_clear_resets_records_and_camera() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(SceneObject::new("a")).unwrap();

        let mut snapshot = StateSnapshot::new();
        snapshot.save(&scene);
        snapshot.clear();

        assert!(snapshot.is_empty());
        assert!(snapshot.object("a").is_none());
        assert!(snapshot.camera().is_none());
    }

    #[test]
    fn test_unsaved_snapshot_leaves_camera_untouched() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(SceneObject::new("a")).unwrap();
        scene.camera.pan(glam::Vec3::new(4.0, 0.0, 0.0));
        let before = scene.camera.clone();

        let report = StateSnapshot::new().restore(&mut scene);

        assert_eq!(scene.camera, before);
        assert_eq!(report, RestoreReport::default());
    }
}
