use super::camera::ViewCamera;
use super::object::Renderable;

/// Scene graph abstraction: one camera plus a collection of objects keyed by id
pub trait SceneGraph {
    type Camera: ViewCamera;
    type Object: Renderable;

    fn camera(&self) -> &Self::Camera;
    fn camera_mut(&mut self) -> &mut Self::Camera;

    /// All live objects in the scene's native enumeration order
    fn objects(&self) -> impl Iterator<Item = &Self::Object>;

    /// Number of live objects
    fn object_count(&self) -> usize {
        self.objects().count()
    }

    /// Look up an object, `None` when the id is stale
    fn object(&self, id: &str) -> Option<&Self::Object>;
    fn object_mut(&mut self, id: &str) -> Option<&mut Self::Object>;
}
