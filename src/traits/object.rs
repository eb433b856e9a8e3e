use glam::Vec3;

/// Renderable object with mutable visual state
pub trait Renderable {
    /// Stable identifier, unique within the scene
    fn id(&self) -> &str;

    /// Identifier of the parent object, `None` for roots
    fn parent_id(&self) -> Option<&str>;

    fn visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    fn edges(&self) -> bool;
    fn set_edges(&mut self, edges: bool);

    fn xrayed(&self) -> bool;
    fn set_xrayed(&mut self, xrayed: bool);

    fn highlighted(&self) -> bool;
    fn set_highlighted(&mut self, highlighted: bool);

    fn selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);

    fn clippable(&self) -> bool;
    fn set_clippable(&mut self, clippable: bool);

    fn pickable(&self) -> bool;
    fn set_pickable(&mut self, pickable: bool);

    /// Color multiplier applied on top of the material color
    fn colorize(&self) -> Vec3;
    fn set_colorize(&mut self, colorize: Vec3);

    fn opacity(&self) -> f32;
    fn set_opacity(&mut self, opacity: f32);
}
