pub mod camera;
pub mod object;
pub mod scene;

pub use camera::*;
pub use object::*;
pub use scene::*;
