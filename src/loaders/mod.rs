pub mod json;

pub use json::{load_scene_file, parse_scene, CameraDescription, ObjectDescription, SceneDescription};
