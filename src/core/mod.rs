pub mod ambient;
pub mod bands;
pub mod camera;
pub mod constants;
pub mod flight;
pub mod lifecycle;
pub mod motion;
pub mod scene;
pub mod scroll;
pub mod scroll_driven;
pub mod sections;
pub mod stages;

pub use camera::*;
pub use constants::*;
pub use motion::*;
pub use scene::*;
pub use scroll::*;
pub use sections::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
