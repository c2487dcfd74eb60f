pub mod camera;
pub mod constants;
pub mod feedback;
pub mod hit;
pub mod interaction;
pub mod keys;
pub mod mesh;
pub mod orbit;
pub mod parts;
pub mod viewer;

pub use camera::*;
pub use constants::*;
pub use feedback::*;
pub use hit::*;
pub use interaction::*;
pub use keys::*;
pub use mesh::*;
pub use orbit::*;
pub use parts::*;
pub use viewer::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
