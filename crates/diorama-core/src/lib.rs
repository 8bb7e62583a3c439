pub mod camera;
pub mod color;
pub mod constants;
pub mod context;
pub mod demo;
pub mod error;
pub mod frame;
pub mod label;
pub mod mesh;
pub mod orbit;
pub mod picker;
pub mod picking;
pub mod scene;
pub mod tween;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static SPRITE_WGSL: &str = include_str!("../shaders/sprite.wgsl");

pub use camera::*;
pub use color::*;
pub use context::*;
pub use demo::{Demo, DemoKind, InspectorParams};
pub use error::*;
pub use frame::*;
pub use label::*;
pub use mesh::*;
pub use orbit::*;
pub use picker::*;
pub use picking::*;
pub use scene::*;
pub use tween::*;
