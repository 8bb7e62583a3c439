// Host page contract and interaction tuning for the web front-end.
//
// Scene-level tuning (highlight color, spin rate, label style) lives in
// `diorama_core::constants`; these only concern the DOM and input.

// Page elements
pub const CANVAS_ID: &str = "app-canvas";
pub const INFO_ID: &str = "info";

// Demo selection
pub const DEMO_ATTR: &str = "data-demo";
pub const SEED_ATTR: &str = "data-seed";
pub const DEMO_QUERY_KEY: &str = "demo";

// Pointer
pub const CLICK_SLOP_PX: f32 = 4.0; // drags shorter than this still count as clicks

// Rendering
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const INITIAL_INSTANCE_CAPACITY: usize = 64;
pub const SHADOW_DEPTH_BIAS: f32 = 0.0015; // light-space depth offset against acne
