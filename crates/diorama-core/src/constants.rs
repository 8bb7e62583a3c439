use std::time::Duration;

// Shared visual and interaction tuning constants used by the core and the web frontend.

// Selection
pub const SELECTED_EMISSIVE: u32 = 0x333333; // emissive applied to the selected object
pub const NO_SELECTION_TEXT: &str = "No object selected. Click a cube to see its information here.";

// Animation
pub const CUBE_SPIN_RAD_PER_SEC: f32 = 0.12; // 0.002 rad per frame at 60 Hz
pub const MAX_FRAME_DT: Duration = Duration::from_millis(100); // clamp after tab switches
pub const SPHERE_TRACK_SECS: f32 = 20.0;

// Labels
pub const LABEL_FONT: &str = "bold 80px Arial";
pub const LABEL_FILL: &str = "black";
pub const LABEL_BITMAP_WIDTH: u32 = 1024;
pub const LABEL_BITMAP_HEIGHT: u32 = 256;
pub const LABEL_SPRITE_SCALE: [f32; 2] = [10.0, 3.0]; // world units
pub const LABEL_OFFSET: [f32; 3] = [0.0, 3.5, 0.0]; // relative to the labeled node

// Shadows
pub const SHADOW_MAP_SIZE: u32 = 2048;
pub const SHADOW_HALF_EXTENT: f32 = 25.0; // light frustum half width, covers the campus ground
pub const SHADOW_NEAR: f32 = 0.5;
pub const SHADOW_FAR: f32 = 100.0;

// Orbit controls (mirrors the usual three.js defaults)
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly scale per wheel step
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3; // keep away from the poles

// Inspector layout
pub const INSPECTOR_CUBE_COUNT: usize = 20;
pub const INSPECTOR_SIZE_RANGE: (f32, f32) = (0.6, 2.2);
pub const INSPECTOR_XZ_RANGE: (f32, f32) = (-8.0, 8.0);
pub const INSPECTOR_Y_RANGE: (f32, f32) = (-0.5, 5.0);
pub const INSPECTOR_DEFAULT_SEED: u64 = 42;
