//! Construction-time validation errors.
//!
//! Picking itself never fails: a miss is `None`. These errors cover the
//! inputs a host hands to the core when building scenes and surfaces.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("viewport has no area ({width}x{height})")]
    EmptyViewport { width: f32, height: f32 },

    #[error("keyframe track needs at least one keyframe")]
    EmptyTrack,

    #[error("tween duration must be positive and finite, got {0}")]
    InvalidDuration(f32),

    #[error("unknown demo `{0}` (expected `campus` or `inspector`)")]
    UnknownDemo(String),

    #[error("label bitmap is {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BitmapSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
