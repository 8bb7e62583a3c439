//! Text labels drawn as camera-facing sprites above scene nodes.
//!
//! Rasterizing text is platform work, so it sits behind [`LabelRasterizer`];
//! the core only describes the label and validates the resulting bitmap.

use glam::{Vec2, Vec3};

use crate::constants::{
    LABEL_BITMAP_HEIGHT, LABEL_BITMAP_WIDTH, LABEL_FILL, LABEL_FONT, LABEL_OFFSET,
    LABEL_SPRITE_SCALE,
};
use crate::error::SceneError;

#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// CSS font shorthand.
    pub font: String,
    /// CSS color.
    pub fill: String,
    pub bitmap_width: u32,
    pub bitmap_height: u32,
    /// Sprite size in world units.
    pub sprite_scale: Vec2,
    /// Sprite center relative to the labeled node.
    pub offset: Vec3,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: LABEL_FONT.to_string(),
            fill: LABEL_FILL.to_string(),
            bitmap_width: LABEL_BITMAP_WIDTH,
            bitmap_height: LABEL_BITMAP_HEIGHT,
            sprite_scale: Vec2::from(LABEL_SPRITE_SCALE),
            offset: Vec3::from(LABEL_OFFSET),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub style: LabelStyle,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: LabelStyle::default(),
        }
    }

    /// World-space sprite center for a label attached to a node at `parent`.
    pub fn anchor(&self, parent: Vec3) -> Vec3 {
        parent + self.style.offset
    }
}

/// Tightly packed RGBA8 pixels, row-major from the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelBitmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl LabelBitmap {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, SceneError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected || expected == 0 {
            return Err(SceneError::BitmapSize {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

/// Turns label text into a bitmap the renderer can upload as a texture.
pub trait LabelRasterizer {
    fn rasterize(&self, label: &Label) -> anyhow::Result<LabelBitmap>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_sits_above_parent() {
        let label = Label::new("Lounge");
        assert_eq!(label.anchor(Vec3::new(10.0, 1.5, 0.0)), Vec3::new(10.0, 5.0, 0.0));
    }

    #[test]
    fn bitmap_length_is_checked() {
        assert!(LabelBitmap::new(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            LabelBitmap::new(2, 2, vec![0; 15]),
            Err(SceneError::BitmapSize { expected: 16, actual: 15, .. })
        ));
        assert!(LabelBitmap::new(0, 0, Vec::new()).is_err());
    }
}
