use std::fmt;

/// Packed `0xRRGGBB` sRGB color, the form the demos specify materials in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);
    pub const RED: Color = Color(0xff0000);
    pub const GREEN: Color = Color(0x008000);
    pub const GRAY: Color = Color(0x808080);

    pub const fn hex(self) -> u32 {
        self.0 & 0xff_ffff
    }

    /// Build from unit-range sRGB channels; values are clamped.
    pub fn from_rgb_f32(r: f32, g: f32, b: f32) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        Color((q(r) << 16) | (q(g) << 8) | q(b))
    }

    /// sRGB channels in \[0, 1\].
    pub fn to_srgb(self) -> [f32; 3] {
        let h = self.hex();
        [
            ((h >> 16) & 0xff) as f32 / 255.0,
            ((h >> 8) & 0xff) as f32 / 255.0,
            (h & 0xff) as f32 / 255.0,
        ]
    }

    /// Linear-light channels for shading.
    pub fn to_linear(self) -> [f32; 3] {
        self.to_srgb().map(srgb_to_linear)
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.hex())
    }
}

impl From<u32> for Color {
    fn from(v: u32) -> Self {
        Color(v)
    }
}
