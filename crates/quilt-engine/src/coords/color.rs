use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Straight-alpha RGBA color (not premultiplied).
///
/// This is the color model vertices carry and the one batch color masks are
/// normalized into. Any other representation reaches it through `From`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Transparent black, the value of any color query outside a picture.
    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Component-wise product, alpha included. This is how color masks tint vertices.
impl Mul for ColorRgba {
    type Output = ColorRgba;
    #[inline]
    fn mul(self, rhs: ColorRgba) -> ColorRgba {
        ColorRgba::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}

// ── color model conversions ───────────────────────────────────────────────

impl From<[f32; 4]> for ColorRgba {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<[u8; 4]> for ColorRgba {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }
}

impl From<image::Rgba<u8>> for ColorRgba {
    #[inline]
    fn from(px: image::Rgba<u8>) -> Self {
        Self::from(px.0)
    }
}

/// Un-premultiplies. Fully transparent colors map to transparent black.
impl From<Color> for ColorRgba {
    #[inline]
    fn from(c: Color) -> Self {
        let (r, g, b, a) = c.to_straight();
        Self::new(r, g, b, a)
    }
}
