use crate::coords::ColorRgba;

/// RGBA color with premultiplied alpha: `r`, `g` and `b` are already scaled by `a`.
///
/// Compositing code usually holds colors this way. Vertex colors and batch masks
/// are straight alpha; convert with `From` in either direction.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self::from_premul(0.0, 0.0, 0.0, 0.0)
    }

    /// Takes components that are already premultiplied.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplies straight components, clamping each to `[0, 1]` first.
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        let [r, g, b] = [r, g, b].map(|c| c.clamp(0.0, 1.0) * a);
        Self { r, g, b, a }
    }

    /// Straight components as `(r, g, b, a)`; zero alpha yields all zeros.
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            return (0.0, 0.0, 0.0, 0.0);
        }
        (self.r / self.a, self.g / self.a, self.b / self.a, self.a)
    }
}

impl From<ColorRgba> for Color {
    #[inline]
    fn from(c: ColorRgba) -> Self {
        Self::from_straight(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premultiplies_and_back() {
        let c = Color::from_straight(1.0, 0.5, 0.25, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.125, 0.5));
        assert_eq!(c.to_straight(), (1.0, 0.5, 0.25, 0.5));
    }

    #[test]
    fn out_of_range_components_clamp() {
        assert_eq!(
            Color::from_straight(2.0, -1.0, 0.5, 3.0),
            Color::from_premul(1.0, 0.0, 0.5, 1.0)
        );
    }

    #[test]
    fn converts_from_vertex_colors() {
        let c = Color::from(ColorRgba::new(1.0, 1.0, 1.0, 0.25));
        assert_eq!(c, Color::from_premul(0.25, 0.25, 0.25, 0.25));
        assert_eq!(ColorRgba::from(c), ColorRgba::new(1.0, 1.0, 1.0, 0.25));
    }
}
