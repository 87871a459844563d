use core::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

/// Point or offset in the plane.
///
/// Plain `#[repr(C)]` pair so vertex layouts embedding it stay `Pod`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl From<glam::Vec2> for Vec2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

macro_rules! componentwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Vec2 {
            type Output = Vec2;

            #[inline]
            fn $method(self, rhs: Vec2) -> Vec2 {
                Vec2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl $trait<f32> for Vec2 {
            type Output = Vec2;

            #[inline]
            fn $method(self, rhs: f32) -> Vec2 {
                Vec2::new(self.x $op rhs, self.y $op rhs)
            }
        }
    };
}

componentwise!(Add, add, +);
componentwise!(Sub, sub, -);
componentwise!(Mul, mul, *);
componentwise!(Div, div, /);

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops_are_componentwise() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 8.0);
        assert_eq!(a + b, Vec2::new(5.0, 10.0));
        assert_eq!(b - a, Vec2::new(3.0, 6.0));
        assert_eq!(a * b, Vec2::new(4.0, 16.0));
        assert_eq!(b / 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn array_conversions() {
        let v: Vec2 = [3.0, -1.0].into();
        assert_eq!(<[f32; 2]>::from(v), [3.0, -1.0]);
    }

    #[test]
    fn projects_through_glam_matrices() {
        let m = glam::Affine2::from_scale_angle_translation(
            glam::vec2(2.0, 2.0),
            0.0,
            glam::vec2(1.0, -1.0),
        );
        let p: Vec2 = m.transform_point2(Vec2::new(3.0, 4.0).into()).into();
        assert_eq!(p, Vec2::new(7.0, 7.0));
    }
}
