use core::any::Any;
use core::fmt;
use core::ops::Range;

use crate::coords::{ColorRgba, Vec2};
use crate::error::BatchError;

/// A list of vertices where each consecutive three form one triangle.
///
/// Containers are capability-tagged: the `as_*` accessors return `Some` for every
/// vertex property the concrete type stores. Consumers dispatch on those rather
/// than on a fixed vertex struct.
pub trait Triangles: fmt::Debug {
    /// Number of vertices (three per triangle).
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resizes to `len` vertices. New vertices are default-filled.
    ///
    /// If `b` was obtained from `a.slice(..)`, the aliasing between `a` and `b` is
    /// undefined after either of them is resized.
    fn set_len(&mut self, len: usize);

    /// Returns a view over vertices `[range.start, range.end)` sharing this
    /// container's storage. Vertex `k` of the view is vertex `range.start + k` here.
    ///
    /// The returned container has the same concrete type as `self`.
    ///
    /// # Panics
    /// Panics if the range is out of bounds or reversed.
    fn slice(&self, range: Range<usize>) -> Box<dyn Triangles>;

    /// Copies every property both `self` and `src` support from `src` into `self`.
    ///
    /// Properties `src` lacks are left untouched; properties `self` lacks are
    /// ignored. Fails with [`BatchError::LengthMismatch`] (writing nothing) when
    /// lengths differ.
    fn update(&mut self, src: &dyn Triangles) -> Result<(), BatchError>;

    /// Independent deep copy with the same concrete type.
    fn copy(&self) -> Box<dyn Triangles>;

    #[inline]
    fn as_position(&self) -> Option<&dyn TrianglesPosition> {
        None
    }

    #[inline]
    fn as_color(&self) -> Option<&dyn TrianglesColor> {
        None
    }

    #[inline]
    fn as_picture(&self) -> Option<&dyn TrianglesPicture> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Containers with a position per vertex.
pub trait TrianglesPosition {
    fn position(&self, i: usize) -> Vec2;
}

/// Containers with a straight-alpha color per vertex.
pub trait TrianglesColor {
    fn color(&self, i: usize) -> ColorRgba;
}

/// Containers with texture coordinates per vertex.
///
/// These are coordinates into a picture, not a picture.
pub trait TrianglesPicture {
    /// Texture coordinate and intensity of vertex `i`.
    fn picture(&self, i: usize) -> (Vec2, f32);
}
