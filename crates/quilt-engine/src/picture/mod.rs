//! Texture regions.
//!
//! A [`Picture`] is a rectangular view over raster data. Slicing never copies the
//! raster; every slice remembers the root of its lineage, which backends use as a
//! cache key for uploaded textures.

mod raster;

use core::any::Any;
use core::fmt;

use crate::coords::{ColorRgba, Rect, Vec2};

pub use raster::RasterPicture;

/// Rectangular area of raster data.
pub trait Picture: fmt::Debug {
    /// Rectangle holding all data. Queries outside it return the property's default.
    fn bounds(&self) -> Rect;

    /// Sub-picture with the given bounds, sharing this picture's raster.
    fn slice(&self, bounds: Rect) -> Box<dyn Picture>;

    /// The root picture this one was sliced from (a copy of itself when it is the root).
    ///
    /// Implementations cache the root; this must be O(1).
    fn original(&self) -> Box<dyn Picture>;

    /// Cheap handle copy sharing the same raster and lineage.
    fn boxed_clone(&self) -> Box<dyn Picture>;

    #[inline]
    fn as_color(&self) -> Option<&dyn PictureColor> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Pictures with a color at every position inside their bounds.
pub trait PictureColor {
    /// Color at `at`; transparent black outside the bounds.
    fn color_at(&self, at: Vec2) -> ColorRgba;
}
