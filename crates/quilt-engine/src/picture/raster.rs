use core::any::Any;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::coords::{ColorRgba, Rect, Vec2};

use super::{Picture, PictureColor};

/// Picture backed by an in-memory RGBA8 raster.
///
/// Bounds are in raster pixel space (top-left origin). The raster is shared by
/// every slice; only bounds differ.
#[derive(Debug, Clone)]
pub struct RasterPicture {
    raster: Arc<RgbaImage>,
    bounds: Rect,
    /// Bounds of the lineage root, cached so `original` is O(1).
    root: Rect,
}

impl RasterPicture {
    pub fn from_image(image: RgbaImage) -> Self {
        let bounds = Rect::new(0.0, 0.0, image.width() as f32, image.height() as f32);
        Self {
            raster: Arc::new(image),
            bounds,
            root: bounds,
        }
    }

    /// Solid `width × height` raster, e.g. a white pixel for untextured quads in an atlas.
    pub fn from_pixels(width: u32, height: u32, fill: [u8; 4]) -> Self {
        Self::from_image(RgbaImage::from_pixel(width, height, image::Rgba(fill)))
    }

    /// Decodes an image file. Decoding is left to the `image` crate.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("failed to load picture from {}", path.display()))?;
        log::debug!(
            "loaded picture {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::from_image(image.into_rgba8()))
    }

    #[inline]
    pub fn raster(&self) -> &RgbaImage {
        &self.raster
    }

    /// `true` if both pictures read from the same raster allocation.
    #[inline]
    pub fn same_raster(&self, other: &RasterPicture) -> bool {
        Arc::ptr_eq(&self.raster, &other.raster)
    }

    /// Typed variant of [`Picture::slice`].
    #[inline]
    pub fn sliced(&self, bounds: Rect) -> Self {
        Self {
            raster: Arc::clone(&self.raster),
            bounds,
            root: self.root,
        }
    }

    /// Typed variant of [`Picture::original`].
    #[inline]
    pub fn root(&self) -> Self {
        self.sliced(self.root)
    }
}

impl Picture for RasterPicture {
    #[inline]
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn slice(&self, bounds: Rect) -> Box<dyn Picture> {
        Box::new(self.sliced(bounds))
    }

    fn original(&self) -> Box<dyn Picture> {
        Box::new(self.root())
    }

    fn boxed_clone(&self) -> Box<dyn Picture> {
        Box::new(self.clone())
    }

    #[inline]
    fn as_color(&self) -> Option<&dyn PictureColor> {
        Some(self)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PictureColor for RasterPicture {
    fn color_at(&self, at: Vec2) -> ColorRgba {
        if !self.bounds.contains(at) || at.x < 0.0 || at.y < 0.0 {
            return ColorRgba::transparent();
        }
        let (x, y) = (at.x.floor() as u32, at.y.floor() as u32);
        match self.raster.get_pixel_checked(x, y) {
            Some(px) => ColorRgba::from(*px),
            None => ColorRgba::transparent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadrants() -> RasterPicture {
        // 4x4: left half red, right half blue
        let img = RgbaImage::from_fn(4, 4, |x, _| {
            if x < 2 { image::Rgba([255, 0, 0, 255]) } else { image::Rgba([0, 0, 255, 255]) }
        });
        RasterPicture::from_image(img)
    }

    #[test]
    fn bounds_cover_the_raster() {
        assert_eq!(quadrants().bounds(), Rect::new(0.0, 0.0, 4.0, 4.0));
    }

    #[test]
    fn slice_shares_raster_and_keeps_root() {
        let root = quadrants();
        let half = root.sliced(Rect::new(2.0, 0.0, 2.0, 4.0));
        let quarter = half.sliced(Rect::new(2.0, 2.0, 2.0, 2.0));

        assert!(quarter.same_raster(&root));
        assert_eq!(quarter.original().bounds(), root.bounds());
        assert_eq!(root.original().bounds(), root.bounds());
    }

    #[test]
    fn color_inside_slice() {
        let right = quadrants().sliced(Rect::new(2.0, 0.0, 2.0, 4.0));
        assert_eq!(right.color_at(Vec2::new(3.5, 1.0)), ColorRgba::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn color_outside_bounds_is_transparent() {
        let right = quadrants().sliced(Rect::new(2.0, 0.0, 2.0, 4.0));
        // inside the raster but outside the slice
        assert_eq!(right.color_at(Vec2::new(0.5, 0.5)), ColorRgba::transparent());
        assert_eq!(right.color_at(Vec2::new(10.0, 0.5)), ColorRgba::transparent());
    }

    #[test]
    fn slice_past_raster_edge_is_transparent() {
        let wide = quadrants().sliced(Rect::new(-2.0, 0.0, 10.0, 4.0));
        assert_eq!(wide.color_at(Vec2::new(-1.0, 1.0)), ColorRgba::transparent());
        assert_eq!(wide.color_at(Vec2::new(6.0, 1.0)), ColorRgba::transparent());
        assert_eq!(wide.color_at(Vec2::new(0.0, 1.0)), ColorRgba::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn open_missing_file_reports_path() {
        let err = RasterPicture::open("/definitely/not/here.png").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.png"));
    }
}
