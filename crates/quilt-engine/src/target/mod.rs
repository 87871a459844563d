//! Render target protocol.
//!
//! Nothing is drawn onto a [`Target`] directly. A target manufactures
//! target-bound copies of geometry ([`TargetTriangles`]) and pictures
//! ([`TargetPicture`]); drawing those is what lands data on the target.
//!
//! ```text
//!   Triangles ──► Target::make_triangles ──► TargetTriangles::draw()
//!   Picture   ──► Target::make_picture   ──► TargetPicture::draw(&mut TargetTriangles)
//! ```
//!
//! [`Drawer`] caches those copies per target and refreshes them when the source
//! geometry is marked dirty.

mod drawer;
mod id;

use crate::coords::{Affine2, ColorRgba};
use crate::error::BatchError;
use crate::picture::Picture;
use crate::vertex::Triangles;

pub use drawer::Drawer;
pub use id::TargetId;

/// Something that can be drawn onto: a batch, a canvas, a window backend.
pub trait Target {
    /// Identity token checked when target-bound objects meet.
    fn target_id(&self) -> TargetId;

    /// Specialized copy of `triangles` that draws onto this target.
    ///
    /// A target may ignore vertex properties it cannot render, but the copy still
    /// carries them so they survive comparisons with the caller's data.
    fn make_triangles(&mut self, triangles: &dyn Triangles) -> Box<dyn TargetTriangles>;

    /// Specialized copy of `picture` that draws onto this target together with
    /// triangles made by the same target.
    fn make_picture(&mut self, picture: &dyn Picture) -> Box<dyn TargetPicture>;
}

/// A [`Target`] with per-target draw adjustments.
///
/// Both settings apply to draws issued after the call; earlier draws keep the
/// values that were current when they ran.
pub trait BasicTarget: Target {
    /// Matrix every subsequently drawn position is projected by.
    fn set_matrix(&mut self, matrix: Affine2);

    /// Color multiplied into every subsequently drawn vertex color.
    /// `None` resets the mask to opaque white.
    fn set_color_mask(&mut self, mask: Option<ColorRgba>);
}

/// Triangles generated by [`Target::make_triangles`]; drawable onto that target only.
pub trait TargetTriangles: Triangles {
    /// Draws onto the generating target without a picture (flat color).
    fn draw(&mut self) -> Result<(), BatchError>;

    /// `false` once the generating target is gone. Such copies can no longer draw.
    #[inline]
    fn is_live(&self) -> bool {
        true
    }
}

/// Picture generated by [`Target::make_picture`]; drawable onto that target only.
pub trait TargetPicture: Picture {
    /// Draws `triangles` textured with this picture.
    ///
    /// `triangles` must come from the same target, otherwise
    /// [`BatchError::OwnershipViolation`] is returned.
    fn draw(&self, triangles: &mut dyn TargetTriangles) -> Result<(), BatchError>;
}
