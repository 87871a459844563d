use core::any::Any;

use crate::coords::Rect;
use crate::error::BatchError;
use crate::picture::{Picture, PictureColor};
use crate::target::{TargetId, TargetPicture, TargetTriangles};

use super::BatchTriangles;

/// Picture bound to a [`Batch`](super::Batch).
///
/// Slices keep the lineage root and the root's owner. Ownership is checked only
/// when drawing, against the triangles handed to [`TargetPicture::draw`].
#[derive(Debug)]
pub struct BatchPicture {
    picture: Box<dyn Picture>,
    /// Root of the lineage; `None` when this picture is the root.
    root: Option<Box<dyn Picture>>,
    owner: TargetId,
}

impl BatchPicture {
    pub(super) fn new(picture: &dyn Picture, owner: TargetId) -> Self {
        Self {
            picture: picture.boxed_clone(),
            root: None,
            owner,
        }
    }

    /// Id of the batch this picture draws onto.
    #[inline]
    pub fn owner(&self) -> TargetId {
        self.owner
    }

    /// The wrapped picture.
    #[inline]
    pub fn inner(&self) -> &dyn Picture {
        self.picture.as_ref()
    }

    /// Typed variant of [`Picture::slice`]; the result is still drawable.
    pub fn sliced(&self, bounds: Rect) -> BatchPicture {
        BatchPicture {
            picture: self.picture.slice(bounds),
            root: Some(self.root_picture().boxed_clone()),
            owner: self.owner,
        }
    }

    /// Typed variant of [`Picture::original`].
    pub fn root(&self) -> BatchPicture {
        BatchPicture {
            picture: self.root_picture().boxed_clone(),
            root: None,
            owner: self.owner,
        }
    }

    #[inline]
    fn root_picture(&self) -> &dyn Picture {
        self.root.as_deref().unwrap_or(self.picture.as_ref())
    }
}

impl Picture for BatchPicture {
    #[inline]
    fn bounds(&self) -> Rect {
        self.picture.bounds()
    }

    fn slice(&self, bounds: Rect) -> Box<dyn Picture> {
        Box::new(self.sliced(bounds))
    }

    fn original(&self) -> Box<dyn Picture> {
        Box::new(self.root())
    }

    fn boxed_clone(&self) -> Box<dyn Picture> {
        Box::new(BatchPicture {
            picture: self.picture.boxed_clone(),
            root: self.root.as_ref().map(|r| r.boxed_clone()),
            owner: self.owner,
        })
    }

    #[inline]
    fn as_color(&self) -> Option<&dyn PictureColor> {
        self.picture.as_color()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl TargetPicture for BatchPicture {
    fn draw(&self, triangles: &mut dyn TargetTriangles) -> Result<(), BatchError> {
        let Some(bt) = triangles.as_any_mut().downcast_mut::<BatchTriangles>() else {
            log::warn!("{}: picture drawn with triangles not made by a batch", self.owner);
            return Err(BatchError::OwnershipViolation { expected: self.owner, found: None });
        };
        if bt.owner() != self.owner {
            log::warn!("{}: picture drawn with triangles from {}", self.owner, bt.owner());
            return Err(BatchError::OwnershipViolation {
                expected: self.owner,
                found: Some(bt.owner()),
            });
        }
        bt.draw_into_batch(true)
    }
}
