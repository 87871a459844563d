use core::any::Any;
use core::fmt;
use core::ops::Range;
use std::cell::RefCell;
use std::rc::Weak;

use crate::error::BatchError;
use crate::target::{TargetId, TargetTriangles};
use crate::vertex::{
    Triangles, TrianglesColor, TrianglesData, TrianglesPicture, TrianglesPosition,
};

use super::Shared;

/// Geometry bound to a [`Batch`](super::Batch).
///
/// Holds a copy of the caller's container plus two full-vertex shadows:
/// `original` (the caller's data, untransformed) and `transformed` (scratch
/// rewritten on every draw). Drawing appends the transformed vertices to the
/// owning batch.
///
/// The back-reference is weak: bound geometry never keeps its batch alive.
pub struct BatchTriangles {
    triangles: Box<dyn Triangles>,
    original: TrianglesData,
    transformed: TrianglesData,
    owner: TargetId,
    batch: Weak<RefCell<Shared>>,
}

impl BatchTriangles {
    pub(super) fn new(src: &dyn Triangles, owner: TargetId, batch: Weak<RefCell<Shared>>) -> Self {
        let mut original = TrianglesData::with_len(src.len());
        original
            .update(src)
            .expect("shadow buffer is allocated with the source length");
        let mut transformed = TrianglesData::with_len(src.len());
        transformed
            .update(&original)
            .expect("shadow buffers share a length by construction");

        Self {
            triangles: src.copy(),
            original,
            transformed,
            owner,
            batch,
        }
    }

    /// Id of the batch these triangles draw onto.
    #[inline]
    pub fn owner(&self) -> TargetId {
        self.owner
    }

    /// Transforms `original` with the batch's current matrix and color mask and
    /// appends the result to the batch.
    ///
    /// Without a picture every vertex is forced to intensity 0 (flat color).
    pub(super) fn draw_into_batch(&mut self, textured: bool) -> Result<(), BatchError> {
        let Some(batch) = self.batch.upgrade() else {
            log::warn!("{} dropped before its geometry was drawn", self.owner);
            return Err(BatchError::TargetGone { target: self.owner });
        };
        let (matrix, mask) = {
            let shared = batch.borrow();
            (shared.matrix, shared.color_mask)
        };

        self.original.with_vertices(|orig| {
            self.transformed.with_vertices_mut(|trans| {
                for (t, o) in trans.iter_mut().zip(orig) {
                    t.position = matrix.transform_point2(o.position.into()).into();
                    t.color = o.color * mask;
                    t.picture = o.picture;
                    t.intensity = if textured { o.intensity } else { 0.0 };
                }
            });
        });

        self.triangles.update(&self.transformed)?;

        let n = self.triangles.len();
        let mut shared = batch.borrow_mut();
        let container = shared.drawer.triangles_mut();
        let start = container.len();
        container.set_len(start + n);
        let mut tail = container.slice(start..start + n);
        tail.update(self.triangles.as_ref())?;
        shared.drawer.dirty();

        log::trace!("{}: appended {n} vertices at {start} (textured: {textured})", self.owner);
        Ok(())
    }
}

impl fmt::Debug for BatchTriangles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchTriangles")
            .field("owner", &self.owner)
            .field("triangles", &self.triangles)
            .finish_non_exhaustive()
    }
}

impl Triangles for BatchTriangles {
    #[inline]
    fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Resizes the geometry and both shadow buffers together.
    fn set_len(&mut self, len: usize) {
        self.triangles.set_len(len);
        self.original.set_len(len);
        self.transformed.set_len(len);
    }

    fn slice(&self, range: Range<usize>) -> Box<dyn Triangles> {
        self.triangles.slice(range)
    }

    /// Updates the geometry and its untransformed shadow, so the next draw uses `src`.
    fn update(&mut self, src: &dyn Triangles) -> Result<(), BatchError> {
        self.triangles.update(src)?;
        self.original.update(src)
    }

    fn copy(&self) -> Box<dyn Triangles> {
        self.triangles.copy()
    }

    #[inline]
    fn as_position(&self) -> Option<&dyn TrianglesPosition> {
        self.triangles.as_position()
    }

    #[inline]
    fn as_color(&self) -> Option<&dyn TrianglesColor> {
        self.triangles.as_color()
    }

    #[inline]
    fn as_picture(&self) -> Option<&dyn TrianglesPicture> {
        self.triangles.as_picture()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl TargetTriangles for BatchTriangles {
    fn draw(&mut self) -> Result<(), BatchError> {
        self.draw_into_batch(false)
    }

    #[inline]
    fn is_live(&self) -> bool {
        self.batch.strong_count() > 0
    }
}
