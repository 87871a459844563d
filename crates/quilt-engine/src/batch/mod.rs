//! Batch accumulator.
//!
//! A [`Batch`] is a [`Target`] that flattens many drawn objects into one vertex
//! container so they can reach a backend in a single draw. Objects are put into a
//! batch by drawing them onto it:
//!
//! ```text
//!   batch.make_triangles(&geometry) ──► BatchTriangles ─┐
//!   batch.make_picture(&atlas_region) ──► BatchPicture ─┴─► draw ──► batch container
//!                                                                        │
//!   batch.draw(&mut backend) ◄───────────────────────────────────────────┘
//! ```
//!
//! Every accumulation draw transforms positions by the batch matrix and
//! multiplies colors by the batch color mask, leaving the caller's data alone.

mod picture;
mod triangles;

use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{Affine2, ColorRgba};
use crate::error::BatchError;
use crate::picture::Picture;
use crate::target::{BasicTarget, Drawer, Target, TargetId, TargetPicture, TargetTriangles};
use crate::vertex::Triangles;

pub use picture::BatchPicture;
pub use triangles::BatchTriangles;

/// Initial settings for a [`Batch`].
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Name used in log output.
    pub label: Option<String>,
    pub matrix: Affine2,
    pub color_mask: ColorRgba,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            label: None,
            matrix: Affine2::IDENTITY,
            color_mask: ColorRgba::white(),
        }
    }
}

/// Observable population of a batch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BatchState {
    /// No vertices: freshly created or just cleared.
    Empty,
    /// At least one vertex accumulated since the last clear.
    Populated,
}

/// State shared between a batch and everything bound to it.
#[derive(Debug)]
struct Shared {
    drawer: Drawer,
    matrix: Affine2,
    color_mask: ColorRgba,
}

/// Target accumulating many objects into one container.
///
/// The batch supports exactly the vertex properties its container supports; with
/// a container lacking colors, color masking has no visible effect.
///
/// Not thread-safe (`!Send`): wrap it in a mutex on the caller's side if needed.
#[derive(Debug)]
pub struct Batch {
    id: TargetId,
    label: Option<String>,
    shared: Rc<RefCell<Shared>>,
}

impl Batch {
    /// Empty batch accumulating into `container`.
    ///
    /// With an `atlas`, [`draw`](Self::draw) submits the accumulated vertices
    /// textured with it; without one they are submitted as flat color.
    pub fn new(container: Box<dyn Triangles>, atlas: Option<Box<dyn Picture>>) -> Self {
        Self::with_config(container, atlas, BatchConfig::default())
    }

    pub fn with_config(
        mut container: Box<dyn Triangles>,
        atlas: Option<Box<dyn Picture>>,
        config: BatchConfig,
    ) -> Self {
        container.set_len(0);
        let id = TargetId::next();
        log::debug!(
            "{} ({}) created, atlas: {}",
            id,
            config.label.as_deref().unwrap_or("batch"),
            atlas.is_some()
        );

        Self {
            id,
            label: config.label,
            shared: Rc::new(RefCell::new(Shared {
                drawer: Drawer::new(container, atlas),
                matrix: config.matrix,
                color_mask: config.color_mask,
            })),
        }
    }

    #[inline]
    pub fn id(&self) -> TargetId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[inline]
    fn name(&self) -> &str {
        self.label().unwrap_or("batch")
    }

    /// Number of accumulated vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.shared.borrow().drawer.triangles().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn state(&self) -> BatchState {
        if self.is_empty() { BatchState::Empty } else { BatchState::Populated }
    }

    #[inline]
    pub fn matrix(&self) -> Affine2 {
        self.shared.borrow().matrix
    }

    #[inline]
    pub fn color_mask(&self) -> ColorRgba {
        self.shared.borrow().color_mask
    }

    /// `true` when the container changed since it was last drawn onto a target.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.shared.borrow().drawer.is_dirty()
    }

    /// Read access to the accumulated container, e.g. for a backend upload.
    pub fn with_container<R>(&self, f: impl FnOnce(&dyn Triangles) -> R) -> R {
        f(self.shared.borrow().drawer.triangles())
    }

    /// Removes every accumulated object. Keeps the container's allocation.
    pub fn clear(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.drawer.triangles_mut().set_len(0);
        shared.drawer.dirty();
        log::debug!("{} ({}) cleared", self.id, self.name());
    }

    /// Draws everything accumulated so far onto `target`.
    ///
    /// Drawing a batch onto itself is an [`BatchError::OwnershipViolation`].
    pub fn draw(&mut self, target: &mut dyn Target) -> Result<(), BatchError> {
        if target.target_id() == self.id {
            log::warn!("{} ({}) drawn onto itself", self.id, self.name());
            return Err(BatchError::OwnershipViolation {
                expected: self.id,
                found: Some(self.id),
            });
        }
        let mut shared = self.shared.borrow_mut();
        log::trace!(
            "{} ({}): flushing {} vertices to {}",
            self.id,
            self.name(),
            shared.drawer.triangles().len(),
            target.target_id()
        );
        shared.drawer.draw(target)
    }
}

impl Target for Batch {
    #[inline]
    fn target_id(&self) -> TargetId {
        self.id
    }

    /// Returns [`BatchTriangles`] drawing onto this batch.
    fn make_triangles(&mut self, triangles: &dyn Triangles) -> Box<dyn TargetTriangles> {
        Box::new(BatchTriangles::new(triangles, self.id, Rc::downgrade(&self.shared)))
    }

    /// Returns a [`BatchPicture`] drawing onto this batch.
    fn make_picture(&mut self, picture: &dyn Picture) -> Box<dyn TargetPicture> {
        Box::new(BatchPicture::new(picture, self.id))
    }
}

impl BasicTarget for Batch {
    fn set_matrix(&mut self, matrix: Affine2) {
        self.shared.borrow_mut().matrix = matrix;
    }

    fn set_color_mask(&mut self, mask: Option<ColorRgba>) {
        self.shared.borrow_mut().color_mask = mask.unwrap_or(ColorRgba::white());
    }
}
