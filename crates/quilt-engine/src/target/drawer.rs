use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::BatchError;
use crate::picture::Picture;
use crate::vertex::Triangles;

use super::{Target, TargetId, TargetPicture, TargetTriangles};

/// Target-bound copies made for one target.
#[derive(Debug)]
struct Bound {
    triangles: Box<dyn TargetTriangles>,
    picture: Option<Box<dyn TargetPicture>>,
}

/// Draws a container (optionally textured with a picture) onto any number of targets.
///
/// Target-bound copies are created on first draw per target and reused afterwards.
/// After the container changes, call [`dirty`](Self::dirty); the next draw
/// refreshes every cached copy before drawing. Copies whose target is gone are
/// discarded first.
#[derive(Debug)]
pub struct Drawer {
    triangles: Box<dyn Triangles>,
    picture: Option<Box<dyn Picture>>,
    bound: HashMap<TargetId, Bound>,
    dirty: bool,
}

impl Drawer {
    pub fn new(triangles: Box<dyn Triangles>, picture: Option<Box<dyn Picture>>) -> Self {
        Self {
            triangles,
            picture,
            bound: HashMap::new(),
            dirty: false,
        }
    }

    #[inline]
    pub fn triangles(&self) -> &dyn Triangles {
        self.triangles.as_ref()
    }

    /// Mutable access to the container. Call [`dirty`](Self::dirty) after changing it.
    #[inline]
    pub fn triangles_mut(&mut self) -> &mut dyn Triangles {
        self.triangles.as_mut()
    }

    #[inline]
    pub fn picture(&self) -> Option<&dyn Picture> {
        self.picture.as_deref()
    }

    /// Marks the container as changed since the last draw.
    #[inline]
    pub fn dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of targets holding cached copies.
    #[inline]
    pub fn bound_targets(&self) -> usize {
        self.bound.len()
    }

    /// Discards cached copies whose target no longer exists. Returns how many.
    pub fn prune(&mut self) -> usize {
        let before = self.bound.len();
        self.bound.retain(|id, bound| {
            let live = bound.triangles.is_live();
            if !live {
                log::trace!("drawer: {id} is gone, dropping its copy");
            }
            live
        });
        before - self.bound.len()
    }

    /// Draws the container onto `target`, through the picture if there is one.
    pub fn draw(&mut self, target: &mut dyn Target) -> Result<(), BatchError> {
        self.prune();
        if self.dirty {
            for bound in self.bound.values_mut() {
                bound.triangles.set_len(self.triangles.len());
                bound.triangles.update(self.triangles.as_ref())?;
            }
            self.dirty = false;
        }

        let bound = match self.bound.entry(target.target_id()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                log::trace!("drawer: binding {} vertices to {}", self.triangles.len(), e.key());
                let triangles = target.make_triangles(self.triangles.as_ref());
                let picture = self.picture.as_deref().map(|p| target.make_picture(p));
                e.insert(Bound { triangles, picture })
            }
        };

        match &bound.picture {
            Some(picture) => picture.draw(bound.triangles.as_mut()),
            None => bound.triangles.draw(),
        }
    }
}
