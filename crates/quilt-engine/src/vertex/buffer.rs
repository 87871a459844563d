use core::any::Any;
use core::fmt;
use core::ops::Range;
use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{ColorRgba, Vec2};
use crate::error::BatchError;

use super::{Triangles, TrianglesColor, TrianglesPicture, TrianglesPosition, Vertex, VertexLayout};

/// Container of full [`Vertex`] records; the batch's working format.
pub type TrianglesData = VertexBuffer<Vertex>;

/// Growable vertex storage viewed as `(shared buffer, offset, len)`.
///
/// [`view`](Self::view) and [`Triangles::slice`] hand out views over the same
/// buffer, so writes through one are visible through every overlapping view.
///
/// Resizing:
/// - shrinking only shortens the view
/// - growing overwrites the slots right after the view with defaults, then
///   pushes new slots as needed
///
/// The shared buffer never shrinks, so `set_len(0)` followed by regrowth reuses
/// the allocation. Growing a view may clobber vertices another view still shows;
/// that is the "undefined after resize" contract of [`Triangles::set_len`].
pub struct VertexBuffer<V> {
    storage: Rc<RefCell<Vec<V>>>,
    offset: usize,
    len: usize,
}

impl<V: VertexLayout> VertexBuffer<V> {
    #[inline]
    pub fn new() -> Self {
        Self::from_vertices(Vec::new())
    }

    /// `len` default vertices.
    #[inline]
    pub fn with_len(len: usize) -> Self {
        Self::from_vertices(vec![V::default(); len])
    }

    /// Empty buffer with room for `capacity` vertices before reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vertices(Vec::with_capacity(capacity))
    }

    #[inline]
    pub fn from_vertices(vertices: Vec<V>) -> Self {
        let len = vertices.len();
        Self {
            storage: Rc::new(RefCell::new(vertices)),
            offset: 0,
            len,
        }
    }

    /// Returns vertex `i`.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    #[inline]
    pub fn get(&self, i: usize) -> V {
        assert!(i < self.len, "vertex index {i} out of range for length {}", self.len);
        self.storage.borrow()[self.offset + i]
    }

    /// Overwrites vertex `i`.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    #[inline]
    pub fn set(&mut self, i: usize, vertex: V) {
        assert!(i < self.len, "vertex index {i} out of range for length {}", self.len);
        self.storage.borrow_mut()[self.offset + i] = vertex;
    }

    /// Typed aliasing view over `range`.
    ///
    /// # Panics
    /// Panics if the range is out of bounds or reversed.
    pub fn view(&self, range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "slice {}..{} out of range for length {}",
            range.start,
            range.end,
            self.len
        );
        Self {
            storage: Rc::clone(&self.storage),
            offset: self.offset + range.start,
            len: range.end - range.start,
        }
    }

    /// `true` when both views are backed by the same buffer.
    #[inline]
    pub fn shares_storage(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }

    /// Allocated capacity of the shared buffer, in vertices.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.borrow().capacity()
    }

    pub fn to_vec(&self) -> Vec<V> {
        self.with_vertices(<[V]>::to_vec)
    }

    /// Runs `f` over the vertices of this view.
    #[inline]
    pub fn with_vertices<R>(&self, f: impl FnOnce(&[V]) -> R) -> R {
        f(&self.storage.borrow()[self.range()])
    }

    /// Runs `f` over the vertices of this view, mutably.
    #[inline]
    pub fn with_vertices_mut<R>(&mut self, f: impl FnOnce(&mut [V]) -> R) -> R {
        let range = self.range();
        f(&mut self.storage.borrow_mut()[range])
    }

    /// Runs `f` over the raw bytes of this view, ready for a vertex buffer upload.
    #[inline]
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        self.with_vertices(|vertices| f(bytemuck::cast_slice(vertices)))
    }

    #[inline]
    fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Same-layout copy: one memcpy (or memmove when the views share a buffer).
    fn update_same_layout(&mut self, src: &Self) {
        if self.shares_storage(src) {
            self.storage.borrow_mut().copy_within(src.range(), self.offset);
        } else {
            let from = src.storage.borrow();
            self.storage.borrow_mut()[self.range()].copy_from_slice(&from[src.range()]);
        }
    }

    // Each write takes its own short borrow so `src` may alias this buffer.
    fn update_properties(&mut self, src: &dyn Triangles) {
        let base = self.offset;
        if V::HAS_POSITION {
            if let Some(src) = src.as_position() {
                for i in 0..self.len {
                    let p = src.position(i);
                    self.storage.borrow_mut()[base + i].set_position(p);
                }
            }
        }
        if V::HAS_COLOR {
            if let Some(src) = src.as_color() {
                for i in 0..self.len {
                    let c = src.color(i);
                    self.storage.borrow_mut()[base + i].set_color(c);
                }
            }
        }
        if V::HAS_PICTURE {
            if let Some(src) = src.as_picture() {
                for i in 0..self.len {
                    let (coord, intensity) = src.picture(i);
                    self.storage.borrow_mut()[base + i].set_picture(coord, intensity);
                }
            }
        }
    }
}

impl<V: VertexLayout> Default for VertexBuffer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexLayout> fmt::Debug for VertexBuffer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("VertexBuffer");
        s.field("offset", &self.offset).field("len", &self.len);
        match self.storage.try_borrow() {
            Ok(v) => s.field("vertices", &&v[self.range()]).finish(),
            Err(_) => s.finish_non_exhaustive(),
        }
    }
}

impl<V: VertexLayout> Triangles for VertexBuffer<V> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn set_len(&mut self, len: usize) {
        if len <= self.len {
            self.len = len;
            return;
        }

        let mut v = self.storage.borrow_mut();
        let end = self.offset + len;
        let reuse_end = v.len().min(end);
        v[self.offset + self.len..reuse_end].fill(V::default());
        if end > v.len() {
            v.resize(end, V::default());
        }
        drop(v);

        self.len = len;
    }

    fn slice(&self, range: Range<usize>) -> Box<dyn Triangles> {
        Box::new(self.view(range))
    }

    fn update(&mut self, src: &dyn Triangles) -> Result<(), BatchError> {
        if src.len() != self.len {
            return Err(BatchError::LengthMismatch {
                expected: self.len,
                actual: src.len(),
            });
        }

        match src.as_any().downcast_ref::<Self>() {
            Some(same) => self.update_same_layout(same),
            None => self.update_properties(src),
        }
        Ok(())
    }

    fn copy(&self) -> Box<dyn Triangles> {
        Box::new(Self::from_vertices(self.to_vec()))
    }

    #[inline]
    fn as_position(&self) -> Option<&dyn TrianglesPosition> {
        if V::HAS_POSITION { Some(self) } else { None }
    }

    #[inline]
    fn as_color(&self) -> Option<&dyn TrianglesColor> {
        if V::HAS_COLOR { Some(self) } else { None }
    }

    #[inline]
    fn as_picture(&self) -> Option<&dyn TrianglesPicture> {
        if V::HAS_PICTURE { Some(self) } else { None }
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

impl<V: VertexLayout> TrianglesPosition for VertexBuffer<V> {
    #[inline]
    fn position(&self, i: usize) -> Vec2 {
        self.get(i).position()
    }
}

impl<V: VertexLayout> TrianglesColor for VertexBuffer<V> {
    #[inline]
    fn color(&self, i: usize) -> ColorRgba {
        self.get(i).color()
    }
}

impl<V: VertexLayout> TrianglesPicture for VertexBuffer<V> {
    #[inline]
    fn picture(&self, i: usize) -> (Vec2, f32) {
        self.get(i).picture()
    }
}
