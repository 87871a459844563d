use super::Vec2;

/// Axis-aligned rectangle, stored as its `min` and `max` corners.
///
/// Picture bounds and slice regions use this type. A rectangle with
/// `max <= min` on either axis is empty; slicing does not clamp, so empty and
/// out-of-raster rectangles are legal values.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rectangle at `(x, y)` with size `w` x `h`.
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    #[inline]
    pub const fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Same area with `min <= max` on both axes.
    pub fn norm(self) -> Self {
        Self {
            min: Vec2::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            max: Vec2::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        }
    }

    /// Half-open containment: `min` inclusive, `max` exclusive.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.norm();
        (r.min.x..r.max.x).contains(&p.x) && (r.min.y..r.max.y).contains(&p.y)
    }

    /// Overlap of two rectangles, `None` when they only touch or are disjoint.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (a, b) = (self.norm(), other.norm());
        let r = Rect {
            min: Vec2::new(a.min.x.max(b.min.x), a.min.y.max(b.min.y)),
            max: Vec2::new(a.max.x.min(b.max.x), a.max.y.min(b.max.y)),
        };
        (!r.is_empty()).then_some(r)
    }
}
