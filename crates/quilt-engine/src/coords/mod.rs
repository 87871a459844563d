//! Coordinate, transform and color types shared by containers, pictures and batches.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Backends convert to NDC themselves; nothing here knows about a viewport.

mod color;
mod rect;
mod vec2;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;

/// Batch and target matrices. Positions are projected with `transform_point2`.
pub use glam::Affine2;
