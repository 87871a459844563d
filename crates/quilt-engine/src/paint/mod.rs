//! Paint-side color representation.
//!
//! Renderers and UI code often hold colors premultiplied. Vertices and color
//! masks use the straight-alpha [`ColorRgba`](crate::coords::ColorRgba);
//! conversion goes through `From`.

mod color;

pub use color::Color;
