//! Vertex containers.
//!
//! [`Triangles`] is the renderer-agnostic container contract; the property
//! traits ([`TrianglesPosition`], [`TrianglesColor`], [`TrianglesPicture`]) are
//! the capabilities a container may advertise. [`VertexBuffer`] is the concrete
//! sliceable storage, generic over a [`VertexLayout`].

mod buffer;
mod layout;
mod triangles;

pub use buffer::{TrianglesData, VertexBuffer};
pub use layout::{ColorVertex, PositionVertex, Vertex, VertexLayout};
pub use triangles::{Triangles, TrianglesColor, TrianglesPicture, TrianglesPosition};
