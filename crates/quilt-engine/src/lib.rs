//! Quilt engine crate.
//!
//! Renderer-agnostic vertex batching: vertex containers, pictures, the target
//! protocol, and [`Batch`], which flattens many drawn objects into one container
//! so a backend can submit them in a single draw.

pub mod batch;
pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod picture;
pub mod target;
pub mod vertex;

#[cfg(test)]
mod test_support;

pub use batch::{Batch, BatchConfig, BatchPicture, BatchState, BatchTriangles};
pub use error::BatchError;
pub use picture::{Picture, PictureColor, RasterPicture};
pub use target::{BasicTarget, Drawer, Target, TargetId, TargetPicture, TargetTriangles};
pub use vertex::{Triangles, TrianglesData, Vertex, VertexBuffer, VertexLayout};
