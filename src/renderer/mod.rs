//! Rendering module
//!
//! Demos draw through the `Canvas` trait. `CommandList` records calls for
//! replay and tests; `VertexBatch` turns them into triangles for a GPU upload.

pub mod batch;
pub mod canvas;
pub mod shapes;
pub mod vertex;

pub use batch::VertexBatch;
pub use canvas::{Canvas, CommandList, DrawCommand};
pub use vertex::Vertex;
