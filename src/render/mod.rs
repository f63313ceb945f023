//! Snapshot rendering helpers
//!
//! Turns a simulation snapshot into colored triangles. Uploading and drawing
//! them is the host's job.

pub mod shapes;
pub mod vertex;

pub use shapes::frame_vertices;
pub use vertex::Vertex;
