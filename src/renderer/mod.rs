//! Render bridge
//!
//! Turns a simulation [`Snapshot`](crate::sim::Snapshot) into triangle-list
//! vertices. No drawing happens here; any GPU or software backend can upload
//! the result as-is.

pub mod shapes;
pub mod vertex;

pub use shapes::frame_vertices;
pub use vertex::Vertex;
