//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride for vertex buffer layouts
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Reinterpret a vertex list as raw bytes for upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const GROUND: [f32; 4] = [0.545, 0.271, 0.075, 1.0]; // #8B4513
    pub const GRASS: [f32; 4] = [0.133, 0.545, 0.133, 1.0]; // #228B22
    pub const RABBIT: [f32; 4] = [0.8, 0.8, 0.8, 1.0]; // #cccccc
    pub const RABBIT_EARS: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const RABBIT_EYE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const CARROT: [f32; 4] = [1.0, 0.549, 0.0, 1.0]; // #FF8C00
    pub const OBSTACLE: [f32; 4] = GROUND;
    pub const CACTUS: [f32; 4] = GRASS;
}
