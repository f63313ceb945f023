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
}

/// Convert packed 0xRRGGBB to linear-ish RGBA
pub fn rgb(hex: u32, alpha: f32) -> [f32; 4] {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    [channel(16), channel(8), channel(0), alpha]
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: u32 = 0x22C55E;
    pub const OBSTACLE_SMALL: u32 = 0x8B5CF6;
    pub const OBSTACLE_MEDIUM: u32 = 0xEF4444;
    pub const OBSTACLE_LARGE: u32 = 0xF59E0B;
    pub const COLLECTIBLE: u32 = 0xD97706;
    /// Ground band cycles through these by level
    pub const GROUND: [u32; 5] = [0x8B5CF6, 0xEF4444, 0xF59E0B, 0x10B981, 0x6366F1];
}
