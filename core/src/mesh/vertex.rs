use crate::math::Vec3;

/// Color used to complete meshes whose colors were never supplied.
pub const DEFAULT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// An interleaved vertex: position followed by color.
///
/// Tightly packed, 24 bytes per vertex. Position lives at byte offset 0,
/// color at byte offset 12.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    /// Size of one vertex in bytes.
    pub const STRIDE: u32 = std::mem::size_of::<Self>() as u32;

    /// Byte offset of the color attribute.
    pub const COLOR_OFFSET: u32 = std::mem::size_of::<[f32; 3]>() as u32;

    pub fn new(position: &Vec3, color: &Vec3) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            color: [color.x, color.y, color.z],
        }
    }
}
