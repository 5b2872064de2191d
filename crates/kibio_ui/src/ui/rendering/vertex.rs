//! Vertex types for UI rendering

/// Vertex data for textured quads
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UIVertex {
    /// Position in NDC coordinates
    pub position: [f32; 2],
    /// Texture coordinates
    pub uv: [f32; 2],
}
