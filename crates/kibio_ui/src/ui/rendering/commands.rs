//! UI render commands

use super::vertex::UIVertex;
use crate::assets::TextureId;
use crate::foundation::math::{Color, Point2};
use crate::ui::widgets::{Rect, UILayout};

/// UI render command for a single draw call
#[derive(Debug, Clone, PartialEq)]
pub enum UIRenderCommand {
    /// Textured quad
    Image {
        /// Texture to sample
        texture: TextureId,
        /// Screen rectangle
        rect: Rect,
        /// Color multiplied with the texture
        tint: Color,
    },
    /// Line of text
    Text {
        /// Text content
        text: String,
        /// Top-left corner in screen pixels
        position: Point2,
        /// Font size in pixels
        size: f32,
        /// Text color
        color: Color,
    },
}

impl UIRenderCommand {
    /// Quad vertices for an image command (2 triangles, 6 vertices)
    ///
    /// Returns `None` for text commands.
    pub fn image_vertices(&self, screen_width: f32, screen_height: f32) -> Option<[UIVertex; 6]> {
        let Self::Image { rect, .. } = self else {
            return None;
        };

        let (x_ndc, y_ndc) = UILayout::screen_to_ndc(rect.x, rect.y, screen_width, screen_height);
        let (width_ndc, height_ndc) = UILayout::size_to_ndc(rect.width, rect.height, screen_width, screen_height);

        let x2_ndc = x_ndc + width_ndc;
        let y2_ndc = y_ndc + height_ndc;

        Some([
            UIVertex { position: [x_ndc, y_ndc], uv: [0.0, 0.0] },
            UIVertex { position: [x2_ndc, y_ndc], uv: [1.0, 0.0] },
            UIVertex { position: [x_ndc, y2_ndc], uv: [0.0, 1.0] },
            UIVertex { position: [x_ndc, y2_ndc], uv: [0.0, 1.0] },
            UIVertex { position: [x2_ndc, y_ndc], uv: [1.0, 0.0] },
            UIVertex { position: [x2_ndc, y2_ndc], uv: [1.0, 1.0] },
        ])
    }
}
