//! UI Render Backend Trait
//!
//! Defines the interface between the overlay and a rendering backend.
//! Keeps the overlay independent of any graphics API.

use crate::assets::Texture;
use crate::foundation::math::{Color, Point2};
use crate::ui::widgets::Rect;
use crate::ui::UiError;

/// Backend-agnostic overlay rendering interface
///
/// All calls between `begin_ui_pass` and `end_ui_pass` belong to one frame.
pub trait UIRenderBackend {
    /// Begin UI rendering pass
    fn begin_ui_pass(&mut self) -> Result<(), UiError>;

    /// Draw a texture stretched over `rect`, multiplied by `tint`
    fn draw_image(&mut self, texture: &Texture, rect: Rect, tint: Color) -> Result<(), UiError>;

    /// Draw a line of text with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: Point2, size: f32, color: Color) -> Result<(), UiError>;

    /// End UI rendering pass
    fn end_ui_pass(&mut self) -> Result<(), UiError>;
}
