//! UI layout calculations
//!
//! Icon placement for the overlay and screen-to-NDC conversion.

use super::core::{Rect, UIButtonType};
use crate::foundation::math::Point2;

/// Layout calculator for overlay icons
///
/// Tools form a column down the left edge. File and info buttons form a
/// right-aligned row along the top edge that never extends left of the
/// tool column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UILayout {
    /// Icon edge length in pixels
    pub icon_size: f32,
    /// Gap between icons and between icons and the window edge
    pub padding: f32,
}

impl UILayout {
    /// Left-to-right order of the top row
    pub const FILE_ROW: [UIButtonType; 5] = [
        UIButtonType::NewProject,
        UIButtonType::OpenProject,
        UIButtonType::SaveProject,
        UIButtonType::ToggleMode,
        UIButtonType::Info,
    ];

    /// Top-to-bottom order of the tool column
    pub const TOOL_COLUMN: [UIButtonType; 4] = UIButtonType::TOOLS;

    /// Create a layout
    pub fn new(icon_size: f32, padding: f32) -> Self {
        Self { icon_size, padding }
    }

    fn stride(&self) -> f32 {
        self.icon_size + self.padding
    }

    /// Bounds of the `index`-th tool
    pub fn tool_bounds(&self, index: usize) -> Rect {
        Rect::new(
            self.padding,
            self.padding + index as f32 * self.stride(),
            self.icon_size,
            self.icon_size,
        )
    }

    /// Bounds of the `index`-th top-row button
    pub fn file_bounds(&self, index: usize, screen_width: f32) -> Rect {
        let count = Self::FILE_ROW.len() as f32;
        let row_width = count * self.icon_size + (count - 1.0) * self.padding;
        let min_start = self.padding + self.stride();
        let start = (screen_width - self.padding - row_width).max(min_start);

        Rect::new(
            start + index as f32 * self.stride(),
            self.padding,
            self.icon_size,
            self.icon_size,
        )
    }

    /// Bounds of any button for the given screen width
    pub fn bounds_for(&self, button_type: UIButtonType, screen_width: f32) -> Rect {
        if let Some(index) = Self::TOOL_COLUMN.iter().position(|t| *t == button_type) {
            return self.tool_bounds(index);
        }
        let index = Self::FILE_ROW
            .iter()
            .position(|t| *t == button_type)
            .unwrap_or_default();
        self.file_bounds(index, screen_width)
    }

    /// Top-left corner of the project name text
    pub fn project_name_position(&self, font_size: f32, screen_height: f32) -> Point2 {
        Point2::new(self.padding, screen_height - self.padding - font_size)
    }

    /// Convert screen coordinates to normalized device coordinates (NDC)
    /// NDC range: [-1, 1] where (0, 0) is center
    pub fn screen_to_ndc(
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> (f32, f32) {
        let ndc_x = (screen_x / screen_width) * 2.0 - 1.0;
        let ndc_y = (screen_y / screen_height) * 2.0 - 1.0;
        (ndc_x, ndc_y)
    }

    /// Convert pixel size to NDC size
    pub fn size_to_ndc(
        width_pixels: f32,
        height_pixels: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> (f32, f32) {
        let ndc_width = (width_pixels / screen_width) * 2.0;
        let ndc_height = (height_pixels / screen_height) * 2.0;
        (ndc_width, ndc_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_button_has_one_slot() {
        let mut all: Vec<_> = UILayout::FILE_ROW
            .iter()
            .chain(UILayout::TOOL_COLUMN.iter())
            .copied()
            .collect();
        all.sort();
        assert_eq!(all, UIButtonType::ALL.to_vec());
    }

    #[test]
    fn test_tool_column() {
        let layout = UILayout::new(40.0, 10.0);
        assert_eq!(layout.tool_bounds(0), Rect::new(10.0, 10.0, 40.0, 40.0));
        assert_eq!(layout.tool_bounds(3), Rect::new(10.0, 160.0, 40.0, 40.0));
    }

    #[test]
    fn test_file_row_right_aligned() {
        let layout = UILayout::new(40.0, 10.0);
        let last = layout.file_bounds(4, 1024.0);
        assert_eq!(last.right(), 1014.0);
        assert_eq!(last.y, 10.0);
        let first = layout.file_bounds(0, 1024.0);
        assert_eq!(first.x, 1014.0 - 5.0 * 40.0 - 4.0 * 10.0);
    }

    #[test]
    fn test_file_row_clears_tool_column_on_narrow_screens() {
        let layout = UILayout::new(40.0, 10.0);
        let first = layout.file_bounds(0, 100.0);
        assert_eq!(first.x, 60.0);
        assert!(first.x >= layout.tool_bounds(0).right());
    }

    #[test]
    fn test_bounds_for() {
        let layout = UILayout::new(40.0, 10.0);
        assert_eq!(layout.bounds_for(UIButtonType::ToolRotate, 800.0), layout.tool_bounds(2));
        assert_eq!(layout.bounds_for(UIButtonType::Info, 800.0), layout.file_bounds(4, 800.0));
    }

    #[test]
    fn test_project_name_position() {
        let layout = UILayout::new(40.0, 10.0);
        assert_eq!(layout.project_name_position(16.0, 600.0), Point2::new(10.0, 574.0));
    }

    #[test]
    fn test_screen_to_ndc() {
        assert_eq!(UILayout::screen_to_ndc(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
        assert_eq!(UILayout::size_to_ndc(400.0, 300.0, 800.0, 600.0), (1.0, 1.0));
    }
}
