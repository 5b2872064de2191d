//! Core UI widget primitives
//!
//! Shared types used by the overlay widgets.

use crate::foundation::math::{Point2, Vec2};
use crate::input::collision;

/// Overlay actions, one per button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UIButtonType {
    /// Open an existing project
    OpenProject,
    /// Start a new project
    NewProject,
    /// Save the current project
    SaveProject,
    /// Show the info screen
    Info,
    /// Switch between edit and presentation mode
    ToggleMode,
    /// Brush tool
    ToolBrush,
    /// Translate tool
    ToolTranslate,
    /// Rotate tool
    ToolRotate,
    /// Scale tool
    ToolScale,
}

impl UIButtonType {
    /// Every button type, in declaration order
    pub const ALL: [Self; 9] = [
        Self::OpenProject,
        Self::NewProject,
        Self::SaveProject,
        Self::Info,
        Self::ToggleMode,
        Self::ToolBrush,
        Self::ToolTranslate,
        Self::ToolRotate,
        Self::ToolScale,
    ];

    /// The four mutually exclusive tools
    pub const TOOLS: [Self; 4] = [
        Self::ToolBrush,
        Self::ToolTranslate,
        Self::ToolRotate,
        Self::ToolScale,
    ];

    /// Whether this is one of the tool buttons
    pub fn is_tool(self) -> bool {
        Self::TOOLS.contains(&self)
    }

    /// Position in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Default icon file name inside the icon directory
    pub fn icon_file_name(self) -> &'static str {
        match self {
            Self::OpenProject => "open_project.png",
            Self::NewProject => "new_project.png",
            Self::SaveProject => "save_project.png",
            Self::Info => "info.png",
            Self::ToggleMode => "toggle_mode.png",
            Self::ToolBrush => "tool_brush.png",
            Self::ToolTranslate => "tool_translate.png",
            Self::ToolRotate => "tool_rotate.png",
            Self::ToolScale => "tool_scale.png",
        }
    }
}

/// Axis-aligned rectangle in screen pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Width and height
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Same size, shifted by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Half-open containment test
    pub fn contains(&self, point: Point2) -> bool {
        collision::point_in_rect(point, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_indices_match_declaration_order() {
        for (i, ty) in UIButtonType::ALL.iter().enumerate() {
            assert_eq!(ty.index(), i);
        }
    }

    #[test]
    fn test_tools() {
        let tools: Vec<_> = UIButtonType::ALL.iter().copied().filter(|t| t.is_tool()).collect();
        assert_eq!(tools, UIButtonType::TOOLS.to_vec());
        assert!(!UIButtonType::ToggleMode.is_tool());
    }

    #[test]
    fn test_icon_files_unique() {
        let mut names: Vec<_> = UIButtonType::ALL.iter().map(|t| t.icon_file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), UIButtonType::ALL.len());
    }

    #[test]
    fn test_translated() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).translated(Vec2::new(10.0, -2.0));
        assert_eq!(r, Rect::new(11.0, 0.0, 3.0, 4.0));
        assert_eq!(r.right(), 14.0);
        assert_eq!(r.bottom(), 4.0);
    }
}
