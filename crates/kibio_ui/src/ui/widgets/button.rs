//! Image button widget - clickable icons with hover and select state

use std::path::Path;

use super::core::{Rect, UIButtonType};
use crate::assets::{AssetError, Texture};
use crate::foundation::math::{Color, Point2, Vec2};
use crate::ui::backend::UIRenderBackend;
use crate::ui::UiError;

/// Tints used by an image button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    /// Tint when not selected
    pub normal: Color,
    /// Tint when selected
    pub highlight: Color,
    /// Tint of the drop shadow copy
    pub shadow: Color,
}

/// Icon button
///
/// `hovered` and `selected` are independent: a button can be hovered
/// without being selected and the other way around.
#[derive(Debug)]
pub struct ImageButton {
    button_type: UIButtonType,
    bounds: Rect,
    colors: ButtonColors,
    texture: Texture,
    hovered: bool,
    selected: bool,
}

impl ImageButton {
    /// Create a button from an already decoded texture
    ///
    /// Bounds are empty until `set` is called.
    pub fn new(texture: Texture, button_type: UIButtonType, colors: ButtonColors) -> Self {
        Self {
            button_type,
            bounds: Rect::default(),
            colors,
            texture,
            hovered: false,
            selected: false,
        }
    }

    /// Create a button, loading its icon from disk
    pub fn from_file<P: AsRef<Path>>(
        image_path: P,
        button_type: UIButtonType,
        colors: ButtonColors,
    ) -> Result<Self, AssetError> {
        let texture = Texture::from_file(image_path)?;
        Ok(Self::new(texture, button_type, colors))
    }

    /// Define the hit-test and draw bounds
    pub fn set(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.bounds = Rect::new(x, y, width, height);
    }

    /// Recompute the hover flag from the pointer position
    pub fn update(&mut self, pointer: Point2) {
        self.hovered = self.bounds.contains(pointer);
    }

    /// Draw the icon, preceded by its shadow when an offset is given
    pub fn draw(
        &self,
        backend: &mut dyn UIRenderBackend,
        shadow_offset: Option<Vec2>,
    ) -> Result<(), UiError> {
        if let Some(offset) = shadow_offset {
            backend.draw_image(&self.texture, self.bounds.translated(offset), self.colors.shadow)?;
        }
        backend.draw_image(&self.texture, self.bounds, self.tint())
    }

    /// Mark as selected
    pub fn select(&mut self) {
        self.set_selected(true);
    }

    /// Clear the selection
    pub fn unselect(&mut self) {
        self.set_selected(false);
    }

    /// Set the selection flag
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Whether the button is selected
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the pointer was inside the bounds at the last update
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Action this button triggers
    pub fn button_type(&self) -> UIButtonType {
        self.button_type
    }

    /// Current bounds
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Icon texture
    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Tints
    pub fn colors(&self) -> &ButtonColors {
        &self.colors
    }

    /// Tint used for the icon itself
    pub fn tint(&self) -> Color {
        if self.selected {
            self.colors.highlight
        } else {
            self.colors.normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use crate::ui::rendering::{CommandRecorder, UIRenderCommand};

    fn colors() -> ButtonColors {
        ButtonColors {
            normal: Color::new(1.0, 1.0, 1.0, 1.0),
            highlight: Color::new(1.0, 0.5, 0.0, 1.0),
            shadow: Color::new(0.0, 0.0, 0.0, 0.5),
        }
    }

    fn button() -> ImageButton {
        let texture = Texture::new(ImageData::solid_color(8, 8, [255; 4]));
        let mut button = ImageButton::new(texture, UIButtonType::ToolBrush, colors());
        button.set(10.0, 20.0, 40.0, 40.0);
        button
    }

    fn record(button: &ImageButton, shadow: Option<Vec2>) -> Vec<UIRenderCommand> {
        let mut recorder = CommandRecorder::new();
        recorder.begin_ui_pass().unwrap();
        button.draw(&mut recorder, shadow).unwrap();
        recorder.end_ui_pass().unwrap();
        recorder.take_commands()
    }

    #[test]
    fn test_hover_inside_and_outside() {
        let mut b = button();
        b.update(Point2::new(30.0, 40.0));
        assert!(b.is_hovered());
        b.update(Point2::new(0.0, 0.0));
        assert!(!b.is_hovered());
    }

    #[test]
    fn test_hover_edges() {
        let mut b = button();

        b.update(Point2::new(10.0, 40.0));
        assert!(b.is_hovered(), "left edge is inside");
        b.update(Point2::new(30.0, 20.0));
        assert!(b.is_hovered(), "top edge is inside");
        b.update(Point2::new(50.0, 40.0));
        assert!(!b.is_hovered(), "right edge is outside");
        b.update(Point2::new(30.0, 60.0));
        assert!(!b.is_hovered(), "bottom edge is outside");
    }

    #[test]
    fn test_unplaced_button_never_hovered() {
        let texture = Texture::new(ImageData::solid_color(1, 1, [0; 4]));
        let mut b = ImageButton::new(texture, UIButtonType::Info, colors());
        b.update(Point2::new(0.0, 0.0));
        assert!(!b.is_hovered());
    }

    #[test]
    fn test_update_leaves_selection_alone() {
        let mut b = button();
        b.select();
        b.update(Point2::new(500.0, 500.0));
        assert!(b.is_selected());
        assert!(!b.is_hovered());
    }

    #[test]
    fn test_selection() {
        let mut b = button();
        b.set_selected(true);
        assert!(b.is_selected());
        b.set_selected(false);
        assert!(!b.is_selected());
        b.select();
        assert!(b.is_selected());
        b.unselect();
        assert!(!b.is_selected());
    }

    #[test]
    fn test_draw_without_shadow() {
        let b = button();
        let commands = record(&b, None);
        assert_eq!(
            commands,
            vec![UIRenderCommand::Image {
                texture: b.texture().id(),
                rect: Rect::new(10.0, 20.0, 40.0, 40.0),
                tint: colors().normal,
            }]
        );
    }

    #[test]
    fn test_draw_with_shadow_then_highlight() {
        let mut b = button();
        b.select();
        let commands = record(&b, Some(Vec2::new(2.0, 3.0)));

        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands[0],
            UIRenderCommand::Image {
                texture: b.texture().id(),
                rect: Rect::new(12.0, 23.0, 40.0, 40.0),
                tint: colors().shadow,
            }
        );
        assert_eq!(
            commands[1],
            UIRenderCommand::Image {
                texture: b.texture().id(),
                rect: Rect::new(10.0, 20.0, 40.0, 40.0),
                tint: colors().highlight,
            }
        );
    }

    #[test]
    fn test_from_missing_file() {
        let result = ImageButton::from_file("nope/missing.png", UIButtonType::Info, colors());
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }
}
