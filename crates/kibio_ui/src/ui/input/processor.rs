//! UI Input Processing
//!
//! Tracks pointer state between the host's input callbacks and the
//! overlay's per-frame update.

use crate::foundation::math::Point2;
use crate::input::{MouseButton, MouseButtons};

/// Pointer state collected from host input callbacks
///
/// Press and release edges are latched until `reset_frame_flags`, so a
/// click shorter than a frame is not lost.
#[derive(Debug, Clone)]
pub struct UIInputProcessor {
    /// Current pointer position in screen coordinates
    position: Point2,

    /// Buttons currently held
    held: MouseButtons,

    /// Buttons that went down since the last reset
    pressed_this_frame: MouseButtons,

    /// Buttons that went up since the last reset
    released_this_frame: MouseButtons,

    /// Pointer positions of left presses since the last reset
    left_presses: Vec<Point2>,
}

impl UIInputProcessor {
    /// Create a new input processor with the pointer at the origin
    pub fn new() -> Self {
        Self {
            position: Point2::origin(),
            held: MouseButtons::empty(),
            pressed_this_frame: MouseButtons::empty(),
            released_this_frame: MouseButtons::empty(),
            left_presses: Vec::new(),
        }
    }

    /// Update pointer position
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        self.position = Point2::new(x, y);
    }

    /// Update mouse button state
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let flag = MouseButtons::from(button);
        let was_down = self.held.contains(flag);

        self.held.set(flag, pressed);
        if pressed && !was_down {
            self.pressed_this_frame.insert(flag);
            if button == MouseButton::Left {
                self.left_presses.push(self.position);
            }
        } else if !pressed && was_down {
            self.released_this_frame.insert(flag);
        }
    }

    /// Reset per-frame input flags (call after the overlay update)
    pub fn reset_frame_flags(&mut self) {
        self.pressed_this_frame = MouseButtons::empty();
        self.released_this_frame = MouseButtons::empty();
        self.left_presses.clear();
    }

    /// Where each left press since the last reset happened, oldest first
    pub fn left_press_positions(&self) -> &[Point2] {
        &self.left_presses
    }

    /// Current pointer position
    pub fn mouse_position(&self) -> Point2 {
        self.position
    }

    /// Whether the button is held down
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.held.contains(button.into())
    }

    /// Whether the button went down since the last reset
    pub fn was_pressed(&self, button: MouseButton) -> bool {
        self.pressed_this_frame.contains(button.into())
    }

    /// Whether the button went up since the last reset
    pub fn was_released(&self, button: MouseButton) -> bool {
        self.released_this_frame.contains(button.into())
    }
}

impl Default for UIInputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_latched_until_reset() {
        let mut input = UIInputProcessor::new();
        input.update_mouse_button(MouseButton::Left, true);
        assert!(input.was_pressed(MouseButton::Left));
        assert!(input.is_down(MouseButton::Left));

        input.reset_frame_flags();
        assert!(!input.was_pressed(MouseButton::Left));
        assert!(input.is_down(MouseButton::Left));
    }

    #[test]
    fn test_click_within_one_frame() {
        let mut input = UIInputProcessor::new();
        input.update_mouse_button(MouseButton::Left, true);
        input.update_mouse_button(MouseButton::Left, false);

        assert!(input.was_pressed(MouseButton::Left));
        assert!(input.was_released(MouseButton::Left));
        assert!(!input.is_down(MouseButton::Left));
    }

    #[test]
    fn test_repeated_down_is_not_a_new_press() {
        let mut input = UIInputProcessor::new();
        input.update_mouse_button(MouseButton::Right, true);
        input.reset_frame_flags();
        input.update_mouse_button(MouseButton::Right, true);
        assert!(!input.was_pressed(MouseButton::Right));
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut input = UIInputProcessor::new();
        input.update_mouse_button(MouseButton::Middle, true);
        assert!(!input.was_pressed(MouseButton::Left));
        assert!(input.was_pressed(MouseButton::Middle));
    }

    #[test]
    fn test_left_press_positions_recorded_at_press_time() {
        let mut input = UIInputProcessor::new();
        input.update_mouse_position(5.0, 6.0);
        input.update_mouse_button(MouseButton::Left, true);
        input.update_mouse_position(50.0, 60.0);
        input.update_mouse_button(MouseButton::Left, false);
        input.update_mouse_button(MouseButton::Left, true);
        input.update_mouse_button(MouseButton::Right, true);

        assert_eq!(
            input.left_press_positions(),
            &[Point2::new(5.0, 6.0), Point2::new(50.0, 60.0)]
        );

        input.reset_frame_flags();
        assert!(input.left_press_positions().is_empty());
    }

    #[test]
    fn test_mouse_position() {
        let mut input = UIInputProcessor::new();
        input.update_mouse_position(12.0, 34.0);
        assert_eq!(input.mouse_position(), Point2::new(12.0, 34.0));
    }
}
