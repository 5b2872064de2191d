//! UI Manager
//!
//! Owns the overlay buttons, lays them out, forwards pointer input and
//! raises button events.

use super::backend::UIRenderBackend;
use super::input::UIInputProcessor;
use super::widgets::{ButtonColors, ImageButton, UIButtonType, UILayout};
use super::UiError;
use crate::assets::Texture;
use crate::config::UserInterfaceConfig;
use crate::events::{ButtonEvents, UserInterfaceEvent, UserInterfaceListener};
use crate::foundation::math::{Color, Point2, Vec2};
use crate::input::{collision, MouseButton};

/// Overlay manager
///
/// Holds exactly one `ImageButton` per `UIButtonType`, stored in
/// `UIButtonType::ALL` order. Which tool is selected is up to the caller;
/// `select_tool` is a convenience that keeps the four tools exclusive.
#[derive(Debug)]
pub struct UserInterface {
    /// Buttons indexed by `UIButtonType::index`
    buttons: Vec<ImageButton>,

    /// Icon placement parameters
    layout: UILayout,

    /// Offset of the shadow copy
    shadow_offset: Vec2,

    /// Whether `draw` renders the shadow copy
    draw_icon_shadows: bool,

    /// Whether `draw` renders anything
    visible: bool,

    /// Text shown in the bottom-left corner
    project_name: String,

    /// Project name text size
    font_size: f32,

    /// Project name text color
    text_color: Color,

    /// Current screen size
    screen_size: (f32, f32),

    /// Pointer state from the host
    input_processor: UIInputProcessor,

    /// Registered button listeners
    events: ButtonEvents,
}

impl UserInterface {
    /// Create the overlay, loading every icon from the configured directory
    pub fn new(config: &UserInterfaceConfig) -> Result<Self, UiError> {
        config.validate()?;
        let colors = Self::colors_from(config);

        let mut buttons = Vec::with_capacity(UIButtonType::ALL.len());
        for button_type in UIButtonType::ALL {
            let path = config.icon_path(button_type.icon_file_name());
            buttons.push(ImageButton::from_file(&path, button_type, colors)?);
        }

        log::info!("Loaded {} overlay icons from {:?}", buttons.len(), config.icon_directory);
        Ok(Self::from_buttons(config, buttons))
    }

    /// Create the overlay from textures supplied by the caller
    pub fn with_textures<F>(config: &UserInterfaceConfig, mut texture_for: F) -> Result<Self, UiError>
    where
        F: FnMut(UIButtonType) -> Texture,
    {
        config.validate()?;
        let colors = Self::colors_from(config);

        let buttons = UIButtonType::ALL
            .iter()
            .map(|&button_type| ImageButton::new(texture_for(button_type), button_type, colors))
            .collect();

        Ok(Self::from_buttons(config, buttons))
    }

    fn colors_from(config: &UserInterfaceConfig) -> ButtonColors {
        ButtonColors {
            normal: config.color(),
            highlight: config.highlight_color(),
            shadow: config.shadow_color(),
        }
    }

    fn from_buttons(config: &UserInterfaceConfig, buttons: Vec<ImageButton>) -> Self {
        let mut ui = Self {
            buttons,
            layout: UILayout::new(config.icon_size, config.icon_padding),
            shadow_offset: config.shadow_offset(),
            draw_icon_shadows: config.draw_icon_shadows,
            visible: true,
            project_name: String::new(),
            font_size: config.font_size,
            text_color: config.color(),
            screen_size: (800.0, 600.0), // Default screen size
            input_processor: UIInputProcessor::new(),
            events: ButtonEvents::new(),
        };
        ui.place_icons();
        ui
    }

    /// Register a listener for button events
    ///
    /// Listeners are notified in registration order.
    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: UserInterfaceListener + 'static,
    {
        self.events.add_listener(Box::new(listener));
    }

    /// Update pointer position
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        self.input_processor.update_mouse_position(x, y);
    }

    /// Update mouse button state
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.input_processor.update_mouse_button(button, pressed);
    }

    /// Set screen size and re-run the layout
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_size = (width, height);
        self.place_icons();
    }

    /// Get screen size
    pub fn screen_size(&self) -> (f32, f32) {
        self.screen_size
    }

    /// Update UI state (call once per frame before drawing)
    ///
    /// Refreshes every button's hover flag, then handles each left press
    /// since the previous update at the position where it happened.
    pub fn update(&mut self) {
        let pointer = self.input_processor.mouse_position();
        for button in &mut self.buttons {
            button.update(pointer);
        }

        let presses = self.input_processor.left_press_positions().to_vec();
        for press in presses {
            self.mouse_pressed(press);
        }

        self.input_processor.reset_frame_flags();
    }

    /// Draw the overlay; does nothing while hidden
    ///
    /// A started pass is always ended, even when a draw call fails; the
    /// first error is returned.
    pub fn draw(&self, backend: &mut dyn UIRenderBackend) -> Result<(), UiError> {
        if !self.visible {
            return Ok(());
        }

        backend.begin_ui_pass()?;
        let drawn = self.draw_contents(backend);
        let ended = backend.end_ui_pass();
        drawn.and(ended)
    }

    fn draw_contents(&self, backend: &mut dyn UIRenderBackend) -> Result<(), UiError> {
        let shadow = self.draw_icon_shadows.then_some(self.shadow_offset);

        for button in &self.buttons {
            button.draw(backend, shadow)?;
        }

        if !self.project_name.is_empty() {
            let position = self.layout.project_name_position(self.font_size, self.screen_size.1);
            backend.draw_text(&self.project_name, position, self.font_size, self.text_color)?;
        }

        Ok(())
    }

    /// Recompute every button's bounds from the layout and screen size
    pub fn place_icons(&mut self) {
        let screen_width = self.screen_size.0;
        for button in &mut self.buttons {
            let rect = self.layout.bounds_for(button.button_type(), screen_width);
            button.set(rect.x, rect.y, rect.width, rect.height);
        }
        log::debug!(
            "Placed {} icons for {}x{} screen",
            self.buttons.len(),
            self.screen_size.0,
            self.screen_size.1
        );
    }

    /// Flip visibility
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    /// Hide the overlay
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Show the overlay
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Whether the overlay is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replace the displayed project name
    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
    }

    /// Displayed project name
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Enable or disable icon drop shadows
    pub fn set_draw_icon_shadows(&mut self, draw_icon_shadows: bool) {
        self.draw_icon_shadows = draw_icon_shadows;
    }

    /// Whether icon drop shadows are drawn
    pub fn draws_icon_shadows(&self) -> bool {
        self.draw_icon_shadows
    }

    /// Button under `point`, if any; always `None` while hidden
    pub fn hit_test(&self, point: Point2) -> Option<UIButtonType> {
        if !self.visible {
            return None;
        }
        let bounds: Vec<_> = self.buttons.iter().map(ImageButton::bounds).collect();
        collision::first_hit(point, &bounds).map(|index| self.buttons[index].button_type())
    }

    /// Handle a pointer press at `point`
    ///
    /// Raises one event for the hit button and returns its type.
    pub fn mouse_pressed(&mut self, point: Point2) -> Option<UIButtonType> {
        let button = self.hit_test(point)?;
        log::debug!("Pointer press at ({}, {}) hit {:?}", point.x, point.y, button);
        self.events.notify(&UserInterfaceEvent::new(button));
        Some(button)
    }

    /// Button for the given type
    pub fn button(&self, button_type: UIButtonType) -> &ImageButton {
        &self.buttons[button_type.index()]
    }

    /// Mutable button for the given type
    pub fn button_mut(&mut self, button_type: UIButtonType) -> &mut ImageButton {
        &mut self.buttons[button_type.index()]
    }

    /// All buttons in `UIButtonType::ALL` order
    pub fn buttons(&self) -> impl Iterator<Item = &ImageButton> {
        self.buttons.iter()
    }

    /// Select `tool` and unselect the other tools
    pub fn select_tool(&mut self, tool: UIButtonType) {
        if !tool.is_tool() {
            log::warn!("Ignoring select_tool({:?}): not a tool button", tool);
            return;
        }
        for other in UIButtonType::TOOLS {
            self.button_mut(other).set_selected(other == tool);
        }
    }

    /// First selected tool, if any
    pub fn selected_tool(&self) -> Option<UIButtonType> {
        UIButtonType::TOOLS
            .into_iter()
            .find(|&tool| self.button(tool).is_selected())
    }
}
