//! Demo controller - interprets overlay events

use std::sync::mpsc::Receiver;

use kibio_ui::prelude::*;

/// Presentation state toggled by the mode button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Editing with the overlay tools
    Edit,
    /// Presenting the projection
    Present,
}

/// Host-side handler for overlay events
pub struct Controller {
    events: Receiver<UserInterfaceEvent>,
    mode: Mode,
    untitled_count: u32,
    handled: Vec<UIButtonType>,
}

impl Controller {
    /// Create a controller draining the given channel
    pub fn new(events: Receiver<UserInterfaceEvent>) -> Self {
        Self {
            events,
            mode: Mode::Edit,
            untitled_count: 0,
            handled: Vec::new(),
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Buttons handled so far, in order
    pub fn handled(&self) -> &[UIButtonType] {
        &self.handled
    }

    /// Apply every pending event to the overlay
    pub fn process(&mut self, ui: &mut UserInterface) {
        while let Ok(event) = self.events.try_recv() {
            self.handle(ui, event.button);
        }
    }

    fn handle(&mut self, ui: &mut UserInterface, button: UIButtonType) {
        self.handled.push(button);
        match button {
            tool if tool.is_tool() => {
                ui.select_tool(tool);
                log::info!("Tool switched to {:?}", tool);
            }
            UIButtonType::ToggleMode => {
                self.mode = match self.mode {
                    Mode::Edit => Mode::Present,
                    Mode::Present => Mode::Edit,
                };
                ui.button_mut(UIButtonType::ToggleMode)
                    .set_selected(self.mode == Mode::Present);
                log::info!("Mode is now {:?}", self.mode);
            }
            UIButtonType::NewProject => {
                self.untitled_count += 1;
                ui.set_project_name(format!("untitled-{}", self.untitled_count));
                log::info!("New project '{}'", ui.project_name());
            }
            UIButtonType::OpenProject | UIButtonType::SaveProject | UIButtonType::Info => {
                log::info!("{:?} requested (not handled by the demo)", button);
            }
            _ => {}
        }
    }
}
