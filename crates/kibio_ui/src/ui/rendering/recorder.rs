//! Command-recording render backend
//!
//! Captures each UI pass as a list of `UIRenderCommand`s. Used by headless
//! hosts and tests, and as a staging list for GPU backends that batch draws.

use super::commands::UIRenderCommand;
use crate::assets::Texture;
use crate::foundation::math::{Color, Point2};
use crate::ui::backend::UIRenderBackend;
use crate::ui::widgets::Rect;
use crate::ui::UiError;

/// Backend that records draw calls instead of executing them
#[derive(Debug, Default)]
pub struct CommandRecorder {
    /// Commands of the pass currently being recorded
    current: Option<Vec<UIRenderCommand>>,

    /// Commands of the last completed pass
    last_pass: Vec<UIRenderCommand>,

    /// Number of completed passes
    pass_count: u64,
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last completed pass
    pub fn commands(&self) -> &[UIRenderCommand] {
        &self.last_pass
    }

    /// Take the last completed pass, leaving it empty
    pub fn take_commands(&mut self) -> Vec<UIRenderCommand> {
        std::mem::take(&mut self.last_pass)
    }

    /// Number of completed passes
    pub fn pass_count(&self) -> u64 {
        self.pass_count
    }

    fn record(&mut self, command: UIRenderCommand) -> Result<(), UiError> {
        match self.current.as_mut() {
            Some(commands) => {
                commands.push(command);
                Ok(())
            }
            None => Err(UiError::Backend("draw call outside of a UI pass".to_string())),
        }
    }
}

impl UIRenderBackend for CommandRecorder {
    fn begin_ui_pass(&mut self) -> Result<(), UiError> {
        if self.current.is_some() {
            return Err(UiError::Backend("UI pass already in progress".to_string()));
        }
        self.current = Some(Vec::new());
        Ok(())
    }

    fn draw_image(&mut self, texture: &Texture, rect: Rect, tint: Color) -> Result<(), UiError> {
        self.record(UIRenderCommand::Image { texture: texture.id(), rect, tint })
    }

    fn draw_text(&mut self, text: &str, position: Point2, size: f32, color: Color) -> Result<(), UiError> {
        self.record(UIRenderCommand::Text {
            text: text.to_string(),
            position,
            size,
            color,
        })
    }

    fn end_ui_pass(&mut self) -> Result<(), UiError> {
        let commands = self
            .current
            .take()
            .ok_or_else(|| UiError::Backend("end_ui_pass without begin_ui_pass".to_string()))?;
        log::trace!("Recorded UI pass with {} commands", commands.len());
        self.last_pass = commands;
        self.pass_count += 1;
        Ok(())
    }
}
