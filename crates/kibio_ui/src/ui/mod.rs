//! UI System Module
//!
//! Architecture:
//! - UserInterface: overlay manager owning the nine icon buttons
//! - widgets/: button widget, button types, layout
//! - rendering/: backend-agnostic render commands
//! - input/: pointer state tracking

pub mod manager;
pub mod backend;
pub mod widgets;
pub mod rendering;
pub mod input;

pub use manager::UserInterface;
pub use backend::UIRenderBackend;

// Re-export widgets
pub use widgets::{ButtonColors, ImageButton, Rect, UIButtonType, UILayout};

// Re-export rendering types
pub use rendering::{CommandRecorder, UIRenderCommand, UIVertex};

// Re-export input types
pub use input::UIInputProcessor;

// Re-export events
pub use crate::events::{UserInterfaceEvent, UserInterfaceListener};

use crate::assets::AssetError;
use crate::config::ConfigError;

/// Overlay errors
#[derive(thiserror::Error, Debug)]
pub enum UiError {
    /// Icon could not be loaded
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Configuration is unusable
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Render backend failure
    #[error("Render backend error: {0}")]
    Backend(String),
}
