//! # Kibio UI
//!
//! Icon-button overlay for the Kibio creative-coding application.
//!
//! ## Features
//!
//! - **Image Buttons**: Textured icons with hover, select and drop shadows
//! - **Deterministic Layout**: Tool column and file row recomputed on resize
//! - **Typed Events**: Clicks delivered to listeners as `UserInterfaceEvent`
//! - **Backend Agnostic**: Drawing goes through the `UIRenderBackend` trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kibio_ui::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = UserInterfaceConfig::default();
//!     let mut ui = UserInterface::new(&config)?;
//!     ui.add_listener(|event: &UserInterfaceEvent| {
//!         println!("clicked {:?}", event.button);
//!     });
//!
//!     let mut backend = CommandRecorder::new();
//!     ui.update_mouse_position(20.0, 20.0);
//!     ui.update_mouse_button(MouseButton::Left, true);
//!     ui.update();
//!     ui.draw(&mut backend)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod events;
pub mod input;
pub mod ui;

/// Common imports for overlay users
pub mod prelude {
    pub use crate::{
        assets::{ImageData, Texture},
        config::{Config, UserInterfaceConfig},
        events::{ChannelListener, UserInterfaceEvent, UserInterfaceListener},
        foundation::math::{Color, Point2, Vec2},
        input::MouseButton,
        ui::{
            CommandRecorder, ImageButton, Rect, UIButtonType, UIRenderBackend,
            UIRenderCommand, UiError, UserInterface,
        },
    };
}
