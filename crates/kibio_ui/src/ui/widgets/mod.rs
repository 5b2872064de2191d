//! UI widgets module
//!
//! Overlay widget types and their layout.

pub mod core;
pub mod button;
pub mod layout;

// Re-export core types
pub use self::core::{Rect, UIButtonType};

// Re-export widget types
pub use button::{ButtonColors, ImageButton};
pub use layout::UILayout;
