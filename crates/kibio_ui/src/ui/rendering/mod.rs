//! UI rendering module
//!
//! Backend-agnostic UI rendering infrastructure

pub mod vertex;
pub mod commands;
pub mod recorder;

// Re-export commonly used types
pub use vertex::UIVertex;
pub use commands::UIRenderCommand;
pub use recorder::CommandRecorder;
