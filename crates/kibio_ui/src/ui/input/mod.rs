//! UI input handling module

pub mod processor;

pub use processor::UIInputProcessor;
