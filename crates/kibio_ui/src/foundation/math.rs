//! Math utilities and types
//!
//! Screen-space vector and color types used by the overlay.

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// RGBA color with components in `0.0..=1.0`
pub type Color = Vec4;
