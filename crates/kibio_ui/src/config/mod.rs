//! Configuration system
//!
//! Overlay layout, colors and icon locations, loadable from TOML or RON.

use std::path::{Path, PathBuf};

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::{Color, Vec2};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Value out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Overlay configuration
///
/// Colors are RGBA in `0.0..=1.0`. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInterfaceConfig {
    /// Directory the icon images are loaded from
    pub icon_directory: PathBuf,
    /// Icon edge length in pixels
    pub icon_size: f32,
    /// Gap between icons and between icons and the window edge
    pub icon_padding: f32,
    /// Offset of the drop shadow copy
    pub shadow_offset: [f32; 2],
    /// Whether drop shadows are drawn
    pub draw_icon_shadows: bool,
    /// Tint for unselected icons
    pub color: [f32; 4],
    /// Tint for selected icons
    pub highlight_color: [f32; 4],
    /// Tint for the shadow copy
    pub shadow_color: [f32; 4],
    /// Project name text size in pixels
    pub font_size: f32,
}

impl Default for UserInterfaceConfig {
    fn default() -> Self {
        Self {
            icon_directory: PathBuf::from("images/icons"),
            icon_size: 40.0,
            icon_padding: 10.0,
            shadow_offset: [2.0, 2.0],
            draw_icon_shadows: true,
            color: [1.0, 1.0, 1.0, 1.0],
            highlight_color: [1.0, 0.76, 0.03, 1.0],
            shadow_color: [0.0, 0.0, 0.0, 0.5],
            font_size: 16.0,
        }
    }
}

impl Config for UserInterfaceConfig {}

impl UserInterfaceConfig {
    /// Check sizes are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.icon_size.is_finite() && self.icon_size > 0.0) {
            return Err(ConfigError::Invalid {
                field: "icon_size",
                reason: format!("must be positive, got {}", self.icon_size),
            });
        }
        if !(self.icon_padding.is_finite() && self.icon_padding >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "icon_padding",
                reason: format!("must be non-negative, got {}", self.icon_padding),
            });
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConfigError::Invalid {
                field: "font_size",
                reason: format!("must be positive, got {}", self.font_size),
            });
        }
        Ok(())
    }

    /// Path of an icon file inside the icon directory
    pub fn icon_path(&self, file_name: &str) -> PathBuf {
        self.icon_directory.join(file_name)
    }

    /// Shadow offset as a vector
    pub fn shadow_offset(&self) -> Vec2 {
        Vec2::new(self.shadow_offset[0], self.shadow_offset[1])
    }

    /// Normal tint
    pub fn color(&self) -> Color {
        to_color(self.color)
    }

    /// Selected tint
    pub fn highlight_color(&self) -> Color {
        to_color(self.highlight_color)
    }

    /// Shadow tint
    pub fn shadow_color(&self) -> Color {
        to_color(self.shadow_color)
    }
}

fn to_color(c: [f32; 4]) -> Color {
    Color::new(
        c[0].clamp(0.0, 1.0),
        c[1].clamp(0.0, 1.0),
        c[2].clamp(0.0, 1.0),
        c[3].clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("kibio_ui_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_validate() {
        assert!(UserInterfaceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_toml_partial_file_uses_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "icon_size = 32.0\ndraw_icon_shadows = false\n").unwrap();

        let config = UserInterfaceConfig::load_from_file(&path).unwrap();
        assert_eq!(config.icon_size, 32.0);
        assert!(!config.draw_icon_shadows);
        assert_eq!(config.icon_padding, 10.0);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_ron_save_and_load() {
        let path = temp_path("overlay.ron");
        let config = UserInterfaceConfig {
            icon_padding: 4.0,
            shadow_color: [0.1, 0.1, 0.1, 0.9],
            ..Default::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = UserInterfaceConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unsupported_extension() {
        let config = UserInterfaceConfig::default();
        let result = config.save_to_file(temp_path("overlay.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_icon_size() {
        let config = UserInterfaceConfig { icon_size: 0.0, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "icon_size", .. })
        ));
    }

    #[test]
    fn test_colors_are_clamped() {
        let config = UserInterfaceConfig { color: [2.0, -1.0, 0.5, 1.0], ..Default::default() };
        assert_eq!(config.color(), Color::new(1.0, 0.0, 0.5, 1.0));
    }
}
