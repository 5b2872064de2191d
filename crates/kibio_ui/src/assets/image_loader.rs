//! Image loading utilities for icon textures
//!
//! Decodes PNG icons into RGBA pixel data and wraps them in owned textures.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::assets::AssetError;

/// Loaded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (always 4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path_ref.display(), e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
            channels: 4,
        })
    }

    /// Load image from memory (useful for embedded icons)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Loaded image {}x{} from memory", width, height);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
            channels: 4,
        })
    }

    /// Create a solid color image (placeholder icons and tests)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// Process-unique texture identifier
///
/// Backends key their GPU uploads on this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u64);

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// An icon texture owned by a single button
///
/// Not `Clone`: the pixel data is released when the owner drops.
#[derive(Debug)]
pub struct Texture {
    id: TextureId,
    image: ImageData,
}

impl Texture {
    /// Wrap decoded pixels in a texture with a fresh id
    pub fn new(image: ImageData) -> Self {
        Self {
            id: TextureId(NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed)),
            image,
        }
    }

    /// Load a texture from an image file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        ImageData::from_file(path).map(Self::new)
    }

    /// Texture identifier
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// Pixel data
    pub fn image(&self) -> &ImageData {
        &self.image
    }

    /// Texture width in pixels
    pub fn width(&self) -> u32 {
        self.image.width
    }

    /// Texture height in pixels
    pub fn height(&self) -> u32 {
        self.image.height
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        log::trace!("Releasing texture {:?} ({} bytes)", self.id, self.image.size_bytes());
    }
}
