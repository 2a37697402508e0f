//! Point sprite textures.
//!
//! Stars can be drawn with a small sprite (usually a soft round glow) used as
//! both color map and alpha map. Loading is best-effort: a missing or broken
//! file never stops a galaxy from being generated, the material just falls
//! back to plain opaque points.
//!
//! # Supported Formats
//!
//! - PNG (recommended)
//! - JPEG

use crate::error::TextureError;
use std::path::{Path, PathBuf};

/// Decoded RGBA sprite image.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteTexture {
    /// Raw RGBA pixel data (width * height * 4 bytes).
    pub data: Vec<u8>,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Where the sprite was loaded from, if it came from disk.
    pub source: Option<PathBuf>,
}

impl SpriteTexture {
    /// Create a sprite from raw RGBA data.
    ///
    /// # Panics
    ///
    /// Panics if `data` is not exactly `width * height * 4` bytes.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "RGBA data size mismatch"
        );
        Self {
            data,
            width,
            height,
            source: None,
        }
    }

    /// Load a sprite from an image file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let img = image::load_from_memory(&bytes)?.into_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            data: img.into_raw(),
            width,
            height,
            source: Some(path.to_path_buf()),
        })
    }

    /// Load a sprite, logging and returning `None` on failure.
    ///
    /// ```ignore
    /// let material = PointMaterial::from_params(&params)
    ///     .with_sprite(SpriteTexture::load_or_fallback("textures/particles/1.png"));
    /// ```
    pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> Option<Self> {
        match Self::from_file(path.as_ref()) {
            Ok(sprite) => {
                log::debug!(
                    "Loaded sprite {} ({}x{})",
                    path.as_ref().display(),
                    sprite.width,
                    sprite.height
                );
                Some(sprite)
            }
            Err(e) => {
                log::warn!(
                    "Sprite '{}' unavailable, drawing untextured points: {}",
                    path.as_ref().display(),
                    e
                );
                None
            }
        }
    }

    /// Procedural soft disc: full alpha in the middle, fading to zero at the
    /// edge. A stand-in when no sprite file ships with the renderer.
    pub fn soft_disc(size: u32) -> Self {
        let mut data = Vec::with_capacity((size * size * 4) as usize);
        let half = size as f32 / 2.0;
        for y in 0..size {
            for x in 0..size {
                let dx = (x as f32 + 0.5 - half) / half;
                let dy = (y as f32 + 0.5 - half) / half;
                let falloff = (1.0 - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
                let a = (falloff * falloff * 255.0).round() as u8;
                data.extend_from_slice(&[255, 255, 255, a]);
            }
        }
        Self::from_rgba(data, size, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "RGBA data size mismatch")]
    fn test_from_rgba_checks_size() {
        SpriteTexture::from_rgba(vec![0; 3], 1, 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SpriteTexture::from_file("does/not/exist.png").unwrap_err();
        assert!(matches!(err, TextureError::Io(_)));
    }

    #[test]
    fn test_fallback_on_garbage() {
        let path = std::env::temp_dir().join("spiral_galaxy_not_an_image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(SpriteTexture::load_or_fallback(&path).is_none());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_soft_disc_alpha_falls_off() {
        let sprite = SpriteTexture::soft_disc(16);
        assert_eq!(sprite.data.len(), 16 * 16 * 4);
        let alpha = |x: u32, y: u32| sprite.data[((y * 16 + x) * 4 + 3) as usize];
        assert!(alpha(8, 8) > 200);
        assert_eq!(alpha(0, 0), 0);
    }
}
