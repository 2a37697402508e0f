//! Rendering description for a galaxy.
//!
//! The crate does not draw anything. [`PointMaterial`] is the contract with
//! whatever renderer displays the cloud: how big points are, how they blend,
//! and which sprite (if any) to stamp them with.
//!
//! ```ignore
//! let material = PointMaterial::from_params(&params)
//!     .with_sprite(SpriteTexture::load_or_fallback("textures/particles/1.png"));
//! ```

use crate::params::GalaxyParams;
use crate::textures::SpriteTexture;

/// Blend mode for point rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending.
    Alpha,

    /// Additive blending (default).
    ///
    /// Overlapping stars add up and glow, which is what makes the dense
    /// core read as bright.
    #[default]
    Additive,
}

/// Material parameters consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMaterial {
    /// Point footprint in world units.
    pub size: f32,
    /// Shrink points with distance from the camera.
    pub size_attenuation: bool,
    /// Global alpha.
    pub opacity: f32,
    pub blend_mode: BlendMode,
    /// Disabled so additive points don't occlude each other.
    pub depth_write: bool,
    /// Use the per-point color buffer.
    pub vertex_colors: bool,
    /// Sprite used as color map and alpha map.
    pub sprite: Option<SpriteTexture>,
}

impl PointMaterial {
    /// Material for `params`, without a sprite.
    pub fn from_params(params: &GalaxyParams) -> Self {
        Self {
            size: params.point_size,
            size_attenuation: true,
            opacity: params.opacity,
            blend_mode: BlendMode::Additive,
            depth_write: false,
            vertex_colors: true,
            sprite: None,
        }
    }

    /// Attach a sprite. `None` keeps the untextured fallback.
    pub fn with_sprite(mut self, sprite: Option<SpriteTexture>) -> Self {
        self.sprite = sprite;
        self
    }

    /// Whether the renderer should enable alpha blending for this material.
    ///
    /// Untextured points are drawn opaque.
    pub fn is_transparent(&self) -> bool {
        self.sprite.is_some()
    }

    /// Opacity the renderer should actually apply.
    pub fn effective_opacity(&self) -> f32 {
        if self.is_transparent() {
            self.opacity
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_from_params() {
        let params = GalaxyParams::default().with_point_size(0.05).with_opacity(0.6);
        let material = PointMaterial::from_params(&params);
        assert_eq!(material.size, 0.05);
        assert_eq!(material.opacity, 0.6);
        assert_eq!(material.blend_mode, BlendMode::Additive);
        assert!(!material.depth_write);
        assert!(material.vertex_colors);
    }

    #[test]
    fn test_untextured_fallback_is_opaque() {
        let params = GalaxyParams::default().with_opacity(0.3);
        let material = PointMaterial::from_params(&params).with_sprite(None);
        assert!(!material.is_transparent());
        assert_eq!(material.effective_opacity(), 1.0);

        let textured = material.with_sprite(Some(SpriteTexture::soft_disc(4)));
        assert!(textured.is_transparent());
        assert_eq!(textured.effective_opacity(), 0.3);
    }
}
