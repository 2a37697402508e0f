//! The galaxy parameter set.
//!
//! A [`GalaxyParams`] is an immutable snapshot of everything one generation
//! call needs. Edits never mutate a live parameter set; they produce a new one
//! (see [`crate::config::ParamEdit`]).
//!
//! # Example
//!
//! ```ignore
//! let params = GalaxyParams::default()
//!     .with_count(20_000)
//!     .with_branches(3)
//!     .with_spin(1.5)
//!     .with_nebula(0.2, color::from_hex("#646264").unwrap());
//! ```

use crate::color;
use crate::error::ParamError;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// What happens to indices whose radius falls inside the central void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VoidPolicy {
    /// Excluded indices emit nothing; the cloud is shorter than `count`.
    #[default]
    Remove,
    /// Excluded indices emit a zero-position, zero-color point, keeping the
    /// cloud at exactly `count` points.
    Collapse,
}

/// Shape, color and motion inputs for one galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyParams {
    /// Target number of points.
    pub count: u32,
    /// Rendered point footprint.
    pub point_size: f32,
    /// Maximum galaxy radius.
    pub radius: f32,
    /// Number of spiral arms. Must be at least 1.
    pub branches: u32,
    /// Angular offset per unit radius (radians).
    pub spin: f32,
    /// Reserved. Carried through configuration but not read by the generator.
    pub randomness: f32,
    /// Jitter falloff exponent; higher values pull points toward their arm.
    pub randomness_power: f32,
    /// Color at the galaxy center.
    #[serde(with = "color::hex")]
    pub inside_color: Vec3,
    /// Color at the galaxy rim.
    #[serde(with = "color::hex")]
    pub outside_color: Vec3,
    /// Render blending alpha.
    pub opacity: f32,
    /// Enables the nebula overlay.
    pub has_nebula: bool,
    /// Probability that a point is replaced by a nebula sample.
    pub nebula_density: f32,
    /// Color of nebula samples.
    #[serde(with = "color::hex")]
    pub nebula_color: Vec3,
    /// Radius of the empty central disk.
    pub void_size: f32,
    /// How void-excluded indices are represented in the output.
    pub void_policy: VoidPolicy,
    /// Frequency of the radius-dependent arm twist, per radian of spin.
    pub twist_factor: f32,
    /// Peak angular offset of the twist, in radians.
    pub twist_amount: f32,
    /// Whole-cloud spin rate in radians per second. Render-time only.
    pub rotation_speed: f32,
    /// Frequency of the curl applied to the twisted arm angle.
    pub curl_frequency: f32,
    /// Peak angular offset of the curl, in radians.
    pub curl_amplitude: f32,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: 50_000,
            point_size: 0.01,
            radius: 25.0,
            branches: 5,
            spin: 1.0,
            randomness: 0.4,
            randomness_power: 3.0,
            inside_color: Vec3::new(1.0, 96.0 / 255.0, 48.0 / 255.0),    // #ff6030
            outside_color: Vec3::new(27.0 / 255.0, 57.0 / 255.0, 132.0 / 255.0), // #1b3984
            opacity: 1.0,
            has_nebula: true,
            nebula_density: 0.1,
            nebula_color: Vec3::new(100.0 / 255.0, 98.0 / 255.0, 100.0 / 255.0), // #646264
            void_size: 2.5,
            void_policy: VoidPolicy::Remove,
            twist_factor: -1.3,
            twist_amount: 0.5,
            rotation_speed: 0.1,
            curl_frequency: -1.8,
            curl_amplitude: -1.36,
        }
    }
}

impl GalaxyParams {
    /// Create a parameter set with the default preset.
    pub fn new() -> Self {
        Self::default()
    }

    /// A flat, undistorted disk: no spin, twist, curl, void or nebula.
    ///
    /// Handy as a starting point when only one effect should be visible.
    pub fn plain() -> Self {
        Self {
            spin: 0.0,
            has_nebula: false,
            void_size: 0.0,
            twist_factor: 0.0,
            twist_amount: 0.0,
            curl_frequency: 0.0,
            curl_amplitude: 0.0,
            ..Self::default()
        }
    }

    /// Check the invariants generation relies on.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.branches == 0 {
            return Err(ParamError::ZeroBranches);
        }

        let floats = [
            ("point_size", self.point_size),
            ("radius", self.radius),
            ("spin", self.spin),
            ("randomness", self.randomness),
            ("randomness_power", self.randomness_power),
            ("opacity", self.opacity),
            ("nebula_density", self.nebula_density),
            ("void_size", self.void_size),
            ("twist_factor", self.twist_factor),
            ("twist_amount", self.twist_amount),
            ("rotation_speed", self.rotation_speed),
            ("curl_frequency", self.curl_frequency),
            ("curl_amplitude", self.curl_amplitude),
        ];
        if let Some((field, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParamError::NonFinite { field: *field });
        }

        let colors = [
            ("inside_color", self.inside_color),
            ("outside_color", self.outside_color),
            ("nebula_color", self.nebula_color),
        ];
        if let Some((field, _)) = colors.iter().find(|(_, c)| !c.is_finite()) {
            return Err(ParamError::NonFinite { field: *field });
        }

        Ok(())
    }

    /// Radius actually sampled by the generator. Non-positive radii collapse
    /// the galaxy onto the origin.
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        self.radius.max(0.0)
    }

    /// Whole-cloud rotation about the vertical axis after `elapsed_secs`.
    #[inline]
    pub fn rotation_angle(&self, elapsed_secs: f32) -> f32 {
        elapsed_secs * self.rotation_speed
    }

    // ========== Builders ==========

    /// Set the number of indices to sample.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the rendered point size.
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    /// Set the maximum radial distance from the center.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of spiral arms.
    pub fn with_branches(mut self, branches: u32) -> Self {
        self.branches = branches;
        self
    }

    /// Set the angular offset per unit of radius.
    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    /// Set the jitter exponent. Higher powers hug the arms more tightly.
    pub fn with_randomness_power(mut self, power: f32) -> Self {
        self.randomness_power = power;
        self
    }

    /// Set the radial gradient endpoints.
    pub fn with_colors(mut self, inside: Vec3, outside: Vec3) -> Self {
        self.inside_color = inside;
        self.outside_color = outside;
        self
    }

    /// Set the render opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Enable the nebula overlay with the given density and color.
    pub fn with_nebula(mut self, density: f32, color: Vec3) -> Self {
        self.has_nebula = true;
        self.nebula_density = density;
        self.nebula_color = color;
        self
    }

    /// Disable the nebula overlay. Density and color are kept.
    pub fn without_nebula(mut self) -> Self {
        self.has_nebula = false;
        self
    }

    /// Set the void radius and how excluded indices appear in the output.
    pub fn with_void(mut self, size: f32, policy: VoidPolicy) -> Self {
        self.void_size = size;
        self.void_policy = policy;
        self
    }

    /// Set the twist frequency and amount.
    pub fn with_twist(mut self, factor: f32, amount: f32) -> Self {
        self.twist_factor = factor;
        self.twist_amount = amount;
        self
    }

    /// Set the curl frequency and amplitude.
    pub fn with_curl(mut self, frequency: f32, amplitude: f32) -> Self {
        self.curl_frequency = frequency;
        self.curl_amplitude = amplitude;
        self
    }

    /// Set the whole-cloud spin rate in radians per second.
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }
}
