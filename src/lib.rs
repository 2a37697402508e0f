//! # Spiral Galaxy
//!
//! Procedural spiral galaxy point clouds from a handful of shape parameters.
//!
//! Points are scattered along `branches` evenly spaced arms at random radii,
//! bent by spin, twist and curl, jittered off the galactic plane, colored by a
//! radial gradient, and optionally swapped for diffuse nebula samples. The
//! result is a flat position buffer and a parallel color buffer ready for
//! any point renderer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use spiral_galaxy::prelude::*;
//!
//! let params = GalaxyParams::default()
//!     .with_count(20_000)
//!     .with_branches(4)
//!     .with_twist(-1.3, 0.5)
//!     .with_curl(-1.8, -1.36);
//!
//! let cloud = generate(&params, &mut SeededRandom::new(42))?;
//! let material = PointMaterial::from_params(&params)
//!     .with_sprite(SpriteTexture::load_or_fallback("textures/particles/1.png"));
//!
//! renderer.upload(&cloud.positions(), &cloud.colors(), &material);
//! ```
//!
//! ## Interactive use
//!
//! A [`GalaxyController`] owns the single displayed cloud. Every committed
//! edit produces a new parameter set and a freshly generated cloud:
//!
//! ```ignore
//! let mut galaxy = GalaxyController::new(SystemRandom::new());
//! galaxy.refresh()?;
//! galaxy.commit(ParamEdit::Spin(2.0))?;
//! galaxy.commit(ParamEdit::RotationSpeed(0.4))?;
//! ```
//!
//! ## Parameters
//!
//! | Group | Fields |
//! |-------|--------|
//! | Shape | `count`, `radius`, `branches`, `spin` |
//! | Jitter | `randomness_power` (`randomness` is reserved) |
//! | Distortion | `twist_factor`, `twist_amount`, `curl_frequency`, `curl_amplitude` |
//! | Void | `void_size`, `void_policy` |
//! | Color | `inside_color`, `outside_color` |
//! | Nebula | `has_nebula`, `nebula_density`, `nebula_color` |
//! | Render | `point_size`, `opacity`, `rotation_speed` |

pub mod cloud;
pub mod color;
pub mod config;
mod controller;
mod error;
mod generator;
mod nebula;
mod params;
pub mod random;
pub mod textures;
pub mod visuals;

pub use bytemuck;
pub use cloud::{Point, PointCloud, PointVertex};
pub use config::{ParamEdit, ParamRange};
pub use controller::GalaxyController;
pub use error::{GalaxyError, ParamError, PresetError, TextureError};
pub use generator::{arm_angle, base_branch_angle, generate};
pub use glam::Vec3;
pub use params::{GalaxyParams, VoidPolicy};
pub use random::{RandomSource, ReplayRandom, SeededRandom, SystemRandom};
pub use textures::SpriteTexture;
pub use visuals::{BlendMode, PointMaterial};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use spiral_galaxy::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color;
    pub use crate::{
        generate, BlendMode, GalaxyController, GalaxyError, GalaxyParams, ParamEdit, Point,
        PointCloud, PointMaterial, RandomSource, ReplayRandom, SeededRandom, SpriteTexture,
        SystemRandom, Vec3, VoidPolicy,
    };
}
