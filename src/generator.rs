//! Spiral galaxy point generation.
//!
//! Each index is placed on one of `branches` evenly spaced arms at a random
//! radius. The arm angle is then bent three ways:
//!
//! - **spin**: proportional to radius, giving the spiral its curvature
//! - **twist**: `sin(spin_angle * twist_factor) * twist_amount`
//! - **curl**: `sin(branch_angle * curl_frequency) * curl_amplitude`, applied
//!   after twist
//!
//! Points inside the central void are dropped (or zeroed, see
//! [`VoidPolicy`]). Survivors get per-axis jitter with a power falloff, a
//! radial color gradient, and a chance of being replaced by a nebula sample.
//!
//! # Draw order
//!
//! Draws per index are fixed so seeded runs reproduce exactly:
//!
//! 1. radius
//! 2. jitter x magnitude, x sign, y magnitude, y sign, z magnitude, z sign
//! 3. nebula activation
//! 4. nebula radius (only if the overlay fired)
//!
//! A void-excluded index stops after its radius draw.

use crate::cloud::{Point, PointCloud};
use crate::color;
use crate::error::GalaxyError;
use crate::nebula;
use crate::params::{GalaxyParams, VoidPolicy};
use crate::random::RandomSource;
use glam::Vec3;
use std::f32::consts::TAU;
use std::time::Instant;

/// Generate a point cloud for `params`, drawing all randomness from `rng`.
///
/// Fails only if the parameters are unusable (zero branches, non-finite
/// values). `count = 0` yields an empty cloud.
///
/// # Example
///
/// ```ignore
/// let params = GalaxyParams::default().with_count(10_000);
/// let cloud = generate(&params, &mut SeededRandom::new(1))?;
/// upload(cloud.positions(), cloud.colors());
/// ```
pub fn generate<R: RandomSource + ?Sized>(
    params: &GalaxyParams,
    rng: &mut R,
) -> Result<PointCloud, GalaxyError> {
    params.validate()?;

    let start = Instant::now();
    let radius_max = params.effective_radius();
    let mut points = Vec::with_capacity(params.count as usize);
    let mut nebula_samples = 0usize;

    for i in 0..params.count {
        let radius = rng.uniform() * radius_max;
        let spin_angle = radius * params.spin;
        let branch_angle = arm_angle(params, i, spin_angle);

        if radius < params.void_size {
            if params.void_policy == VoidPolicy::Collapse {
                points.push(Point::ZERO);
            }
            continue;
        }

        let offset = Vec3::new(
            jitter(params.randomness_power, rng),
            jitter(params.randomness_power, rng),
            jitter(params.randomness_power, rng),
        );

        let angle = branch_angle + spin_angle;
        let position = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius) + offset;

        let t = if radius_max > 0.0 { radius / radius_max } else { 0.0 };
        let star = Point::new(position, color::lerp(params.inside_color, params.outside_color, t));

        match nebula::overlay(params, angle, rng) {
            Some(sample) => {
                nebula_samples += 1;
                points.push(sample);
            }
            None => points.push(star),
        }
    }

    log::debug!(
        "Generated {} of {} points ({} nebula) in {:.2?}",
        points.len(),
        params.count,
        nebula_samples,
        start.elapsed()
    );

    Ok(PointCloud::from_points(points))
}

/// Evenly spaced arm angle for index `i`, before any distortion.
#[inline]
pub fn base_branch_angle(i: u32, branches: u32) -> f32 {
    (i % branches) as f32 / branches as f32 * TAU
}

/// Arm angle for index `i` with twist and curl applied.
///
/// Does not include `spin_angle` itself; positions use
/// `arm_angle + spin_angle`.
pub fn arm_angle(params: &GalaxyParams, i: u32, spin_angle: f32) -> f32 {
    let mut angle = base_branch_angle(i, params.branches);
    angle += (spin_angle * params.twist_factor).sin() * params.twist_amount;
    angle += (angle * params.curl_frequency).sin() * params.curl_amplitude;
    angle
}

/// One axis of jitter: `uniform^power` with a random sign.
#[inline]
fn jitter<R: RandomSource + ?Sized>(power: f32, rng: &mut R) -> f32 {
    let magnitude = rng.uniform().powf(power);
    let sign = if rng.uniform() < 0.5 { -1.0 } else { 1.0 };
    magnitude * sign
}
