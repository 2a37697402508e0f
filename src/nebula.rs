//! Nebula overlay.
//!
//! With the overlay enabled, each emitted star may be swapped for a diffuse
//! disk sample: a point on the star's own arm angle at a fresh random radius,
//! flat on the galactic plane and painted in the nebula color. It is a full
//! replacement, the star's jittered position and gradient color are discarded.

use crate::cloud::Point;
use crate::params::GalaxyParams;
use crate::random::RandomSource;
use glam::Vec3;

/// Roll the overlay for one point at arm angle `angle`.
///
/// The activation draw is taken for every point, enabled or not, so toggling
/// the overlay off and setting its density to zero consume the same draws.
/// The radius draw only happens when the overlay fires.
pub(crate) fn overlay<R: RandomSource + ?Sized>(
    params: &GalaxyParams,
    angle: f32,
    rng: &mut R,
) -> Option<Point> {
    let roll = rng.uniform();
    if !params.has_nebula || roll >= params.nebula_density {
        return None;
    }

    let radius = rng.uniform() * params.effective_radius();
    let position = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
    Some(Point::new(position, params.nebula_color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ReplayRandom;

    #[test]
    fn test_disabled_consumes_only_activation_draw() {
        let params = GalaxyParams::default().without_nebula();
        let mut rng = ReplayRandom::constant(0.0);
        assert!(overlay(&params, 0.0, &mut rng).is_none());
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_fires_below_density() {
        let params = GalaxyParams::default()
            .with_radius(10.0)
            .with_nebula(0.5, Vec3::new(0.2, 0.3, 0.4));
        let mut rng = ReplayRandom::new(vec![0.49, 0.5]);
        let point = overlay(&params, 0.0, &mut rng).unwrap();
        assert_eq!(rng.draws(), 2);
        assert!((point.position - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
        assert_eq!(point.color, Vec3::new(0.2, 0.3, 0.4));
    }

    #[test]
    fn test_roll_at_density_does_not_fire() {
        let params = GalaxyParams::default().with_nebula(0.5, Vec3::ONE);
        let mut rng = ReplayRandom::constant(0.5);
        assert!(overlay(&params, 0.0, &mut rng).is_none());
    }
}
