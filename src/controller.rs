//! Ownership of the displayed galaxy.
//!
//! [`GalaxyController`] holds the current parameter set and the one live
//! [`PointCloud`]. Regenerating builds the new cloud completely before the
//! old one is dropped, and because readers only ever borrow the cloud through
//! `&self`, a renderer can never observe a half-swapped state.
//!
//! ```ignore
//! let mut galaxy = GalaxyController::new(SystemRandom::new());
//! galaxy.regenerate(GalaxyParams::default())?;
//!
//! // Panel committed a change
//! galaxy.commit(ParamEdit::Branches(3))?;
//!
//! // Each frame
//! if let Some(cloud) = galaxy.cloud() {
//!     renderer.draw(cloud, galaxy.params().rotation_angle(time.elapsed()));
//! }
//! ```

use crate::cloud::PointCloud;
use crate::config::ParamEdit;
use crate::error::GalaxyError;
use crate::generator;
use crate::params::GalaxyParams;
use crate::random::RandomSource;
use crate::visuals::PointMaterial;

/// Owns the currently displayed cloud and regenerates it on demand.
pub struct GalaxyController<R: RandomSource> {
    rng: R,
    params: GalaxyParams,
    cloud: Option<PointCloud>,
    generation: u64,
}

impl<R: RandomSource> GalaxyController<R> {
    /// Create a controller with default parameters and no cloud yet.
    pub fn new(rng: R) -> Self {
        Self::with_params(rng, GalaxyParams::default())
    }

    /// Create a controller with the given parameters and no cloud yet.
    pub fn with_params(rng: R, params: GalaxyParams) -> Self {
        Self {
            rng,
            params,
            cloud: None,
            generation: 0,
        }
    }

    /// Generate a cloud for `params` and make it the displayed one.
    ///
    /// On error nothing changes: the previous parameters and cloud stay live.
    pub fn regenerate(&mut self, params: GalaxyParams) -> Result<&PointCloud, GalaxyError> {
        let next = generator::generate(&params, &mut self.rng)?;

        self.params = params;
        self.generation += 1;
        log::info!(
            "Galaxy #{}: {} points (requested {})",
            self.generation,
            next.len(),
            self.params.count
        );

        // Option::insert drops the previous cloud only now, after `next` is complete
        let cloud: &PointCloud = self.cloud.insert(next);
        Ok(cloud)
    }

    /// Regenerate with the current parameters and fresh randomness.
    pub fn refresh(&mut self) -> Result<&PointCloud, GalaxyError> {
        self.regenerate(self.params.clone())
    }

    /// Apply a committed parameter edit and regenerate.
    ///
    /// Every commit rebuilds the cloud, render-only fields included, so the
    /// displayed cloud always matches `params()`.
    pub fn commit(&mut self, edit: ParamEdit) -> Result<&PointCloud, GalaxyError> {
        log::debug!("Committed {:?}", edit);
        let params = self.params.apply(edit);
        self.regenerate(params)
    }

    /// The displayed cloud, if one has been generated.
    pub fn cloud(&self) -> Option<&PointCloud> {
        self.cloud.as_ref()
    }

    /// Parameters the displayed cloud was generated from.
    pub fn params(&self) -> &GalaxyParams {
        &self.params
    }

    /// Render material for the current parameters.
    pub fn material(&self) -> PointMaterial {
        PointMaterial::from_params(&self.params)
    }

    /// Number of successful regenerations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop the displayed cloud.
    pub fn clear(&mut self) {
        self.cloud = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    fn small() -> GalaxyParams {
        GalaxyParams::default().with_count(500)
    }

    #[test]
    fn test_regenerate_replaces_cloud() {
        let mut galaxy = GalaxyController::new(SeededRandom::new(1));
        assert!(galaxy.cloud().is_none());

        galaxy.regenerate(small()).unwrap();
        let first = galaxy.cloud().unwrap().clone();

        galaxy.regenerate(small().with_branches(2)).unwrap();
        assert_eq!(galaxy.generation(), 2);
        assert_eq!(galaxy.params().branches, 2);
        assert_ne!(galaxy.cloud().unwrap(), &first);
    }

    #[test]
    fn test_failed_regenerate_keeps_previous() {
        let mut galaxy = GalaxyController::new(SeededRandom::new(1));
        galaxy.regenerate(small()).unwrap();
        let before = galaxy.cloud().unwrap().clone();

        assert!(galaxy.regenerate(small().with_branches(0)).is_err());
        assert_eq!(galaxy.cloud(), Some(&before));
        assert_eq!(galaxy.params().branches, 5);
        assert_eq!(galaxy.generation(), 1);
    }

    #[test]
    fn test_every_commit_regenerates() {
        let mut galaxy = GalaxyController::with_params(SeededRandom::new(2), small());
        galaxy.refresh().unwrap();
        let before = galaxy.cloud().unwrap().clone();

        galaxy.commit(ParamEdit::PointSize(0.05)).unwrap();
        assert_eq!(galaxy.generation(), 2);
        assert_eq!(galaxy.params().point_size, 0.05);
        assert_ne!(galaxy.cloud(), Some(&before));

        galaxy.commit(ParamEdit::RotationSpeed(2.0)).unwrap();
        galaxy.commit(ParamEdit::Opacity(0.5)).unwrap();
        galaxy.commit(ParamEdit::Randomness(1.0)).unwrap();
        assert_eq!(galaxy.generation(), 5);
        assert_eq!(galaxy.material().opacity, 0.5);
    }

    #[test]
    fn test_commit_without_cloud_generates() {
        let mut galaxy = GalaxyController::with_params(SeededRandom::new(3), small());
        assert!(!galaxy.commit(ParamEdit::Spin(-1.0)).unwrap().is_empty());
        assert_eq!(galaxy.generation(), 1);
        assert_eq!(galaxy.params().spin, -1.0);
    }

    #[test]
    fn test_clear() {
        let mut galaxy = GalaxyController::with_params(SeededRandom::new(4), small());
        galaxy.refresh().unwrap();
        galaxy.clear();
        assert!(galaxy.cloud().is_none());
    }
}
