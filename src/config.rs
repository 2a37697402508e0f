//! Parameter presets and edits.
//!
//! Presets are [`GalaxyParams`] serialized to JSON, colors as `#rrggbb`
//! strings. Fields missing from a preset take their default value.
//!
//! Edits arrive one field at a time, the way a control panel commits them.
//! Applying a [`ParamEdit`] never touches the current parameter set; it
//! returns a new one with the edited field clamped to its documented range.

use crate::error::PresetError;
use crate::params::{GalaxyParams, VoidPolicy};
use glam::Vec3;
use std::fs;
use std::path::Path;

/// Documented range and step for one numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Clamp `value` into the range. NaN maps to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Clamp and snap to the nearest step, measured from `min`.
    pub fn snap(&self, value: f32) -> f32 {
        let clamped = self.clamp(value);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

pub const COUNT: ParamRange = ParamRange::new(100.0, 100_000.0, 100.0);
pub const POINT_SIZE: ParamRange = ParamRange::new(0.001, 0.1, 0.001);
pub const RADIUS: ParamRange = ParamRange::new(0.01, 30.0, 0.01);
pub const BRANCHES: ParamRange = ParamRange::new(2.0, 20.0, 1.0);
pub const SPIN: ParamRange = ParamRange::new(-5.0, 5.0, 0.001);
pub const ROTATION_SPEED: ParamRange = ParamRange::new(-3.0, 5.0, 0.01);
pub const RANDOMNESS: ParamRange = ParamRange::new(0.0, 2.0, 0.001);
pub const RANDOMNESS_POWER: ParamRange = ParamRange::new(1.0, 10.0, 0.001);
pub const OPACITY: ParamRange = ParamRange::new(0.1, 1.0, 0.001);
pub const NEBULA_DENSITY: ParamRange = ParamRange::new(0.0, 1.0, 0.1);
pub const TWIST_FACTOR: ParamRange = ParamRange::new(-2.0, 5.0, 0.01);
pub const TWIST_AMOUNT: ParamRange = ParamRange::new(-1.0, 1.0, 0.01);
pub const CURL_FREQUENCY: ParamRange = ParamRange::new(-3.0, 5.0, 0.01);
pub const CURL_AMPLITUDE: ParamRange = ParamRange::new(-5.0, 5.0, 0.01);

/// A single committed change to one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamEdit {
    Count(u32),
    PointSize(f32),
    Radius(f32),
    Branches(u32),
    Spin(f32),
    RotationSpeed(f32),
    Randomness(f32),
    RandomnessPower(f32),
    InsideColor(Vec3),
    OutsideColor(Vec3),
    Opacity(f32),
    HasNebula(bool),
    NebulaDensity(f32),
    NebulaColor(Vec3),
    VoidSize(f32),
    VoidPolicy(VoidPolicy),
    TwistFactor(f32),
    TwistAmount(f32),
    CurlFrequency(f32),
    CurlAmplitude(f32),
}

fn clamp_color(c: Vec3) -> Vec3 {
    if c.is_finite() {
        c.clamp(Vec3::ZERO, Vec3::ONE)
    } else {
        Vec3::ZERO
    }
}

impl GalaxyParams {
    /// A copy of `self` with `edit` applied and clamped to its range.
    ///
    /// Count, branches and nebula density are also snapped to their step.
    /// Other float fields are only clamped so fine values survive untouched.
    pub fn apply(&self, edit: ParamEdit) -> GalaxyParams {
        let mut next = self.clone();
        match edit {
            ParamEdit::Count(v) => next.count = COUNT.snap(v as f32) as u32,
            ParamEdit::PointSize(v) => next.point_size = POINT_SIZE.clamp(v),
            ParamEdit::Radius(v) => next.radius = RADIUS.clamp(v),
            ParamEdit::Branches(v) => next.branches = BRANCHES.snap(v as f32) as u32,
            ParamEdit::Spin(v) => next.spin = SPIN.clamp(v),
            ParamEdit::RotationSpeed(v) => next.rotation_speed = ROTATION_SPEED.clamp(v),
            ParamEdit::Randomness(v) => next.randomness = RANDOMNESS.clamp(v),
            ParamEdit::RandomnessPower(v) => next.randomness_power = RANDOMNESS_POWER.clamp(v),
            ParamEdit::InsideColor(c) => next.inside_color = clamp_color(c),
            ParamEdit::OutsideColor(c) => next.outside_color = clamp_color(c),
            ParamEdit::Opacity(v) => next.opacity = OPACITY.clamp(v),
            ParamEdit::HasNebula(on) => next.has_nebula = on,
            ParamEdit::NebulaDensity(v) => next.nebula_density = NEBULA_DENSITY.snap(v),
            ParamEdit::NebulaColor(c) => next.nebula_color = clamp_color(c),
            ParamEdit::VoidSize(v) => next.void_size = if v.is_finite() { v.max(0.0) } else { 0.0 },
            ParamEdit::VoidPolicy(p) => next.void_policy = p,
            ParamEdit::TwistFactor(v) => next.twist_factor = TWIST_FACTOR.clamp(v),
            ParamEdit::TwistAmount(v) => next.twist_amount = TWIST_AMOUNT.clamp(v),
            ParamEdit::CurlFrequency(v) => next.curl_frequency = CURL_FREQUENCY.clamp(v),
            ParamEdit::CurlAmplitude(v) => next.curl_amplitude = CURL_AMPLITUDE.clamp(v),
        }
        next
    }

    /// A copy of `self` with every field clamped to its documented range.
    pub fn clamped(&self) -> GalaxyParams {
        let clamped = [
            ParamEdit::Count(self.count),
            ParamEdit::PointSize(self.point_size),
            ParamEdit::Radius(self.radius),
            ParamEdit::Branches(self.branches),
            ParamEdit::Spin(self.spin),
            ParamEdit::RotationSpeed(self.rotation_speed),
            ParamEdit::Randomness(self.randomness),
            ParamEdit::RandomnessPower(self.randomness_power),
            ParamEdit::InsideColor(self.inside_color),
            ParamEdit::OutsideColor(self.outside_color),
            ParamEdit::Opacity(self.opacity),
            ParamEdit::NebulaDensity(self.nebula_density),
            ParamEdit::NebulaColor(self.nebula_color),
            ParamEdit::VoidSize(self.void_size),
            ParamEdit::TwistFactor(self.twist_factor),
            ParamEdit::TwistAmount(self.twist_amount),
            ParamEdit::CurlFrequency(self.curl_frequency),
            ParamEdit::CurlAmplitude(self.curl_amplitude),
        ]
        .into_iter()
        .fold(self.clone(), |params, edit| params.apply(edit));

        if clamped != *self {
            log::warn!("Galaxy parameters were out of range and have been clamped");
        }
        clamped
    }

    /// Save the parameter set as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PresetError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a parameter set from a JSON preset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a parameter set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, PresetError> {
        let params: GalaxyParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_returns_new_set() {
        let params = GalaxyParams::default();
        let next = params.apply(ParamEdit::Branches(7));
        assert_eq!(params.branches, 5);
        assert_eq!(next.branches, 7);
    }

    #[test]
    fn test_apply_clamps_to_range() {
        let params = GalaxyParams::default();
        assert_eq!(params.apply(ParamEdit::Branches(0)).branches, 2);
        assert_eq!(params.apply(ParamEdit::Count(1_000_000)).count, 100_000);
        assert_eq!(params.apply(ParamEdit::Radius(-1.0)).radius, 0.01);
        assert_eq!(params.apply(ParamEdit::NebulaDensity(f32::NAN)).nebula_density, 0.0);
        assert_eq!(
            params.apply(ParamEdit::InsideColor(Vec3::new(2.0, -1.0, 0.5))).inside_color,
            Vec3::new(1.0, 0.0, 0.5)
        );
    }

    #[test]
    fn test_apply_snaps_stepped_fields() {
        let params = GalaxyParams::default();
        assert_eq!(params.apply(ParamEdit::Count(1_234)).count, 1_200);
        assert_eq!(params.apply(ParamEdit::Count(1_260)).count, 1_300);
        assert_eq!(params.apply(ParamEdit::Branches(7)).branches, 7);
        assert!((params.apply(ParamEdit::NebulaDensity(0.34)).nebula_density - 0.3).abs() < 1e-6);
        // Unstepped floats keep their exact value
        assert_eq!(params.apply(ParamEdit::Spin(1.2345)).spin, 1.2345);
    }

    #[test]
    fn test_clamped_leaves_default_untouched() {
        let params = GalaxyParams::default();
        assert_eq!(params.clamped(), params);
    }

    #[test]
    fn test_snap() {
        assert!((NEBULA_DENSITY.snap(0.34) - 0.3).abs() < 1e-6);
        assert_eq!(BRANCHES.snap(25.0), 20.0);
    }

    #[test]
    fn test_json_uses_hex_colors_and_defaults() {
        let json = serde_json::to_string(&GalaxyParams::default()).unwrap();
        assert!(json.contains("\"inside_color\":\"#ff6030\""));

        let params = GalaxyParams::from_json(r##"{ "branches": 3, "nebula_color": "#ffffff" }"##).unwrap();
        assert_eq!(params.branches, 3);
        assert_eq!(params.nebula_color, Vec3::ONE);
        assert_eq!(params.count, GalaxyParams::default().count);
    }

    #[test]
    fn test_from_json_rejects_bad_presets() {
        assert!(matches!(
            GalaxyParams::from_json(r#"{ "branches": 0 }"#),
            Err(PresetError::Params(_))
        ));
        assert!(matches!(
            GalaxyParams::from_json(r#"{ "inside_color": "orange" }"#),
            Err(PresetError::Json(_))
        ));
    }

    #[test]
    fn test_save_load() {
        let path = std::env::temp_dir().join("spiral_galaxy_preset_test.json");
        let params = GalaxyParams::default().with_branches(8).with_spin(-2.5);
        params.save(&path).unwrap();
        let loaded = GalaxyParams::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.branches, 8);
        assert_eq!(loaded.spin, -2.5);
        assert_eq!(loaded.void_policy, VoidPolicy::Remove);
    }
}
