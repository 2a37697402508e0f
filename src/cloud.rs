//! Generated point clouds and their renderer-facing buffers.
//!
//! A [`PointCloud`] is produced in one piece by [`crate::generate`] and never
//! mutated afterwards. Renderers read it either as two parallel flat arrays
//! (`positions`, `colors`) or as one interleaved [`PointVertex`] slice that can
//! be uploaded directly with `bytemuck::cast_slice`.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A single star of the galaxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: Vec3,
    /// RGB, 0.0-1.0.
    pub color: Vec3,
}

impl Point {
    /// The placeholder emitted for void-excluded indices under
    /// [`crate::VoidPolicy::Collapse`].
    pub const ZERO: Point = Point {
        position: Vec3::ZERO,
        color: Vec3::ZERO,
    };

    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// GPU vertex layout for one point: position followed by color.
///
/// 24 bytes, tightly packed (`float32x3` + `float32x3`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl From<&Point> for PointVertex {
    fn from(p: &Point) -> Self {
        Self {
            position: p.position.to_array(),
            color: p.color.to_array(),
        }
    }
}

/// An immutable, ordered sequence of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointCloud {
    points: Vec<Point>,
}

impl PointCloud {
    pub(crate) fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// An empty cloud.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Flat position array, 3 floats per point.
    pub fn positions(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| p.position.to_array()).collect()
    }

    /// Flat color array, 3 floats per point, parallel to [`positions`](Self::positions).
    pub fn colors(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| p.color.to_array()).collect()
    }

    /// Interleaved vertices ready for a vertex buffer.
    pub fn vertices(&self) -> Vec<PointVertex> {
        self.points.iter().map(PointVertex::from).collect()
    }

    /// Distance from the origin to the farthest point, for camera framing.
    ///
    /// Returns `0.0` for an empty cloud.
    pub fn bounding_radius(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.position.length())
            .fold(0.0, f32::max)
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
