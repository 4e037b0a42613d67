//! Quadratic Bézier curves.
//!
//! A particle path is defined by three control points:
//! `B(t) = (1-t)² p0 + 2(1-t)t p1 + t² p2`, for `t ∈ [0, 1]`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A quadratic Bézier curve through `start`, pulled toward `control`, ending at `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBezier {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl QuadraticBezier {
    pub fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        Self { start, control, end }
    }

    /// Evaluates the curve at parameter `t`.
    #[inline]
    pub fn point(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }

    /// Radius of the smallest origin-centered sphere that contains the curve.
    ///
    /// The curve lies in the convex hull of its control points, so the
    /// largest control point norm is an upper bound.
    pub fn hull_radius(&self) -> f32 {
        self.start
            .length()
            .max(self.control.length())
            .max(self.end.length())
    }
}
