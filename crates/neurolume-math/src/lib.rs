//! # neurolume-math
//!
//! Math primitives for the Neurolume visualization core.
//!
//! Provides:
//! - Re-export of `glam::Vec3`
//! - [`Rgb`] linear color with exact-endpoint interpolation
//! - [`QuadraticBezier`] curves used as particle paths

pub mod bezier;
pub mod color;

pub use bezier::QuadraticBezier;
pub use color::Rgb;

// Re-export glam types as the canonical math types for Neurolume.
pub use glam::Vec3;

/// Linear interpolation evaluated as `a * (1 - t) + b * t`.
///
/// Unlike `a + (b - a) * t`, this form returns exactly `a` at `t = 0`
/// and exactly `b` at `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
