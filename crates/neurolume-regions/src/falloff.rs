//! Highlight intensity falloff.
//!
//! Given the normalized closeness `t = 1 - d / radius` (1 at the zone
//! center, 0 at the boundary), a falloff reshapes `t` monotonically.

use serde::{Deserialize, Serialize};

/// Monotonic reshaping of highlight intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Falloff {
    /// Intensity equals closeness. Soft edge, even gradient.
    #[default]
    Linear,
    /// `sqrt(closeness)`. Holds strong color further from the center and
    /// drops off sharply near the boundary.
    SquareRoot,
}

impl Falloff {
    /// Maps closeness in `[0, 1]` to intensity in `[0, 1]`.
    ///
    /// Both endpoints are fixed: `apply(0) == 0`, `apply(1) == 1`.
    #[inline]
    pub fn apply(self, closeness: f32) -> f32 {
        let t = closeness.clamp(0.0, 1.0);
        match self {
            Falloff::Linear => t,
            Falloff::SquareRoot => t.sqrt(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Falloff::Linear => "linear",
            Falloff::SquareRoot => "square_root",
        }
    }
}
