//! Base and highlight colors for region painting.

use serde::{Deserialize, Serialize};
use neurolume_math::Rgb;
use neurolume_types::constants::{DEFAULT_ACTIVE_COLOR, DEFAULT_BASE_COLOR};

/// The two colors region painting blends between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Color of every vertex outside the active zone.
    pub base: Rgb,
    /// Color at the exact center of the active zone.
    pub active: Rgb,
}

impl Palette {
    pub fn new(base: Rgb, active: Rgb) -> Self {
        Self { base, active }
    }

    /// Color for a given highlight intensity in `[0, 1]`.
    #[inline]
    pub fn blend(&self, intensity: f32) -> Rgb {
        self.base.lerp(self.active, intensity)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: Rgb::from_hex(DEFAULT_BASE_COLOR),
            active: Rgb::from_hex(DEFAULT_ACTIVE_COLOR),
        }
    }
}
