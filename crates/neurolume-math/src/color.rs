//! RGB color with unit-range float channels.
//!
//! Channels are stored the way they are written into a per-vertex
//! color attribute: three `f32` values in `[0, 1]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use neurolume_types::NeurolumeError;

use crate::lerp;

/// An RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Creates a color from raw channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    /// Packs the color back into `0xRRGGBB`, rounding each channel.
    pub fn to_hex(self) -> u32 {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (q(self.r) << 16) | (q(self.g) << 8) | q(self.b)
    }

    /// Per-channel interpolation from `self` toward `other`.
    ///
    /// `t = 0` returns `self` exactly, `t = 1` returns `other` exactly.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
        }
    }

    /// Returns the channels as an array, in attribute order.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

/// Parses `#rrggbb`, `rrggbb`, or `0xrrggbb`.
impl FromStr for Rgb {
    type Err = NeurolumeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(NeurolumeError::InvalidConfig(format!(
                "Color '{s}' must have exactly 6 hex digits"
            )));
        }
        let hex = u32::from_str_radix(digits, 16).map_err(|_| {
            NeurolumeError::InvalidConfig(format!("Color '{s}' is not valid hex"))
        })?;
        Ok(Self::from_hex(hex))
    }
}
