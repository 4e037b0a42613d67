//! Soft circular sprite images for point rendering.
//!
//! Rasterizes a radial gradient into an RGBA8 image on the CPU so any
//! backend can upload it as a texture. The default gradient is a white
//! core fading to transparent at the rim:
//!
//! ```text
//! t = 0.0   rgba(255, 255, 255, 1.0)
//! t = 0.4   rgba(255, 255, 255, 0.5)
//! t = 1.0   rgba(  0,   0,   0, 0.0)
//! ```

use serde::{Deserialize, Serialize};

/// A tightly packed RGBA8 image, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl SpriteImage {
    /// RGBA of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

/// Capability: "provide a soft circular sprite image".
pub trait SpriteSource {
    fn sprite(&self) -> SpriteImage;

    fn name(&self) -> &str;
}

/// A color stop at normalized radius `offset`, RGBA channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub rgba: [f32; 4],
}

/// Radial gradient from the image center out to its inscribed circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGlowSprite {
    /// Edge length in pixels.
    pub size: u32,
    /// Stops sorted by ascending offset.
    pub stops: Vec<GradientStop>,
}

impl Default for RadialGlowSprite {
    fn default() -> Self {
        Self {
            size: 32,
            stops: vec![
                GradientStop { offset: 0.0, rgba: [1.0, 1.0, 1.0, 1.0] },
                GradientStop { offset: 0.4, rgba: [1.0, 1.0, 1.0, 0.5] },
                GradientStop { offset: 1.0, rgba: [0.0, 0.0, 0.0, 0.0] },
            ],
        }
    }
}

impl RadialGlowSprite {
    /// Gradient color at normalized radius `t`.
    ///
    /// Below the first stop the first color holds; past the last stop the
    /// last color holds.
    pub fn color_at(&self, t: f32) -> [f32; 4] {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return [0.0; 4];
        };
        if t <= first.offset {
            return first.rgba;
        }
        if t >= last.offset {
            return last.rgba;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let f = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
                let mut out = [0.0; 4];
                for (c, o) in out.iter_mut().enumerate() {
                    *o = a.rgba[c] * (1.0 - f) + b.rgba[c] * f;
                }
                return out;
            }
        }
        last.rgba
    }
}

impl SpriteSource for RadialGlowSprite {
    fn sprite(&self) -> SpriteImage {
        let size = self.size;
        let half = size as f32 / 2.0;
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);

        for y in 0..size {
            for x in 0..size {
                // Sample at the pixel center.
                let dx = x as f32 + 0.5 - half;
                let dy = y as f32 + 0.5 - half;
                let t = (dx * dx + dy * dy).sqrt() / half;
                for c in self.color_at(t) {
                    pixels.push((c.clamp(0.0, 1.0) * 255.0).round() as u8);
                }
            }
        }

        SpriteImage {
            width: size,
            height: size,
            pixels,
        }
    }

    fn name(&self) -> &str {
        "radial_glow"
    }
}
