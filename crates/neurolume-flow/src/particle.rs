//! A single flow particle.

use serde::{Deserialize, Serialize};
use neurolume_math::{QuadraticBezier, Vec3};

/// One particle slot: a fixed path and a position along it.
///
/// Invariant: `0 <= progress < 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Path, fixed at initialization.
    pub path: QuadraticBezier,
    /// Curve parameter in `[0, 1)`.
    pub progress: f32,
    /// Progress increment per frame.
    pub speed: f32,
    /// Completed traversals of `path`.
    pub laps: u32,
}

impl Particle {
    pub fn new(path: QuadraticBezier, progress: f32, speed: f32) -> Self {
        Self {
            path,
            progress,
            speed,
            laps: 0,
        }
    }

    /// Advances one frame. Returns `true` if the particle wrapped back to
    /// the start of its path.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.progress += self.speed;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.laps += 1;
            true
        } else {
            false
        }
    }

    /// Current point on the path.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.path.point(self.progress)
    }
}
