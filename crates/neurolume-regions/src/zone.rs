//! Region zones and the zone table.
//!
//! The eight built-in zones approximate lobe positions relative to a brain
//! mesh centered at the origin, with +Z toward the face and +Y up.
//! Models with a different rotation or scale need their own table.

use serde::{Deserialize, Serialize};
use neurolume_math::Vec3;
use neurolume_types::constants::RESET_SENTINELS;
use neurolume_types::{NeurolumeError, NeurolumeResult};

/// A named sphere in mesh-local space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionZone {
    /// Display name, also the lookup key.
    pub name: String,
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius. Vertices at `distance >= radius` are outside.
    pub radius: f32,
}

impl RegionZone {
    pub fn new(name: impl Into<String>, center: Vec3, radius: f32) -> Self {
        Self {
            name: name.into(),
            center,
            radius,
        }
    }

    /// Distance from `p` to the zone center.
    #[inline]
    pub fn distance(&self, p: Vec3) -> f32 {
        p.distance(self.center)
    }

    /// Returns true if `p` is strictly inside the sphere.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        self.distance(p) < self.radius
    }
}

/// Returns true if `name` means "no region" / "whole brain".
pub fn is_reset_sentinel(name: &str) -> bool {
    RESET_SENTINELS.contains(&name)
}

/// An ordered, immutable set of region zones.
///
/// Order is preserved for UI population. Names are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RegionZone>", into = "Vec<RegionZone>")]
pub struct ZoneTable {
    zones: Vec<RegionZone>,
}

impl ZoneTable {
    /// Builds a table, rejecting empty or duplicate names, sentinel names,
    /// and non-positive or non-finite radii.
    pub fn new(zones: Vec<RegionZone>) -> NeurolumeResult<Self> {
        for (i, zone) in zones.iter().enumerate() {
            if zone.name.trim().is_empty() {
                return Err(NeurolumeError::InvalidConfig(format!(
                    "Zone {} has an empty name",
                    i
                )));
            }
            if is_reset_sentinel(&zone.name) {
                return Err(NeurolumeError::InvalidConfig(format!(
                    "Zone name '{}' is reserved for clearing the highlight",
                    zone.name
                )));
            }
            if !(zone.radius.is_finite() && zone.radius > 0.0) {
                return Err(NeurolumeError::InvalidConfig(format!(
                    "Zone '{}' radius must be positive, got {}",
                    zone.name, zone.radius
                )));
            }
            if !zone.center.is_finite() {
                return Err(NeurolumeError::InvalidConfig(format!(
                    "Zone '{}' center is not finite",
                    zone.name
                )));
            }
            if zones[..i].iter().any(|z| z.name == zone.name) {
                return Err(NeurolumeError::InvalidConfig(format!(
                    "Duplicate zone name '{}'",
                    zone.name
                )));
            }
        }
        Ok(Self { zones })
    }

    /// The eight built-in brain regions.
    pub fn brain_defaults() -> Self {
        Self {
            zones: vec![
                RegionZone::new("Frontal Lobe", Vec3::new(0.0, 1.0, 2.0), 2.5),
                RegionZone::new("Prefrontal Cortex", Vec3::new(0.0, 0.0, 3.0), 1.8),
                RegionZone::new("Parietal Lobe", Vec3::new(0.0, 3.0, -0.5), 2.0),
                RegionZone::new("Occipital Lobe", Vec3::new(0.0, 0.0, -3.5), 2.0),
                RegionZone::new("Temporal Lobe (Left)", Vec3::new(-2.5, -0.5, 0.5), 1.8),
                RegionZone::new("Temporal Lobe (Right)", Vec3::new(2.5, -0.5, 0.5), 1.8),
                RegionZone::new("Cerebellum", Vec3::new(0.0, -2.0, -2.5), 1.8),
                RegionZone::new("Brain Stem", Vec3::new(0.0, -3.5, -0.5), 1.5),
            ],
        }
    }

    /// Looks up a zone by exact name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&RegionZone> {
        self.zones.iter().find(|z| z.name == name)
    }

    /// Zone names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.zones.iter().map(|z| z.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionZone> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::brain_defaults()
    }
}

impl TryFrom<Vec<RegionZone>> for ZoneTable {
    type Error = NeurolumeError;

    fn try_from(zones: Vec<RegionZone>) -> Result<Self, Self::Error> {
        Self::new(zones)
    }
}

impl From<ZoneTable> for Vec<RegionZone> {
    fn from(table: ZoneTable) -> Self {
        table.zones
    }
}
