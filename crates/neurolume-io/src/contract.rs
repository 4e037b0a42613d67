//! Scene configuration contract types.
//!
//! These types define the I/O boundary of a Neurolume scene. They load
//! from TOML or JSON and turn into ready-to-use painter components.

use std::path::Path;

use serde::{Deserialize, Serialize};
use neurolume_flow::FlowConfig;
use neurolume_math::color::Rgb;
use neurolume_mesh::TriangleMesh;
use neurolume_regions::{Falloff, Palette, RegionPainter, RegionZone, ZoneTable};
use neurolume_types::constants::{DEFAULT_ACTIVE_COLOR, DEFAULT_BASE_COLOR};
use neurolume_types::{NeurolumeError, NeurolumeResult};

/// Complete configuration for one scene.
///
/// Every section is optional in the source file. Missing sections fall
/// back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Highlight colors and falloff.
    #[serde(default)]
    pub painter: PainterSettings,

    /// Particle flow parameters.
    #[serde(default)]
    pub flow: FlowConfig,

    /// Custom zone table. `None` uses the eight built-in brain regions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zones: Option<Vec<RegionZone>>,
}

/// Painter section of a scene config.
///
/// Colors are kept as strings so a bad value is reported by the
/// validator with the field name rather than as a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainterSettings {
    pub falloff: Falloff,
    /// Unhighlighted surface color, e.g. `"#ffb6c1"`.
    pub base_color: String,
    /// Color at the center of the active zone.
    pub active_color: String,
}

impl Default for PainterSettings {
    fn default() -> Self {
        Self {
            falloff: Falloff::default(),
            base_color: Rgb::from_hex(DEFAULT_BASE_COLOR).to_string(),
            active_color: Rgb::from_hex(DEFAULT_ACTIVE_COLOR).to_string(),
        }
    }
}

impl PainterSettings {
    /// Parses both colors into a palette.
    pub fn palette(&self) -> NeurolumeResult<Palette> {
        let base = parse_color("base_color", &self.base_color)?;
        let active = parse_color("active_color", &self.active_color)?;
        Ok(Palette::new(base, active))
    }
}

fn parse_color(field: &str, value: &str) -> NeurolumeResult<Rgb> {
    value.parse::<Rgb>().map_err(|e| {
        NeurolumeError::InvalidConfig(format!("painter.{}: {}", field, e))
    })
}

impl SceneConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> NeurolumeResult<Self> {
        toml::from_str(source).map_err(|e| NeurolumeError::Serialization(e.to_string()))
    }

    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> NeurolumeResult<Self> {
        serde_json::from_str(source).map_err(|e| NeurolumeError::Serialization(e.to_string()))
    }

    /// Loads a config file, choosing the format from its extension
    /// (`.toml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> NeurolumeResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = match extension(path).as_deref() {
            Some("toml") => Self::from_toml_str(&source)?,
            Some("json") => Self::from_json_str(&source)?,
            _ => {
                return Err(NeurolumeError::InvalidConfig(format!(
                    "Unsupported config extension: {}",
                    path.display()
                )))
            }
        };
        tracing::debug!(path = %path.display(), "Loaded scene config");
        Ok(config)
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> NeurolumeResult<String> {
        toml::to_string_pretty(self).map_err(|e| NeurolumeError::Serialization(e.to_string()))
    }

    /// The zone table this config describes.
    pub fn zone_table(&self) -> NeurolumeResult<ZoneTable> {
        match &self.zones {
            Some(zones) => ZoneTable::new(zones.clone()),
            None => Ok(ZoneTable::brain_defaults()),
        }
    }

    /// Builds an uninitialized painter from the zone table and painter section.
    pub fn build_painter(&self) -> NeurolumeResult<RegionPainter> {
        Ok(RegionPainter::new(
            self.zone_table()?,
            self.painter.palette()?,
            self.painter.falloff,
        ))
    }
}

/// Loads a serde-JSON [`TriangleMesh`] and checks its structure.
pub fn load_mesh(path: impl AsRef<Path>) -> NeurolumeResult<TriangleMesh> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let mesh: TriangleMesh = serde_json::from_str(&source)
        .map_err(|e| NeurolumeError::Serialization(e.to_string()))?;
    mesh.validate()?;
    tracing::debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Loaded mesh"
    );
    Ok(mesh)
}

pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
