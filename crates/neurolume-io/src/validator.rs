//! Scene and mesh validation.
//!
//! Validates configuration and mesh inputs before the painter and flow
//! receive them, catching data-level errors early with clear diagnostics.

use std::path::Path;

use neurolume_mesh::TriangleMesh;
use neurolume_types::constants::DEGENERATE_AREA_THRESHOLD;
use neurolume_types::{NeurolumeError, NeurolumeResult};

use crate::contract::{extension, SceneConfig};

/// Validates a complete scene config.
///
/// Checks:
/// - Both painter colors are valid hex
/// - Flow parameters are in range (count, speeds, arc height)
/// - Custom zones have unique, non-reserved names and positive radii
pub fn validate_config(config: &SceneConfig) -> NeurolumeResult<()> {
    config.painter.palette()?;

    config
        .flow
        .validate()
        .map_err(|e| NeurolumeError::InvalidConfig(format!("flow: {}", e)))?;

    if let Some(zones) = &config.zones {
        if zones.is_empty() {
            return Err(NeurolumeError::InvalidConfig(
                "zones: table is present but empty".into(),
            ));
        }
        config
            .zone_table()
            .map_err(|e| NeurolumeError::InvalidConfig(format!("zones: {}", e)))?;
    }

    Ok(())
}

/// Validates a mesh for painting and particle sampling.
///
/// Beyond structural checks, the mesh must have at least one triangle
/// and a samplable total area.
pub fn validate_mesh(mesh: &TriangleMesh) -> NeurolumeResult<()> {
    mesh.validate()?;
    if mesh.triangle_count() == 0 {
        return Err(NeurolumeError::DegenerateMesh(
            "Mesh has no triangles".into(),
        ));
    }
    let area = mesh.surface_area();
    if !(area > DEGENERATE_AREA_THRESHOLD) {
        return Err(NeurolumeError::DegenerateMesh(format!(
            "Total surface area {:.3e} is too small to sample",
            area
        )));
    }
    Ok(())
}

/// What a validated file turned out to contain.
#[derive(Debug, Clone)]
pub enum ValidatedInput {
    Scene(SceneConfig),
    Mesh(TriangleMesh),
}

/// Loads and validates a file by extension.
///
/// `.toml` is always a scene config. A `.json` file holding `pos_x` is
/// treated as a mesh, anything else as a scene config.
pub fn validate_path(path: impl AsRef<Path>) -> NeurolumeResult<ValidatedInput> {
    let path = path.as_ref();
    match extension(path).as_deref() {
        Some("toml") => {
            let config = SceneConfig::load(path)?;
            validate_config(&config)?;
            Ok(ValidatedInput::Scene(config))
        }
        Some("json") => {
            let source = std::fs::read_to_string(path)?;
            let value: serde_json::Value = serde_json::from_str(&source)
                .map_err(|e| NeurolumeError::Serialization(e.to_string()))?;
            if value.get("pos_x").is_some() {
                let mesh: TriangleMesh = serde_json::from_value(value)
                    .map_err(|e| NeurolumeError::Serialization(e.to_string()))?;
                validate_mesh(&mesh)?;
                Ok(ValidatedInput::Mesh(mesh))
            } else {
                let config: SceneConfig = serde_json::from_value(value)
                    .map_err(|e| NeurolumeError::Serialization(e.to_string()))?;
                validate_config(&config)?;
                Ok(ValidatedInput::Scene(config))
            }
        }
        _ => Err(NeurolumeError::InvalidConfig(format!(
            "Cannot validate {}: expected a .toml or .json file",
            path.display()
        ))),
    }
}
