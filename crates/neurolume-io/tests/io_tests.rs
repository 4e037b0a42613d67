//! Integration tests for neurolume-io.

use neurolume_flow::FlowConfig;
use neurolume_io::{validate_config, validate_mesh, validate_path, SceneConfig, ValidatedInput};
use neurolume_math::color::Rgb;
use neurolume_mesh::generators::uv_sphere;
use neurolume_mesh::TriangleMesh;
use neurolume_regions::{Falloff, RegionZone};
use neurolume_math::Vec3;

fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("neurolume_io_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

// ─── Contract ─────────────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    let config = SceneConfig::default();
    assert!(validate_config(&config).is_ok());
    assert_eq!(config.painter.base_color, "#ffb6c1");
    assert_eq!(config.painter.active_color, "#cc0055");
    assert_eq!(config.flow, FlowConfig::default());
    assert_eq!(config.zone_table().unwrap().len(), 8);
}

#[test]
fn empty_toml_uses_defaults() {
    let config = SceneConfig::from_toml_str("").unwrap();
    assert_eq!(config, SceneConfig::default());
}

#[test]
fn toml_full_document() {
    let source = r##"
[painter]
falloff = "square_root"
base_color = "#101010"
active_color = "0xff0000"

[flow]
particle_count = 64
speed_min = 0.01
speed_max = 0.02
arc_height = 0.1
seed = 42

[[zones]]
name = "Back"
center = [0.0, 0.0, -5.0]
radius = 3.5

[[zones]]
name = "Front"
center = [0.0, 0.0, 5.0]
radius = 2.0
"##;
    let config = SceneConfig::from_toml_str(source).unwrap();
    assert!(validate_config(&config).is_ok());
    assert_eq!(config.painter.falloff, Falloff::SquareRoot);
    assert_eq!(config.flow.particle_count, 64);
    assert_eq!(config.flow.seed, Some(42));

    let painter = config.build_painter().unwrap();
    assert_eq!(painter.list_region_names(), vec!["Back", "Front"]);
    assert_eq!(painter.falloff(), Falloff::SquareRoot);
    assert_eq!(painter.palette().active, Rgb::from_hex(0xff0000));
}

#[test]
fn partial_flow_section_keeps_other_defaults() {
    let config = SceneConfig::from_toml_str("[flow]\nparticle_count = 10\n").unwrap();
    assert_eq!(config.flow.particle_count, 10);
    assert_eq!(config.flow.speed_max, FlowConfig::default().speed_max);
    assert!(config.zones.is_none());
}

#[test]
fn json_document() {
    let source = r#"{"painter": {"falloff": "linear"}, "flow": {"seed": 7}}"#;
    let config = SceneConfig::from_json_str(source).unwrap();
    assert_eq!(config.flow.seed, Some(7));
    assert_eq!(config.painter.falloff, Falloff::Linear);
}

#[test]
fn malformed_documents_are_serialization_errors() {
    let err = SceneConfig::from_toml_str("[painter\n").unwrap_err();
    assert!(matches!(err, neurolume_types::NeurolumeError::Serialization(_)));
    let err = SceneConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, neurolume_types::NeurolumeError::Serialization(_)));
}

#[test]
fn toml_round_trip() {
    let mut config = SceneConfig::default();
    config.flow.seed = Some(3);
    config.zones = Some(vec![RegionZone::new("Top", Vec3::new(0.0, 2.0, 0.0), 1.0)]);
    let text = config.to_toml_string().unwrap();
    let back = SceneConfig::from_toml_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn load_dispatches_on_extension() {
    let toml_path = temp_file("scene.toml", "[flow]\nparticle_count = 5\n");
    let json_path = temp_file("scene.json", r#"{"flow": {"particle_count": 6}}"#);
    let txt_path = temp_file("scene.txt", "");

    assert_eq!(SceneConfig::load(&toml_path).unwrap().flow.particle_count, 5);
    assert_eq!(SceneConfig::load(&json_path).unwrap().flow.particle_count, 6);
    assert!(SceneConfig::load(&txt_path).is_err());

    for p in [toml_path, json_path, txt_path] {
        let _ = std::fs::remove_file(p);
    }
}

// ─── Validation ───────────────────────────────────────────────

#[test]
fn rejects_bad_color() {
    let mut config = SceneConfig::default();
    config.painter.active_color = "#12345".into();
    assert!(validate_config(&config).is_err());
    config.painter.active_color = "#zzzzzz".into();
    assert!(validate_config(&config).is_err());
}

#[test]
fn rejects_bad_flow() {
    let mut config = SceneConfig::default();
    config.flow.particle_count = 0;
    assert!(validate_config(&config).is_err());

    let mut config = SceneConfig::default();
    config.flow.speed_min = 0.01;
    config.flow.speed_max = 0.005;
    assert!(validate_config(&config).is_err());

    let mut config = SceneConfig::default();
    config.flow.speed_max = 1.5;
    assert!(validate_config(&config).is_err());

    let mut config = SceneConfig::default();
    config.flow.arc_height = 0.25;
    assert!(validate_config(&config).is_err());
}

#[test]
fn rejects_bad_zones() {
    let zone = |name: &str, radius: f32| RegionZone::new(name, Vec3::ZERO, radius);

    let mut config = SceneConfig::default();
    config.zones = Some(vec![]);
    assert!(validate_config(&config).is_err());

    config.zones = Some(vec![zone("A", 0.0)]);
    assert!(validate_config(&config).is_err());

    config.zones = Some(vec![zone("A", 1.0), zone("A", 2.0)]);
    assert!(validate_config(&config).is_err());

    config.zones = Some(vec![zone("", 1.0)]);
    assert!(validate_config(&config).is_err());

    config.zones = Some(vec![zone("All", 1.0)]);
    assert!(validate_config(&config).is_err());

    config.zones = Some(vec![zone("A", 1.0)]);
    assert!(validate_config(&config).is_ok());
}

#[test]
fn mesh_validation() {
    assert!(validate_mesh(&uv_sphere(1.0, 8, 8)).is_ok());

    let empty = TriangleMesh::with_capacity(0, 0);
    assert!(validate_mesh(&empty).is_err());

    // Collinear corners: structurally valid, but nothing to sample.
    let flat = TriangleMesh::from_interleaved(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0], &[0, 1, 2])
        .unwrap();
    assert!(flat.validate().is_ok());
    assert!(matches!(
        validate_mesh(&flat),
        Err(neurolume_types::NeurolumeError::DegenerateMesh(_))
    ));
}

#[test]
fn validate_path_detects_meshes() {
    let mesh = uv_sphere(1.0, 6, 6);
    let mesh_path = temp_file("mesh.json", &serde_json::to_string(&mesh).unwrap());
    let scene_path = temp_file("cfg.json", r#"{"flow": {"particle_count": 3}}"#);
    let bad_path = temp_file("bad.toml", "[flow]\nparticle_count = 0\n");

    match validate_path(&mesh_path).unwrap() {
        ValidatedInput::Mesh(m) => assert_eq!(m.vertex_count(), mesh.vertex_count()),
        other => panic!("expected mesh, got {:?}", other),
    }
    match validate_path(&scene_path).unwrap() {
        ValidatedInput::Scene(c) => assert_eq!(c.flow.particle_count, 3),
        other => panic!("expected scene, got {:?}", other),
    }
    assert!(validate_path(&bad_path).is_err());

    let loaded = neurolume_io::load_mesh(&mesh_path).unwrap();
    assert_eq!(loaded.triangle_count(), mesh.triangle_count());

    for p in [mesh_path, scene_path, bad_path] {
        let _ = std::fs::remove_file(p);
    }
}
