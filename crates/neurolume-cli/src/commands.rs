//! CLI command implementations.

use neurolume_bench::metrics::BenchmarkMetrics;
use neurolume_bench::runner::BenchmarkRunner;
use neurolume_bench::scenarios::{brain_mesh, Scenario, ScenarioKind};
use neurolume_bench::SceneDriver;
use neurolume_io::{load_mesh, validate_config, validate_path, SceneConfig, ValidatedInput};
use neurolume_mesh::TriangleMesh;
use neurolume_render::{HeadlessRenderer, JsonFrameExporter, RadialGlowSprite, Renderer};
use neurolume_telemetry::{EventBus, TracingSink};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn load_config(path: Option<&str>) -> Result<SceneConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(p) => SceneConfig::load(p)?,
        None => SceneConfig::default(),
    };
    validate_config(&config)?;
    Ok(config)
}

fn load_mesh_or_default(path: Option<&str>) -> Result<TriangleMesh, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(p) => load_mesh(p)?,
        None => brain_mesh(32, 48),
    })
}

/// List configured regions.
pub fn regions(config_path: Option<&str>) -> CliResult {
    let config = load_config(config_path)?;
    let zones = config.zone_table()?;

    println!("Neurolume Regions");
    println!("─────────────────");
    for zone in zones.iter() {
        println!(
            "  {:<24} center=({:>5.2}, {:>5.2}, {:>5.2})  radius={:.2}",
            zone.name, zone.center.x, zone.center.y, zone.center.z, zone.radius
        );
    }
    println!();
    println!("Use \"All\" or \"None\" to clear the highlight.");
    Ok(())
}

/// Paint one region and print summary stats.
pub fn paint(region: &str, config_path: Option<&str>, mesh_path: Option<&str>) -> CliResult {
    let config = load_config(config_path)?;
    let mesh = load_mesh_or_default(mesh_path)?;
    let vertex_count = mesh.vertex_count();

    let mut painter = config.build_painter()?;
    painter.initialize(mesh)?;
    let report = painter
        .highlight(region)
        .ok_or("Painter has no mesh attached")?;

    println!("Neurolume Paint");
    println!("───────────────");
    println!("Falloff:   {}", painter.falloff().name());
    println!("Base:      {}", painter.palette().base);
    println!("Active:    {}", painter.palette().active);
    println!();
    match report.region {
        Some(name) => {
            let pct = 100.0 * report.painted_vertices as f64 / vertex_count.max(1) as f64;
            println!("Region:    {name}");
            println!(
                "Inside:    {} / {} vertices ({:.1}%)",
                report.painted_vertices, vertex_count, pct
            );
        }
        None => {
            println!("Region:    none (\"{region}\" reset to base color)");
            println!("Vertices:  {vertex_count}");
        }
    }
    Ok(())
}

/// Run the frame loop into a JSON recording.
pub fn animate(
    frames: u32,
    output: &str,
    region: Option<&str>,
    config_path: Option<&str>,
    mesh_path: Option<&str>,
) -> CliResult {
    let config = load_config(config_path)?;
    let mesh = load_mesh_or_default(mesh_path)?;

    println!("Neurolume Animate");
    println!("═════════════════");
    println!(
        "Mesh:      {} verts, {} tris",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    println!("Particles: {}", config.flow.particle_count);
    println!("Frames:    {frames}");
    println!();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let mut exporter = JsonFrameExporter::new(output).with_sprite(&RadialGlowSprite::default());
    let mut driver = SceneDriver::new(&config, mesh, &bus)?;
    driver.attach(&mut exporter)?;

    let mut wraps = 0usize;
    for _ in 0..frames {
        let stats = driver.step(region, &mut exporter, &bus)?;
        wraps += stats.wrapped;
        bus.flush();
    }
    exporter.finalize()?;
    bus.shutdown();

    println!("Wraps:     {wraps}");
    println!("Recorded to: {output}");
    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>) -> CliResult {
    println!("Neurolume Benchmark Suite");
    println!("═════════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: {}, all", available.join(", "));
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();
    let mut renderer = HeadlessRenderer::new();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({} verts, {} tris, {} particles, {} frames)",
            kind.name(),
            scenario.mesh.vertex_count(),
            scenario.mesh.triangle_count(),
            scenario.config.flow.particle_count,
            scenario.frames,
        );

        let metrics = BenchmarkRunner::run(&scenario, &mut renderer, &mut bus)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Init:          {:.3}ms", metrics.init_time * 1000.0);
        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg frame:     {:.3}ms", metrics.avg_frame_time * 1000.0);
        println!("  Repaints:      {}", metrics.repaints);
        println!("  Wraps:         {}", metrics.total_wraps);
        println!("  Max radius:    {:.4}", metrics.max_particle_radius);
        println!();

        all_metrics.push(metrics);
    }
    bus.shutdown();

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Validate a scene config or mesh.
pub fn validate(path: &str) -> CliResult {
    println!("Neurolume Validator");
    println!("───────────────────");
    println!();

    match validate_path(path)? {
        ValidatedInput::Scene(config) => {
            println!("Scene config: {path}");
            println!("  Zones:     {}", config.zone_table()?.len());
            println!("  Particles: {}", config.flow.particle_count);
            println!("  Falloff:   {}", config.painter.falloff.name());
            println!("✅ Config is valid.");
        }
        ValidatedInput::Mesh(mesh) => {
            println!("Mesh: {path}");
            println!("  Vertices:  {}", mesh.vertex_count());
            println!("  Triangles: {}", mesh.triangle_count());
            println!("  Area:      {:.4}", mesh.surface_area());
            println!("✅ Mesh is valid.");
        }
    }
    Ok(())
}
