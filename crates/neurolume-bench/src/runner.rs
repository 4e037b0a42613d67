//! Benchmark runner: executes scenarios through a [`SceneDriver`] and
//! collects metrics.

use std::time::Instant;

use neurolume_render::Renderer;
use neurolume_telemetry::EventBus;
use neurolume_types::NeurolumeResult;

use crate::driver::SceneDriver;
use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario, presenting every frame to `renderer`.
    ///
    /// Events are flushed to the bus sinks after each frame. The renderer
    /// is finalized once the loop completes.
    pub fn run(
        scenario: &Scenario,
        renderer: &mut dyn Renderer,
        bus: &mut EventBus,
    ) -> NeurolumeResult<BenchmarkMetrics> {
        let init_start = Instant::now();
        let mut driver = SceneDriver::new(&scenario.config, scenario.mesh.clone(), bus)?;
        driver.attach(renderer)?;
        let init_time = init_start.elapsed().as_secs_f64();
        bus.flush();

        let mut frame_times: Vec<f64> = Vec::with_capacity(scenario.frames as usize);
        let mut total_wraps: u64 = 0;
        let mut repaints: u32 = 0;

        let total_start = Instant::now();

        for frame in 0..scenario.frames {
            let stats = driver.step(scenario.region_for_frame(frame), renderer, bus)?;
            frame_times.push(stats.wall_time);
            total_wraps += stats.wrapped as u64;
            if stats.repainted {
                repaints += 1;
            }
            bus.flush();
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        renderer.finalize()?;

        let avg_frame = if frame_times.is_empty() {
            0.0
        } else {
            frame_times.iter().sum::<f64>() / frame_times.len() as f64
        };
        let min_frame = frame_times.iter().copied().fold(f64::MAX, f64::min);
        let max_frame = frame_times.iter().copied().fold(0.0, f64::max);

        tracing::info!(
            scenario = scenario.kind.name(),
            frames = scenario.frames,
            total_wraps,
            "benchmark complete"
        );

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            init_time,
            total_wall_time,
            frames: scenario.frames,
            avg_frame_time: avg_frame,
            min_frame_time: if frame_times.is_empty() { 0.0 } else { min_frame },
            max_frame_time: max_frame,
            repaints,
            total_wraps,
            max_particle_radius: driver.flow().max_radius(),
            vertex_count: scenario.mesh.vertex_count(),
            triangle_count: scenario.mesh.triangle_count(),
            particle_count: driver.flow().particle_count(),
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all(
        renderer: &mut dyn Renderer,
        bus: &mut EventBus,
    ) -> NeurolumeResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            let metrics = Self::run(&scenario, renderer, bus)?;
            results.push(metrics);
        }
        Ok(results)
    }
}
