//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Time spent sampling paths and painting the base color (seconds).
    pub init_time: f64,
    /// Total wall-clock time of the frame loop (seconds).
    pub total_wall_time: f64,
    /// Number of frames executed.
    pub frames: u32,
    /// Average wall-clock time per frame (seconds).
    pub avg_frame_time: f64,
    /// Minimum frame time.
    pub min_frame_time: f64,
    /// Maximum frame time.
    pub max_frame_time: f64,
    /// Frames that repainted vertex colors.
    pub repaints: u32,
    /// Particle wraps summed over all frames.
    pub total_wraps: u64,
    /// Largest particle distance from the origin at the end of the run.
    pub max_particle_radius: f32,
    /// Vertex count.
    pub vertex_count: usize,
    /// Triangle count.
    pub triangle_count: usize,
    /// Particle count.
    pub particle_count: usize,
}

impl BenchmarkMetrics {
    /// Format as a CSV row (header + data).
    pub fn to_csv_header() -> String {
        "scenario,vertex_count,triangle_count,particle_count,frames,init_ms,total_wall_time_s,avg_frame_ms,min_frame_ms,max_frame_ms,repaints,total_wraps,max_particle_radius".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.4},{:.6},{:.4},{:.4},{:.4},{},{},{:.6}",
            self.scenario,
            self.vertex_count,
            self.triangle_count,
            self.particle_count,
            self.frames,
            self.init_time * 1000.0,
            self.total_wall_time,
            self.avg_frame_time * 1000.0,
            self.min_frame_time * 1000.0,
            self.max_frame_time * 1000.0,
            self.repaints,
            self.total_wraps,
            self.max_particle_radius,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
