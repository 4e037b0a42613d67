//! Error types for Neurolume.
//!
//! All crates return `NeurolumeResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for Neurolume.
#[derive(Debug, Error)]
pub enum NeurolumeError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Mesh has no samplable surface (no vertices, no triangles, or zero area).
    #[error("Degenerate mesh: {0}")]
    DegenerateMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Renderer or exporter failure.
    #[error("Render error: {0}")]
    Render(String),
}

/// Convenience alias for `Result<T, NeurolumeError>`.
pub type NeurolumeResult<T> = Result<T, NeurolumeError>;
