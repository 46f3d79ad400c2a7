//! # Mesh Errors
//!
//! Error types for mesh construction, analysis, and export.

use thiserror::Error;

/// Errors that can occur while building or exporting a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid mesh topology (out-of-range indices, repeated vertices)
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Degenerate geometry (zero-area triangles, empty mesh)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Writing the exported mesh failed
    #[error("Export failed: {0}")]
    ExportFailed(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
