//! # Core Errors
//!
//! Error types for the generation pipeline. Two classes are kept apart:
//!
//! - **Configuration errors** (bad input): invalid parameter values,
//!   mismatched section vertex counts, wall thickness exceeding the
//!   locally available material. The caller should fix the parameters.
//! - **Geometry collapse** (algorithmic/numeric failure): a constructed
//!   mesh that fails the closedness, winding, or volume invariants.
//!
//! A caller retrying a configuration error gets the same result:
//! generation is deterministic and idempotent.

use matrixflow_mesh::MeshError;
use thiserror::Error;

/// Errors raised by the generation pipeline.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A parameter is out of range or inconsistent
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// Bottom and top cross-sections have different vertex counts
    #[error("Cross-section mismatch: bottom has {bottom} vertices, top has {top}")]
    SectionMismatch { bottom: usize, top: usize },

    /// The requested wall is thicker than the material available at a station
    #[error(
        "Wall collapse at station {station}: thickness {thickness} \
         exceeds local inradius {inradius:.3}"
    )]
    WallCollapse {
        station: usize,
        inradius: f64,
        thickness: f64,
    },

    /// A constructed mesh violated a solid invariant
    #[error("Geometry collapse: {message}")]
    GeometryCollapse { message: String },

    /// Structural mesh failure from the mesh layer
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl CoreError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates a geometry collapse error.
    pub fn geometry_collapse(message: impl Into<String>) -> Self {
        Self::GeometryCollapse {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by bad input parameters.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::SectionMismatch { .. } | Self::WallCollapse { .. }
        )
    }

    /// Returns true for post-construction invariant failures.
    pub fn is_geometry_collapse(&self) -> bool {
        matches!(self, Self::GeometryCollapse { .. } | Self::Mesh(_))
    }
}
