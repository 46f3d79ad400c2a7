//! # MatrixFlow Mesh
//!
//! Triangle-mesh representation and analysis for the MatrixFlow duct
//! generator. The generator core produces one [`Mesh`] per request; this
//! crate owns the data structure plus the boundary-facing layers around it:
//!
//! - [`analysis`]: watertightness, winding consistency, enclosed volume,
//!   planar cross-sections, and face-normal queries
//! - [`export`]: binary STL output and flat `f32` buffers
//!
//! ## Architecture
//!
//! ```text
//! matrixflow-core (generator) → matrixflow-mesh (Mesh) → STL / buffers
//! ```
//!
//! All geometry uses `f64` internally; `f32` appears only in the export
//! buffers.

pub mod analysis;
pub mod error;
pub mod export;
pub mod mesh;

pub use analysis::{cross_section, is_watertight, is_winding_consistent, volume, Slice};
pub use error::MeshError;
pub use export::{write_stl, MeshBuffers};
pub use mesh::Mesh;
