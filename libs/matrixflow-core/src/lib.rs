//! # MatrixFlow Core
//!
//! Parametric generator for 3D-printable duct transition pieces: a
//! watertight hollow solid morphing between two arbitrary openings
//! (circle-to-rectangle and friends) across a controllable vertical path.
//!
//! ## Pipeline
//!
//! ```text
//! Params ──validate──► Path + Profiles ──loft──► SweptSections
//!                                                     │ extensions
//!                                                     ▼
//!                        Mesh ◄──invariants── Shell (wall offset)
//! ```
//!
//! Generation is a pure function of the parameter record: no I/O, no
//! ambient state, deterministic output. It either returns a watertight,
//! winding-consistent, positive-volume mesh or fails fast with a
//! [`CoreError`] that distinguishes bad input from geometric collapse.
//!
//! ## Usage
//!
//! ```rust
//! use matrixflow_core::{generate, Params, ShapeKind};
//!
//! let params = Params {
//!     transition_height: 100.0,
//!     bottom_shape: ShapeKind::Circle,
//!     bottom_width: 40.0,
//!     top_shape: ShapeKind::Rectangle,
//!     top_width: 80.0,
//!     top_depth: 80.0,
//!     segments: 32,
//!     ..Params::default()
//! };
//! let mesh = generate(&params).unwrap();
//! assert!(mesh.triangle_count() > 0);
//! ```

pub mod error;
pub mod extend;
pub mod loft;
pub mod params;
pub mod path;
pub mod section;
pub mod shell;

pub use error::CoreError;
pub use params::{FitMode, Params, ShapeKind};
pub use section::{Profile, SectionSpec};

use matrixflow_mesh::{analysis, Mesh};

/// Generates the hollow transition solid for one parameter set.
///
/// Runs the full pipeline and hands the mesh to the caller; the core
/// retains no reference after returning.
///
/// # Errors
///
/// Configuration errors (invalid values, wall collapse) surface before
/// or during construction; geometry-collapse errors surface from the
/// post-construction invariant check.
pub fn generate(params: &Params) -> Result<Mesh, CoreError> {
    params.validate()?;

    let path = path::build_path(params, params.segments)?;
    let bottom = SectionSpec::bottom(params).profile(params.segments as usize)?;
    let top = SectionSpec::top(params).profile(params.segments as usize)?;

    let mut swept = loft::loft(&path, &bottom, &top, params.curve_tension)?;
    extend::append_extensions(&mut swept, params.bottom_extension, params.top_extension);

    let mesh = shell::shell(&swept, params.wall_thickness)?;
    verify_solid(&mesh)?;
    Ok(mesh)
}

/// Post-construction invariant check on the finished solid.
///
/// A failure here means the construction itself went wrong, not the
/// input, so it surfaces as a geometry-collapse error.
fn verify_solid(mesh: &Mesh) -> Result<(), CoreError> {
    mesh.validate()?;

    if !analysis::is_watertight(mesh) {
        return Err(CoreError::geometry_collapse(
            "mesh has open edges and cannot be watertight",
        ));
    }
    if !analysis::is_winding_consistent(mesh) {
        return Err(CoreError::geometry_collapse(
            "mesh windings are inconsistent",
        ));
    }

    let volume = analysis::volume(mesh);
    if volume <= 0.0 {
        return Err(CoreError::geometry_collapse(format!(
            "enclosed volume is {volume:.6}, expected strictly positive"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_params() {
        let mesh = generate(&Params::default()).unwrap();
        assert!(mesh.vertex_count() > 0);
        assert!(analysis::volume(&mesh) > 0.0);
    }

    #[test]
    fn test_generate_rejects_bad_input_before_construction() {
        let params = Params {
            wall_thickness: -1.0,
            ..Params::default()
        };
        let err = generate(&params).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_generate_circle_to_rectangle() {
        let params = Params {
            bottom_shape: ShapeKind::Circle,
            bottom_width: 40.0,
            top_shape: ShapeKind::Rectangle,
            top_width: 80.0,
            top_depth: 80.0,
            segments: 32,
            ..Params::default()
        };
        let mesh = generate(&params).unwrap();
        assert!(analysis::is_watertight(&mesh));
        assert!(analysis::is_winding_consistent(&mesh));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let params = Params {
            offset_x: 20.0,
            segments: 24,
            ..Params::default()
        };
        let a = generate(&params).unwrap();
        let b = generate(&params).unwrap();
        assert_eq!(a.vertex_count(), b.vertex_count());
        assert_eq!(a.triangles(), b.triangles());
        assert_eq!(a.vertices(), b.vertices());
    }
}
