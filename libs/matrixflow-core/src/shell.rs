//! # Shell Engine
//!
//! Derives the hollow wall from the swept outer boundary. The inner
//! boundary is the per-station miter inset of the outer section, so
//! vertex count and ordering survive and the wall is a second loft of
//! the same family. The hollow solid is assembled directly from four
//! sheets:
//!
//! - outer lateral surface (outward normals)
//! - inner lateral surface (normals toward the cavity)
//! - annular rings sealing the bottom and top rims
//!
//! Stitching index-aligned rings keeps every edge shared by exactly two
//! triangles, so the result is watertight without a mesh boolean pass.
//!
//! Before any triangle is emitted, every station is checked against the
//! wall thickness: an inset at or beyond the section's inradius would
//! fold the inner surface through itself and erase the wall, so such
//! parameter combinations are rejected as configuration errors instead
//! of producing a corrupt mesh.

use glam::DVec3;
use matrixflow_mesh::Mesh;

use crate::error::CoreError;
use crate::loft::SweptSections;

/// Builds the hollow solid from the swept sections.
///
/// # Arguments
///
/// * `swept` - Outer boundary sections, bottom to top
/// * `wall_thickness` - Inward wall offset (> 0)
///
/// # Errors
///
/// [`CoreError::WallCollapse`] when any station cannot accommodate the
/// wall; [`CoreError::GeometryCollapse`] when the sweep is too short to
/// enclose a volume or its lateral surface folds through itself.
pub fn shell(swept: &SweptSections, wall_thickness: f64) -> Result<Mesh, CoreError> {
    let ring_count = swept.sections.len();
    if ring_count < 2 {
        return Err(CoreError::geometry_collapse(
            "sweep has fewer than two sections",
        ));
    }
    check_section_planes(swept)?;
    let n = swept.ring_size();

    // Inner sections first, so no triangles exist if any station fails
    let mut inner_rings: Vec<Vec<DVec3>> = Vec::with_capacity(ring_count);
    for (station, section) in swept.sections.iter().enumerate() {
        let inradius = section.profile.inradius();
        if wall_thickness >= inradius {
            return Err(CoreError::WallCollapse {
                station,
                inradius,
                thickness: wall_thickness,
            });
        }

        let inner = section
            .profile
            .inset(wall_thickness)
            .ok_or(CoreError::WallCollapse {
                station,
                inradius,
                thickness: wall_thickness,
            })?;

        inner_rings.push(
            inner
                .points()
                .iter()
                .map(|p| section.center + section.rotation * DVec3::new(p.x, p.y, 0.0))
                .collect(),
        );
    }

    let mut mesh = Mesh::with_capacity(2 * ring_count * n, 4 * ring_count * n);

    // Outer rings occupy the first ring_count * n vertices, inner rings
    // the rest; ring r starts at base + r * n.
    for section in &swept.sections {
        for v in section.ring() {
            mesh.add_vertex(v);
        }
    }
    for ring in &inner_rings {
        for &v in ring {
            mesh.add_vertex(v);
        }
    }

    let outer_base = |r: usize| (r * n) as u32;
    let inner_base = |r: usize| ((ring_count + r) * n) as u32;

    for r in 0..ring_count - 1 {
        stitch_rings(&mut mesh, outer_base(r), outer_base(r + 1), n, false);
        stitch_rings(&mut mesh, inner_base(r), inner_base(r + 1), n, true);
    }

    // Annular end rings: bottom faces down, top faces along the rim frame
    stitch_rings(&mut mesh, inner_base(0), outer_base(0), n, false);
    stitch_rings(
        &mut mesh,
        outer_base(ring_count - 1),
        inner_base(ring_count - 1),
        n,
        false,
    );

    Ok(mesh)
}

/// Rejects sweeps whose consecutive section planes interpenetrate.
///
/// A steep exit tilt over a short transition drops one rim of a ring
/// below the previous section plane, folding the lateral surface through
/// itself. The folded sheet can still close up and pass the edge-pairing
/// and winding checks, so the condition is caught here, per station pair,
/// before any triangle is emitted: every vertex of the upper ring must
/// lie strictly above the lower section plane, and vice versa.
fn check_section_planes(swept: &SweptSections) -> Result<(), CoreError> {
    for (r, pair) in swept.sections.windows(2).enumerate() {
        let (below, above) = (&pair[0], &pair[1]);
        let below_normal = below.rotation * DVec3::Z;
        let above_normal = above.rotation * DVec3::Z;

        let interpenetrates = above
            .ring()
            .iter()
            .any(|v| (*v - below.center).dot(below_normal) <= 0.0)
            || below
                .ring()
                .iter()
                .any(|v| (*v - above.center).dot(above_normal) >= 0.0);

        if interpenetrates {
            return Err(CoreError::geometry_collapse(format!(
                "lateral surface folds through itself between stations {} and {}",
                r,
                r + 1
            )));
        }
    }
    Ok(())
}

/// Connects two index-aligned rings with a triangulated quad strip.
///
/// With CCW rings and `a` below `b`, the unflipped orientation yields
/// outward normals; `flip` reverses them for the inner surface.
fn stitch_rings(mesh: &mut Mesh, a_base: u32, b_base: u32, n: usize, flip: bool) {
    for i in 0..n {
        let j = (i + 1) % n;
        let (ai, aj) = (a_base + i as u32, a_base + j as u32);
        let (bi, bj) = (b_base + i as u32, b_base + j as u32);

        if flip {
            mesh.add_triangle(ai, bj, aj);
            mesh.add_triangle(ai, bi, bj);
        } else {
            mesh.add_triangle(ai, aj, bj);
            mesh.add_triangle(ai, bj, bi);
        }
    }
}
