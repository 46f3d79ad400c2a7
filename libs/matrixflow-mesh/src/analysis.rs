//! # Mesh Analysis
//!
//! Topological and metric checks consumed by the verification harness and
//! by the generator's post-construction invariant pass:
//!
//! - **Watertightness**: every undirected edge borders exactly two triangles
//! - **Winding consistency**: every directed edge appears exactly once, so
//!   all face normals point the same way (outward for positive volume)
//! - **Volume**: signed enclosed volume via the divergence theorem
//! - **Cross-sections**: planar slices at a given Z with centroid and bounds
//! - **Face queries**: per-triangle centroid and unit normal

use std::collections::HashMap;

use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// Returns true if every edge of the mesh borders exactly two triangles.
///
/// This is the closedness half of manifoldness: a mesh with boundary
/// edges has gaps or slits and cannot enclose a volume.
pub fn is_watertight(mesh: &Mesh) -> bool {
    let mut edges: HashMap<(u32, u32), u32> = HashMap::new();

    for tri in mesh.triangles() {
        for (a, b) in triangle_edges(tri) {
            let key = if a < b { (a, b) } else { (b, a) };
            *edges.entry(key).or_insert(0) += 1;
        }
    }

    !edges.is_empty() && edges.values().all(|&count| count == 2)
}

/// Returns true if triangle windings are mutually consistent.
///
/// In a consistently wound closed mesh each directed edge appears exactly
/// once and its reverse appears exactly once in the adjacent triangle. A
/// single flipped triangle duplicates directed edges and fails the check.
pub fn is_winding_consistent(mesh: &Mesh) -> bool {
    let mut directed: HashMap<(u32, u32), u32> = HashMap::new();

    for tri in mesh.triangles() {
        for (a, b) in triangle_edges(tri) {
            *directed.entry((a, b)).or_insert(0) += 1;
        }
    }

    if directed.values().any(|&count| count != 1) {
        return false;
    }

    directed.keys().all(|&(a, b)| directed.contains_key(&(b, a)))
}

/// Computes the signed enclosed volume of a closed mesh.
///
/// Sums the signed volumes of the tetrahedra spanned by the origin and
/// each triangle. Positive for outward-facing windings; near zero or
/// negative indicates collapsed or inverted geometry.
pub fn volume(mesh: &Mesh) -> f64 {
    let mut total = 0.0;

    for tri in mesh.triangles() {
        let v0 = mesh.vertex(tri[0]);
        let v1 = mesh.vertex(tri[1]);
        let v2 = mesh.vertex(tri[2]);
        total += v0.dot(v1.cross(v2));
    }

    total / 6.0
}

/// Returns the centroid of a triangle.
pub fn triangle_center(mesh: &Mesh, index: usize) -> DVec3 {
    let tri = mesh.triangle(index);
    (mesh.vertex(tri[0]) + mesh.vertex(tri[1]) + mesh.vertex(tri[2])) / 3.0
}

/// Returns the unit normal of a triangle.
///
/// Zero-area triangles yield `DVec3::ZERO`.
pub fn face_normal(mesh: &Mesh, index: usize) -> DVec3 {
    let tri = mesh.triangle(index);
    let v0 = mesh.vertex(tri[0]);
    let v1 = mesh.vertex(tri[1]);
    let v2 = mesh.vertex(tri[2]);
    (v1 - v0).cross(v2 - v0).normalize_or_zero()
}

/// Returns the unit normal of the triangle whose centroid sits highest.
///
/// Used by the harness to measure the exit angle at the top rim.
pub fn top_face_normal(mesh: &Mesh) -> Option<DVec3> {
    let mut best: Option<(usize, f64)> = None;

    for index in 0..mesh.triangle_count() {
        let z = triangle_center(mesh, index).z;
        if best.map_or(true, |(_, best_z)| z > best_z) {
            best = Some((index, z));
        }
    }

    best.map(|(index, _)| face_normal(mesh, index))
}

/// A planar cross-section of a mesh at constant Z.
///
/// Holds the intersection points of the cutting plane with the mesh
/// surface plus derived measurements. The centroid is the length-weighted
/// average of the intersection segment midpoints.
#[derive(Debug, Clone)]
pub struct Slice {
    /// Intersection points in the cutting plane (XY coordinates)
    pub points: Vec<DVec2>,
    /// Length-weighted centroid of the intersection contour
    pub centroid: DVec2,
    /// Minimum corner of the 2D bounding box
    pub min: DVec2,
    /// Maximum corner of the 2D bounding box
    pub max: DVec2,
}

impl Slice {
    /// Bounding-box extent along X.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Bounding-box extent along Y.
    pub fn depth(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Intersects the mesh surface with the plane `z = height`.
///
/// Returns `None` when the plane misses the mesh. The slice is intended
/// for measurement (centroid, bounds), not for rebuilding contours, so
/// segment connectivity is not reconstructed.
///
/// Vertices lying exactly on the plane are attributed to the positive
/// side; callers should slice between vertex rings, as the harness does.
pub fn cross_section(mesh: &Mesh, height: f64) -> Option<Slice> {
    let mut points = Vec::new();
    let mut weighted = DVec2::ZERO;
    let mut total_length = 0.0;

    for tri in mesh.triangles() {
        let verts = [
            mesh.vertex(tri[0]),
            mesh.vertex(tri[1]),
            mesh.vertex(tri[2]),
        ];

        let mut crossings: Vec<DVec2> = Vec::with_capacity(2);
        for i in 0..3 {
            let a = verts[i];
            let b = verts[(i + 1) % 3];
            let da = a.z - height;
            let db = b.z - height;

            // Strict sign change; on-plane vertices count as positive
            if (da >= 0.0) != (db >= 0.0) {
                let s = da / (da - db);
                let p = a + (b - a) * s;
                crossings.push(DVec2::new(p.x, p.y));
            }
        }

        if crossings.len() == 2 {
            let length = crossings[0].distance(crossings[1]);
            let mid = (crossings[0] + crossings[1]) * 0.5;
            weighted += mid * length;
            total_length += length;
            points.extend_from_slice(&crossings);
        }
    }

    if points.is_empty() || total_length <= 0.0 {
        return None;
    }

    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        min = min.min(*p);
        max = max.max(*p);
    }

    Some(Slice {
        centroid: weighted / total_length,
        points,
        min,
        max,
    })
}

fn triangle_edges(tri: &[u32; 3]) -> [(u32, u32); 3] {
    [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Axis-aligned unit cube spanning [0,1]^3 with outward windings.
    fn unit_cube() -> Mesh {
        let mut mesh = Mesh::new();
        let corners = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
        ];
        for c in corners {
            mesh.add_vertex(c);
        }
        let faces: [[u32; 3]; 12] = [
            [0, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
        ];
        for [a, b, c] in faces {
            mesh.add_triangle(a, b, c);
        }
        mesh
    }

    #[test]
    fn test_cube_watertight() {
        let cube = unit_cube();
        assert!(is_watertight(&cube));
        assert!(is_winding_consistent(&cube));
    }

    #[test]
    fn test_cube_volume() {
        let cube = unit_cube();
        assert_abs_diff_eq!(volume(&cube), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_open_mesh_not_watertight() {
        let mut cube = unit_cube();
        // Rebuild without the last triangle
        let mut open = Mesh::new();
        for v in cube.vertices() {
            open.add_vertex(*v);
        }
        let count = cube.triangle_count();
        for i in 0..count - 1 {
            let [a, b, c] = cube.triangle(i);
            open.add_triangle(a, b, c);
        }
        cube = open;
        assert!(!is_watertight(&cube));
    }

    #[test]
    fn test_flipped_triangle_inconsistent_winding() {
        let cube = unit_cube();
        let mut flipped = Mesh::new();
        for v in cube.vertices() {
            flipped.add_vertex(*v);
        }
        for i in 0..cube.triangle_count() {
            let [a, b, c] = cube.triangle(i);
            if i == 0 {
                flipped.add_triangle(a, c, b);
            } else {
                flipped.add_triangle(a, b, c);
            }
        }
        assert!(is_watertight(&flipped));
        assert!(!is_winding_consistent(&flipped));
    }

    #[test]
    fn test_cube_cross_section() {
        let cube = unit_cube();
        let slice = cross_section(&cube, 0.5).unwrap();
        assert_abs_diff_eq!(slice.centroid.x, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(slice.centroid.y, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(slice.width(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(slice.depth(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cross_section_misses_mesh() {
        let cube = unit_cube();
        assert!(cross_section(&cube, 5.0).is_none());
    }

    #[test]
    fn test_top_face_normal_of_cube() {
        let cube = unit_cube();
        let normal = top_face_normal(&cube).unwrap();
        assert_abs_diff_eq!(normal.z, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_face_queries() {
        let cube = unit_cube();
        // Triangle 0 lies in the bottom face
        assert_abs_diff_eq!(face_normal(&cube, 0).z, -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(triangle_center(&cube, 0).z, 0.0, epsilon = 1e-9);
    }
}
