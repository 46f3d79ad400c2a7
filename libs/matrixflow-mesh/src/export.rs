//! # Mesh Export
//!
//! Serialization of the final solid at the harness boundary:
//!
//! - [`MeshBuffers`]: flat `f32` vertex/index arrays for renderers and
//!   structured marshaling (JSON via serde)
//! - [`write_stl`]: binary STL, the interchange format consumed by
//!   slicers and mesh-analysis tools
//!
//! Internal precision is `f64`; conversion to `f32` happens only here.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::face_normal;
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Mesh buffers suitable for GPU rendering or JSON marshaling.
///
/// Contains vertex positions and triangle indices in flat arrays.
///
/// # Examples
/// ```
/// use matrixflow_mesh::{Mesh, MeshBuffers};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(0, 1, 2);
///
/// let buffers = MeshBuffers::from_mesh(&mesh);
/// assert_eq!(buffers.vertex_count(), 3);
/// assert_eq!(buffers.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    /// Uses `f32` for GPU compatibility.
    pub vertices: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Converts a mesh into flat buffers.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut buffers = Self {
            vertices: Vec::with_capacity(mesh.vertex_count() * 3),
            indices: Vec::with_capacity(mesh.triangle_count() * 3),
        };

        for v in mesh.vertices() {
            buffers.vertices.push(v.x as f32);
            buffers.vertices.push(v.y as f32);
            buffers.vertices.push(v.z as f32);
        }

        for tri in mesh.triangles() {
            buffers.indices.push(tri[0]);
            buffers.indices.push(tri[1]);
            buffers.indices.push(tri[2]);
        }

        buffers
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Writes the mesh as binary STL.
///
/// Layout: 80-byte header, little-endian `u32` triangle count, then per
/// triangle a unit normal, three vertices (all `f32`), and a zero
/// attribute word. 50 bytes per triangle.
///
/// # Arguments
///
/// * `mesh` - The mesh to serialize
/// * `writer` - Destination for the STL bytes
///
/// # Example
///
/// ```rust,ignore
/// let mut file = std::fs::File::create("duct.stl")?;
/// write_stl(&mesh, &mut file)?;
/// ```
pub fn write_stl<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<(), MeshError> {
    let mut header = [0u8; 80];
    let tag = b"matrixflow binary stl";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;

    let count = mesh.triangle_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for index in 0..mesh.triangle_count() {
        let normal = face_normal(mesh, index);
        write_vec3(writer, normal.x, normal.y, normal.z)?;

        let tri = mesh.triangle(index);
        for &vi in &tri {
            let v = mesh.vertex(vi);
            write_vec3(writer, v.x, v.y, v.z)?;
        }

        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

fn write_vec3<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> Result<(), MeshError> {
    writer.write_all(&(x as f32).to_le_bytes())?;
    writer.write_all(&(y as f32).to_le_bytes())?;
    writer.write_all(&(z as f32).to_le_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_buffers_creation() {
        let buffers = MeshBuffers::new();
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.triangle_count(), 0);
    }

    #[test]
    fn test_buffers_from_mesh() {
        let mesh = triangle_mesh();
        let buffers = MeshBuffers::from_mesh(&mesh);
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.triangle_count(), 1);
        assert_eq!(buffers.vertices[3], 1.0f32);
        assert_eq!(buffers.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_stl_byte_layout() {
        let mesh = triangle_mesh();
        let mut bytes = Vec::new();
        write_stl(&mesh, &mut bytes).unwrap();
        // 80-byte header + 4-byte count + 50 bytes per triangle
        assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());
        let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
        assert_eq!(count as usize, mesh.triangle_count());
    }

    #[test]
    fn test_stl_normal_points_up() {
        let mesh = triangle_mesh();
        let mut bytes = Vec::new();
        write_stl(&mesh, &mut bytes).unwrap();
        // First f32 triple after the count is the facet normal
        let nz = f32::from_le_bytes([bytes[92], bytes[93], bytes[94], bytes[95]]);
        assert!((nz - 1.0).abs() < 1e-6);
    }
}
