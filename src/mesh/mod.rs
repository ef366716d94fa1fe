//! Mesh types
//!
//! [`Mesh`] is the pure geometry produced by generation: shared vertices plus a
//! flat triangle index list. [`MeshData`] is the engine-agnostic render form
//! with recomputed normals.

mod normals;

pub use normals::{face_normals, vertex_normals};

use crate::error::{PlanetError, Result};
use glam::Vec3;

/// Indexed triangle mesh
///
/// Every index is `< vertices.len()`, `indices.len()` is a multiple of 3 and
/// no triangle repeats a vertex. Triangles are wound counter-clockwise when
/// seen from outside, so the right-hand-rule normal points away from the origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, each stored once and shared by index
    pub vertices: Vec<Vec3>,
    /// Triangle indices, three per face
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Check the index invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` describing the first violation found
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            let msg = format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            );
            log::warn!("Mesh validation failed: {}", msg);
            return Err(PlanetError::InvalidArgument(msg));
        }

        let vertex_count = self.vertices.len();
        for (face, [a, b, c]) in self.triangles().enumerate() {
            if let Some(&bad) = [a, b, c].iter().find(|&&i| i as usize >= vertex_count) {
                let msg = format!(
                    "triangle {} references vertex {} but mesh has {} vertices",
                    face, bad, vertex_count
                );
                log::warn!("Mesh validation failed: {}", msg);
                return Err(PlanetError::InvalidArgument(msg));
            }
            if a == b || b == c || a == c {
                let msg = format!("triangle {} is degenerate ({}, {}, {})", face, a, b, c);
                log::warn!("Mesh validation failed: {}", msg);
                return Err(PlanetError::InvalidArgument(msg));
            }
        }

        Ok(())
    }
}

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: Convert to `Mesh` with attributes
/// - Godot: Convert to `ArrayMesh`
/// - wgpu: Use directly as vertex buffers
///
/// Positions are unit-sphere relative; apply the planet radius as a uniform
/// scale on the render transform.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (3D coordinates)
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals, area-weighted from adjacent faces
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Build render buffers from a mesh, recomputing vertex normals
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let normals = vertex_normals(mesh);

        Self {
            positions: mesh.vertices.iter().map(|v| v.to_array()).collect(),
            normals: normals.iter().map(|n| n.to_array()).collect(),
            indices: mesh.indices.clone(),
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::build_sphere;

    fn single_triangle() -> Mesh {
        Mesh {
            vertices: vec![Vec3::X, Vec3::Y, Vec3::Z],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_counts() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.is_empty());
        assert!(Mesh::default().is_empty());
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_validate_ok() {
        assert!(single_triangle().validate().is_ok());
        assert!(Mesh::default().validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_bounds() {
        let mut mesh = single_triangle();
        mesh.indices = vec![0, 1, 3];
        assert!(matches!(mesh.validate(), Err(PlanetError::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_degenerate() {
        let mut mesh = single_triangle();
        mesh.indices = vec![0, 1, 1];
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_validate_ragged_indices() {
        let mut mesh = single_triangle();
        mesh.indices = vec![0, 1, 2, 0];
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_mesh_data_from_mesh() {
        let mesh = build_sphere(2).unwrap();
        let data = MeshData::from_mesh(&mesh);

        assert!(!data.is_empty());
        assert_eq!(data.vertex_count(), mesh.vertex_count());
        assert_eq!(data.triangle_count(), mesh.triangle_count());
        assert_eq!(data.positions.len(), data.normals.len());
        assert_eq!(data.indices, mesh.indices);
        assert_eq!(data.positions[5], mesh.vertices[5].to_array());
    }
}
