//! Normal recomputation from the final triangle list

use super::Mesh;
use glam::Vec3;

/// Unnormalized face normal; its length is twice the triangle area
#[inline]
fn weighted_normal(mesh: &Mesh, [a, b, c]: [u32; 3]) -> Vec3 {
    let p0 = mesh.vertices[a as usize];
    let p1 = mesh.vertices[b as usize];
    let p2 = mesh.vertices[c as usize];
    (p1 - p0).cross(p2 - p0)
}

/// Per-face unit normals by the right-hand rule
///
/// Zero-area faces get `Vec3::ZERO`.
pub fn face_normals(mesh: &Mesh) -> Vec<Vec3> {
    mesh.triangles()
        .map(|tri| weighted_normal(mesh, tri).normalize_or_zero())
        .collect()
}

/// Per-vertex unit normals
///
/// Each vertex accumulates the area-weighted normals of every face that
/// references it. Vertices no face references get `Vec3::ZERO`.
pub fn vertex_normals(mesh: &Mesh) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; mesh.vertices.len()];

    for tri in mesh.triangles() {
        let n = weighted_normal(mesh, tri);
        for i in tri {
            normals[i as usize] += n;
        }
    }

    for n in &mut normals {
        *n = n.normalize_or_zero();
    }
    normals
}
