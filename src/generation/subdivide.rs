//! Midpoint subdivision on the unit sphere
//!
//! Each triangle `(a, b, c)` is replaced by four children:
//!
//! ```text
//!         a
//!        / \
//!      ab---ca
//!      / \ / \
//!     b---bc--c
//! ```
//!
//! Midpoints are pushed back onto the unit sphere and shared between the two
//! triangles on either side of an edge through a lookup keyed by the
//! unordered index pair.

use glam::Vec3;
use std::collections::HashMap;

/// Canonical (min, max) key for an undirected edge
#[inline]
fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Edge-midpoint cache scoped to a single subdivision round
struct MidpointCache<'a> {
    vertices: &'a mut Vec<Vec3>,
    midpoints: HashMap<(u32, u32), u32>,
}

impl<'a> MidpointCache<'a> {
    fn new(vertices: &'a mut Vec<Vec3>, edge_capacity: usize) -> Self {
        Self {
            vertices,
            midpoints: HashMap::with_capacity(edge_capacity),
        }
    }

    /// Index of the normalized midpoint of edge `(a, b)`, inserting it on first use
    fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let vertices = &mut *self.vertices;
        *self.midpoints.entry(edge_key(a, b)).or_insert_with(|| {
            let mid = (vertices[a as usize] + vertices[b as usize]).normalize();
            let index = vertices.len() as u32;
            vertices.push(mid);
            index
        })
    }
}

/// Split every triangle into four, appending new vertices in place
///
/// Winding of the children matches the parent. Output triangle order is
/// parent order, four children per parent.
pub(crate) fn subdivide(vertices: &mut Vec<Vec3>, indices: &[u32]) -> Vec<u32> {
    let triangle_count = indices.len() / 3;
    // Closed triangle mesh: E = 3F / 2, one new vertex per edge
    let edge_count = triangle_count * 3 / 2;
    vertices.reserve(edge_count);

    let mut out = Vec::with_capacity(indices.len() * 4);
    let mut cache = MidpointCache::new(vertices, edge_count);

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let ab = cache.midpoint(a, b);
        let bc = cache.midpoint(b, c);
        let ca = cache.midpoint(c, a);

        out.extend_from_slice(&[a, ab, ca]);
        out.extend_from_slice(&[b, bc, ab]);
        out.extend_from_slice(&[c, ca, bc]);
        out.extend_from_slice(&[ab, bc, ca]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_unordered() {
        assert_eq!(edge_key(3, 7), (3, 7));
        assert_eq!(edge_key(7, 3), (3, 7));
    }

    #[test]
    fn test_subdivide_single_triangle() {
        let mut vertices = vec![Vec3::X, Vec3::Y, Vec3::Z];
        let indices = subdivide(&mut vertices, &[0, 1, 2]);

        assert_eq!(vertices.len(), 6);
        assert_eq!(indices.len(), 12);
        assert_eq!(&indices[9..], &[3, 4, 5]);

        let expected = (Vec3::X + Vec3::Y).normalize();
        assert!((vertices[3] - expected).length() < 1e-6);
    }

    #[test]
    fn test_shared_edge_midpoint_reused() {
        // Two triangles sharing edge (1, 2)
        let mut vertices = vec![Vec3::X, Vec3::Y, Vec3::Z, Vec3::NEG_X];
        let indices = subdivide(&mut vertices, &[0, 1, 2, 3, 2, 1]);

        // 4 originals + 5 distinct edges
        assert_eq!(vertices.len(), 9);

        // Edge (1,2) is bc in both parents; bc is the middle index of each second child
        let first_bc = indices[4];
        let second_bc = indices[12 + 4];
        assert_eq!(first_bc, second_bc);
        assert_eq!(first_bc, 5);
    }
}
