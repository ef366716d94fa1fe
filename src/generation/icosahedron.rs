//! Icosahedron seed polyhedron
//!
//! The 12 vertices are the cyclic permutations of `(0, ±1, ±φ)` projected onto
//! the unit sphere. Faces are wound counter-clockwise seen from outside.

use glam::Vec3;

/// Golden ratio φ = (1 + √5) / 2
const PHI: f32 = 1.618_034;

const CORNERS: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

/// Face index triples, outward winding
pub(crate) const FACES: [[u32; 3]; 20] = [
    // Five faces around vertex 0
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    // Adjacent band
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    // Five faces around vertex 3
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    // Adjacent band
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Unit-length icosahedron vertices
pub(crate) fn vertices() -> Vec<Vec3> {
    CORNERS
        .iter()
        .map(|&c| Vec3::from_array(c).normalize())
        .collect()
}

/// Flattened face indices
pub(crate) fn indices() -> Vec<u32> {
    FACES.iter().flatten().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_unit_length() {
        for v in vertices() {
            assert!((v.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_every_edge_shared_by_two_faces() {
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for [a, b, c] in FACES {
            for (i, j) in [(a, b), (b, c), (c, a)] {
                *edges.entry((i.min(j), i.max(j))).or_insert(0) += 1;
            }
        }
        assert_eq!(edges.len(), 30);
        assert!(edges.values().all(|&count| count == 2));
    }

    #[test]
    fn test_five_faces_per_vertex() {
        let mut valence = [0usize; 12];
        for i in indices() {
            valence[i as usize] += 1;
        }
        assert!(valence.iter().all(|&v| v == 5));
    }
}
