//! Sphere topology and the generation entry point
//!
//! Builds an index-deduplicated icosphere by repeated 4-way midpoint
//! subdivision of an icosahedron, then displaces it with terrain noise.

mod icosahedron;
mod subdivide;

use crate::config::TerrainOptions;
use crate::error::{check_resolution, Result};
use crate::mesh::Mesh;
use crate::terrain::{apply_terrain_with_sampler, HeightSampler, PerlinHeightSampler};

/// Number of vertices produced by `build_sphere(resolution)`: `10 * 4^r + 2`
pub fn expected_vertex_count(resolution: u32) -> usize {
    4usize
        .saturating_pow(resolution)
        .saturating_mul(10)
        .saturating_add(2)
}

/// Number of triangles produced by `build_sphere(resolution)`: `20 * 4^r`
pub fn expected_triangle_count(resolution: u32) -> usize {
    4usize.saturating_pow(resolution).saturating_mul(20)
}

/// Build a unit icosphere
///
/// Resolution 0 is the bare icosahedron (12 vertices, 20 triangles); every
/// increment splits each triangle into four. Output is fully deterministic:
/// the same resolution always yields identical vertex and index order.
///
/// Cost grows by 4x per step. Nothing stops a caller from asking for a very
/// large resolution; indices are `u32`, so anything past 14 cannot be
/// represented anyway and will exhaust memory long before that.
///
/// # Errors
///
/// Returns `InvalidArgument` if `resolution` is negative
///
/// # Example
///
/// ```
/// use rust_icosphere_planet::build_sphere;
///
/// let mesh = build_sphere(1).unwrap();
/// assert_eq!(mesh.vertex_count(), 42);
/// assert_eq!(mesh.triangle_count(), 80);
/// assert!(build_sphere(-1).is_err());
/// ```
pub fn build_sphere(resolution: i32) -> Result<Mesh> {
    let rounds = check_resolution(resolution)?;

    let mut vertices = icosahedron::vertices();
    let mut indices = icosahedron::indices();

    for _ in 0..rounds {
        indices = subdivide::subdivide(&mut vertices, &indices);
    }

    log::debug!(
        "Built icosphere at resolution {}: {} vertices, {} triangles",
        rounds,
        vertices.len(),
        indices.len() / 3
    );

    Ok(Mesh { vertices, indices })
}

/// Build and displace a planet mesh with the default Perlin sampler
///
/// Composes [`build_sphere`] and [`apply_terrain`](crate::terrain::apply_terrain).
/// Identical arguments always produce a bit-identical mesh.
///
/// # Errors
///
/// Returns `InvalidArgument` if `resolution` is negative; nothing is built.
///
/// # Example
///
/// ```
/// use rust_icosphere_planet::*;
///
/// let options = TerrainOptions {
///     height_scale: 0.1,
///     noise_scale: 2.0,
///     noise_strength: 1.0,
///     noise_offset: 0.0,
/// };
/// let mesh = generate(3, &options).unwrap();
/// assert_eq!(mesh.triangle_count(), 1280);
/// ```
pub fn generate(resolution: i32, options: &TerrainOptions) -> Result<Mesh> {
    generate_with_sampler(resolution, options, &PerlinHeightSampler)
}

/// Build and displace a planet mesh with a custom height sampler
pub fn generate_with_sampler<S>(
    resolution: i32,
    options: &TerrainOptions,
    sampler: &S,
) -> Result<Mesh>
where
    S: HeightSampler + ?Sized,
{
    let sphere = build_sphere(resolution)?;
    Ok(apply_terrain_with_sampler(&sphere, options, sampler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanetError;
    use std::collections::HashMap;

    #[test]
    fn test_resolution_zero() {
        let mesh = build_sphere(0).unwrap();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 20);
    }

    #[test]
    fn test_resolution_one() {
        let mesh = build_sphere(1).unwrap();
        assert_eq!(mesh.vertex_count(), 42);
        assert_eq!(mesh.triangle_count(), 80);
    }

    #[test]
    fn test_expected_counts() {
        for resolution in 0..5 {
            let mesh = build_sphere(resolution as i32).unwrap();
            assert_eq!(mesh.vertex_count(), expected_vertex_count(resolution));
            assert_eq!(mesh.triangle_count(), expected_triangle_count(resolution));
        }
    }

    #[test]
    fn test_negative_resolution() {
        let result = build_sphere(-1);
        assert!(matches!(result, Err(PlanetError::InvalidArgument(_))));

        let result = generate(-5, &TerrainOptions::default());
        assert!(matches!(result, Err(PlanetError::InvalidArgument(_))));
    }

    #[test]
    fn test_subdivision_quadruples_triangles() {
        let mut previous = build_sphere(0).unwrap().triangle_count();
        for resolution in 1..5 {
            let current = build_sphere(resolution).unwrap().triangle_count();
            assert_eq!(current, previous * 4);
            previous = current;
        }
    }

    #[test]
    fn test_indices_valid() {
        for resolution in 0..5 {
            let mesh = build_sphere(resolution).unwrap();
            assert!(mesh.validate().is_ok(), "resolution {} invalid", resolution);
        }
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        for resolution in 0..5 {
            let mesh = build_sphere(resolution).unwrap();
            for v in &mesh.vertices {
                assert!(
                    (v.length() - 1.0).abs() < 1e-5,
                    "vertex {:?} at resolution {} has length {}",
                    v,
                    resolution,
                    v.length()
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_vertices() {
        let mesh = build_sphere(3).unwrap();
        let mut seen = HashMap::new();
        for (i, v) in mesh.vertices.iter().enumerate() {
            let key = (
                (v.x * 1e5).round() as i64,
                (v.y * 1e5).round() as i64,
                (v.z * 1e5).round() as i64,
            );
            if let Some(previous) = seen.insert(key, i) {
                panic!("vertices {} and {} coincide at {:?}", previous, i, v);
            }
        }
    }

    /// Every undirected edge is used by exactly two triangles, once in each direction
    #[test]
    fn test_closed_consistently_wound() {
        for resolution in 0..4 {
            let mesh = build_sphere(resolution).unwrap();
            let mut directed: HashMap<(u32, u32), usize> = HashMap::new();

            for [a, b, c] in mesh.triangles() {
                for edge in [(a, b), (b, c), (c, a)] {
                    *directed.entry(edge).or_insert(0) += 1;
                }
            }

            for (&(a, b), &count) in &directed {
                assert_eq!(count, 1, "edge ({}, {}) repeated in the same direction", a, b);
                assert_eq!(
                    directed.get(&(b, a)),
                    Some(&1),
                    "edge ({}, {}) has no opposite half-edge",
                    a,
                    b
                );
            }

            // Euler characteristic of a sphere
            let v = mesh.vertex_count() as i64;
            let e = (directed.len() / 2) as i64;
            let f = mesh.triangle_count() as i64;
            assert_eq!(v - e + f, 2);
        }
    }

    #[test]
    fn test_build_determinism() {
        let a = build_sphere(4).unwrap();
        let b = build_sphere(4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_determinism() {
        let options = TerrainOptions {
            height_scale: 0.3,
            noise_scale: 4.0,
            noise_strength: 0.7,
            noise_offset: 12.5,
        };
        let a = generate(3, &options).unwrap();
        let b = generate(3, &options).unwrap();

        assert_eq!(a.indices, b.indices);
        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(va.to_array().map(f32::to_bits), vb.to_array().map(f32::to_bits));
        }
    }

    #[test]
    fn test_generate_preserves_topology() {
        let options = TerrainOptions {
            height_scale: 1.0,
            noise_scale: 1.5,
            noise_strength: 0.5,
            noise_offset: 0.0,
        };
        let base = build_sphere(2).unwrap();
        let planet = generate(2, &options).unwrap();

        assert_eq!(planet.indices, base.indices);
        assert_eq!(planet.vertex_count(), base.vertex_count());
    }

    #[test]
    fn test_generate_with_custom_sampler() {
        struct Constant;
        impl HeightSampler for Constant {
            fn sample(&self, _x: f32, _y: f32) -> f32 {
                1.0
            }
        }

        let options = TerrainOptions {
            height_scale: 0.5,
            noise_scale: 1.0,
            noise_strength: 1.0,
            noise_offset: 0.0,
        };
        let mesh = generate_with_sampler(1, &options, &Constant).unwrap();
        for v in &mesh.vertices {
            assert!((v.length() - 1.5).abs() < 1e-5);
        }
    }
}
