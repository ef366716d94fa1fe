//! Radial terrain displacement
//!
//! Pushes every vertex of a unit sphere outward along its own direction by a
//! height derived from a 2D noise sample of its `(x, z)` coordinates. Triangle
//! indices pass through untouched.

mod perlin;

pub use perlin::{perlin_2d, sample_perlin_2d, PerlinHeightSampler};

use crate::config::TerrainOptions;
use crate::mesh::Mesh;
use glam::Vec3;
use noise::NoiseFn;

/// Trait for sampling a 2D coherent noise field
///
/// Implementations must be deterministic and continuous, and return values
/// in `[0, 1]`. A discontinuous sampler tears the displaced mesh apart at
/// seams.
pub trait HeightSampler {
    /// Sample the field at `(x, y)`
    fn sample(&self, x: f32, y: f32) -> f32;
}

impl<S: HeightSampler + ?Sized> HeightSampler for &S {
    fn sample(&self, x: f32, y: f32) -> f32 {
        (**self).sample(x, y)
    }
}

/// Adapter for any 2D generator from the `noise` crate
///
/// Output is remapped from `[-1, 1]` to `[0, 1]` and clamped, since several
/// of the crate's generators overshoot their nominal range.
///
/// ```
/// use rust_icosphere_planet::*;
/// use noise::{Fbm, Perlin};
///
/// let sampler = NoiseFnSampler::new(Fbm::<Perlin>::new(7));
/// let options = TerrainOptions {
///     height_scale: 0.2,
///     noise_scale: 1.5,
///     noise_strength: 1.0,
///     noise_offset: 0.0,
/// };
/// let mesh = generate_with_sampler(2, &options, &sampler).unwrap();
/// assert_eq!(mesh.vertex_count(), 162);
/// ```
#[derive(Debug, Clone)]
pub struct NoiseFnSampler<N> {
    noise: N,
}

impl<N> NoiseFnSampler<N> {
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    /// Get the wrapped generator
    pub fn inner(&self) -> &N {
        &self.noise
    }
}

impl<N: NoiseFn<f64, 2>> HeightSampler for NoiseFnSampler<N> {
    fn sample(&self, x: f32, y: f32) -> f32 {
        let raw = self.noise.get([x as f64, y as f64]);
        let mapped = ((raw + 1.0) * 0.5) as f32;
        if mapped.is_nan() {
            0.5
        } else {
            mapped.clamp(0.0, 1.0)
        }
    }
}

/// Displacement height for a unit-sphere vertex
///
/// `sample(v.x * noise_scale + noise_offset, v.z * noise_scale + noise_offset)
/// * noise_strength * height_scale`. With non-negative factors the result is
/// never negative.
#[inline]
pub fn sample_height<S>(vertex: Vec3, options: &TerrainOptions, sampler: &S) -> f32
where
    S: HeightSampler + ?Sized,
{
    let nx = vertex.x * options.noise_scale + options.noise_offset;
    let nz = vertex.z * options.noise_scale + options.noise_offset;
    sampler.sample(nx, nz) * options.noise_strength * options.height_scale
}

/// Displace a sphere mesh with the default Perlin sampler
///
/// Returns a new mesh with the same index list and vertex order. Each vertex
/// becomes `normalize(v) * (1 + height)`. Normals are not computed here; use
/// [`vertex_normals`](crate::mesh::vertex_normals) on the result.
///
/// # Example
///
/// ```
/// use rust_icosphere_planet::*;
///
/// let sphere = build_sphere(2).unwrap();
/// let flat = apply_terrain(&sphere, &TerrainOptions::flat());
/// assert!(flat.vertices.iter().all(|v| (v.length() - 1.0).abs() < 1e-5));
/// ```
pub fn apply_terrain(mesh: &Mesh, options: &TerrainOptions) -> Mesh {
    apply_terrain_with_sampler(mesh, options, &PerlinHeightSampler)
}

/// Displace a sphere mesh with a custom height sampler
pub fn apply_terrain_with_sampler<S>(mesh: &Mesh, options: &TerrainOptions, sampler: &S) -> Mesh
where
    S: HeightSampler + ?Sized,
{
    let vertices = mesh
        .vertices
        .iter()
        .map(|&v| {
            let height = sample_height(v, options, sampler);
            v.normalize_or_zero() * (1.0 + height)
        })
        .collect();

    Mesh {
        vertices,
        indices: mesh.indices.clone(),
    }
}
