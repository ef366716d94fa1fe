//! Planet and terrain configuration
//!
//! `TerrainOptions` is the per-generation noise record consumed by
//! [`apply_terrain`](crate::terrain::apply_terrain). `PlanetConfig` bundles it
//! with the host-side parameters (radius, resolution) owned by a [`Planet`](crate::Planet).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{check_resolution, Result};

/// Noise parameters for radial terrain displacement
///
/// All-zero options are valid and produce an undisplaced unit sphere.
/// Negative `height_scale` or `noise_strength` carve terrain inward instead of
/// raising it; that is left to the caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TerrainOptions {
    /// Overall multiplier on the displacement height
    pub height_scale: f32,
    /// Frequency of the noise field (larger = smaller features)
    pub noise_scale: f32,
    /// Multiplier on the raw `[0, 1]` noise sample
    pub noise_strength: f32,
    /// Offset added to both noise coordinates, shifts the pattern
    pub noise_offset: f32,
}

impl TerrainOptions {
    /// Options that leave the sphere untouched
    pub fn flat() -> Self {
        Self::default()
    }

    /// Combined factor applied to every noise sample
    #[inline]
    pub fn height_factor(&self) -> f32 {
        self.noise_strength * self.height_scale
    }
}

/// Host-side parameters for a generated planet
///
/// The same configuration always produces the identical mesh.
///
/// # Example
///
/// ```rust
/// use rust_icosphere_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .radius(6.0)
///     .resolution(4)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: PlanetConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetConfig {
    /// Uniform scale applied by the host transform, never baked into vertices
    pub radius: f32,

    /// Number of 4-way subdivision rounds applied to the icosahedron
    ///
    /// - 0: 12 vertices, 20 triangles
    /// - 3: 642 vertices, 1280 triangles (default)
    /// - 6: 40962 vertices, 81920 triangles
    pub resolution: i32,

    /// Terrain noise parameters
    pub terrain: TerrainOptions,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            resolution: 3,
            terrain: TerrainOptions::default(),
        }
    }
}

/// Builder for creating `PlanetConfig` with validation
///
/// ```rust
/// use rust_icosphere_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .resolution(5)
///     .unwrap()
///     .terrain(TerrainOptions {
///         height_scale: 0.2,
///         noise_scale: 2.0,
///         noise_strength: 1.0,
///         noise_offset: 10.0,
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.resolution, 5);
///
/// assert!(PlanetConfigBuilder::new().resolution(-1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PlanetConfigBuilder {
    radius: f32,
    resolution: i32,
    terrain: TerrainOptions,
}

impl PlanetConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - radius: 1.0
    /// - resolution: 3
    /// - terrain: flat (all zero)
    pub fn new() -> Self {
        let defaults = PlanetConfig::default();
        Self {
            radius: defaults.radius,
            resolution: defaults.resolution,
            terrain: defaults.terrain,
        }
    }

    /// Set the uniform radius scale
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the subdivision resolution
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `resolution` is negative
    pub fn resolution(mut self, resolution: i32) -> Result<Self> {
        check_resolution(resolution)?;
        self.resolution = resolution;
        Ok(self)
    }

    /// Set all terrain options at once
    pub fn terrain(mut self, terrain: TerrainOptions) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn height_scale(mut self, height_scale: f32) -> Self {
        self.terrain.height_scale = height_scale;
        self
    }

    pub fn noise_scale(mut self, noise_scale: f32) -> Self {
        self.terrain.noise_scale = noise_scale;
        self
    }

    pub fn noise_strength(mut self, noise_strength: f32) -> Self {
        self.terrain.noise_strength = noise_strength;
        self
    }

    pub fn noise_offset(mut self, noise_offset: f32) -> Self {
        self.terrain.noise_offset = noise_offset;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<PlanetConfig> {
        Ok(PlanetConfig {
            radius: self.radius,
            resolution: self.resolution,
            terrain: self.terrain,
        })
    }
}

impl Default for PlanetConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
