//! Icosphere planet mesh generation
//!
//! Builds a subdivided icosahedron on the unit sphere and displaces its
//! vertices radially with 2D coherent noise to form terrain. The output is
//! pure geometry, suitable for use with any game engine (Bevy, Godot, etc.)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rust_icosphere_planet::*;
//!
//! let options = TerrainOptions {
//!     height_scale: 0.15,
//!     noise_scale: 2.0,
//!     noise_strength: 1.0,
//!     noise_offset: 0.0,
//! };
//!
//! // One-shot generation
//! let mesh = generate(5, &options).unwrap();
//! let data = MeshData::from_mesh(&mesh);
//! println!("Generated {} triangles", data.triangle_count());
//!
//! // Or let a Planet own the parameters and rebuild on demand
//! let config = PlanetConfigBuilder::new()
//!     .radius(20.0)
//!     .resolution(5).unwrap()
//!     .terrain(options)
//!     .build().unwrap();
//! let mut planet = Planet::new(config).unwrap();
//! planet.set_resolution(6).unwrap();
//! planet.update().unwrap();
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) position-to-vertex lookups using KD-tree
//! - `serde`: Enables serialization support for configuration

// Modules
pub mod error;
pub mod config;
pub mod generation;
pub mod terrain;
pub mod mesh;
pub mod planet;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{PlanetError, Result};
pub use config::{PlanetConfig, PlanetConfigBuilder, TerrainOptions};
pub use generation::{
    build_sphere, expected_triangle_count, expected_vertex_count, generate, generate_with_sampler,
};
pub use terrain::{
    apply_terrain, apply_terrain_with_sampler, sample_height, HeightSampler, NoiseFnSampler,
    PerlinHeightSampler,
};
pub use mesh::{face_normals, vertex_normals, Mesh, MeshData};
pub use planet::Planet;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::Vec3 for convenience
pub use glam::Vec3;
