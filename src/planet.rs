//! Planet: the host-side owner of a generated mesh
//!
//! Holds the current parameters, the last generated mesh and its render
//! buffers. Parameter changes only mark the planet dirty; the owner decides
//! when to rebuild, either by calling [`Planet::update`] once per tick or
//! [`Planet::regenerate`] directly.

use crate::config::{PlanetConfig, TerrainOptions};
use crate::error::{check_resolution, Result};
use crate::generation::generate;
use crate::mesh::{Mesh, MeshData};
use glam::Vec3;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// A generated planet and the parameters that produced it
///
/// # Examples
///
/// ```
/// use rust_icosphere_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .radius(10.0)
///     .resolution(2)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let mut planet = Planet::new(config).unwrap();
/// assert_eq!(planet.mesh().triangle_count(), 320);
///
/// // Edits are batched until the next update
/// planet.set_resolution(3).unwrap();
/// planet.set_radius(12.0);
/// assert!(planet.is_dirty());
/// assert!(planet.update().unwrap());
/// assert!(!planet.update().unwrap());
/// assert_eq!(planet.mesh().triangle_count(), 1280);
/// assert_eq!(planet.scale(), Vec3::splat(12.0));
/// ```
#[derive(Clone)]
pub struct Planet {
    /// Parameters for the next (or current) generation
    config: PlanetConfig,

    /// Unit-relative geometry from the last generation
    mesh: Mesh,

    /// Render buffers matching `mesh`
    mesh_data: MeshData,

    /// Set when a parameter changed since the last generation
    dirty: bool,

    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl Planet {
    /// Create a planet and generate its mesh immediately
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `config.resolution` is negative
    pub fn new(config: PlanetConfig) -> Result<Self> {
        let mesh = generate(config.resolution, &config.terrain)?;
        let mesh_data = MeshData::from_mesh(&mesh);

        #[cfg(feature = "spatial-index")]
        let spatial_index = SpatialIndex::new(&mesh.vertices);

        Ok(Self {
            config,
            mesh,
            mesh_data,
            dirty: false,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Rebuild the mesh from the current parameters
    ///
    /// Replaces the previous mesh, normals and lookup index wholesale. On
    /// error the previous mesh is kept and the planet stays dirty.
    pub fn regenerate(&mut self) -> Result<()> {
        let mesh = generate(self.config.resolution, &self.config.terrain)?;
        self.mesh_data = MeshData::from_mesh(&mesh);

        #[cfg(feature = "spatial-index")]
        {
            self.spatial_index = SpatialIndex::new(&mesh.vertices);
        }

        self.mesh = mesh;
        self.dirty = false;

        log::debug!(
            "Regenerated planet (radius {}, resolution {}): {} vertices",
            self.config.radius,
            self.config.resolution,
            self.mesh.vertex_count()
        );
        Ok(())
    }

    /// Regenerate if any parameter changed since the last generation
    ///
    /// Call once per tick; any number of edits in between cost one rebuild.
    /// Returns whether a rebuild happened.
    pub fn update(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        if let Err(err) = self.regenerate() {
            log::warn!("Planet regeneration failed: {}", err);
            return Err(err);
        }
        Ok(true)
    }

    /// Flag the planet for rebuild on the next [`update`](Self::update)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set the radius
    ///
    /// Radius only affects [`scale`](Self::scale); the mesh itself is unchanged
    /// by the rebuild this triggers.
    pub fn set_radius(&mut self, radius: f32) {
        if self.config.radius != radius {
            self.config.radius = radius;
            self.dirty = true;
        }
    }

    /// Set the subdivision resolution
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `resolution` is negative; the planet is
    /// left unchanged.
    pub fn set_resolution(&mut self, resolution: i32) -> Result<()> {
        check_resolution(resolution)?;
        if self.config.resolution != resolution {
            self.config.resolution = resolution;
            self.dirty = true;
        }
        Ok(())
    }

    /// Replace the terrain options
    pub fn set_terrain(&mut self, terrain: TerrainOptions) {
        if self.config.terrain != terrain {
            self.config.terrain = terrain;
            self.dirty = true;
        }
    }

    /// Get the current parameters
    #[inline]
    pub fn config(&self) -> &PlanetConfig {
        &self.config
    }

    /// Get the geometry from the last generation
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Get the render buffers from the last generation
    #[inline]
    pub fn mesh_data(&self) -> &MeshData {
        &self.mesh_data
    }

    /// Uniform scale for the host transform
    #[inline]
    pub fn scale(&self) -> Vec3 {
        Vec3::splat(self.config.radius)
    }

    /// World-space position of a vertex (mesh position scaled by radius)
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn world_position(&self, vertex: usize) -> Option<Vec3> {
        self.mesh.vertices.get(vertex).map(|&v| v * self.config.radius)
    }

    /// Find the vertex nearest to a world-space position (requires spatial-index feature)
    ///
    /// The position is divided by the radius before the lookup, since vertices
    /// are stored unscaled. A zero radius collapses every vertex to the origin
    /// and the result is vertex 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use rust_icosphere_planet::*;
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let config = PlanetConfigBuilder::new().radius(5.0).build().unwrap();
    /// let planet = Planet::new(config).unwrap();
    ///
    /// let hit = planet.world_position(17).unwrap();
    /// assert_eq!(planet.find_vertex_at(hit), 17);
    /// # }
    /// ```
    #[cfg(feature = "spatial-index")]
    pub fn find_vertex_at(&self, position: Vec3) -> usize {
        if self.config.radius == 0.0 {
            return 0;
        }
        self.spatial_index.find_nearest(position / self.config.radius)
    }
}
