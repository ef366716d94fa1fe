//! Spatial indexing for fast position-to-vertex lookups
//!
//! This module is only available with the `spatial-index` feature.

use glam::Vec3;
use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

/// Wrapper around KD-tree for nearest-vertex queries
///
/// Converts arbitrary 3D positions (raycast hits, clicks, unit positions)
/// into mesh vertex indices.
///
/// # Performance
///
/// - Construction: O(n log n), rebuilt once per regeneration
/// - Query: O(log n)
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 3, 32>,
}

impl SpatialIndex {
    /// Build spatial index from vertex positions
    ///
    /// # Example
    ///
    /// ```
    /// use rust_icosphere_planet::*;
    ///
    /// let points = vec![
    ///     Vec3::new(1.0, 0.0, 0.0),
    ///     Vec3::new(0.0, 1.0, 0.0),
    ///     Vec3::new(0.0, 0.0, 1.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&points);
    /// assert_eq!(index.find_nearest(Vec3::new(1.0, 0.1, 0.0)), 0);
    /// ```
    pub fn new(points: &[Vec3]) -> Self {
        let points: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Index of the point closest to `position`
    pub fn find_nearest(&self, position: Vec3) -> usize {
        let query = position.to_array();
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item
    }
}
