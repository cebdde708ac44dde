//! Spatial indexing for exact nearest-seed lookups
//!
//! This module is only available with the `spatial-index` feature. The nearest
//! seed to a point is the owner of that point in the exact Voronoi diagram, which
//! is what the grown regions approximate.

#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;
#[cfg(feature = "spatial-index")]
use glam::Vec2;

/// Wrapper around a 2D KD-tree of seed positions
///
/// - Construction: O(n log n), once per initialization
/// - Query: O(log n)
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex").finish_non_exhaustive()
    }
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build the index from seed positions
    ///
    /// Returns `None` for an empty slice; there is nothing to look up.
    ///
    /// # Example
    ///
    /// ```
    /// use growvoronoi::*;
    ///
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let positions = vec![Vec2::new(1.5, 1.5), Vec2::new(-1.5, -1.5)];
    /// let index = SpatialIndex::new(&positions).unwrap();
    /// assert_eq!(index.find_nearest(Vec2::new(2.0, 0.5)), 0);
    /// # }
    /// ```
    pub fn new(positions: &[Vec2]) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }

        let points: Vec<[f32; 2]> = positions.iter().map(|p| [p.x, p.y]).collect();

        Some(Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        })
    }

    /// Index of the position nearest to `point`
    pub fn find_nearest(&self, point: Vec2) -> usize {
        let query = [point.x, point.y];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item as usize
    }
}
