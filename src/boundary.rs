//! Diagram boundaries
//!
//! The boundary is the fixed outer shape every region is confined to. It is
//! only ever asked one question: does it contain a world-space point?

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GrowthError, Result};
use crate::geometry::{point_in_ring, point_on_segment, ring_area};

/// Distance within which a point counts as lying on a polygon edge
const EDGE_EPSILON: f32 = 1e-5;

/// Outer shape constraining all region growth
///
/// Implementations must be pure: the same point always gives the same answer
/// for the lifetime of a simulation run.
pub trait Boundary: std::fmt::Debug {
    /// Whether `point` (in diagram coordinates) is inside the boundary, edges included
    fn contains(&self, point: Vec2) -> bool;
}

/// Axis-aligned rectangle centred on the diagram origin
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectBoundary {
    half_extents: Vec2,
}

impl RectBoundary {
    /// Create a `width` x `height` rectangle centred on the origin
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either dimension is not a positive finite number
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(GrowthError::invalid(format!(
                "boundary dimensions must be positive (got {} x {})",
                width, height
            )));
        }
        Ok(Self {
            half_extents: Vec2::new(width * 0.5, height * 0.5),
        })
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half_extents.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }

    /// Length of the rectangle diagonal, the longest straight run inside it
    pub fn diagonal(&self) -> f32 {
        self.half_extents.length() * 2.0
    }
}

impl Boundary for RectBoundary {
    #[inline]
    fn contains(&self, point: Vec2) -> bool {
        point.x.abs() <= self.half_extents.x && point.y.abs() <= self.half_extents.y
    }
}

/// Arbitrary simple polygon boundary
///
/// Uses the crossing-number test; points lying on an edge are treated as
/// contained so the polygon is closed, like [`RectBoundary`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonBoundary {
    vertices: Vec<Vec2>,
}

impl PolygonBoundary {
    /// Create a boundary from a closed ring of vertices (no duplicated closing vertex)
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for fewer than 3 vertices, non-finite
    /// coordinates, or a ring with no area
    pub fn new(vertices: Vec<Vec2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GrowthError::invalid(format!(
                "polygon boundary needs at least 3 vertices (got {})",
                vertices.len()
            )));
        }
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(GrowthError::invalid("polygon boundary has non-finite vertices"));
        }
        if ring_area(&vertices) <= f32::EPSILON {
            return Err(GrowthError::invalid("polygon boundary has zero area"));
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    fn on_edge(&self, point: Vec2) -> bool {
        let n = self.vertices.len();
        (0..n).any(|i| {
            point_on_segment(point, self.vertices[i], self.vertices[(i + 1) % n], EDGE_EPSILON)
        })
    }
}

impl From<RectBoundary> for PolygonBoundary {
    fn from(rect: RectBoundary) -> Self {
        let h = rect.half_extents;
        Self {
            vertices: vec![
                Vec2::new(-h.x, -h.y),
                Vec2::new(h.x, -h.y),
                Vec2::new(h.x, h.y),
                Vec2::new(-h.x, h.y),
            ],
        }
    }
}

impl Boundary for PolygonBoundary {
    fn contains(&self, point: Vec2) -> bool {
        point_in_ring(point, &self.vertices) || self.on_edge(point)
    }
}
