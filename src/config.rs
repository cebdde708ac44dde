//! Diagram Configuration and Builder
//!
//! Dimensions and growth parameters for a simulation run. Seeds are supplied
//! separately when the engine is initialized.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::boundary::RectBoundary;
use crate::error::{GrowthError, Result};
use crate::region::{DEFAULT_INITIAL_RADIUS, MIN_SEGMENT_COUNT};

/// Default diagram width in world units
pub const DEFAULT_WIDTH: f32 = 12.0;

/// Default diagram height in world units
pub const DEFAULT_HEIGHT: f32 = 7.0;

/// Default distance each active vertex travels per step
pub const DEFAULT_STEP_DISTANCE: f32 = 0.01;

/// Default ring resolution for seeds built from this config
pub const DEFAULT_SEGMENT_COUNT: usize = 128;

/// Configuration of one growth simulation
///
/// The boundary is a `width` x `height` rectangle centred on the origin.
///
/// # Example
///
/// ```rust
/// use growvoronoi::*;
///
/// let config = DiagramConfigBuilder::new()
///     .dimensions(8.0, 6.0)
///     .unwrap()
///     .step_distance(0.02)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.width, 8.0);
/// assert!(config.step_budget() >= 500);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    /// Boundary width
    pub width: f32,

    /// Boundary height
    pub height: f32,

    /// Outward displacement applied to each active vertex per step
    ///
    /// Smaller steps give a tighter approximation of the Voronoi edges but need
    /// proportionally more steps to converge.
    pub step_distance: f32,

    /// Radius of each region's initial ring
    ///
    /// Must stay well below the expected spacing between seeds, otherwise
    /// neighbouring rings start out overlapping.
    pub initial_radius: f32,

    /// Segment count used by [`DiagramConfig::seed`]
    pub segment_count: usize,
}

impl DiagramConfig {
    /// The rectangle boundary described by this configuration
    pub fn boundary(&self) -> Result<RectBoundary> {
        RectBoundary::new(self.width, self.height)
    }

    /// A step count that always suffices for convergence
    ///
    /// No vertex can travel further than the boundary diagonal before leaving it,
    /// so `diagonal / step_distance` steps (plus one for the final freeze) bound
    /// the run.
    pub fn step_budget(&self) -> usize {
        let diagonal = (self.width * self.width + self.height * self.height).sqrt();
        (diagonal / self.step_distance).ceil() as usize + 1
    }

    /// Build a seed using this configuration's segment count
    pub fn seed<T>(&self, x: f32, y: f32, payload: T) -> crate::Seed<T> {
        crate::Seed::new(glam::Vec2::new(x, y), self.segment_count, payload)
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            step_distance: DEFAULT_STEP_DISTANCE,
            initial_radius: DEFAULT_INITIAL_RADIUS,
            segment_count: DEFAULT_SEGMENT_COUNT,
        }
    }
}

/// Builder for creating DiagramConfig with validation
///
/// Every setter that can receive an invalid value returns `Result<Self>`, so a
/// built configuration is always usable.
///
/// # Example
///
/// ```rust
/// use growvoronoi::*;
///
/// // Defaults: 12 x 7, step 0.01, 128 segments
/// let config = DiagramConfigBuilder::new().build().unwrap();
/// assert_eq!(config.segment_count, 128);
///
/// // Rejected
/// assert!(DiagramConfigBuilder::new().segment_count(2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DiagramConfigBuilder {
    width: f32,
    height: f32,
    step_distance: f32,
    initial_radius: f32,
    segment_count: usize,
}

impl DiagramConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - dimensions: 12 x 7
    /// - step_distance: 0.01
    /// - initial_radius: 0.05
    /// - segment_count: 128
    pub fn new() -> Self {
        let defaults = DiagramConfig::default();
        Self {
            width: defaults.width,
            height: defaults.height,
            step_distance: defaults.step_distance,
            initial_radius: defaults.initial_radius,
            segment_count: defaults.segment_count,
        }
    }

    /// Set the boundary dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if either dimension is not positive
    pub fn dimensions(mut self, width: f32, height: f32) -> Result<Self> {
        if !(positive(width) && positive(height)) {
            return Err(GrowthError::invalid(format!(
                "diagram dimensions must be positive (got {} x {})",
                width, height
            )));
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    /// Set the per-step growth distance
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if distance <= 0.0
    pub fn step_distance(mut self, distance: f32) -> Result<Self> {
        if !positive(distance) {
            return Err(GrowthError::invalid(format!(
                "step distance must be positive (got {})",
                distance
            )));
        }
        self.step_distance = distance;
        Ok(self)
    }

    /// Set the radius of the initial ring around each seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if radius <= 0.0
    pub fn initial_radius(mut self, radius: f32) -> Result<Self> {
        if !positive(radius) {
            return Err(GrowthError::invalid(format!(
                "initial radius must be positive (got {})",
                radius
            )));
        }
        self.initial_radius = radius;
        Ok(self)
    }

    /// Set the ring resolution used for seeds created through the config
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if count < 3
    pub fn segment_count(mut self, count: usize) -> Result<Self> {
        if count < MIN_SEGMENT_COUNT {
            return Err(GrowthError::invalid(format!(
                "segment count must be >= {} (got {})",
                MIN_SEGMENT_COUNT, count
            )));
        }
        self.segment_count = count;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the initial ring would not fit in the boundary
    pub fn build(self) -> Result<DiagramConfig> {
        if self.initial_radius * 2.0 >= self.width.min(self.height) {
            return Err(GrowthError::invalid(format!(
                "initial radius {} does not fit a {} x {} diagram",
                self.initial_radius, self.width, self.height
            )));
        }

        Ok(DiagramConfig {
            width: self.width,
            height: self.height,
            step_distance: self.step_distance,
            initial_radius: self.initial_radius,
            segment_count: self.segment_count,
        })
    }
}

impl Default for DiagramConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}
