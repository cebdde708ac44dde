//! Voronoi diagrams by simultaneous region growth
//!
//! Instead of computing cells analytically, every seed grows a star-shaped
//! polygon (a triangle fan) outward one step at a time. A vertex stops for good
//! when its next position would leave the diagram boundary or enter another
//! region. Once every vertex has stopped, the polygons approximate the Voronoi
//! cells to within a few step distances.
//!
//! The crate only simulates; drawing is left to the host, which can rebuild a
//! mesh from the region vertex buffers after every step.
//!
//! # Quick Start
//!
//! ```rust
//! use growvoronoi::*;
//!
//! let config = DiagramConfigBuilder::new()
//!     .step_distance(0.05)
//!     .unwrap()
//!     .segment_count(48)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let seeds: Vec<Seed<Rgba>> = vec![
//!     config.seed(1.5, 1.5, [1.0, 0.0, 0.0, 1.0]),
//!     config.seed(-1.5, -1.5, [0.0, 0.0, 1.0, 1.0]),
//! ];
//! let mut engine = GrowthEngine::initialize(&config, seeds).unwrap();
//!
//! // Drive it once per frame, rebuilding the mesh as it grows
//! while !engine.step().converged {
//!     let mesh = generate_mesh(&engine, &PayloadColorMapper);
//!     assert_eq!(mesh.triangle_count(), 96);
//! }
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): exact nearest-seed lookups using a KD-tree
//! - `serde`: serialization support for configuration and seeds

// Modules
pub mod error;
pub mod geometry;
pub mod seed;
pub mod boundary;
pub mod region;
pub mod config;
pub mod engine;
pub mod mesh;
pub mod scatter;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{GrowthError, Result};
pub use seed::{Rgba, Seed, SeedId};
pub use boundary::{Boundary, PolygonBoundary, RectBoundary};
pub use region::{FreezeCause, Frontier, GrowthPlan, GrowthTally, Region, VertexOutcome, VertexState};
pub use config::{DiagramConfig, DiagramConfigBuilder};
pub use engine::{ConvergenceReport, GrowthEngine, StepReport};
pub use mesh::{generate_mesh, region_mesh, ColorMapper, FnColorMapper, MeshData, PayloadColorMapper, UniformColorMapper};
pub use scatter::scatter_seeds;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
