//! GrowthEngine: advancing every region together
//!
//! The engine owns the boundary and the full region set of one simulation run.
//! Each [`GrowthEngine::step`] evaluates every active vertex against a snapshot of
//! the region set taken at the start of the step, then writes all results at once,
//! so growth does not depend on the order regions are stored in.

use std::collections::HashSet;
use std::sync::Arc;

use glam::Vec2;
use log::{debug, info, trace, warn};

use crate::boundary::{Boundary, RectBoundary};
use crate::config::DiagramConfig;
use crate::error::{GrowthError, Result};
use crate::region::{Frontier, GrowthPlan, GrowthTally, Region};
use crate::seed::{Seed, SeedId};

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// What happened during one call to [`GrowthEngine::step`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Total steps taken by the engine after this call
    pub step: usize,
    /// Vertices that moved outward
    pub advanced: usize,
    /// Vertices frozen because they would have left the boundary
    pub frozen_by_boundary: usize,
    /// Vertices frozen because they would have entered another region
    pub frozen_by_collision: usize,
    /// Whether every vertex of every region is now frozen
    pub converged: bool,
}

impl StepReport {
    /// Whether the step changed any region
    #[inline]
    pub fn changed(&self) -> bool {
        self.advanced + self.frozen_by_boundary + self.frozen_by_collision > 0
    }
}

/// Outcome of a successful [`GrowthEngine::run_to_convergence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvergenceReport {
    /// Steps taken by this call
    pub steps: usize,
    /// Steps taken since initialization
    pub total_steps: usize,
}

/// Simultaneous region growth over a fixed boundary
///
/// Generic over the seed payload `T` and the boundary shape `B`
/// (an origin-centred rectangle unless specified).
///
/// # Examples
///
/// ```
/// use growvoronoi::*;
///
/// let config = DiagramConfigBuilder::new()
///     .step_distance(0.05)
///     .unwrap()
///     .segment_count(32)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let seeds = vec![
///     config.seed(1.5, 1.5, [1.0, 0.0, 0.0, 1.0]),
///     config.seed(-1.5, -1.5, [0.0, 0.0, 1.0, 1.0]),
/// ];
///
/// let mut engine = GrowthEngine::initialize(&config, seeds).unwrap();
///
/// // One step per frame...
/// let report = engine.step();
/// assert!(report.advanced > 0);
///
/// // ...or all at once
/// engine.run_to_convergence(config.step_budget()).unwrap();
/// assert!(engine.is_converged());
/// ```
#[derive(Debug)]
pub struct GrowthEngine<T, B = RectBoundary> {
    boundary: B,
    seeds: Vec<Arc<Seed<T>>>,
    regions: Vec<Region<T>>,
    step_distance: f32,
    initial_radius: f32,
    steps_taken: usize,

    #[cfg(feature = "spatial-index")]
    spatial_index: Option<SpatialIndex>,
}

impl<T> GrowthEngine<T, RectBoundary> {
    /// Initialize a diagram with the rectangle boundary described by `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for non-positive dimensions, step distance or
    /// initial radius, seeds with fewer than 3 segments, or duplicate seed ids. Nothing is built
    /// on failure.
    pub fn initialize(config: &DiagramConfig, seeds: Vec<Seed<T>>) -> Result<Self> {
        let boundary = config.boundary()?;
        Self::with_boundary(boundary, seeds, config.step_distance, config.initial_radius)
    }
}

impl<T, B: Boundary> GrowthEngine<T, B> {
    /// Initialize a diagram over an arbitrary boundary
    ///
    /// # Errors
    ///
    /// Same as [`GrowthEngine::initialize`]
    pub fn with_boundary(
        boundary: B,
        seeds: Vec<Seed<T>>,
        step_distance: f32,
        initial_radius: f32,
    ) -> Result<Self> {
        if !(step_distance.is_finite() && step_distance > 0.0) {
            return Err(GrowthError::invalid(format!(
                "step distance must be positive (got {})",
                step_distance
            )));
        }
        if !(initial_radius.is_finite() && initial_radius > 0.0) {
            return Err(GrowthError::invalid(format!(
                "initial radius must be positive (got {})",
                initial_radius
            )));
        }

        let seeds: Vec<Arc<Seed<T>>> = seeds.into_iter().map(Arc::new).collect();
        let regions = build_regions(&seeds, &boundary, initial_radius)?;

        debug!(
            "initialized {} regions ({} vertices), step distance {}",
            regions.len(),
            regions.iter().map(Region::segment_count).sum::<usize>(),
            step_distance
        );

        #[cfg(feature = "spatial-index")]
        let spatial_index = index_seeds(&seeds);

        Ok(Self {
            boundary,
            seeds,
            regions,
            step_distance,
            initial_radius,
            steps_taken: 0,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Replace the seed list, discarding every existing region
    ///
    /// The new region set is built in full before anything is replaced, so on
    /// error the engine keeps its previous state.
    pub fn reinitialize(&mut self, seeds: Vec<Seed<T>>) -> Result<()> {
        let seeds: Vec<Arc<Seed<T>>> = seeds.into_iter().map(Arc::new).collect();
        let regions = build_regions(&seeds, &self.boundary, self.initial_radius)?;

        debug!(
            "reinitialized: {} regions replace {}",
            regions.len(),
            self.regions.len()
        );

        #[cfg(feature = "spatial-index")]
        {
            self.spatial_index = index_seeds(&seeds);
        }
        self.seeds = seeds;
        self.regions = regions;
        self.steps_taken = 0;
        Ok(())
    }

    /// Regrow from the current seeds, back to the initial rings
    pub fn reset(&mut self) -> Result<()> {
        self.regions = build_regions(&self.seeds, &self.boundary, self.initial_radius)?;
        self.steps_taken = 0;
        Ok(())
    }

    /// Advance every active vertex of every region by one step
    ///
    /// All boundary and collision tests read the region set as it was when the
    /// call began, together with where every active vertex could reach by the
    /// end of the step; updates are written only after every region has been
    /// planned. Calling this on a converged engine changes nothing.
    pub fn step(&mut self) -> StepReport {
        if self.is_converged() {
            return StepReport {
                step: self.steps_taken,
                converged: true,
                ..StepReport::default()
            };
        }

        let distance = self.step_distance;
        let snapshot: Vec<Frontier> = self.regions.iter().map(|r| r.frontier(distance)).collect();
        let plans: Vec<GrowthPlan> = self
            .regions
            .iter()
            .map(|region| region.plan_growth(distance, &self.boundary, &snapshot))
            .collect();

        let mut tally = GrowthTally::default();
        for (region, plan) in self.regions.iter_mut().zip(&plans) {
            tally.absorb(region.apply_plan(plan));
        }

        self.steps_taken += 1;
        let converged = self.is_converged();

        trace!(
            "step {}: advanced={}, boundary={}, collision={}, converged={}",
            self.steps_taken,
            tally.advanced,
            tally.frozen_by_boundary,
            tally.frozen_by_collision,
            converged
        );

        StepReport {
            step: self.steps_taken,
            advanced: tally.advanced,
            frozen_by_boundary: tally.frozen_by_boundary,
            frozen_by_collision: tally.frozen_by_collision,
            converged,
        }
    }

    /// Step until every vertex is frozen or `max_steps` have been taken
    ///
    /// # Errors
    ///
    /// Returns `DidNotConverge` when the budget runs out first. This is not fatal:
    /// the regions stay valid and stepping can continue.
    pub fn run_to_convergence(&mut self, max_steps: usize) -> Result<ConvergenceReport> {
        let mut steps = 0;

        while !self.is_converged() {
            if steps == max_steps {
                warn!(
                    "not converged after {} steps ({:.1}% of vertices frozen)",
                    steps,
                    self.progress() * 100.0
                );
                return Err(GrowthError::DidNotConverge { steps });
            }
            self.step();
            steps += 1;
        }

        info!(
            "converged: {} regions after {} steps ({} total)",
            self.regions.len(),
            steps,
            self.steps_taken
        );

        Ok(ConvergenceReport {
            steps,
            total_steps: self.steps_taken,
        })
    }

    /// True iff every outer vertex of every region is frozen
    pub fn is_converged(&self) -> bool {
        self.regions.iter().all(Region::is_converged)
    }

    /// Fraction of outer vertices frozen so far, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        let total: usize = self.regions.iter().map(Region::segment_count).sum();
        if total == 0 {
            return 1.0;
        }
        let frozen: usize = self.regions.iter().map(Region::frozen_count).sum();
        frozen as f32 / total as f32
    }

    #[inline]
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    #[inline]
    pub fn step_distance(&self) -> f32 {
        self.step_distance
    }

    #[inline]
    pub fn initial_radius(&self) -> f32 {
        self.initial_radius
    }

    #[inline]
    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Seeds of the current run, in region order
    #[inline]
    pub fn seeds(&self) -> &[Arc<Seed<T>>] {
        &self.seeds
    }

    /// All regions, in seed order
    #[inline]
    pub fn regions(&self) -> &[Region<T>] {
        &self.regions
    }

    #[inline]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Region grown from the seed with this id
    pub fn get_region(&self, id: SeedId) -> Option<&Region<T>> {
        self.regions.iter().find(|r| r.id() == id)
    }

    /// Like [`GrowthEngine::get_region`], for callers that treat a miss as an error
    pub fn region(&self, id: SeedId) -> Result<&Region<T>> {
        self.get_region(id).ok_or(GrowthError::RegionNotFound(id))
    }

    /// First region whose current polygon contains `point`
    ///
    /// Before convergence, and in the thin gaps the discretization leaves between
    /// neighbours, a point may belong to no region.
    pub fn region_at(&self, point: Vec2) -> Option<&Region<T>> {
        self.regions.iter().find(|r| r.contains(point))
    }

    /// Seed that owns `point` in the exact Voronoi diagram (requires spatial-index feature)
    ///
    /// Useful for measuring how closely the grown regions approximate the true cells.
    #[cfg(feature = "spatial-index")]
    pub fn nearest_seed(&self, point: Vec2) -> Option<SeedId> {
        let index = self.spatial_index.as_ref()?;
        Some(self.seeds[index.find_nearest(point)].id)
    }
}

fn build_regions<T, B: Boundary>(
    seeds: &[Arc<Seed<T>>],
    boundary: &B,
    initial_radius: f32,
) -> Result<Vec<Region<T>>> {
    let mut ids = HashSet::with_capacity(seeds.len());
    for seed in seeds {
        if !ids.insert(seed.id) {
            return Err(GrowthError::invalid(format!("duplicate seed id {}", seed.id)));
        }
    }

    let regions = seeds
        .iter()
        .map(|seed| Region::new(Arc::clone(seed), initial_radius))
        .collect::<Result<Vec<_>>>()?;

    for seed in seeds {
        if !boundary.contains(seed.position) {
            warn!("seed {} at {} lies outside the boundary", seed.id, seed.position);
        }
    }

    Ok(regions)
}

#[cfg(feature = "spatial-index")]
fn index_seeds<T>(seeds: &[Arc<Seed<T>>]) -> Option<SpatialIndex> {
    let positions: Vec<Vec2> = seeds.iter().map(|s| s.position).collect();
    SpatialIndex::new(&positions)
}
