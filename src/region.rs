//! Growing region polygons
//!
//! A region is the mutable growth state of one seed: a triangle fan whose centre
//! (vertex 0) sits on the seed and whose outer ring (vertices `1..=N`) is pushed
//! outward step by step until each vertex hits the boundary or a sibling region.

use std::f32::consts::TAU;
use std::sync::Arc;

use glam::Vec2;

use crate::boundary::Boundary;
use crate::error::{GrowthError, Result};
use crate::geometry::{point_in_ring, point_in_triangle, ring_area};
use crate::seed::{Seed, SeedId};

/// Radius of the initial ring around each seed
pub const DEFAULT_INITIAL_RADIUS: f32 = 0.05;

/// Smallest ring that still encloses area
pub const MIN_SEGMENT_COUNT: usize = 3;

/// Why an outer vertex stopped growing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FreezeCause {
    /// The next position would leave the diagram boundary
    Boundary,
    /// The next position would land inside the region grown from this seed,
    /// or the move would sweep over one of its vertices
    Collision(SeedId),
}

/// Growth state of a single outer vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexState {
    Active,
    Frozen(FreezeCause),
}

impl VertexState {
    #[inline]
    pub fn is_frozen(self) -> bool {
        matches!(self, VertexState::Frozen(_))
    }
}

/// Result of evaluating one growth step for one vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexOutcome {
    /// The vertex moves to this local position
    Advanced(Vec2),
    /// The vertex freezes where it is
    Froze(FreezeCause),
    /// The vertex was already frozen; nothing changes
    AlreadyFrozen,
}

/// Outcomes for every active vertex of one region, computed from a read-only snapshot
///
/// Produced by [`Region::plan_growth`] and consumed by [`Region::apply_growth`].
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthPlan {
    region: SeedId,
    outcomes: Vec<(usize, VertexOutcome)>,
}

impl GrowthPlan {
    /// Seed of the region this plan was computed for
    #[inline]
    pub fn region(&self) -> SeedId {
        self.region
    }

    /// `(outer index, outcome)` pairs, one per vertex that was active when planned
    #[inline]
    pub fn outcomes(&self) -> &[(usize, VertexOutcome)] {
        &self.outcomes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Vertex counts produced by applying a [`GrowthPlan`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthTally {
    pub advanced: usize,
    pub frozen_by_boundary: usize,
    pub frozen_by_collision: usize,
}

impl GrowthTally {
    pub(crate) fn absorb(&mut self, other: GrowthTally) {
        self.advanced += other.advanced;
        self.frozen_by_boundary += other.frozen_by_boundary;
        self.frozen_by_collision += other.frozen_by_collision;
    }
}

/// Read-only view of one region for a single growth step
///
/// Holds the outer ring as it is now and as it would be if every active vertex
/// advanced, both in world space. Vertices only move outward along fixed rays,
/// so whatever the region actually becomes after the step lies inside `reach`.
#[derive(Debug, Clone)]
pub struct Frontier {
    id: SeedId,
    origin: Vec2,
    current: Box<[Vec2]>,
    reach: Box<[Vec2]>,
    radius: f32,
}

impl Frontier {
    /// Seed of the region this frontier was taken from
    #[inline]
    pub fn id(&self) -> SeedId {
        self.id
    }

    /// Outer ring after a full advance, in world coordinates
    #[inline]
    pub fn reach(&self) -> &[Vec2] {
        &self.reach
    }

    /// Whether `world` lies inside the fully advanced ring
    pub fn encloses(&self, world: Vec2) -> bool {
        world.distance_squared(self.origin) <= self.radius * self.radius
            && point_in_ring(world, &self.reach)
    }

    /// Whether any vertex of this region, before or after a full advance, lies in
    /// the fan triangles `(centre, prev, tip)` and `(centre, tip, next)`
    fn intrudes(&self, centre: Vec2, prev: Vec2, tip: Vec2, next: Vec2) -> bool {
        let min = centre.min(prev).min(tip).min(next);
        let max = centre.max(prev).max(tip).max(next);
        let extent = (max - min).length();
        if self.origin.distance(centre) > self.radius + extent {
            return false;
        }

        self.current.iter().chain(self.reach.iter()).any(|&p| {
            p.cmpge(min).all()
                && p.cmple(max).all()
                && (point_in_triangle(p, centre, prev, tip) || point_in_triangle(p, centre, tip, next))
        })
    }
}

/// The growing polygon of one seed
///
/// Vertex positions are local to the seed: world position = `seed.position + vertex`.
/// All buffers are sized once from the seed's segment count and never resized.
///
/// # Invariants
///
/// - `vertices[0]` is `(0, 0)` and never moves
/// - once an outer vertex is frozen it stays frozen and its position never changes
/// - outer vertices only ever move along the ray from the centre through their
///   initial position
#[derive(Debug)]
pub struct Region<T> {
    seed: Arc<Seed<T>>,
    vertices: Box<[Vec2]>,
    directions: Box<[Vec2]>,
    states: Box<[VertexState]>,
}

impl<T> Clone for Region<T> {
    fn clone(&self) -> Self {
        Self {
            seed: Arc::clone(&self.seed),
            vertices: self.vertices.clone(),
            directions: self.directions.clone(),
            states: self.states.clone(),
        }
    }
}

impl<T> Region<T> {
    /// Build the initial fan for `seed`
    ///
    /// The outer ring is placed on a circle of `initial_radius` at angles
    /// `-(i - 1) * 2π / N` for `i = 1..=N`, i.e. stepping clockwise from +x.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the seed has fewer than 3 segments or
    /// `initial_radius` is not positive
    pub fn new(seed: Arc<Seed<T>>, initial_radius: f32) -> Result<Self> {
        let segments = seed.segment_count;
        if segments < MIN_SEGMENT_COUNT {
            return Err(GrowthError::invalid(format!(
                "segment count must be >= {} (got {})",
                MIN_SEGMENT_COUNT, segments
            )));
        }
        if !(initial_radius.is_finite() && initial_radius > 0.0) {
            return Err(GrowthError::invalid(format!(
                "initial radius must be positive (got {})",
                initial_radius
            )));
        }
        if !seed.position.is_finite() {
            return Err(GrowthError::invalid(format!(
                "seed {} has a non-finite position",
                seed.id
            )));
        }

        let step = TAU / segments as f32;
        let directions: Box<[Vec2]> = (0..segments)
            .map(|k| {
                let angle = -(k as f32) * step;
                Vec2::new(angle.cos(), angle.sin())
            })
            .collect();
        let vertices: Box<[Vec2]> = std::iter::once(Vec2::ZERO)
            .chain(directions.iter().map(|d| *d * initial_radius))
            .collect();

        Ok(Self {
            seed,
            vertices,
            directions,
            states: vec![VertexState::Active; segments].into_boxed_slice(),
        })
    }

    #[inline]
    pub fn id(&self) -> SeedId {
        self.seed.id
    }

    #[inline]
    pub fn seed(&self) -> &Arc<Seed<T>> {
        &self.seed
    }

    /// Seed position, the world-space origin of this region's vertices
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.seed.position
    }

    #[inline]
    pub fn payload(&self) -> &T {
        &self.seed.payload
    }

    /// Number of outer ring vertices
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.states.len()
    }

    /// All vertices in local coordinates, centre first
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// The outer ring in local coordinates
    #[inline]
    pub fn outer_vertices(&self) -> &[Vec2] {
        &self.vertices[1..]
    }

    /// All vertices in world coordinates, centre first
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        let origin = self.seed.position;
        self.vertices.iter().map(move |v| origin + *v)
    }

    /// Local position of vertex `i` (0 is the centre)
    #[inline]
    pub fn vertex(&self, i: usize) -> Option<Vec2> {
        self.vertices.get(i).copied()
    }

    /// Unit direction outer vertex `i` grows along
    #[inline]
    pub fn direction(&self, i: usize) -> Option<Vec2> {
        i.checked_sub(1).and_then(|k| self.directions.get(k)).copied()
    }

    /// State of outer vertex `i` (`1..=segment_count`)
    #[inline]
    pub fn vertex_state(&self, i: usize) -> Option<VertexState> {
        i.checked_sub(1).and_then(|k| self.states.get(k)).copied()
    }

    /// Whether outer vertex `i` is frozen; out-of-range indices are not
    #[inline]
    pub fn is_frozen(&self, i: usize) -> bool {
        self.vertex_state(i).is_some_and(VertexState::is_frozen)
    }

    /// Frozen flag of every outer vertex, in ring order
    pub fn frozen_flags(&self) -> impl Iterator<Item = bool> + '_ {
        self.states.iter().map(|s| s.is_frozen())
    }

    pub fn active_count(&self) -> usize {
        self.states.iter().filter(|s| !s.is_frozen()).count()
    }

    pub fn frozen_count(&self) -> usize {
        self.segment_count() - self.active_count()
    }

    /// True once every outer vertex is frozen
    pub fn is_converged(&self) -> bool {
        self.states.iter().all(|s| s.is_frozen())
    }

    /// Area enclosed by the outer ring
    pub fn area(&self) -> f32 {
        ring_area(self.outer_vertices())
    }

    /// Whether a world-space point lies inside the outer ring
    ///
    /// Even–odd test over this region's own vertex buffer; nothing else is consulted.
    pub fn contains(&self, world: Vec2) -> bool {
        point_in_ring(world - self.seed.position, self.outer_vertices())
    }

    /// Triangle fan over the vertex buffer: `[0, i, i % N + 1]` for `i = 1..=N`
    ///
    /// The last triangle wraps from the final outer vertex back to the first.
    pub fn fan_triangles(&self) -> impl Iterator<Item = [u32; 3]> {
        let n = self.segment_count() as u32;
        (1..=n).map(move |i| [0, i, i % n + 1])
    }

    fn check_outer_index(&self, i: usize) -> Result<()> {
        if i == 0 || i > self.segment_count() {
            return Err(GrowthError::InvalidVertex {
                index: i,
                segment_count: self.segment_count(),
            });
        }
        Ok(())
    }

    /// Local position of outer vertex `k` (0-based) after advancing, if active
    fn tentative(&self, k: usize, distance: f32) -> Vec2 {
        let current = self.vertices[k + 1];
        if self.states[k].is_frozen() {
            current
        } else {
            current + self.directions[k] * distance
        }
    }

    /// Snapshot of this region for one growth step of `distance`
    pub fn frontier(&self, distance: f32) -> Frontier {
        let origin = self.seed.position;
        let current: Box<[Vec2]> = self.world_vertices().skip(1).collect();
        let reach: Box<[Vec2]> = (0..self.segment_count())
            .map(|k| origin + self.tentative(k, distance))
            .collect();
        let radius = reach
            .iter()
            .map(|p| p.distance(origin))
            .fold(0.0, f32::max);

        Frontier {
            id: self.id(),
            origin,
            current,
            reach,
            radius,
        }
    }

    /// Decide what growth step `i` would take, reading only current state
    ///
    /// A move is refused if the new position falls inside any sibling's fully
    /// advanced ring, or if the two fan triangles it widens (taken with both
    /// neighbours advanced) would cover a sibling vertex at either its current
    /// or its advanced position. Starting from disjoint rings, no outer vertex
    /// then ever ends up inside another region, whatever the siblings do in
    /// the same step.
    fn plan_vertex<B>(
        &self,
        i: usize,
        distance: f32,
        boundary: &B,
        siblings: &[Frontier],
    ) -> VertexOutcome
    where
        B: Boundary + ?Sized,
    {
        let k = i - 1;
        if self.states[k].is_frozen() {
            return VertexOutcome::AlreadyFrozen;
        }

        let candidate = self.tentative(k, distance);
        let origin = self.seed.position;
        let tip = origin + candidate;

        // Boundary first: a vertex leaving the diagram freezes even if it would
        // also have entered a sibling.
        if !boundary.contains(tip) {
            return VertexOutcome::Froze(FreezeCause::Boundary);
        }

        let n = self.segment_count();
        let prev = origin + self.tentative((k + n - 1) % n, distance);
        let next = origin + self.tentative((k + 1) % n, distance);

        if let Some(other) = siblings.iter().find(|f| {
            f.id != self.id() && (f.encloses(tip) || f.intrudes(origin, prev, tip, next))
        }) {
            return VertexOutcome::Froze(FreezeCause::Collision(other.id));
        }

        VertexOutcome::Advanced(candidate)
    }

    fn apply_vertex(&mut self, i: usize, outcome: VertexOutcome, tally: &mut GrowthTally) {
        if self.states[i - 1].is_frozen() {
            return;
        }
        match outcome {
            VertexOutcome::Advanced(p) => {
                self.vertices[i] = p;
                tally.advanced += 1;
            }
            VertexOutcome::Froze(cause) => {
                self.states[i - 1] = VertexState::Frozen(cause);
                match cause {
                    FreezeCause::Boundary => tally.frozen_by_boundary += 1,
                    FreezeCause::Collision(_) => tally.frozen_by_collision += 1,
                }
            }
            VertexOutcome::AlreadyFrozen => {}
        }
    }

    /// Advance a single outer vertex by `distance`
    ///
    /// Moves vertex `i` outward along its ray unless the new position would leave
    /// `boundary` or collide with a region in `siblings` other than this one (by
    /// seed id); in either case the vertex freezes in place instead. Siblings are
    /// taken to be advancing by the same `distance` (see [`Region::frontier`]).
    ///
    /// `siblings` is read as-is. When every region is stepped together, pass a
    /// snapshot taken before the step (see [`GrowthEngine::step`](crate::GrowthEngine::step)).
    ///
    /// # Errors
    ///
    /// Returns `InvalidVertex` unless `1 <= i <= segment_count`
    pub fn expand_vertex<B>(
        &mut self,
        i: usize,
        distance: f32,
        boundary: &B,
        siblings: &[Region<T>],
    ) -> Result<VertexOutcome>
    where
        B: Boundary + ?Sized,
    {
        self.check_outer_index(i)?;
        let frontiers: Vec<Frontier> = siblings
            .iter()
            .filter(|r| r.id() != self.id())
            .map(|r| r.frontier(distance))
            .collect();
        let outcome = self.plan_vertex(i, distance, boundary, &frontiers);
        self.apply_vertex(i, outcome, &mut GrowthTally::default());
        Ok(outcome)
    }

    /// Evaluate one growth step for every active vertex without mutating anything
    ///
    /// `snapshot` holds the frontiers of every region taken before the step; this
    /// region's own entry is skipped by id.
    pub fn plan_growth<B>(&self, distance: f32, boundary: &B, snapshot: &[Frontier]) -> GrowthPlan
    where
        B: Boundary + ?Sized,
    {
        let outcomes = (1..=self.segment_count())
            .filter(|&i| !self.states[i - 1].is_frozen())
            .map(|i| (i, self.plan_vertex(i, distance, boundary, snapshot)))
            .collect();

        GrowthPlan {
            region: self.id(),
            outcomes,
        }
    }

    /// Write a plan computed by [`Region::plan_growth`]
    ///
    /// # Errors
    ///
    /// Returns `RegionNotFound` if the plan was computed for a different region
    pub fn apply_growth(&mut self, plan: &GrowthPlan) -> Result<GrowthTally> {
        if plan.region != self.id() {
            return Err(GrowthError::RegionNotFound(plan.region));
        }
        Ok(self.apply_plan(plan))
    }

    pub(crate) fn apply_plan(&mut self, plan: &GrowthPlan) -> GrowthTally {
        let mut tally = GrowthTally::default();
        for &(i, outcome) in &plan.outcomes {
            self.apply_vertex(i, outcome, &mut tally);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::RectBoundary;
    use approx::assert_relative_eq;

    fn seed_at(raw: u128, x: f32, y: f32, segments: usize) -> Arc<Seed<()>> {
        Arc::new(Seed::with_id(SeedId::from_raw(raw), Vec2::new(x, y), segments, ()))
    }

    #[test]
    fn test_segment_count_validation() {
        let err = Region::new(seed_at(1, 0.0, 0.0, 2), DEFAULT_INITIAL_RADIUS).unwrap_err();
        assert!(matches!(err, GrowthError::InvalidConfiguration(_)));

        let region = Region::new(seed_at(1, 0.0, 0.0, 3), DEFAULT_INITIAL_RADIUS).unwrap();
        assert_eq!(region.vertices().len(), 4);
        assert_eq!(region.segment_count(), 3);
    }

    #[test]
    fn test_initial_radius_validation() {
        assert!(Region::new(seed_at(1, 0.0, 0.0, 8), 0.0).is_err());
        assert!(Region::new(seed_at(1, 0.0, 0.0, 8), -0.1).is_err());
        assert!(Region::new(seed_at(1, 0.0, 0.0, 8), f32::NAN).is_err());
    }

    #[test]
    fn test_initial_ring_layout() {
        let region = Region::new(seed_at(1, 2.0, 1.0, 4), 0.1).unwrap();
        let v = region.vertices();

        assert_eq!(v[0], Vec2::ZERO);
        for outer in region.outer_vertices() {
            assert_relative_eq!(outer.length(), 0.1, epsilon = 1e-6);
        }

        // Clockwise from +x: (r, 0), (0, -r), (-r, 0), (0, r)
        assert_relative_eq!(v[1].x, 0.1, epsilon = 1e-6);
        assert_relative_eq!(v[1].y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v[2].y, -0.1, epsilon = 1e-6);
        assert_relative_eq!(v[3].x, -0.1, epsilon = 1e-6);
        assert_relative_eq!(v[4].y, 0.1, epsilon = 1e-6);

        assert!(region.frozen_flags().all(|f| !f));
        assert_eq!(region.active_count(), 4);
        assert!(!region.is_converged());
    }

    #[test]
    fn test_contains_uses_world_space() {
        let region = Region::new(seed_at(1, 2.0, 1.0, 16), 0.5).unwrap();
        assert!(region.contains(Vec2::new(2.0, 1.0)));
        assert!(region.contains(Vec2::new(2.3, 1.2)));
        assert!(!region.contains(Vec2::ZERO));
        assert!(!region.contains(Vec2::new(2.6, 1.0)));
    }

    #[test]
    fn test_expand_moves_along_ray() {
        let rect = RectBoundary::new(10.0, 10.0).unwrap();
        let mut region = Region::new(seed_at(1, 0.0, 0.0, 8), 0.1).unwrap();
        let before = region.vertex(3).unwrap();

        let outcome = region.expand_vertex(3, 0.25, &rect, &[]).unwrap();
        assert!(matches!(outcome, VertexOutcome::Advanced(_)));

        let after = region.vertex(3).unwrap();
        assert_relative_eq!(after.length(), 0.35, epsilon = 1e-6);
        assert_relative_eq!(after.normalize().dot(before.normalize()), 1.0, epsilon = 1e-6);
        assert_eq!(region.vertex(0), Some(Vec2::ZERO));
    }

    #[test]
    fn test_boundary_freeze_keeps_position() {
        let rect = RectBoundary::new(2.0, 2.0).unwrap();
        let mut region = Region::new(seed_at(1, 0.9, 0.0, 4), 0.05).unwrap();
        let before = region.vertex(1).unwrap();

        let outcome = region.expand_vertex(1, 0.1, &rect, &[]).unwrap();
        assert_eq!(outcome, VertexOutcome::Froze(FreezeCause::Boundary));
        assert_eq!(region.vertex(1).unwrap(), before);
        assert!(region.is_frozen(1));

        let again = region.expand_vertex(1, 0.1, &rect, &[]).unwrap();
        assert_eq!(again, VertexOutcome::AlreadyFrozen);
        assert_eq!(region.vertex(1).unwrap(), before);
    }

    #[test]
    fn test_collision_freeze_ignores_self() {
        let rect = RectBoundary::new(10.0, 10.0).unwrap();
        let mut a = Region::new(seed_at(1, 0.0, 0.0, 4), 0.05).unwrap();
        let b = Region::new(seed_at(2, 0.12, 0.0, 4), 0.05).unwrap();

        // Vertex 3 points away from b; only a's own copy is near it
        let snapshot = vec![a.clone(), b.clone()];
        let outcome = a.expand_vertex(3, 0.04, &rect, &snapshot).unwrap();
        assert!(matches!(outcome, VertexOutcome::Advanced(_)));

        // Vertex 1 points at b and its candidate (0.09, 0) lands inside b's advanced diamond
        let outcome = a.expand_vertex(1, 0.04, &rect, &snapshot).unwrap();
        assert_eq!(outcome, VertexOutcome::Froze(FreezeCause::Collision(b.id())));
        assert_eq!(a.vertex_state(1), Some(VertexState::Frozen(FreezeCause::Collision(b.id()))));
    }

    #[test]
    fn test_sweeping_over_sibling_vertex_freezes() {
        let rect = RectBoundary::new(10.0, 10.0).unwrap();
        let mut a = Region::new(seed_at(1, 0.0, 0.0, 4), 0.05).unwrap();
        let b = Region::new(seed_at(2, 0.15, 0.3, 4), 0.05).unwrap();

        // The candidate (0.25, 0) stays clear of b even after b advances...
        assert!(!b.frontier(0.2).encloses(Vec2::new(0.25, 0.0)));

        // ...but the widened fan triangle would swallow b's lowest vertex at (0.15, 0.05)
        let outcome = a.expand_vertex(1, 0.2, &rect, &[b.clone()]).unwrap();
        assert_eq!(outcome, VertexOutcome::Froze(FreezeCause::Collision(b.id())));
        assert_eq!(a.vertex(1).unwrap(), Vec2::new(0.05, 0.0));
    }

    #[test]
    fn test_frontier_advances_active_vertices_only() {
        let rect = RectBoundary::new(2.0, 2.0).unwrap();
        let mut region = Region::new(seed_at(1, 0.9, 0.0, 4), 0.05).unwrap();
        region.expand_vertex(1, 0.1, &rect, &[]).unwrap();
        assert!(region.is_frozen(1));

        let frontier = region.frontier(0.1);
        assert_eq!(frontier.id(), region.id());
        assert_relative_eq!(frontier.reach()[0].x, 0.95, epsilon = 1e-6);
        assert_relative_eq!(frontier.reach()[2].x, 0.75, epsilon = 1e-6);
        assert!(frontier.encloses(Vec2::new(0.8, 0.0)));
        assert!(!frontier.encloses(Vec2::new(0.98, 0.0)));
    }

    #[test]
    fn test_direction_is_fixed_per_vertex() {
        let rect = RectBoundary::new(10.0, 10.0).unwrap();
        let mut region = Region::new(seed_at(1, 0.0, 0.0, 8), 0.05).unwrap();
        let before = region.direction(3).unwrap();
        assert_relative_eq!(before.length(), 1.0, epsilon = 1e-6);

        region.expand_vertex(3, 0.5, &rect, &[]).unwrap();
        assert_eq!(region.direction(3).unwrap(), before);
        assert_relative_eq!(region.vertex(3).unwrap().length(), 0.55, epsilon = 1e-6);
        assert_eq!(region.direction(0), None);
        assert_eq!(region.direction(9), None);
    }

    #[test]
    fn test_boundary_checked_before_collision() {
        // Sibling straddles the boundary edge right where vertex 1 is heading
        let rect = RectBoundary::new(2.0, 2.0).unwrap();
        let mut a = Region::new(seed_at(1, 0.9, 0.0, 4), 0.05).unwrap();
        let b = Region::new(seed_at(2, 1.0, 0.0, 4), 0.08).unwrap();

        let outcome = a.expand_vertex(1, 0.1, &rect, &[b]).unwrap();
        assert_eq!(outcome, VertexOutcome::Froze(FreezeCause::Boundary));
    }

    #[test]
    fn test_invalid_vertex_index() {
        let rect = RectBoundary::new(2.0, 2.0).unwrap();
        let mut region = Region::new(seed_at(1, 0.0, 0.0, 5), 0.05).unwrap();

        let err = region.expand_vertex(0, 0.1, &rect, &[]).unwrap_err();
        assert_eq!(err, GrowthError::InvalidVertex { index: 0, segment_count: 5 });
        assert!(region.expand_vertex(6, 0.1, &rect, &[]).is_err());
        assert!(region.expand_vertex(5, 0.1, &rect, &[]).is_ok());
    }

    #[test]
    fn test_fan_triangles_wrap() {
        let region = Region::new(seed_at(1, 0.0, 0.0, 3), 0.05).unwrap();
        let tris: Vec<_> = region.fan_triangles().collect();
        assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3], [0, 3, 1]]);
    }

    #[test]
    fn test_plan_does_not_mutate() {
        let rect = RectBoundary::new(10.0, 10.0).unwrap();
        let mut region = Region::new(seed_at(1, 0.0, 0.0, 6), 0.05).unwrap();
        let before = region.vertices().to_vec();

        let plan = region.plan_growth(0.1, &rect, &[]);
        assert_eq!(plan.outcomes().len(), 6);
        assert_eq!(region.vertices(), before.as_slice());

        let tally = region.apply_growth(&plan).unwrap();
        assert_eq!(tally.advanced, 6);
        for outer in region.outer_vertices() {
            assert_relative_eq!(outer.length(), 0.15, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_apply_rejects_foreign_plan() {
        let rect = RectBoundary::new(10.0, 10.0).unwrap();
        let a = Region::new(seed_at(1, 0.0, 0.0, 6), 0.05).unwrap();
        let mut b = Region::new(seed_at(2, 1.0, 0.0, 6), 0.05).unwrap();

        let plan = a.plan_growth(0.1, &rect, &[]);
        assert_eq!(b.apply_growth(&plan), Err(GrowthError::RegionNotFound(a.id())));
    }

    #[test]
    fn test_area_grows() {
        let rect = RectBoundary::new(10.0, 10.0).unwrap();
        let mut region = Region::new(seed_at(1, 0.0, 0.0, 32), 0.05).unwrap();
        let initial = region.area();
        let plan = region.plan_growth(0.2, &rect, &[]);
        region.apply_growth(&plan).unwrap();
        assert!(region.area() > initial);
    }
}
