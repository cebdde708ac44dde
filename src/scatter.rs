//! Deterministic seed placement
//!
//! Scatters seeds uniformly inside the diagram rectangle. Positions and ids are
//! both drawn from a `ChaCha8Rng` seeded by the caller, so the same arguments
//! always produce the same seed list.
//!
//! Candidates closer than a minimum spacing to an already placed seed are
//! rejected and redrawn, which keeps initial rings from starting out overlapped.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::DiagramConfig;
use crate::error::{GrowthError, Result};
use crate::seed::{Seed, SeedId};

/// Redraws allowed per seed before giving up
const MAX_ATTEMPTS_PER_SEED: usize = 256;

/// Scatter `count` seeds inside the rectangle described by `config`
///
/// Seeds keep at least four initial radii from each other and one initial
/// radius from the boundary. `payload` is called with each seed's index.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the seeds cannot be packed at that spacing
///
/// # Example
///
/// ```rust
/// use growvoronoi::*;
///
/// let config = DiagramConfig::default();
/// let seeds = scatter_seeds(&config, 6, 42, |i| i).unwrap();
/// assert_eq!(seeds.len(), 6);
///
/// let again = scatter_seeds(&config, 6, 42, |i| i).unwrap();
/// assert_eq!(seeds[0].position, again[0].position);
/// ```
pub fn scatter_seeds<T, F>(
    config: &DiagramConfig,
    count: usize,
    rng_seed: u64,
    mut payload: F,
) -> Result<Vec<Seed<T>>>
where
    F: FnMut(usize) -> T,
{
    let margin = config.initial_radius;
    let half = Vec2::new(config.width * 0.5 - margin, config.height * 0.5 - margin);
    if half.x <= 0.0 || half.y <= 0.0 {
        return Err(GrowthError::invalid("diagram too small to scatter seeds"));
    }
    let min_spacing_sq = (4.0 * config.initial_radius).powi(2);

    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
    let mut seeds: Vec<Seed<T>> = Vec::with_capacity(count);

    for index in 0..count {
        let position = (0..MAX_ATTEMPTS_PER_SEED)
            .map(|_| {
                Vec2::new(
                    rng.gen_range(-half.x..=half.x),
                    rng.gen_range(-half.y..=half.y),
                )
            })
            .find(|p| {
                seeds
                    .iter()
                    .all(|s| s.position.distance_squared(*p) >= min_spacing_sq)
            })
            .ok_or_else(|| {
                GrowthError::invalid(format!(
                    "could not place seed {} of {} with spacing {}",
                    index + 1,
                    count,
                    4.0 * config.initial_radius
                ))
            })?;

        let id = SeedId::from_raw(rng.gen());
        seeds.push(Seed::with_id(id, position, config.segment_count, payload(index)));
    }

    Ok(seeds)
}
