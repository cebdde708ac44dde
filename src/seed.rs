//! Diagram sites
//!
//! A seed is the immutable description of one site: where it sits, how finely its
//! polygon is subdivided, and an opaque payload handed through to the renderer.

use std::fmt;
use std::hash::{Hash, Hasher};

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color, the usual seed payload
pub type Rgba = [f32; 4];

/// Opaque, globally unique seed identifier
///
/// Region identity is decided by this value, never by where a seed lives in memory.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeedId(u128);

impl SeedId {
    /// Generate a fresh random identifier (GUID-like, 128 bits from thread_rng)
    pub fn random() -> Self {
        SeedId(rand::random())
    }

    /// Wrap an existing raw identifier
    #[inline]
    pub const fn from_raw(raw: u128) -> Self {
        SeedId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u128 {
        self.0
    }
}

impl fmt::Display for SeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xffff_ffff_ffff
        )
    }
}

/// A diagram site
///
/// Generic over the payload `T` the host wants back when drawing the region
/// (a color, a label, an entity handle). The growth algorithm never reads it.
///
/// Equality and hashing only look at [`Seed::id`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Seed<T> {
    /// Unique identifier, also the identity of the region grown from this seed
    pub id: SeedId,

    /// Site location in diagram coordinates
    pub position: Vec2,

    /// Number of angular subdivisions of the region polygon (must be >= 3)
    pub segment_count: usize,

    /// Renderer payload, passed through untouched
    pub payload: T,
}

impl<T> Seed<T> {
    /// Create a seed with a freshly generated id
    pub fn new(position: Vec2, segment_count: usize, payload: T) -> Self {
        Self::with_id(SeedId::random(), position, segment_count, payload)
    }

    /// Create a seed with an explicit id
    pub fn with_id(id: SeedId, position: Vec2, segment_count: usize, payload: T) -> Self {
        Self {
            id,
            position,
            segment_count,
            payload,
        }
    }
}

impl<T> PartialEq for Seed<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Seed<T> {}

impl<T> Hash for Seed<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
