//! Error types for region growth

use thiserror::Error;

use crate::seed::SeedId;

/// Errors that can occur while configuring or driving a growth simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrowthError {
    /// Configuration validation failed (segment count, step distance, dimensions)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The step budget ran out before every vertex froze
    ///
    /// Non-fatal: the regions are left partially grown and stepping may continue.
    #[error("did not converge after {steps} steps")]
    DidNotConverge {
        /// Steps taken during the call that ran out of budget
        steps: usize,
    },

    /// Outer vertex index outside `1..=segment_count`
    #[error("vertex index {index} out of range (outer ring is 1..={segment_count})")]
    InvalidVertex { index: usize, segment_count: usize },

    /// Requested seed ID is not part of the current region set
    #[error("region not found: {0}")]
    RegionNotFound(SeedId),
}

impl GrowthError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GrowthError::InvalidConfiguration(msg.into())
    }

    /// Returns true for errors that leave the simulation in a usable state
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GrowthError::DidNotConverge { .. })
    }
}

/// Result type alias for growth operations
pub type Result<T> = std::result::Result<T, GrowthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GrowthError::invalid("segment count must be >= 3 (got 2)");
        assert_eq!(
            err.to_string(),
            "invalid configuration: segment count must be >= 3 (got 2)"
        );

        let err = GrowthError::DidNotConverge { steps: 40 };
        assert_eq!(err.to_string(), "did not converge after 40 steps");
    }

    #[test]
    fn test_recoverable() {
        assert!(GrowthError::DidNotConverge { steps: 1 }.is_recoverable());
        assert!(!GrowthError::invalid("bad").is_recoverable());
    }
}
