//! Traversal resource limits.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, TrackResult};

/// Decisions allowed per junction when deriving the default budget.
const DEFAULT_BUDGET_FACTOR: u64 = 32;

/// Lower bound for the derived decision budget.
const MIN_BUDGET: u64 = 64;

/// Limits that bound a traversal's exploration.
///
/// Coverage or the stuck check normally terminates a traversal long before
/// the budget runs out; the budget guarantees termination on topologies
/// where neither can ever fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalLimits {
    /// Hard cap on total decisions. `None` derives
    /// `max(64, 32 x junction count)`.
    pub max_decisions: Option<u64>,
}

impl TraversalLimits {
    /// Validates limits.
    ///
    /// This must be called before a traversal starts.
    ///
    /// # Errors
    ///
    /// `ConfigurationError::InvalidLimits` on a zero decision budget.
    pub fn validate(&self) -> TrackResult<()> {
        if self.max_decisions == Some(0) {
            return Err(ConfigurationError::InvalidLimits {
                reason: "max_decisions must be > 0".to_string(),
            });
        }
        Ok(())
    }

    /// The effective decision budget for a track with `junctions` junctions.
    #[must_use]
    pub fn decision_budget(&self, junctions: usize) -> u64 {
        self.max_decisions.unwrap_or_else(|| {
            DEFAULT_BUDGET_FACTOR
                .saturating_mul(junctions as u64)
                .max(MIN_BUDGET)
        })
    }
}
