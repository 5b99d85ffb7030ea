//! Solver options.

use serde::{Deserialize, Serialize};

use crate::session::Strategy;

/// Scenarios with at most this many points get the full console report.
pub const DEFAULT_DIAGNOSTICS_LIMIT: usize = 10;

/// Options applied to every scenario of a run.
///
/// # Examples
///
/// ```
/// use pickup_routing::config::SolveOptions;
/// use pickup_routing::session::Strategy;
///
/// let opts: SolveOptions = serde_json::from_str(r#"{"strategy":"nearest-neighbor"}"#).unwrap();
/// assert_eq!(opts.strategy, Strategy::NearestNeighbor);
/// assert_eq!(opts.diagnostics_limit, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Route-construction strategy.
    pub strategy: Strategy,
    /// Largest scenario (in points) that gets the detailed report.
    pub diagnostics_limit: usize,
}

impl SolveOptions {
    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the diagnostics limit.
    pub fn with_diagnostics_limit(mut self, limit: usize) -> Self {
        self.diagnostics_limit = limit;
        self
    }

    /// Returns `true` if a scenario of `points` points gets the detailed report.
    pub fn wants_diagnostics(&self, points: usize) -> bool {
        points <= self.diagnostics_limit
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            diagnostics_limit: DEFAULT_DIAGNOSTICS_LIMIT,
        }
    }
}
