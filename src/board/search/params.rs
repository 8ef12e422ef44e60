use std::fmt;
use std::time::Duration;

use super::constants::{DEFAULT_MAX_DEPTH, DEFAULT_QUIESCENCE_DEPTH};
use super::SearchInfoCallback;

/// Bounds for one call to [`select_move`](super::select_move).
#[derive(Clone)]
pub struct SearchLimits {
    /// Deepest iteration, in plies. Clamped to at least 1.
    pub max_depth: u32,
    /// Extra plies of captures/promotions searched past the horizon.
    pub quiescence_depth: u32,
    /// Wall-clock budget; `None` searches until `max_depth` completes.
    pub time_budget: Option<Duration>,
    pub node_limit: Option<u64>,
    /// Called once per completed iteration.
    pub info_callback: Option<SearchInfoCallback>,
}

impl SearchLimits {
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchLimits {
            max_depth,
            ..SearchLimits::default()
        }
    }

    #[must_use]
    pub fn with_quiescence_depth(mut self, depth: u32) -> Self {
        self.quiescence_depth = depth;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    #[must_use]
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_depth: DEFAULT_MAX_DEPTH,
            quiescence_depth: DEFAULT_QUIESCENCE_DEPTH,
            time_budget: None,
            node_limit: None,
            info_callback: None,
        }
    }
}

impl fmt::Debug for SearchLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchLimits")
            .field("max_depth", &self.max_depth)
            .field("quiescence_depth", &self.quiescence_depth)
            .field("time_budget", &self.time_budget)
            .field("node_limit", &self.node_limit)
            .field("info_callback", &self.info_callback.is_some())
            .finish()
    }
}
