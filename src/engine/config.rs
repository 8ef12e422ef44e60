use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::SearchLimits;

/// Engine configuration.
///
/// Depths are in plies. Undo history keeps at most `max_history` positions;
/// zero disables undo.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    pub search_depth: u32,
    pub quiescence_depth: u32,
    pub time_budget: Option<Duration>,
    pub node_limit: Option<u64>,
    pub max_history: usize,
}

impl EngineConfig {
    #[must_use]
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth.max(1);
        self
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
    pub fn with_max_history(mut self, entries: usize) -> Self {
        self.max_history = entries;
        self
    }

    /// Search bounds for one AI move.
    #[must_use]
    pub fn search_limits(&self) -> SearchLimits {
        let mut limits = SearchLimits::depth(self.search_depth)
            .with_quiescence_depth(self.quiescence_depth);
        if let Some(budget) = self.time_budget {
            limits = limits.with_time_budget(budget);
        }
        if let Some(nodes) = self.node_limit {
            limits = limits.with_node_limit(nodes);
        }
        limits
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search_depth: 4,
            quiescence_depth: 4,
            time_budget: None,
            node_limit: None,
            max_history: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_search_depth(0)
            .with_time_budget(Duration::from_millis(250))
            .with_node_limit(10_000)
            .with_max_history(8);
        assert_eq!(config.search_depth, 1);
        assert_eq!(config.max_history, 8);

        let limits = config.search_limits();
        assert_eq!(limits.max_depth, 1);
        assert_eq!(limits.quiescence_depth, 4);
        assert_eq!(limits.time_budget, Some(Duration::from_millis(250)));
        assert_eq!(limits.node_limit, Some(10_000));
        assert!(limits.info_callback.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json_round_trip() {
        let config = EngineConfig::default().with_time_budget(Duration::from_secs(2));
        let json = serde_json::to_string(&config).unwrap();
        let restored: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
