use std::sync::Arc;
use std::time::Duration;

use super::constants::{MATE_SCORE, MATE_THRESHOLD};
use crate::board::Move;

/// Summary of one completed iterative-deepening iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    /// Side-to-move relative score in centipawns.
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
    pub best_move: Move,
}

impl SearchInfo {
    /// Moves to mate, positive when the side to move mates.
    #[must_use]
    pub fn mate_in(&self) -> Option<i32> {
        if self.score.abs() < MATE_THRESHOLD {
            None
        } else if self.score > 0 {
            Some((MATE_SCORE - self.score + 1) / 2)
        } else {
            Some(-(MATE_SCORE + self.score + 1) / 2)
        }
    }
}

/// Callback for per-iteration search info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchInfo) + Send + Sync>;

pub(crate) fn report(info: &SearchInfo, callback: Option<&SearchInfoCallback>) {
    let nps = if info.elapsed.as_millis() > 0 {
        u128::from(info.nodes) * 1000 / info.elapsed.as_millis()
    } else {
        0
    };
    match info.mate_in() {
        Some(mate) => log::debug!(
            "depth {} score mate {} nodes {} nps {} time {}ms best {}",
            info.depth,
            mate,
            info.nodes,
            nps,
            info.elapsed.as_millis(),
            info.best_move
        ),
        None => log::debug!(
            "depth {} score cp {} nodes {} nps {} time {}ms best {}",
            info.depth,
            info.score,
            info.nodes,
            nps,
            info.elapsed.as_millis(),
            info.best_move
        ),
    }
    if let Some(cb) = callback {
        cb(info);
    }
}
