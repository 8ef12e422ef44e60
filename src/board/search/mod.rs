//! Move selection.
//!
//! Negamax alpha-beta with iterative deepening and a captures-only
//! quiescence search. The search only reads the `GameState` it is given;
//! child positions are produced with [`GameState::apply_move`], so callers
//! can search a published snapshot without locking it.
//!
//! The result is deterministic for a given position and limits, unless a
//! time budget or stop flag cuts an iteration short.

mod constants;
mod info;
mod move_order;
mod negamax;
mod params;

use std::time::Duration;

use super::error::SearchError;
use super::{GameState, Move, MAX_PLY};
use crate::sync::StopFlag;

pub use constants::{MATE_SCORE, MATE_THRESHOLD};
pub use info::{SearchInfo, SearchInfoCallback};
pub use params::SearchLimits;

pub(crate) use move_order::order_moves;
use negamax::SearchContext;

/// Outcome of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Side-to-move relative score of `best_move`.
    pub score: i32,
    /// Deepest fully completed iteration.
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Pick a move for the side to move in `state`.
///
/// Iterates depth 1..=`limits.max_depth`. Depth 1 always runs to completion,
/// so a legal move comes back even when `stop` is already set; later
/// iterations that get interrupted are thrown away.
///
/// # Errors
/// Returns [`SearchError::NoLegalMoves`] on checkmate or stalemate.
pub fn select_move(
    state: &GameState,
    limits: &SearchLimits,
    stop: &StopFlag,
) -> Result<SearchResult, SearchError> {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let mut ctx = SearchContext::new(limits, stop);
    let max_depth = limits.max_depth.clamp(1, MAX_PLY as u32);
    let mut result: Option<SearchResult> = None;

    for depth in 1..=max_depth {
        ctx.interruptible = depth > 1;
        if ctx.should_stop() {
            break;
        }

        let previous_best = result.map(|r| r.best_move);
        let ordered = order_moves(state, &moves, previous_best);
        let Some((best_move, score)) = ctx.search_root(state, depth, &ordered) else {
            log::trace!("search interrupted during depth {depth}");
            break;
        };

        let info = SearchInfo {
            depth,
            score,
            nodes: ctx.nodes,
            elapsed: ctx.start_time.elapsed(),
            best_move,
        };
        info::report(&info, limits.info_callback.as_ref());

        result = Some(SearchResult {
            best_move,
            score,
            depth,
            nodes: ctx.nodes,
            elapsed: info.elapsed,
        });

        // No deeper iteration finds a faster mate.
        if score >= MATE_THRESHOLD {
            break;
        }
    }

    result.ok_or(SearchError::NoLegalMoves)
}
