//! Negamax alpha-beta and quiescence.

use std::time::Instant;

use super::constants::{INFINITY, MATE_SCORE, POLL_INTERVAL};
use super::move_order::order_moves;
use super::SearchLimits;
use crate::board::{GameState, Move, ScoredMoveList, MAX_PLY};
use crate::sync::StopFlag;

/// Search context for a single `select_move` call.
pub(crate) struct SearchContext<'a> {
    limits: &'a SearchLimits,
    stop: &'a StopFlag,
    pub(crate) start_time: Instant,
    pub(crate) nodes: u64,
    /// Cleared while the first iteration runs so that it always completes.
    pub(crate) interruptible: bool,
    aborted: bool,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(limits: &'a SearchLimits, stop: &'a StopFlag) -> Self {
        SearchContext {
            limits,
            stop,
            start_time: Instant::now(),
            nodes: 0,
            interruptible: false,
            aborted: false,
        }
    }

    /// Poll the stop flag and the node and time limits.
    pub(crate) fn should_stop(&mut self) -> bool {
        if !self.interruptible {
            return false;
        }
        if self.aborted {
            return true;
        }
        if self.stop.is_stopped() {
            self.aborted = true;
        } else if self.limits.node_limit.is_some_and(|limit| self.nodes >= limit) {
            self.aborted = true;
        } else if self.nodes % POLL_INTERVAL == 0 {
            if let Some(budget) = self.limits.time_budget {
                if self.start_time.elapsed() >= budget {
                    self.aborted = true;
                }
            }
        }
        self.aborted
    }

    /// Search every root move to `depth` and return the best one.
    ///
    /// The best move only changes on a strictly greater score, so ties go
    /// to the earliest move in `ordered`. Returns `None` if the iteration
    /// was interrupted.
    pub(crate) fn search_root(
        &mut self,
        state: &GameState,
        depth: u32,
        ordered: &ScoredMoveList,
    ) -> Option<(Move, i32)> {
        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for scored in ordered.iter() {
            let child = state.apply_move(&scored.mv);
            let score = -self.alphabeta(&child, depth - 1, -beta, -alpha, 1);
            if self.aborted {
                return None;
            }
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((scored.mv, score));
            }
            alpha = alpha.max(score);
        }

        best
    }

    fn alphabeta(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        ply: usize,
    ) -> i32 {
        if self.should_stop() {
            return 0;
        }
        self.nodes += 1;

        let moves = state.legal_moves();
        if moves.is_empty() {
            return if state.in_check() {
                -(MATE_SCORE - ply as i32)
            } else {
                0
            };
        }
        if depth == 0 || ply >= MAX_PLY {
            return self.quiesce(state, alpha, beta, ply, 0);
        }

        let ordered = order_moves(state, &moves, None);
        let mut best_score = -INFINITY;
        for scored in ordered.iter() {
            let child = state.apply_move(&scored.mv);
            let score = -self.alphabeta(&child, depth - 1, -beta, -alpha, ply + 1);
            if self.aborted {
                return 0;
            }
            best_score = best_score.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best_score
    }

    /// Captures and promotions only, with stand-pat.
    fn quiesce(
        &mut self,
        state: &GameState,
        mut alpha: i32,
        beta: i32,
        ply: usize,
        qdepth: u32,
    ) -> i32 {
        let stand_pat = state.evaluate_relative();
        if qdepth >= self.limits.quiescence_depth || ply >= MAX_PLY {
            return stand_pat;
        }
        if stand_pat >= beta {
            return stand_pat;
        }
        alpha = alpha.max(stand_pat);

        let tactical = state.legal_tactical_moves();
        let ordered = order_moves(state, &tactical, None);
        for scored in ordered.iter() {
            if self.should_stop() {
                return 0;
            }
            self.nodes += 1;
            let child = state.apply_move(&scored.mv);
            let score = -self.quiesce(&child, -beta, -alpha, ply + 1, qdepth + 1);
            if self.aborted {
                return 0;
            }
            if score >= beta {
                return score;
            }
            alpha = alpha.max(score);
        }
        alpha
    }
}
