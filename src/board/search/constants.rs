//! Search constants.

use crate::board::MAX_PLY;

/// Score of delivering mate at the root; a mate found at ply `n` scores
/// `MATE_SCORE - n`.
pub const MATE_SCORE: i32 = 30_000;

/// Scores with absolute value >= this are mate scores.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

/// Window bound, outside any reachable score.
pub(crate) const INFINITY: i32 = 32_000;

pub(crate) const DEFAULT_MAX_DEPTH: u32 = 4;
pub(crate) const DEFAULT_QUIESCENCE_DEPTH: u32 = 4;

/// Time and node limits are polled once per this many nodes.
pub(crate) const POLL_INTERVAL: u64 = 1024;

// Move ordering priorities. Higher is tried earlier.

/// Best move of the previous iteration.
pub(crate) const PREVIOUS_BEST_SCORE: i32 = 1 << 20;

/// Base for captures, ranked inside by MVV-LVA.
pub(crate) const CAPTURE_SCORE: i32 = 1 << 16;

/// Base for non-capturing promotions.
pub(crate) const PROMOTION_SCORE: i32 = 1 << 12;
