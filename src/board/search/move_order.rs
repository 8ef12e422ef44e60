//! Move ordering for search.

use super::constants::{CAPTURE_SCORE, PREVIOUS_BEST_SCORE, PROMOTION_SCORE};
use crate::board::{GameState, Move, MoveList, ScoredMoveList};

/// Most valuable victim, least valuable attacker.
pub(crate) fn mvv_lva_score(state: &GameState, mv: &Move) -> i32 {
    let Some(victim) = mv.captured() else {
        return 0;
    };
    let attacker = state
        .piece_at(mv.from())
        .map_or(0, |(_, piece)| i32::from(piece.code()));
    victim.value() * 8 - attacker
}

/// Ordering key of one move.
pub(crate) fn move_score(state: &GameState, mv: &Move, previous_best: Option<Move>) -> i32 {
    if previous_best == Some(*mv) {
        return PREVIOUS_BEST_SCORE;
    }
    let promotion_bonus = mv.promotion().map_or(0, |piece| piece.value());
    if mv.is_capture() {
        CAPTURE_SCORE + mvv_lva_score(state, mv) + promotion_bonus
    } else if mv.is_promotion() {
        PROMOTION_SCORE + promotion_bonus
    } else {
        0
    }
}

/// Score and stably sort `moves`; equal keys keep generation order.
pub(crate) fn order_moves(
    state: &GameState,
    moves: &MoveList,
    previous_best: Option<Move>,
) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for mv in moves {
        scored.push(*mv, move_score(state, mv, previous_best));
    }
    scored.sort_by_score_desc();
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_come_before_quiet_moves() {
        // Pawn takes knight, queen takes pawn, everything else is quiet
        let state =
            GameState::from_fen("4k3/8/1r6/2n5/1P1p4/8/3Q4/4K3 w - - 0 1").unwrap();
        let moves = state.legal_moves();
        let ordered = order_moves(&state, &moves, None);
        let slice = ordered.as_slice();
        assert_eq!(slice[0].mv.to_string(), "b4c5");
        assert_eq!(slice[1].mv.to_string(), "d2d4");
        assert!(slice[2..].iter().all(|scored| !scored.mv.is_capture()));
    }

    #[test]
    fn test_previous_best_is_first() {
        let state = GameState::new();
        let moves = state.legal_moves();
        let pick = moves.get(moves.len() - 1).unwrap();
        let ordered = order_moves(&state, &moves, Some(pick));
        assert_eq!(ordered.as_slice()[0].mv, pick);
    }

    #[test]
    fn test_quiet_moves_keep_generation_order() {
        let state = GameState::new();
        let moves = state.legal_moves();
        let ordered = order_moves(&state, &moves, None);
        let reordered: Vec<Move> = ordered.iter().map(|scored| scored.mv).collect();
        assert_eq!(reordered, moves.as_slice().to_vec());
    }

    #[test]
    fn test_mvv_lva_prefers_cheaper_attacker() {
        let state = GameState::from_fen("4k3/8/8/3r4/2P5/8/3Q4/4K3 w - - 0 1").unwrap();
        let by_pawn = state.parse_move("c4d5").unwrap();
        let by_queen = state.parse_move("d2d5").unwrap();
        assert!(mvv_lva_score(&state, &by_pawn) > mvv_lva_score(&state, &by_queen));
    }
}
