//! Move application.
//!
//! Moves are never played in place on a published position: `apply_move`
//! copies the state, plays the move on the copy and returns it.

use super::{Board, Color, GameState, Move, Piece, Square};

/// Play `m` on `board` for the piece standing on `m.from()`.
///
/// # Panics
/// Panics if `m.from()` is empty; moves must come from move generation.
fn play_on_board(board: &mut Board, m: &Move) -> (Color, Piece) {
    let Some((color, piece)) = board.take(m.from()) else {
        panic!("move {m} starts on an empty square");
    };

    if m.is_en_passant() {
        board.take(Square(m.from().0, m.to().1));
    }

    if m.is_castling() {
        let row = m.from().0;
        let (rook_from, rook_to) = if m.is_castle_kingside() {
            (Square(row, 7), Square(row, 5))
        } else {
            (Square(row, 0), Square(row, 3))
        };
        if let Some((rook_color, rook)) = board.take(rook_from) {
            board.put(rook_to, rook_color, rook);
        }
    }

    board.put(m.to(), color, m.promotion().unwrap_or(piece));
    (color, piece)
}

impl GameState {
    /// Board after `m`, without touching counters or rights.
    pub(crate) fn board_after(&self, m: &Move) -> Board {
        let mut board = self.board;
        play_on_board(&mut board, m);
        board
    }

    /// Return the position after `m`.
    ///
    /// `m` must have been generated from this position; legality is not
    /// re-checked here (see [`GameState::try_apply`]).
    #[must_use]
    pub fn apply_move(&self, m: &Move) -> GameState {
        let mut next = *self;
        let (color, piece) = play_on_board(&mut next.board, m);

        if piece == Piece::Pawn || m.is_capture() {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock += 1;
        }

        if piece == Piece::King {
            next.castling_rights.remove_color(color);
        }
        next.castling_rights.clear_corner(m.from());
        next.castling_rights.clear_corner(m.to());

        next.en_passant_target = if m.is_double_pawn_push() {
            Some(Square((m.from().0 + m.to().0) / 2, m.from().1))
        } else {
            None
        };

        if color == Color::Black {
            next.fullmove_number += 1;
        }
        next.move_count += 1;
        next.side_to_move = color.opponent();
        next
    }

    /// Apply `m` only if it is legal here.
    #[must_use]
    pub fn try_apply(&self, m: &Move) -> Option<GameState> {
        if self.is_legal_move(m) {
            Some(self.apply_move(m))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &GameState, text: &str) -> GameState {
        let m = state.parse_move(text).expect("legal move");
        state.apply_move(&m)
    }

    #[test]
    fn test_counters_and_turn() {
        let s0 = GameState::new();
        let s1 = play(&s0, "g1f3");
        assert_eq!(s1.side_to_move(), Color::Black);
        assert_eq!(s1.halfmove_clock(), 1);
        assert_eq!(s1.fullmove_number(), 1);
        assert_eq!(s1.move_count(), 1);

        let s2 = play(&s1, "e7e5");
        assert_eq!(s2.side_to_move(), Color::White);
        assert_eq!(s2.halfmove_clock(), 0);
        assert_eq!(s2.fullmove_number(), 2);
        assert_eq!(s2.move_count(), 2);

        // The original state is untouched
        assert_eq!(s0, GameState::new());
    }

    #[test]
    fn test_double_push_sets_en_passant_target() {
        let s = play(&GameState::new(), "e2e4");
        assert_eq!(s.en_passant_target(), Some("e3".parse().unwrap()));
        let s = play(&s, "g8f6");
        assert_eq!(s.en_passant_target(), None);
    }

    #[test]
    fn test_en_passant_removes_captured_pawn() {
        let s = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
        let after = play(&s, "e5d6");
        assert_eq!(after.piece_at("d6".parse().unwrap()), Some((Color::White, Piece::Pawn)));
        assert_eq!(after.piece_at("d5".parse().unwrap()), None);
        assert_eq!(after.board().piece_count(), 3);
        assert_eq!(after.halfmove_clock(), 0);
    }

    #[test]
    fn test_castling_moves_rook_and_clears_rights() {
        let s = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let after = play(&s, "e1g1");
        assert_eq!(after.piece_at("g1".parse().unwrap()), Some((Color::White, Piece::King)));
        assert_eq!(after.piece_at("f1".parse().unwrap()), Some((Color::White, Piece::Rook)));
        assert_eq!(after.piece_at("h1".parse().unwrap()), None);
        assert!(!after.castling_rights().has(Color::White, true));
        assert!(!after.castling_rights().has(Color::White, false));
        assert!(after.castling_rights().has(Color::Black, true));

        let after = play(&after, "e8c8");
        assert_eq!(after.piece_at("c8".parse().unwrap()), Some((Color::Black, Piece::King)));
        assert_eq!(after.piece_at("d8".parse().unwrap()), Some((Color::Black, Piece::Rook)));
        assert!(after.castling_rights().is_empty());
    }

    #[test]
    fn test_rook_capture_clears_opponent_right() {
        let s = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let after = play(&s, "a1a8");
        assert!(!after.castling_rights().has(Color::Black, false));
        assert!(!after.castling_rights().has(Color::White, false));
        assert!(after.castling_rights().has(Color::Black, true));
    }

    #[test]
    fn test_promotion_defaults_and_choice() {
        let s = GameState::from_fen("8/P3k3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let queen = s.find_legal_move("a7".parse().unwrap(), "a8".parse().unwrap(), None);
        assert_eq!(queen.and_then(|m| m.promotion()), Some(Piece::Queen));

        let knight = play(&s, "a7a8n");
        assert_eq!(knight.piece_at("a8".parse().unwrap()), Some((Color::White, Piece::Knight)));
    }

    #[test]
    fn test_try_apply_rejects_illegal() {
        let s = GameState::new();
        let bogus = Move::new("e2".parse().unwrap(), "e5".parse().unwrap(), None);
        assert!(s.try_apply(&bogus).is_none());
    }

    #[test]
    fn test_apply_is_deterministic() {
        let s = GameState::new();
        let m = s.parse_move("b1c3").unwrap();
        assert_eq!(s.apply_move(&m), s.apply_move(&m));
    }
}
