//! Static evaluation.
//!
//! Scores are in centipawns from White's point of view. The evaluation is a
//! pure function of the board; there is no random term, so the same position
//! always gets the same score.

use super::pst::pst_bonus;
use super::{Board, Color, GameState, Piece, Square};

const CENTER_BONUS: i32 = 15;
const PASSED_PAWN_BONUS: i32 = 20;
const SHIELD_PAWN_BONUS: i32 = 20;
const CASTLED_KING_BONUS: i32 = 30;
const BISHOP_PAIR_BONUS: i32 = 30;

#[inline]
fn is_center(sq: Square) -> bool {
    (sq.row() == 3 || sq.row() == 4) && (sq.col() == 3 || sq.col() == 4)
}

/// No enemy pawn ahead of this pawn on its own or an adjacent file.
fn is_passed_pawn(board: &Board, sq: Square, color: Color) -> bool {
    let enemy = Some((color.opponent(), Piece::Pawn));
    let rows_ahead = match color {
        Color::White => 0..sq.row(),
        Color::Black => sq.row() + 1..8,
    };
    let col = sq.col();
    let cols = col.saturating_sub(1)..=(col + 1).min(7);
    for row in rows_ahead {
        for c in cols.clone() {
            if board.piece_at(Square(row, c)) == enemy {
                return false;
            }
        }
    }
    true
}

/// Passed pawns only count once they have crossed into the enemy half.
fn passed_pawn_bonus(board: &Board, sq: Square, color: Color) -> i32 {
    let advanced = match color {
        Color::White => sq.row() < 4,
        Color::Black => sq.row() > 3,
    };
    if advanced && is_passed_pawn(board, sq, color) {
        PASSED_PAWN_BONUS
    } else {
        0
    }
}

fn king_safety(board: &Board, king_sq: Square, color: Color) -> i32 {
    let mut safety = 0;
    let forward = color.pawn_direction();
    for dc in -1..=1 {
        if let Some(sq) = king_sq.offset(forward, dc) {
            if board.piece_at(sq) == Some((color, Piece::Pawn)) {
                safety += SHIELD_PAWN_BONUS;
            }
        }
    }
    if king_sq.row() == color.back_rank() && (king_sq.col() == 6 || king_sq.col() == 2) {
        safety += CASTLED_KING_BONUS;
    }
    safety
}

impl Board {
    /// White-relative static score of this board.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;

        for (sq, color, piece) in self.pieces() {
            let mut value = piece.value() + pst_bonus(piece, color, sq);
            match piece {
                Piece::Pawn => value += passed_pawn_bonus(self, sq, color),
                Piece::King => value += king_safety(self, sq, color),
                _ => {}
            }
            if matches!(piece, Piece::Pawn | Piece::Knight) && is_center(sq) {
                value += CENTER_BONUS;
            }
            score += color.sign() * value;
        }

        for color in Color::BOTH {
            if self.count(color, Piece::Bishop) >= 2 {
                score += color.sign() * BISHOP_PAIR_BONUS;
            }
        }

        score
    }
}

impl GameState {
    /// Static evaluation from White's point of view.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.board.evaluate()
    }

    /// Static evaluation from the side to move's point of view.
    #[inline]
    #[must_use]
    pub(crate) fn evaluate_relative(&self) -> i32 {
        self.side_to_move.sign() * self.board.evaluate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        assert_eq!(GameState::new().evaluate(), 0);
    }

    #[test]
    fn test_mirrored_positions_negate() {
        let white = GameState::from_fen("4k3/8/8/8/3PN3/8/8/4K3 w - - 0 1").unwrap();
        let black = GameState::from_fen("4k3/8/8/3pn3/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(white.evaluate(), -black.evaluate());
        assert!(white.evaluate() > 0);
    }

    #[test]
    fn test_extra_queen_dominates() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        assert!(state.evaluate() > 800);
        let black_to_move = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1").unwrap();
        assert!(black_to_move.evaluate_relative() < -800);
    }

    #[test]
    fn test_passed_pawn_bonus() {
        // Same pawn on d5, blocked on the adjacent file or not
        let free = GameState::from_fen("4k3/8/8/3P4/8/8/8/4K3 w - - 0 1").unwrap();
        let blocked = GameState::from_fen("4k3/4p3/8/3P4/8/8/8/4K3 w - - 0 1").unwrap();
        let d5 = "d5".parse().unwrap();
        assert!(is_passed_pawn(free.board(), d5, Color::White));
        assert!(!is_passed_pawn(blocked.board(), d5, Color::White));
        assert_eq!(passed_pawn_bonus(free.board(), d5, Color::White), PASSED_PAWN_BONUS);

        // Not yet across the middle
        let d3 = "d3".parse().unwrap();
        let early = GameState::from_fen("4k3/8/8/8/8/3P4/8/4K3 w - - 0 1").unwrap();
        assert_eq!(passed_pawn_bonus(early.board(), d3, Color::White), 0);
    }

    #[test]
    fn test_king_safety_terms() {
        let board = GameState::from_fen("4k3/8/8/8/8/8/5PPP/6K1 w - - 0 1").unwrap();
        let g1 = "g1".parse().unwrap();
        assert_eq!(
            king_safety(board.board(), g1, Color::White),
            3 * SHIELD_PAWN_BONUS + CASTLED_KING_BONUS
        );

        let bare = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let e1 = "e1".parse().unwrap();
        assert_eq!(king_safety(bare.board(), e1, Color::White), 0);
    }

    #[test]
    fn test_bishop_pair() {
        let pair = GameState::from_fen("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1").unwrap();
        let single = GameState::from_fen("4k3/8/8/8/8/8/8/2N1KB2 w - - 0 1").unwrap();
        let diff = pair.evaluate() - single.evaluate();
        // Bishop vs knight material and table differences plus the pair bonus
        let c1: Square = "c1".parse().unwrap();
        let expected = Piece::Bishop.value() - Piece::Knight.value()
            + pst_bonus(Piece::Bishop, Color::White, c1)
            - pst_bonus(Piece::Knight, Color::White, c1)
            + BISHOP_PAIR_BONUS;
        assert_eq!(diff, expected);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let state = GameState::from_fen(
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        )
        .unwrap();
        assert_eq!(state.evaluate(), state.evaluate());
    }
}
