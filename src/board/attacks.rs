//! Attack and check detection.
//!
//! Attacks are computed straight from the piece tables and never go through
//! move generation, since legal-move filtering itself depends on them.

use super::attack_tables::{
    BISHOP_DIRS, KING_TARGETS, KNIGHT_TARGETS, PAWN_SOURCES, RAYS, ROOK_DIRS,
};
use super::{Board, Color, GameState, Piece, Square};

impl Board {
    /// Is `square` attacked by any piece of `by`?
    ///
    /// Occupancy of `square` itself is ignored, so this answers both "can a
    /// king stand here" and "is this piece defended".
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let idx = square.index();

        for &src in &PAWN_SOURCES[by.index()][idx] {
            if self.piece_at(src) == Some((by, Piece::Pawn)) {
                return true;
            }
        }

        for &src in &KNIGHT_TARGETS[idx] {
            if self.piece_at(src) == Some((by, Piece::Knight)) {
                return true;
            }
        }

        for &src in &KING_TARGETS[idx] {
            if self.piece_at(src) == Some((by, Piece::King)) {
                return true;
            }
        }

        self.slider_attacks(idx, by, &ROOK_DIRS, Piece::Rook)
            || self.slider_attacks(idx, by, &BISHOP_DIRS, Piece::Bishop)
    }

    /// Walk each ray out from the target; the first piece met decides it.
    fn slider_attacks(&self, idx: usize, by: Color, dirs: &[usize], slider: Piece) -> bool {
        for &dir in dirs {
            for &sq in &RAYS[idx][dir] {
                if let Some((color, piece)) = self.piece_at(sq) {
                    if color == by && (piece == slider || piece == Piece::Queen) {
                        return true;
                    }
                    break;
                }
            }
        }
        false
    }

    /// Is the king of `color` attacked?
    ///
    /// # Panics
    /// Panics when `color` has no king on the board.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => panic!("board invariant violated: no {color} king"),
        }
    }
}

impl GameState {
    /// Is the king of `color` attacked in this position?
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_square_attacked(self.expect_king(color), color.opponent())
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.board.is_square_attacked(square, by)
    }
}
