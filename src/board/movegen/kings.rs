use super::super::attack_tables::KING_TARGETS;
use super::super::{Color, GameState, Move, MoveList, Piece, Square};

impl GameState {
    /// King steps plus castling candidates.
    ///
    /// Castling is only emitted when the right is held, the squares between
    /// king and rook are empty and the rook stands on its corner. Whether the
    /// king crosses an attacked square is checked in the legality filter.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to_sq in &KING_TARGETS[from.index()] {
            self.push_step(from, to_sq, color, moves);
        }

        let back_rank = color.back_rank();
        if from != Square(back_rank, 4) {
            return;
        }

        if self.castling_rights.has(color, true)
            && self.board.is_empty(Square(back_rank, 5))
            && self.board.is_empty(Square(back_rank, 6))
            && self.board.piece_at(Square(back_rank, 7)) == Some((color, Piece::Rook))
        {
            moves.push(Move::castle(from, Square(back_rank, 6)));
        }
        if self.castling_rights.has(color, false)
            && self.board.is_empty(Square(back_rank, 1))
            && self.board.is_empty(Square(back_rank, 2))
            && self.board.is_empty(Square(back_rank, 3))
            && self.board.piece_at(Square(back_rank, 0)) == Some((color, Piece::Rook))
        {
            moves.push(Move::castle(from, Square(back_rank, 2)));
        }
    }
}
