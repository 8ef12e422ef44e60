//! Move generation.
//!
//! Pseudo-legal moves are produced per piece type, then each one is played on
//! a scratch copy of the board and dropped if it leaves the mover's king
//! attacked. Generation order is fixed (squares in row-major order, then
//! per-piece target order), so the resulting list is deterministic.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Color, GameState, Move, MoveList, Piece, Square};

impl GameState {
    /// Push a king/knight step unless it lands on an own piece.
    #[inline]
    fn push_step(&self, from: Square, to: Square, color: Color, moves: &mut MoveList) {
        match self.board.piece_at(to) {
            None => moves.push(Move::new(from, to, None)),
            Some((target_color, captured)) if target_color != color => {
                moves.push(Move::new(from, to, Some(captured)));
            }
            Some(_) => {}
        }
    }

    fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let color = self.side_to_move;
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop, moves),
            Piece::Rook => self.generate_slider_moves(from, color, SliderType::Rook, moves),
            Piece::Queen => self.generate_slider_moves(from, color, SliderType::Queen, moves),
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    pub(crate) fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;
        for (from, piece_color, piece) in self.board.pieces() {
            if piece_color == color {
                self.generate_piece_moves(from, piece, &mut moves);
            }
        }
        moves
    }

    /// Does a pseudo-legal move keep the mover's king safe?
    pub(crate) fn is_legal_pseudo(&self, m: &Move) -> bool {
        let color = self.side_to_move;
        let opponent = color.opponent();

        if m.is_castling() {
            let king_mid_sq = Square(m.from().0, (m.from().1 + m.to().1) / 2);
            if self.board.is_square_attacked(m.from(), opponent)
                || self.board.is_square_attacked(king_mid_sq, opponent)
                || self.board.is_square_attacked(m.to(), opponent)
            {
                return false;
            }
        }

        !self.board_after(m).is_in_check(color)
    }

    /// All legal moves for the side to move, in generation order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut legal_moves = MoveList::new();
        for m in self.generate_pseudo_moves().iter() {
            if self.is_legal_pseudo(m) {
                legal_moves.push(*m);
            }
        }
        legal_moves
    }

    /// Legal moves that start on `from`.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        let mut legal = MoveList::new();
        match self.board.piece_at(from) {
            Some((color, piece)) if color == self.side_to_move => {
                self.generate_piece_moves(from, piece, &mut moves);
            }
            _ => return legal,
        }
        for m in moves.iter() {
            if self.is_legal_pseudo(m) {
                legal.push(*m);
            }
        }
        legal
    }

    /// Cheaper than `legal_moves().is_empty()`: stops at the first legal move.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.generate_pseudo_moves()
            .iter()
            .any(|m| self.is_legal_pseudo(m))
    }

    /// Legal captures and promotions, used by quiescence search.
    pub(crate) fn legal_tactical_moves(&self) -> MoveList {
        let mut tactical = MoveList::new();
        for m in self.generate_pseudo_moves().iter() {
            if m.is_tactical() && self.is_legal_pseudo(m) {
                tactical.push(*m);
            }
        }
        tactical
    }

    /// Resolve a `(from, to, promotion)` request into a legal move.
    ///
    /// A missing promotion defaults to a queen. Promotion to a pawn or king,
    /// or a promotion piece on a move that does not promote, yields `None`.
    #[must_use]
    pub fn find_legal_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Option<Move> {
        if let Some(piece) = promotion {
            if !piece.is_promotion_target() {
                return None;
            }
        }

        self.legal_moves_from(from)
            .into_iter()
            .filter(|m| m.to() == to)
            .find(|m| match m.promotion() {
                Some(promo) => promo == promotion.unwrap_or(Piece::Queen),
                None => promotion.is_none(),
            })
    }

    /// Is `m` one of the legal moves in this position?
    #[must_use]
    pub fn is_legal_move(&self, m: &Move) -> bool {
        self.legal_moves_from(m.from()).contains(m)
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|m| self.apply_move(m).perft(depth - 1))
            .sum()
    }

    /// Per-move perft breakdown, useful when hunting generator bugs.
    #[must_use]
    pub fn divide(&self, depth: usize) -> Vec<(Move, u64)> {
        self.legal_moves()
            .into_iter()
            .map(|m| {
                let nodes = if depth <= 1 {
                    1
                } else {
                    self.apply_move(&m).perft(depth - 1)
                };
                (m, nodes)
            })
            .collect()
    }
}
