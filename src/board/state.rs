use super::{CastlingRights, Color, Piece, Square};

/// Content of one board square.
pub type SquareContent = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// 8x8 grid of pieces, indexed by (row, col).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    squares: [[SquareContent; 8]; 8],
}

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            board.put(Square(0, col), Color::Black, *piece);
            board.put(Square(1, col), Color::Black, Piece::Pawn);
            board.put(Square(6, col), Color::White, Piece::Pawn);
            board.put(Square(7, col), Color::White, *piece);
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> SquareContent {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> SquareContent {
        self.squares[sq.0][sq.1].take()
    }

    /// Locate the king of `color`.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Iterate occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces()
            .filter(|&(_, c, p)| c == color && p == piece)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

/// A complete, immutable game position.
///
/// `GameState` is a plain `Copy` value. Applying a move yields a new state
/// (see [`GameState::apply_move`]); nothing ever edits a state in place once
/// it has been handed out, which is what lets the engine facade publish it to
/// concurrent readers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) move_count: u32,
}

impl GameState {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_count: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Plies applied since this game started.
    #[inline]
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    /// King square of `color`.
    ///
    /// # Panics
    /// Panics if the board has no king of that color. Every constructor
    /// guarantees one king per side, so reaching this is a bug.
    #[must_use]
    pub(crate) fn expect_king(&self, color: Color) -> Square {
        match self.board.king_square(color) {
            Some(sq) => sq,
            None => panic!("board invariant violated: no {color} king"),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_layout() {
        let state = GameState::new();
        assert_eq!(state.piece_at(Square(7, 4)), Some((Color::White, Piece::King)));
        assert_eq!(state.piece_at(Square(0, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(state.piece_at(Square(6, 0)), Some((Color::White, Piece::Pawn)));
        assert_eq!(state.piece_at(Square(4, 4)), None);
        assert_eq!(state.board().piece_count(), 32);
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.castling_rights(), CastlingRights::all());
        assert_eq!(state.fullmove_number(), 1);
        assert_eq!(state.move_count(), 0);
    }

    #[test]
    fn test_king_square() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Some(Square(7, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square(0, 4)));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn test_piece_counts() {
        let board = Board::starting_position();
        assert_eq!(board.count(Color::White, Piece::Pawn), 8);
        assert_eq!(board.count(Color::Black, Piece::Bishop), 2);
        assert_eq!(board.count(Color::Black, Piece::King), 1);
    }

    #[test]
    #[should_panic(expected = "no White king")]
    fn test_missing_king_is_fatal() {
        let mut state = GameState::new();
        state.board.take(Square(7, 4));
        let _ = state.expect_king(Color::White);
    }
}
