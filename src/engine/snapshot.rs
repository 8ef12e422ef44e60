//! Published, read-only views of the game.
//!
//! A [`Snapshot`] is built once per accepted mutation and never changed
//! afterwards; readers share it through an `Arc`. [`EncodedBoard`] is the
//! fixed integer layout handed to hosts that draw the board.

use crate::board::{Board, Color, GameState, GameStatus, Move, Piece, Square, SquareContent};

/// Immutable game view published by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    state: GameState,
    status: GameStatus,
    last_move: Option<Move>,
    version: u64,
}

impl Snapshot {
    /// Build a snapshot, classifying the position once.
    #[must_use]
    pub fn new(state: GameState, last_move: Option<Move>, version: u64) -> Self {
        Snapshot {
            status: state.status(),
            state,
            last_move,
            version,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Move that produced this position, for highlighting.
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Increases by one with every publication of the same engine.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    #[must_use]
    pub fn encode(&self) -> EncodedBoard {
        EncodedBoard::from_board(self.state.board())
    }
}

/// Encode one square as `type | color << 8`; `0` is empty.
#[inline]
#[must_use]
pub fn encode_square(content: SquareContent) -> u16 {
    match content {
        None => 0,
        Some((color, piece)) => u16::from(piece.code()) | (u16::from(color.code()) << 8),
    }
}

/// Reverse [`encode_square`].
///
/// Returns `None` for an empty square and for values that do not name a
/// piece and a color.
#[must_use]
pub fn decode_square(value: u16) -> Option<(Color, Piece)> {
    let [type_code, color_code] = value.to_le_bytes();
    let piece = Piece::from_code(type_code)?;
    let color = Color::from_code(color_code)?;
    Some((color, piece))
}

/// 64 squares in row-major order (row 0 is the eighth rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedBoard([u16; 64]);

impl EncodedBoard {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut cells = [0u16; 64];
        for sq in Square::all() {
            cells[sq.index()] = encode_square(board.piece_at(sq));
        }
        EncodedBoard(cells)
    }

    /// Encoded value at `(row, col)`, or `None` off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u16> {
        Square::new(row, col).map(|sq| self.0[sq.index()])
    }

    #[must_use]
    pub fn decode(&self, row: usize, col: usize) -> Option<(Color, Piece)> {
        self.get(row, col).and_then(decode_square)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u16; 64] {
        &self.0
    }

    /// Byte layout: `(type, color)` pairs, 128 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; 128] {
        let mut bytes = [0u8; 128];
        for (chunk, value) in bytes.chunks_exact_mut(2).zip(self.0.iter()) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        bytes
    }
}
