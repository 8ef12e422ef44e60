//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// `(piece, lowercase letter, centipawn value)`, in wire-code order.
const PIECE_TABLE: [(Piece, char, i32); 6] = [
    (Piece::Pawn, 'p', 100),
    (Piece::Knight, 'n', 320),
    (Piece::Bishop, 'b', 330),
    (Piece::Rook, 'r', 500),
    (Piece::Queen, 'q', 900),
    (Piece::King, 'k', 20_000),
];

impl Piece {
    /// Every piece kind, pawn first.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Host wire code: 1 = pawn .. 6 = king. Zero marks an empty square.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`Piece::code`].
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Piece> {
        if code >= 1 && code <= 6 {
            Some(PIECE_TABLE[(code - 1) as usize].0)
        } else {
            None
        }
    }

    /// Piece for a FEN letter of either case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        let lower = c.to_ascii_lowercase();
        PIECE_TABLE
            .iter()
            .find(|&&(_, letter, _)| letter == lower)
            .map(|&(piece, _, _)| piece)
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        PIECE_TABLE[self as usize].1
    }

    /// FEN letter: uppercase for White.
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        match color {
            Color::White => self.to_char().to_ascii_uppercase(),
            Color::Black => self.to_char(),
        }
    }

    /// Material value in centipawns. The king's value only matters for
    /// capture ordering.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        PIECE_TABLE[self as usize].2
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, Piece::Pawn | Piece::King)
    }
}

/// Promotion piece choices in order of typical preference (queen first)
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Host wire code: 1 = white, 2 = black (0 is reserved for "no color").
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 2,
        }
    }

    /// Inverse of [`Color::code`].
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Color> {
        match code {
            1 => Some(Color::White),
            2 => Some(Color::Black),
            _ => None,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank row for this color (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Pawn forward direction in rows (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Pawn starting row (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Pawn promotion row (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_codes_match_host_encoding() {
        assert_eq!(Piece::Pawn.code(), 1);
        assert_eq!(Piece::King.code(), 6);
        for piece in Piece::ALL {
            assert_eq!(Piece::from_code(piece.code()), Some(piece));
        }
        assert_eq!(Piece::from_code(0), None);
        assert_eq!(Piece::from_code(7), None);
    }

    #[test]
    fn test_color_codes_match_host_encoding() {
        assert_eq!(Color::White.code(), 1);
        assert_eq!(Color::Black.code(), 2);
        assert_eq!(Color::from_code(0), None);
        assert_eq!(Color::from_code(2), Some(Color::Black));
    }

    #[test]
    fn test_promotion_targets() {
        assert!(Piece::Queen.is_promotion_target());
        assert!(Piece::Knight.is_promotion_target());
        assert!(!Piece::Pawn.is_promotion_target());
        assert!(!Piece::King.is_promotion_target());
    }
}
