//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter, NO_MOVE_WIRE};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use moves::{ScoredMoveList, MAX_PLY};
pub(crate) use piece::PROMOTION_PIECES;
