//! Chess rules, position model and move selection.
//!
//! Positions are plain `Copy` values on an 8x8 mailbox board. Row 0 is the
//! eighth rank (Black's back rank) and column 0 is the a-file; White pawns
//! move toward row 0. Applying a move yields a new [`GameState`] and never
//! edits the original.
//!
//! # Example
//! ```
//! use chess_core::board::{GameState, GameStatus};
//!
//! let state = GameState::new();
//! assert_eq!(state.legal_moves().len(), 20);
//!
//! let e4 = state.parse_move("e2e4").unwrap();
//! let next = state.apply_move(&e4);
//! assert_eq!(next.status(), GameStatus::Playing);
//! ```

mod attack_tables;
mod attacks;
mod error;
mod eval;
mod fen;
mod make_move;
mod movegen;
mod pst;
pub mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SearchError, SquareError};
pub use state::{Board, GameState, SquareContent};
pub use status::GameStatus;
pub use types::{CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square, NO_MOVE_WIRE};

pub use search::{select_move, SearchInfo, SearchInfoCallback, SearchLimits, SearchResult};

pub(crate) use types::{ScoredMoveList, MAX_PLY, PROMOTION_PIECES};
