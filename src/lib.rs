//! Chess rules, move search and a thread-safe engine facade for interactive
//! hosts.
//!
//! The [`board`] module holds the rules: positions, legal move generation,
//! check and mate detection, evaluation and the AI search. The [`engine`]
//! module wraps them in [`ChessEngine`], which a UI can share between an
//! input thread and a render thread.

pub mod board;
pub mod engine;
pub mod sync;

pub use board::{Color, GameState, GameStatus, Move, Piece, Square};
pub use engine::{ChessEngine, EncodedBoard, EngineConfig, EngineError, Snapshot};
