//! Thread-safe engine facade.
//!
//! [`ChessEngine`] owns the authoritative game and publishes immutable
//! [`Snapshot`]s that a render thread can poll while another thread plays
//! moves or asks the AI for one.

mod background;
mod config;
mod controller;
mod snapshot;

pub use config::EngineConfig;
pub use controller::{ChessEngine, EngineError};
pub use snapshot::{decode_square, encode_square, EncodedBoard, Snapshot};
