//! Board module tests.
//!
//! - `perft.rs` - move generator node counts on standard positions
//! - `edge_cases.rs` - special moves, check evasion, game end positions
//! - `proptest.rs` - property tests over random playouts

mod proptest;
