//! Property-based tests using proptest.

use crate::board::search::{select_move, SearchLimits};
use crate::board::{GameState, GameStatus, Piece};
use crate::sync::StopFlag;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves from the start position.
fn random_playout(seed: u64, plies: usize) -> GameState {
    let mut state = GameState::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = state.legal_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        state = state.apply_move(&moves.as_slice()[idx]);
    }
    state
}

proptest! {
    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_playout(seed, num_moves);
        let mover = state.side_to_move();
        for mv in state.legal_moves().iter() {
            let after = state.apply_move(mv);
            prop_assert!(!after.is_in_check(mover), "Legal move left king in check: {:?}", mv);
        }
    }

    /// Property: every position keeps exactly one king per side
    #[test]
    fn prop_one_king_per_side(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_playout(seed, num_moves);
        for mv in state.legal_moves().iter() {
            let after = state.apply_move(mv);
            for color in crate::board::Color::BOTH {
                prop_assert_eq!(after.board().count(color, Piece::King), 1);
            }
        }
    }

    /// Property: applying a move is deterministic and leaves the source untouched
    #[test]
    fn prop_apply_is_pure(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_playout(seed, num_moves);
        let before = state;
        for mv in state.legal_moves().iter() {
            prop_assert_eq!(state.apply_move(mv), state.apply_move(mv));
        }
        prop_assert_eq!(state, before);
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_playout(seed, num_moves);
        let restored = GameState::from_fen(&state.to_fen()).unwrap();
        prop_assert_eq!(restored.board(), state.board());
        prop_assert_eq!(restored.side_to_move(), state.side_to_move());
        prop_assert_eq!(restored.castling_rights(), state.castling_rights());
        prop_assert_eq!(restored.en_passant_target(), state.en_passant_target());
        prop_assert_eq!(restored.halfmove_clock(), state.halfmove_clock());
        prop_assert_eq!(restored.fullmove_number(), state.fullmove_number());
    }

    /// Property: status agrees with the move list
    #[test]
    fn prop_status_matches_moves(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_playout(seed, num_moves);
        let no_moves = state.legal_moves().is_empty();
        match state.status() {
            GameStatus::Playing => prop_assert!(!no_moves),
            GameStatus::Stalemate => prop_assert!(no_moves && !state.in_check()),
            GameStatus::CheckmateWhite | GameStatus::CheckmateBlack => {
                prop_assert!(no_moves && state.in_check());
                prop_assert_eq!(state.status().loser(), Some(state.side_to_move()));
            }
        }
    }

    /// Property: legal moves from each square partition the full move list
    #[test]
    fn prop_moves_from_partition(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_playout(seed, num_moves);
        let total: usize = crate::board::Square::all()
            .map(|sq| state.legal_moves_from(sq).len())
            .sum();
        prop_assert_eq!(total, state.legal_moves().len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: the search returns a legal move whenever one exists
    #[test]
    fn prop_search_returns_legal_move(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_playout(seed, num_moves);
        let result = select_move(&state, &SearchLimits::depth(2), &StopFlag::new());
        if state.legal_moves().is_empty() {
            prop_assert!(result.is_err());
        } else {
            let result = result.unwrap();
            prop_assert!(state.is_legal_move(&result.best_move));
        }
    }
}
