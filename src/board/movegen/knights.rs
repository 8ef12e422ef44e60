use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Color, GameState, MoveList, Square};

impl GameState {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to_sq in &KNIGHT_TARGETS[from.index()] {
            self.push_step(from, to_sq, color, moves);
        }
    }
}
