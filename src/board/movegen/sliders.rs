use super::super::attack_tables::{BISHOP_DIRS, QUEEN_DIRS, RAYS, ROOK_DIRS};
use super::super::{Color, GameState, Move, MoveList, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn dirs(self) -> &'static [usize] {
        match self {
            SliderType::Bishop => &BISHOP_DIRS,
            SliderType::Rook => &ROOK_DIRS,
            SliderType::Queen => &QUEEN_DIRS,
        }
    }
}

impl GameState {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        moves: &mut MoveList,
    ) {
        for &dir in slider.dirs() {
            for &to_sq in &RAYS[from.index()][dir] {
                match self.board.piece_at(to_sq) {
                    None => moves.push(Move::new(from, to_sq, None)),
                    Some((target_color, captured)) => {
                        if target_color != color {
                            moves.push(Move::new(from, to_sq, Some(captured)));
                        }
                        break;
                    }
                }
            }
        }
    }
}
