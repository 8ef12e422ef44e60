use super::super::{Color, GameState, Move, MoveList, Square, PROMOTION_PIECES};

impl GameState {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        let Some(forward_sq) = from.offset(dir, 0) else {
            return;
        };

        if self.board.is_empty(forward_sq) {
            if forward_sq.0 == promotion_rank {
                for promo in PROMOTION_PIECES {
                    moves.push(Move::promotion_to(from, forward_sq, promo, None));
                }
            } else {
                moves.push(Move::new(from, forward_sq, None));
                if from.0 == color.pawn_start_rank() {
                    if let Some(double_sq) = forward_sq.offset(dir, 0) {
                        if self.board.is_empty(double_sq) {
                            moves.push(Move::double_pawn_push(from, double_sq));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target_sq) = from.offset(dir, dc) else {
                continue;
            };
            match self.board.piece_at(target_sq) {
                Some((target_color, captured)) if target_color != color => {
                    if target_sq.0 == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(Move::promotion_to(
                                from,
                                target_sq,
                                promo,
                                Some(captured),
                            ));
                        }
                    } else {
                        moves.push(Move::new(from, target_sq, Some(captured)));
                    }
                }
                Some(_) => {}
                None => {
                    if Some(target_sq) == self.en_passant_target {
                        moves.push(Move::en_passant(from, target_sq));
                    }
                }
            }
        }
    }
}
