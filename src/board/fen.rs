use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, GameState, Move, Piece, Square};

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let mut board = Board::empty();
    let mut ranks = 0;
    for (row, rank_str) in placement.split('/').enumerate() {
        ranks += 1;
        if row >= 8 {
            return Err(FenError::InvalidRank { rank: row });
        }
        let mut col = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if col >= 8 {
                return Err(FenError::TooManyFiles {
                    rank: row,
                    files: col + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.put(Square(row, col), color, piece);
            col += 1;
        }
        if col > 8 {
            return Err(FenError::TooManyFiles {
                rank: row,
                files: col,
            });
        }
        if col < 8 {
            return Err(FenError::TooFewFiles {
                rank: row,
                files: col,
            });
        }
    }
    if ranks != 8 {
        return Err(FenError::RankCount { found: ranks });
    }

    for color in Color::BOTH {
        let count = board.count(color, Piece::King);
        if count != 1 {
            return Err(FenError::KingCount { color, count });
        }
    }
    Ok(board)
}

fn parse_counter(field: Option<&str>, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::InvalidCounter {
            found: text.to_string(),
        }),
    }
}

impl GameState {
    /// Parse a position from FEN.
    ///
    /// The halfmove clock and fullmove number are optional and default to
    /// `0` and `1`. Each side must have exactly one king.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling_rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling_rights.set(Color::White, true),
                'Q' => castling_rights.set(Color::White, false),
                'k' => castling_rights.set(Color::Black, true),
                'q' => castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        // The target sits behind a pawn the opponent just pushed two squares.
        let en_passant_target = match parts[3] {
            "-" => None,
            text => {
                let expected_row = if side_to_move == Color::White { 2 } else { 5 };
                match text.parse::<Square>() {
                    Ok(sq) if sq.row() == expected_row => Some(sq),
                    _ => {
                        return Err(FenError::InvalidEnPassant {
                            found: text.to_string(),
                        })
                    }
                }
            }
        };

        if let Some(target) = en_passant_target {
            let pushed = target.offset(-side_to_move.pawn_direction(), 0);
            let has_pawn = pushed.and_then(|sq| board.piece_at(sq))
                == Some((side_to_move.opponent(), Piece::Pawn));
            if !has_pawn || !board.is_empty(target) {
                return Err(FenError::EnPassantWithoutPawn {
                    square: target.to_string(),
                });
            }
        }

        let opponent = side_to_move.opponent();
        if board.is_in_check(opponent) {
            return Err(FenError::OpponentInCheck { color: opponent });
        }

        let halfmove_clock = parse_counter(parts.get(4).copied(), 0)?;
        let fullmove_number = parse_counter(parts.get(5).copied(), 1)?.max(1);

        Ok(GameState {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            move_count: 0,
        })
    }

    /// Render the position as FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.board.piece_at(Square(row, col)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling_rights.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (`"e2e4"`, `"e7e8q"`) and match it
    /// against the legal moves of this position.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        if text.len() < 4 || text.len() > 5 || !text.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: text.len() });
        }

        let (from, to) = match (text[0..2].parse::<Square>(), text[2..4].parse::<Square>()) {
            (Ok(from), Ok(to)) => (from, to),
            _ => {
                return Err(MoveParseError::InvalidSquare {
                    notation: text.to_string(),
                })
            }
        };

        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if piece.is_promotion_target() => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        // Coordinate notation names the promotion piece explicitly.
        let found = self.find_legal_move(from, to, promotion);
        match found {
            Some(m) if m.promotion() == promotion => Ok(m),
            _ => Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            }),
        }
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_position_round_trip() {
        let state = GameState::from_fen(START_FEN).unwrap();
        assert_eq!(state, GameState::new());
        assert_eq!(GameState::new().to_fen(), START_FEN);
    }

    #[test]
    fn test_round_trip_after_moves() {
        let mut state = GameState::new();
        for text in ["e2e4", "c7c5", "g1f3"] {
            let m = state.parse_move(text).unwrap();
            state = state.apply_move(&m);
        }
        let fen = state.to_fen();
        assert_eq!(
            fen,
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
        let reparsed = GameState::from_fen(&fen).unwrap();
        assert_eq!(reparsed.board(), state.board());
        assert_eq!(reparsed.to_fen(), fen);
    }

    #[test]
    fn test_black_to_move_with_en_passant() {
        let state = GameState::from_fen(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        )
        .unwrap();
        assert_eq!(state.side_to_move(), Color::Black);
        assert_eq!(state.en_passant_target(), Some(Square(5, 4)));
    }

    #[test]
    fn test_counters_are_optional() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
        assert_eq!(state.halfmove_clock(), 0);
        assert_eq!(state.fullmove_number(), 1);
    }

    #[test]
    fn test_partial_castling() {
        let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        let rights = state.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_fen_errors() {
        assert!(matches!(
            GameState::from_fen("8/8/8/8/8/8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        ));
        assert!(matches!(
            GameState::from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiece { char: 'x' })
        ));
        assert!(matches!(
            GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(FenError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1"),
            Err(FenError::InvalidCastling { char: 'X' })
        ));
        assert!(matches!(
            GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            GameState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"),
            Err(FenError::InvalidCounter { .. })
        ));
        assert!(matches!(
            GameState::from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::TooManyFiles { .. })
        ));
        assert!(matches!(
            GameState::from_fen("8/8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidRank { rank: 8 })
        ));
    }

    #[test]
    fn test_incomplete_placement_is_rejected() {
        assert_eq!(
            GameState::from_fen("4k3/4K3 w - - 0 1"),
            Err(FenError::RankCount { found: 2 })
        );
        assert_eq!(
            GameState::from_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1"),
            Err(FenError::TooFewFiles { rank: 7, files: 7 })
        );
    }

    #[test]
    fn test_en_passant_needs_the_pushed_pawn() {
        // A knight, not a pawn, stands on d5
        assert_eq!(
            GameState::from_fen("4k3/8/8/3nP3/8/8/8/4K3 w - d6 0 1"),
            Err(FenError::EnPassantWithoutPawn {
                square: "d6".to_string()
            })
        );
        // A white pawn on d5 cannot have been pushed by black
        assert!(GameState::from_fen("4k3/8/8/3PP3/8/8/8/4K3 w - d6 0 1").is_err());

        let state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        assert_eq!(state.en_passant_target(), Some(Square(2, 3)));
    }

    #[test]
    fn test_side_not_to_move_in_check_is_rejected() {
        assert_eq!(
            GameState::from_fen("4k2R/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::OpponentInCheck {
                color: Color::Black
            })
        );
        // Same position with black to move is an ordinary check
        let state = GameState::from_fen("4k2R/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert!(state.in_check());
    }

    #[test]
    fn test_king_count_is_validated() {
        assert_eq!(
            GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::KingCount {
                color: Color::Black,
                count: 0
            })
        );
        assert_eq!(
            GameState::from_fen("k7/8/8/8/8/8/8/K3K3 w - - 0 1"),
            Err(FenError::KingCount {
                color: Color::White,
                count: 2
            })
        );
    }

    #[test]
    fn test_parse_move() {
        let state = GameState::new();
        let m = state.parse_move("e2e4").unwrap();
        assert_eq!(m.from(), Square(6, 4));
        assert_eq!(m.to(), Square(4, 4));
        assert!(m.is_double_pawn_push());
    }

    #[test]
    fn test_parse_move_errors() {
        let state = GameState::new();
        assert!(matches!(
            state.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            state.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            state.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));

        let promo = GameState::from_fen("8/P3k3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(matches!(
            promo.parse_move("a7a8k"),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        ));
        // A bare promotion push must name its piece in coordinate notation
        assert!(matches!(
            promo.parse_move("a7a8"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        assert_eq!(
            promo.parse_move("a7a8r").unwrap().promotion(),
            Some(Piece::Rook)
        );
    }

    #[test]
    fn test_from_str() {
        let state: GameState = START_FEN.parse().unwrap();
        assert_eq!(state.side_to_move(), Color::White);
    }
}
