use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, GameState};

/// Outcome classification of a position.
///
/// `CheckmateWhite` means White has been checkmated, `CheckmateBlack`
/// that Black has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Playing,
    CheckmateWhite,
    CheckmateBlack,
    Stalemate,
}

impl GameStatus {
    /// Integer code used by the host boundary (0..=3).
    #[inline]
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            GameStatus::Playing => 0,
            GameStatus::CheckmateWhite => 1,
            GameStatus::CheckmateBlack => 2,
            GameStatus::Stalemate => 3,
        }
    }

    #[must_use]
    pub const fn from_code(code: i32) -> Option<GameStatus> {
        match code {
            0 => Some(GameStatus::Playing),
            1 => Some(GameStatus::CheckmateWhite),
            2 => Some(GameStatus::CheckmateBlack),
            3 => Some(GameStatus::Stalemate),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// The checkmated side, if any.
    #[must_use]
    pub const fn loser(self) -> Option<Color> {
        match self {
            GameStatus::CheckmateWhite => Some(Color::White),
            GameStatus::CheckmateBlack => Some(Color::Black),
            GameStatus::Playing | GameStatus::Stalemate => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::CheckmateWhite => write!(f, "white is checkmated"),
            GameStatus::CheckmateBlack => write!(f, "black is checkmated"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl GameState {
    /// Classify the position for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.has_legal_moves() {
            return GameStatus::Playing;
        }
        if !self.in_check() {
            return GameStatus::Stalemate;
        }
        match self.side_to_move {
            Color::White => GameStatus::CheckmateWhite,
            Color::Black => GameStatus::CheckmateBlack,
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        matches!(
            self.status(),
            GameStatus::CheckmateWhite | GameStatus::CheckmateBlack
        )
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}
