//! First-class action types for the mill game.
//!
//! Moves are domain events: they carry the player's intent and are
//! validated against the rules before the controller applies them.

use super::position::Position;
use super::types::Side;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// A move: slide a piece from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Node the piece leaves.
    pub from: Position,
    /// Node the piece lands on.
    pub to: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.from.to_index() + 1,
            self.to.to_index() + 1
        )
    }
}

/// One entry in a game's move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Side that moved.
    pub player: Side,
    /// Node the piece left.
    pub from: Position,
    /// Node the piece landed on.
    pub to: Position,
    /// Wall-clock label, `HH:MM:SS`.
    pub timestamp: String,
}

impl MoveRecord {
    /// Records `mv` by `player`, stamped with the current local time.
    pub fn now(player: Side, mv: Move) -> Self {
        Self {
            player,
            from: mv.from,
            to: mv.to,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    /// The move this record describes.
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp,
            self.player,
            self.as_move()
        )
    }
}

/// Why a move is structurally illegal.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IllegalMove {
    /// The source node does not hold the mover's piece.
    #[display("{} has no {} piece", _0, _1)]
    NotOwned(Position, Side),

    /// The destination node is occupied.
    #[display("{} is occupied", _0)]
    DestinationOccupied(Position),

    /// The destination is not connected to the source.
    #[display("{} is not connected to {}", _1, _0)]
    NotAdjacent(Position, Position),

    /// The pair is connected on the board but excluded from play.
    #[display("moving between {} and {} is not allowed", _0, _1)]
    ForbiddenEdge(Position, Position),
}

/// Reason a submitted move was rejected. No state changes on rejection.
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    /// The game already has a winner.
    #[display("Game is over")]
    GameOver,

    /// The claimed mover is not the side to move.
    #[display("Not your turn: {} to move", expected)]
    WrongTurn {
        /// Side to move.
        expected: Side,
        /// Side that tried to move.
        claimed: Side,
    },

    /// The move breaks the movement rules.
    #[display("Invalid move: {}", _0)]
    #[from]
    Illegal(IllegalMove),
}

impl std::error::Error for IllegalMove {}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Illegal(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_illegal_move_converts_and_stays_source() {
        let reason = IllegalMove::DestinationOccupied(Position::Center);
        let err: MoveError = reason.into();
        assert_eq!(err, MoveError::Illegal(reason));
        assert_eq!(err.to_string(), "Invalid move: Center is occupied");
        assert!(err.source().is_some());
        assert!(MoveError::GameOver.source().is_none());
    }

    #[test]
    fn test_move_display_is_one_based() {
        let mv = Move::new(Position::TopLeft, Position::Center);
        assert_eq!(mv.to_string(), "1 -> 5");
    }
}
