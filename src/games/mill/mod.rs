//! Three-piece mill played on a 9-node board.

mod action;
mod controller;
pub mod generator;
pub mod invariants;
mod position;
pub mod rules;
pub mod search;
mod topology;
mod types;

pub use action::{IllegalMove, Move, MoveError, MoveRecord};
pub use controller::{GameController, GameSnapshot, TurnEvent, TurnReport};
pub use generator::{GeneratedBoard, GeneratorConfig, Provenance};
pub use position::Position;
pub use rules::{
    check_move, is_legal_move, is_winning_position, legal_moves, valid_destinations, winner,
};
pub use search::{Score, SearchConfig, SearchOutcome};
pub use topology::{FORBIDDEN_PAIRS, WINNING_LINES, is_adjacent, is_forbidden, neighbors};
pub use types::{
    Board, GameState, GameStatus, LayoutError, OpponentMode, PIECES_PER_SIDE, ScoreTally, Side,
    Square, WinReason,
};
