//! Piece count invariant: pieces are never captured or added.

use super::super::{GameController, Side};
use super::Invariant;

/// Invariant: Each side has as many pieces as it started with.
///
/// Pieces only slide, so the three-per-side count of a generated board
/// holds for every later board.
pub struct PieceCountInvariant;

impl Invariant<GameController> for PieceCountInvariant {
    fn holds(game: &GameController) -> bool {
        let state = game.state();
        [Side::Black, Side::White]
            .into_iter()
            .all(|side| state.board().count(side) == state.initial_board().count(side))
    }

    fn description() -> &'static str {
        "Each side keeps the pieces it started with"
    }
}
