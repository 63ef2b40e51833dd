//! History consistency invariant: replaying the history reproduces the board.

use super::super::GameController;
use super::super::rules::is_legal_move;
use super::Invariant;

/// Invariant: Replaying the recorded moves from the starting board, each
/// one legal at the time, yields the current board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameController> for HistoryConsistentInvariant {
    fn holds(game: &GameController) -> bool {
        let mut board = *game.state().initial_board();

        for record in game.history() {
            let mv = record.as_move();
            if !is_legal_move(&board, mv, record.player) {
                return false;
            }
            board = board.with_move(mv, record.player);
        }

        board == *game.state().board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}
