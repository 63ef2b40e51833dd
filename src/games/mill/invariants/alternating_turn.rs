//! Alternating turn invariant: Black, White, Black, ...

use super::super::{GameController, Side};
use super::Invariant;

/// Invariant: Sides alternate, starting with Black.
///
/// While the game is in progress the side to move must match the
/// parity of the history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameController> for AlternatingTurnInvariant {
    fn holds(game: &GameController) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Side::Black
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        if game.state().is_over() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Side::Black
        } else {
            Side::White
        };
        *game.state().current_player() == expected_next
    }

    fn description() -> &'static str {
        "Sides alternate turns (Black, White, Black, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mill::{Board, OpponentMode, Position};

    #[test]
    fn test_fresh_game_holds() {
        let board = Board::from_layout("BW..B.WBW").unwrap();
        let game = GameController::with_board(board, OpponentMode::Human);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_human_game_alternates() {
        let board = Board::from_layout("BW..B.WBW").unwrap();
        let mut game = GameController::with_board(board, OpponentMode::Human);
        game.submit_move(Position::TopLeft, Position::MiddleLeft, Side::Black)
            .unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(*game.state().current_player(), Side::White);

        game.submit_move(Position::TopCenter, Position::TopLeft, Side::White)
            .unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(*game.state().current_player(), Side::Black);
    }
}
