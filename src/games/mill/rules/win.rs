//! Win detection logic for the mill game.

use super::super::topology::WINNING_LINES;
use super::super::{Board, Side};
use tracing::instrument;

/// Checks if `side` occupies every node of at least one winning line.
///
/// Both sides are checked independently; a constructed board may satisfy
/// this for more than one side.
#[instrument(level = "trace")]
pub fn is_winning_position(board: &Board, side: Side) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.is_owned_by(pos, side)))
}

/// Returns the first side (Black, then White) holding a winning line.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Side> {
    [Side::Black, Side::White]
        .into_iter()
        .find(|&side| is_winning_position(board, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mill::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, crate::games::mill::Square::Occupied(Side::White));
            }
            assert!(is_winning_position(&board, Side::White));
            assert!(!is_winning_position(&board, Side::Black));
            assert_eq!(winner(&board), Some(Side::White));
        }
    }

    #[test]
    fn test_outer_row_is_not_a_win() {
        // Top row is a straight line but does not pass through the center.
        let board = Board::from_layout("BBB.W.W.W").unwrap();
        assert!(!is_winning_position(&board, Side::Black));
    }

    #[test]
    fn test_superset_of_line_wins() {
        // Extra piece off the line does not matter.
        let board = Board::from_layout("B..BBB...").unwrap();
        assert!(is_winning_position(&board, Side::Black));
        assert!(board.is_owned_by(Position::Center, Side::Black));
    }

    #[test]
    fn test_incomplete_line() {
        let board = Board::from_layout("B...B....").unwrap();
        assert!(!is_winning_position(&board, Side::Black));
    }
}
