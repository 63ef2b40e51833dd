//! Move legality for the mill game.

use super::super::action::{IllegalMove, Move};
use super::super::topology::{is_adjacent, is_forbidden, neighbors};
use super::super::{Board, Position, Side};
use tracing::instrument;

/// Checks a move for `mover`, reporting the first rule it breaks.
///
/// A move is legal when the source holds the mover's piece, the
/// destination is empty, the destination is adjacent to the source, and
/// the pair is not forbidden.
#[instrument(level = "trace")]
pub fn check_move(board: &Board, mv: Move, mover: Side) -> Result<(), IllegalMove> {
    if !board.is_owned_by(mv.from, mover) {
        return Err(IllegalMove::NotOwned(mv.from, mover));
    }
    if !board.is_empty(mv.to) {
        return Err(IllegalMove::DestinationOccupied(mv.to));
    }
    if is_forbidden(mv.from, mv.to) {
        return Err(IllegalMove::ForbiddenEdge(mv.from, mv.to));
    }
    if !is_adjacent(mv.from, mv.to) {
        return Err(IllegalMove::NotAdjacent(mv.from, mv.to));
    }
    Ok(())
}

/// Returns true iff [`check_move`] accepts the move.
pub fn is_legal_move(board: &Board, mv: Move, mover: Side) -> bool {
    check_move(board, mv, mover).is_ok()
}

/// Empty, non-forbidden neighbours of `from`, in adjacency order.
///
/// Ownership of `from` is not checked.
pub fn valid_destinations(board: &Board, from: Position) -> Vec<Position> {
    neighbors(from)
        .iter()
        .copied()
        .filter(|&to| board.is_empty(to) && !is_forbidden(from, to))
        .collect()
}

/// Every legal move for `side`.
///
/// Ordered by source position ascending, then adjacency-list order. The
/// search relies on this order for tie-breaking.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces(side)
        .flat_map(|from| {
            valid_destinations(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}
