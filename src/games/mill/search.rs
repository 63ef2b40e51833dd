//! Minimax search with alpha-beta pruning for the automated opponent.
//!
//! Roles are fixed: Black is the maximizer, White (the automated side) is
//! the minimizer. Scores are from Black's point of view.

use super::action::Move;
use super::rules::{is_winning_position, legal_moves};
use super::types::{Board, Side};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Position score from Black's point of view.
pub type Score = i32;

/// Black has won (or White is blocked).
pub const MAXIMIZER_WINS: Score = 1;
/// White has won (or Black is blocked).
pub const MINIMIZER_WINS: Score = -1;
/// No decision within the horizon.
pub const NEUTRAL: Score = 0;

const MAXIMIZER: Side = Side::Black;
const MINIMIZER: Side = Side::White;

/// Tunables for move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies simulated after each candidate move.
    #[serde(default = "default_depth")]
    depth: u32,
}

fn default_depth() -> u32 {
    2
}

impl SearchConfig {
    /// Creates a search configuration.
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(default_depth())
    }
}

/// Result of a root search for the automated side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Chosen move, or `None` when the automated side cannot move.
    best_move: Option<Move>,
    /// Score of the chosen move.
    score: Option<Score>,
    /// Positions evaluated.
    nodes: u64,
    /// Sibling lists cut short by pruning.
    cutoffs: u64,
}

/// Node and cutoff counters for one search.
#[derive(Debug, Default)]
struct AlphaBeta {
    nodes: u64,
    cutoffs: u64,
}

impl AlphaBeta {
    fn evaluate(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes += 1;

        if is_winning_position(board, MAXIMIZER) {
            return MAXIMIZER_WINS;
        }
        if is_winning_position(board, MINIMIZER) {
            return MINIMIZER_WINS;
        }
        if depth == 0 {
            return NEUTRAL;
        }

        let side = if maximizing { MAXIMIZER } else { MINIMIZER };
        let moves = legal_moves(board, side);
        if moves.is_empty() {
            // A side that cannot move loses.
            return if maximizing {
                MINIMIZER_WINS
            } else {
                MAXIMIZER_WINS
            };
        }

        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        for mv in moves {
            let child = board.with_move(mv, side);
            let score = self.evaluate(&child, depth - 1, !maximizing, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Scores `board` with `depth` plies left and the given role to move.
///
/// A win for either side takes precedence over the depth cutoff. Move
/// generation uses the fixed role sides, not the game's side to move.
pub fn evaluate(board: &Board, depth: u32, maximizing: bool, alpha: Score, beta: Score) -> Score {
    AlphaBeta::default().evaluate(board, depth, maximizing, alpha, beta)
}

/// Picks the automated side's move.
///
/// Every legal White move is scored with Black to reply and `depth` plies
/// of look-ahead. The lowest score wins; ties go to the first move in
/// enumeration order.
#[instrument(skip_all, fields(depth = config.depth, layout = %board.layout()))]
pub fn search(board: &Board, config: &SearchConfig) -> SearchOutcome {
    let mut stats = AlphaBeta::default();
    let mut best: Option<(Move, Score)> = None;

    for mv in legal_moves(board, MINIMIZER) {
        let child = board.with_move(mv, MINIMIZER);
        let score = stats.evaluate(&child, config.depth, true, Score::MIN, Score::MAX);
        debug!(%mv, score, "Scored candidate");

        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((mv, score));
        }
    }

    let outcome = SearchOutcome {
        best_move: best.map(|(mv, _)| mv),
        score: best.map(|(_, score)| score),
        nodes: stats.nodes,
        cutoffs: stats.cutoffs,
    };
    debug!(?outcome, "Search finished");
    outcome
}

/// Convenience wrapper around [`search`] returning only the move.
pub fn choose_move(board: &Board, config: &SearchConfig) -> Option<Move> {
    search(board, config).best_move
}
