//! Randomized starting boards.
//!
//! Generation runs in two explicit phases. The strict phase draws up to
//! `max_attempts` random boards and keeps the first one that is not a win
//! and from which no win is reachable within `horizon` half-moves. If
//! every attempt fails, the fallback phase redraws until it finds a board
//! that is merely not an immediate win.

use super::Position;
use super::rules::{legal_moves, winner};
use super::types::{Board, PIECES_PER_SIDE, Side, Square};
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tunables for board generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Random boards tried before falling back.
    #[serde(default = "default_max_attempts")]
    max_attempts: u32,

    /// Half-moves (starting with Black) within which no win may be reachable.
    #[serde(default = "default_horizon")]
    horizon: u32,
}

fn default_max_attempts() -> u32 {
    100
}

fn default_horizon() -> u32 {
    3
}

impl GeneratorConfig {
    /// Creates a generator configuration.
    pub fn new(max_attempts: u32, horizon: u32) -> Self {
        Self {
            max_attempts,
            horizon,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(default_max_attempts(), default_horizon())
    }
}

/// Which phase produced a generated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Passed every check on the given attempt (1-based).
    Strict {
        /// Attempt number that succeeded.
        attempt: u32,
    },
    /// Strict phase exhausted; only the immediate-win check holds.
    Fallback {
        /// Boards redrawn during the fallback phase.
        redraws: u32,
    },
}

/// A generated starting board and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GeneratedBoard {
    /// The starting board.
    board: Board,
    /// Phase that produced it.
    provenance: Provenance,
}

impl GeneratedBoard {
    /// Returns true if the board came from the fallback phase.
    pub fn is_fallback(&self) -> bool {
        matches!(self.provenance, Provenance::Fallback { .. })
    }
}

/// Generates a starting board using both phases.
#[instrument(skip(rng))]
pub fn generate_board<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> GeneratedBoard {
    if let Some(generated) = strict_phase(rng, config) {
        return generated;
    }

    warn!(
        max_attempts = config.max_attempts,
        "No board passed the look-ahead check; falling back"
    );
    fallback_phase(rng)
}

/// Tries up to `max_attempts` boards against every safety check.
#[instrument(skip(rng))]
pub fn strict_phase<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Option<GeneratedBoard> {
    for attempt in 1..=config.max_attempts {
        let board = random_board(rng);

        if winner(&board).is_some() {
            debug!(attempt, layout = %board.layout(), "Rejected: already won");
            continue;
        }

        if quick_win_reachable(&board, Side::Black, config.horizon) {
            debug!(attempt, layout = %board.layout(), "Rejected: win within horizon");
            continue;
        }

        info!(attempt, layout = %board.layout(), "Generated starting board");
        return Some(GeneratedBoard {
            board,
            provenance: Provenance::Strict { attempt },
        });
    }

    None
}

/// Redraws until the board is not an immediate win for either side.
///
/// Terminates with probability 1: most random placements do not fill a
/// line through the center.
#[instrument(skip(rng))]
pub fn fallback_phase<R: Rng + ?Sized>(rng: &mut R) -> GeneratedBoard {
    let mut redraws = 0;
    let mut board = random_board(rng);
    while winner(&board).is_some() {
        redraws += 1;
        board = random_board(rng);
    }

    info!(redraws, layout = %board.layout(), "Generated fallback starting board");
    GeneratedBoard {
        board,
        provenance: Provenance::Fallback { redraws },
    }
}

/// Places three pieces per side on distinct, uniformly chosen nodes.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut positions = Position::ALL;
    positions.shuffle(rng);

    let mut board = Board::new();
    let (black, rest) = positions.split_at(PIECES_PER_SIDE);
    for &pos in black {
        board.set(pos, Square::Occupied(Side::Black));
    }
    for &pos in &rest[..PIECES_PER_SIDE] {
        board.set(pos, Square::Occupied(Side::White));
    }
    board
}

/// Checks whether any sequence of at most `plies` legal half-moves,
/// starting with `to_move`, reaches a board where either side has won.
///
/// The search is exhaustive. A board that is already won counts as
/// reachable at every horizon, including zero.
pub fn quick_win_reachable(board: &Board, to_move: Side, plies: u32) -> bool {
    if winner(board).is_some() {
        return true;
    }
    if plies == 0 {
        return false;
    }

    legal_moves(board, to_move).into_iter().any(|mv| {
        let next = board.with_move(mv, to_move);
        quick_win_reachable(&next, to_move.opponent(), plies - 1)
    })
}
