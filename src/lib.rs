//! Strictly Mill library - rules engine and minimax opponent for a
//! three-piece mill game.
//!
//! # Architecture
//!
//! - **Topology**: the 9-node board, its edges, and the winning lines
//! - **Rules**: pure move legality and win checks
//! - **Generator**: randomized starting boards with no quick wins
//! - **Search**: alpha-beta minimax choosing the automated side's move
//! - **Controller**: one game's state, history, and cross-game scores
//! - **Session**: per-session controllers behind their own locks
//!
//! # Example
//!
//! ```
//! use strictly_mill::{Board, GameController, OpponentMode, Position, Side};
//!
//! let board = Board::from_layout("BW..B.WBW").unwrap();
//! let mut game = GameController::with_board(board, OpponentMode::Ai);
//! let report = game
//!     .submit_move(Position::TopLeft, Position::MiddleLeft, Side::Black)
//!     .unwrap();
//!
//! // Black's move and White's automated reply.
//! assert_eq!(report.events.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, MillConfig};

// Crate-level exports - Session management
pub use session::{SessionError, SessionId, SessionManager};

// Crate-level exports - Game types
pub use games::mill::{
    Board, GameController, GameSnapshot, GameState, GameStatus, GeneratedBoard, GeneratorConfig,
    IllegalMove, LayoutError, Move, MoveError, MoveRecord, OpponentMode, PIECES_PER_SIDE, Position,
    Provenance, Score, ScoreTally, SearchConfig, SearchOutcome, Side, Square, TurnEvent, TurnReport,
    WinReason,
};

/// Pure rule functions and static board topology.
pub mod rules {
    pub use crate::games::mill::{
        FORBIDDEN_PAIRS, WINNING_LINES, check_move, is_adjacent, is_forbidden, is_legal_move,
        is_winning_position, legal_moves, neighbors, valid_destinations, winner,
    };
}

/// Starting board generation.
pub mod generator {
    pub use crate::games::mill::generator::{
        fallback_phase, generate_board, quick_win_reachable, random_board, strict_phase,
    };
}

/// Alpha-beta search for the automated side.
pub mod search {
    pub use crate::games::mill::search::{
        MAXIMIZER_WINS, MINIMIZER_WINS, NEUTRAL, choose_move, evaluate, search,
    };
}

/// Game invariants, checkable against any controller.
pub mod invariants {
    pub use crate::games::mill::invariants::{
        AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
        InvariantViolation, MillInvariants, PieceCountInvariant,
    };
}
