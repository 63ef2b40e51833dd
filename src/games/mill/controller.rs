//! Turn orchestration for a single mill game.
//!
//! `GameController` owns one game's mutable state: the board, the side to
//! move, the move history, and the cross-game score tally. Every change
//! goes through [`GameController::submit_move`] or
//! [`GameController::new_game`].

use super::Position;
use super::action::{Move, MoveError, MoveRecord};
use super::generator::generate_board;
use super::invariants::assert_invariants;
use super::rules::{check_move, is_winning_position, legal_moves, winner};
use super::search::search;
use super::types::{Board, GameState, GameStatus, OpponentMode, ScoreTally, Side, WinReason};
use crate::config::MillConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Something that happened while processing a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TurnEvent {
    /// A piece moved.
    Moved(MoveRecord),
    /// `winner` completed a line through the center.
    Won {
        /// The side that completed the line.
        winner: Side,
    },
    /// `side` had to move but had no legal move, and lost.
    Blocked {
        /// The side left without a move.
        side: Side,
    },
}

/// Read-only view of a game, shaped for the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board, side to move, status, opponent mode.
    pub game_state: GameState,
    /// Moves played this game.
    pub moves_history: Vec<MoveRecord>,
    /// Wins across games.
    pub scores: ScoreTally,
}

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Events in the order they happened: the submitted move, then any
    /// automated reply, each followed by a win or blockade if one ended
    /// the game.
    pub events: Vec<TurnEvent>,
    /// State after the turn.
    pub snapshot: GameSnapshot,
}

/// Mutable state and turn logic for one game at a time.
#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
    history: Vec<MoveRecord>,
    scores: ScoreTally,
    config: MillConfig,
    rng: StdRng,
}

impl GameController {
    /// Creates a controller and starts a game with a generated board.
    #[instrument(skip(config))]
    pub fn new(config: MillConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a controller with a caller-supplied RNG, for reproducible boards.
    #[instrument(skip(config, rng))]
    pub fn with_rng(config: MillConfig, rng: StdRng) -> Self {
        let mode = *config.opponent();
        let mut controller = Self {
            state: GameState::new(Board::new(), mode),
            history: Vec::new(),
            scores: ScoreTally::default(),
            config,
            rng,
        };
        controller.new_game(mode);
        controller
    }

    /// Creates a controller whose first game starts from `board`.
    ///
    /// The board is taken as-is, without the generator's safety checks. A
    /// board that already holds a line, or leaves Black without a move,
    /// starts out decided.
    #[instrument(skip_all, fields(layout = %board.layout(), %mode))]
    pub fn with_board(board: Board, mode: OpponentMode) -> Self {
        let mut controller = Self {
            state: GameState::new(board, mode),
            history: Vec::new(),
            scores: ScoreTally::default(),
            config: MillConfig::default(),
            rng: StdRng::from_os_rng(),
        };
        controller.settle_opening();
        controller
    }

    /// Starts a new game: fresh board, Black to move, empty history.
    ///
    /// The score tally is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, mode: OpponentMode) -> &GameState {
        let generated = generate_board(&mut self.rng, self.config.generator());
        info!(
            layout = %generated.board().layout(),
            fallback = generated.is_fallback(),
            %mode,
            "New game"
        );

        self.state = GameState::new(*generated.board(), mode);
        self.history.clear();
        self.settle_opening();
        &self.state
    }

    /// Validates and applies `claimed_mover`'s move, then lets the
    /// automated side reply if it is its turn.
    ///
    /// # Errors
    ///
    /// Rejects the move without changing any state if the game is over,
    /// `claimed_mover` is not the side to move, or the move is illegal.
    #[instrument(skip_all, fields(from = %from, to = %to, side = %claimed_mover))]
    pub fn submit_move(
        &mut self,
        from: Position,
        to: Position,
        claimed_mover: Side,
    ) -> Result<TurnReport, MoveError> {
        if self.state.is_over() {
            warn!("Move submitted after game over");
            return Err(MoveError::GameOver);
        }

        let expected = *self.state.current_player();
        if claimed_mover != expected {
            warn!(%expected, "Move submitted out of turn");
            return Err(MoveError::WrongTurn {
                expected,
                claimed: claimed_mover,
            });
        }

        let mv = Move::new(from, to);
        check_move(self.state.board(), mv, claimed_mover).map_err(|reason| {
            warn!(%reason, "Illegal move");
            MoveError::Illegal(reason)
        })?;

        let mut events = Vec::new();
        self.apply_turn(mv, claimed_mover, &mut events);

        let to_move = *self.state.current_player();
        if !self.state.is_over() && self.state.is_automated(to_move) {
            self.automated_reply(to_move, &mut events);
        }

        Ok(TurnReport {
            events,
            snapshot: self.snapshot(),
        })
    }

    /// Returns a copy of the state, history, and scores.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_state: self.state.clone(),
            moves_history: self.history.clone(),
            scores: self.scores,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the moves played this game.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the wins recorded across games.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// Returns the configuration used for generation and search.
    pub fn config(&self) -> &MillConfig {
        &self.config
    }

    #[cfg(test)]
    pub(super) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Asks the search engine for `side`'s move and applies it.
    fn automated_reply(&mut self, side: Side, events: &mut Vec<TurnEvent>) {
        let outcome = search(self.state.board(), self.config.search());
        debug!(
            nodes = outcome.nodes(),
            cutoffs = outcome.cutoffs(),
            "Automated search complete"
        );

        match *outcome.best_move() {
            Some(mv) => self.apply_turn(mv, side, events),
            // Not reached: apply_turn has already ended the game if `side`
            // is blocked. The arm only keeps a blocked side losing.
            None => self.declare_blockade(side, events),
        }
    }

    /// Applies a validated move: record, win check, then pass the turn.
    fn apply_turn(&mut self, mv: Move, side: Side, events: &mut Vec<TurnEvent>) {
        self.state.apply_move(mv, side);
        let record = MoveRecord::now(side, mv);
        debug!(%record, "Move applied");
        self.history.push(record.clone());
        events.push(TurnEvent::Moved(record));

        if is_winning_position(self.state.board(), side) {
            info!(winner = %side, "Line completed");
            self.finish(side, WinReason::Line);
            events.push(TurnEvent::Won { winner: side });
        } else {
            self.state.flip_turn();
            let next = side.opponent();
            if legal_moves(self.state.board(), next).is_empty() {
                self.declare_blockade(next, events);
            }
        }

        assert_invariants(self);
    }

    /// Ends the game because `blocked` cannot move.
    fn declare_blockade(&mut self, blocked: Side, events: &mut Vec<TurnEvent>) {
        info!(%blocked, "Side has no legal move");
        self.finish(blocked.opponent(), WinReason::Blockade);
        events.push(TurnEvent::Blocked { side: blocked });
    }

    /// Ends a game that is decided before the first move.
    fn settle_opening(&mut self) {
        if let Some(side) = winner(self.state.board()) {
            info!(winner = %side, "Starting board already holds a line");
            self.finish(side, WinReason::Line);
            return;
        }

        let to_move = *self.state.current_player();
        if legal_moves(self.state.board(), to_move).is_empty() {
            let mut events = Vec::new();
            self.declare_blockade(to_move, &mut events);
        }
    }

    fn finish(&mut self, winner: Side, reason: WinReason) {
        self.state.set_status(GameStatus::Won { winner, reason });
        self.scores.record_win(winner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::mill::IllegalMove;
    use crate::games::mill::Position::*;

    fn human_game(layout: &str) -> GameController {
        GameController::with_board(Board::from_layout(layout).unwrap(), OpponentMode::Human)
    }

    #[test]
    fn test_winning_move_ends_game() {
        // Black slides Middle-left to Center to complete the diagonal.
        let mut game = human_game("BWWB..W.B");
        let report = game.submit_move(MiddleLeft, Center, Side::Black).unwrap();

        assert!(game.state().is_over());
        assert_eq!(game.state().winner(), Some(Side::Black));
        assert_eq!(game.scores().black, 1);
        assert_eq!(game.scores().white, 0);
        assert_eq!(report.events.len(), 2);
        assert_eq!(report.events[1], TurnEvent::Won { winner: Side::Black });
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut game = human_game("BWWB..W.B");
        game.submit_move(MiddleLeft, Center, Side::Black).unwrap();
        let before = game.snapshot();

        let err = game
            .submit_move(TopCenter, MiddleLeft, Side::White)
            .unwrap_err();
        assert_eq!(err, MoveError::GameOver);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_wrong_turn_rejected_without_mutation() {
        let mut game = human_game("BW..B.WBW");
        let before = game.snapshot();

        let err = game
            .submit_move(TopCenter, TopRight, Side::White)
            .unwrap_err();
        assert_eq!(
            err,
            MoveError::WrongTurn {
                expected: Side::Black,
                claimed: Side::White
            }
        );
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_illegal_move_reports_reason() {
        let mut game = human_game("BW..B.WBW");
        let err = game
            .submit_move(TopLeft, TopCenter, Side::Black)
            .unwrap_err();
        assert_eq!(
            err,
            MoveError::Illegal(IllegalMove::DestinationOccupied(TopCenter))
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_ai_replies_in_same_call() {
        let board = Board::from_layout("BW..B.WBW").unwrap();
        let mut game = GameController::with_board(board, OpponentMode::Ai);
        let report = game.submit_move(TopLeft, MiddleLeft, Side::Black).unwrap();

        assert_eq!(report.events.len(), 2);
        let TurnEvent::Moved(reply) = &report.events[1] else {
            panic!("expected White's reply, got {:?}", report.events[1]);
        };
        assert_eq!(reply.player, Side::White);
        assert_eq!(*game.state().current_player(), Side::Black);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_ai_takes_winning_reply() {
        // After Black's move White can complete the vertical through the center.
        let board = Board::from_layout("BWB..W.WB").unwrap();
        let mut game = GameController::with_board(board, OpponentMode::Ai);
        game.submit_move(TopLeft, MiddleLeft, Side::Black).unwrap();

        assert_eq!(game.state().winner(), Some(Side::White));
        assert_eq!(game.scores().white, 1);
    }

    #[test]
    fn test_blockade_ends_game() {
        // White's lone piece is sealed in the corner once Black takes the center.
        let mut game = human_game("WB.B....B");
        let report = game.submit_move(BottomRight, Center, Side::Black).unwrap();

        assert_eq!(
            *game.state().status(),
            GameStatus::Won {
                winner: Side::Black,
                reason: WinReason::Blockade
            }
        );
        assert_eq!(
            report.events.last(),
            Some(&TurnEvent::Blocked { side: Side::White })
        );
        assert_eq!(game.scores().black, 1);
    }

    #[test]
    fn test_blocked_at_start_loses_immediately() {
        let game = human_game("BW.WW....");
        assert_eq!(game.state().winner(), Some(Side::White));
        assert_eq!(game.scores().white, 1);
    }

    #[test]
    fn test_already_won_board_starts_decided() {
        let mut game = human_game("B.W.BWW.B");
        assert_eq!(
            *game.state().status(),
            GameStatus::Won {
                winner: Side::Black,
                reason: WinReason::Line
            }
        );
        assert_eq!(game.scores().black, 1);

        let err = game
            .submit_move(TopLeft, TopCenter, Side::Black)
            .unwrap_err();
        assert_eq!(err, MoveError::GameOver);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_new_game_keeps_scores_and_clears_history() {
        let mut game = human_game("BWWB..W.B");
        game.submit_move(MiddleLeft, Center, Side::Black).unwrap();

        game.new_game(OpponentMode::Ai);
        assert!(!game.state().is_over());
        assert!(game.history().is_empty());
        assert_eq!(*game.state().current_player(), Side::Black);
        assert_eq!(*game.state().opponent_type(), OpponentMode::Ai);
        assert_eq!(game.scores().black, 1);
    }

    #[test]
    fn test_seeded_controllers_generate_same_board() {
        let a = GameController::with_rng(MillConfig::default(), StdRng::seed_from_u64(5));
        let b = GameController::with_rng(MillConfig::default(), StdRng::seed_from_u64(5));
        assert_eq!(a.state().board(), b.state().board());
    }
}
