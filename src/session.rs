//! Game session management.
//!
//! Each session owns one [`GameController`] behind its own mutex, so
//! moves in one game never wait on another.

use crate::config::MillConfig;
use crate::games::mill::{
    GameController, GameSnapshot, MoveError, OpponentMode, Position, Side, TurnReport,
};
use derive_more::{Display, From};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// No session with this ID.
    #[display("Session not found: {}", _0)]
    NotFound(SessionId),

    /// A session with this ID already exists.
    #[display("Session already exists: {}", _0)]
    AlreadyExists(SessionId),

    /// The game rejected the move.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            _ => None,
        }
    }
}

type SharedController = Arc<Mutex<GameController>>;

/// Manages all game sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, SharedController>>>,
    config: MillConfig,
}

/// Locks a mutex, recovering the data if a previous holder panicked.
///
/// Controller state is only changed after validation, so a panic never
/// leaves a half-applied move behind.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument(skip(config))]
    pub fn new(config: MillConfig) -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    /// Creates a new session with a freshly generated game.
    #[instrument(skip(self))]
    pub fn create_session(
        &self,
        id: SessionId,
        mode: OpponentMode,
    ) -> Result<GameSnapshot, SessionError> {
        // Board generation runs before the map is locked.
        let controller = GameController::new(self.config.with_opponent(mode));
        let snapshot = controller.snapshot();

        match lock(&self.sessions).entry(id) {
            Entry::Occupied(entry) => {
                warn!(session_id = %entry.key(), "Session already exists");
                Err(SessionError::AlreadyExists(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                info!(session_id = %entry.key(), "Created new session");
                entry.insert(Arc::new(Mutex::new(controller)));
                Ok(snapshot)
            }
        }
    }

    /// Starts a new game in an existing session, keeping its scores.
    #[instrument(skip(self))]
    pub fn new_game(&self, id: &str, mode: OpponentMode) -> Result<GameSnapshot, SessionError> {
        let controller = self.controller(id)?;
        let mut controller = lock(&controller);
        controller.new_game(mode);
        Ok(controller.snapshot())
    }

    /// Submits a move to a session's game.
    #[instrument(skip(self))]
    pub fn submit_move(
        &self,
        id: &str,
        from: Position,
        to: Position,
        side: Side,
    ) -> Result<TurnReport, SessionError> {
        let controller = self.controller(id)?;
        let report = lock(&controller).submit_move(from, to, side)?;
        debug!(
            session_id = id,
            events = report.events.len(),
            "Move processed"
        );
        Ok(report)
    }

    /// Returns a snapshot of a session's game.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Result<GameSnapshot, SessionError> {
        let controller = self.controller(id)?;
        let snapshot = lock(&controller).snapshot();
        Ok(snapshot)
    }

    /// Removes a session.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<(), SessionError> {
        lock(&self.sessions)
            .remove(id)
            .map(|_| info!(session_id = id, "Removed session"))
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    /// Lists all active session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = lock(&self.sessions).keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }

    /// Looks up a session's controller, releasing the map lock before
    /// the caller locks the controller.
    fn controller(&self, id: &str) -> Result<SharedController, SessionError> {
        lock(&self.sessions).get(id).cloned().ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::NotFound(id.to_string())
        })
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(MillConfig::default())
    }
}
