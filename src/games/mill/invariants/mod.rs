//! First-class invariants for the mill game.
//!
//! Invariants are logical properties that must hold after every applied
//! move. The controller checks them in debug builds; tests check them
//! directly.

use super::GameController;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod piece_count;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use piece_count::PieceCountInvariant;

/// All mill invariants as a composable set.
pub type MillInvariants = (
    PieceCountInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

/// Panics in debug builds if any invariant is violated.
pub fn assert_invariants(game: &GameController) {
    if cfg!(debug_assertions)
        && let Err(violations) = MillInvariants::check_all(game)
    {
        for violation in &violations {
            error!(description = %violation.description, "Invariant violated");
        }
        panic!("{} game invariant(s) violated", violations.len());
    }
}
