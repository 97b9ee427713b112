//! Error types for round actions.

use thiserror::Error;

/// Errors for actions rejected by a round.
///
/// A rejected action leaves round state untouched, so callers that want
/// the "illegal actions are ignored" behavior can simply drop the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The relevant outcome is already settled.
    #[error("round is already resolved")]
    RoundOver,
    /// The acting seat or side is not the one whose turn it is.
    #[error("not this seat's turn")]
    OutOfTurn,
}
