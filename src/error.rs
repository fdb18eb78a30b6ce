//! Error taxonomy for the rules engine.
//!
//! Two kinds of failure come out of the engine:
//!
//! - **Recoverable**: malformed input, illegal or out-of-turn moves. The
//!   engine state is untouched and the driver should simply ask again.
//! - **Invariant violations** (`NotOnBoard`): the engine itself is broken.
//!   These are reported like any other error but must never be retried or
//!   ignored; `is_recoverable()` returns `false` for them.

use crate::core::{PlayerId, Point};

/// Result alias used throughout the crate.
pub type DogResult<T> = Result<T, DogError>;

/// Everything that can go wrong when driving a game of Dog.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum DogError {
    /// The raw move token is not one of the valid move strings.
    #[error("invalid move string '{0}': expected one or two of N, E, S, W (e.g. N, NN, NE)")]
    InvalidMovestring(String),

    /// A well-formed move that breaks a legality rule right now.
    #[error("{player} cannot move from {from} to {to}")]
    IllegalMove {
        player: PlayerId,
        from: Point,
        to: Point,
    },

    /// A move was submitted for the player who is not on turn.
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    /// A move was submitted after the game ended.
    #[error("the game is already over")]
    GameAlreadyOver,

    /// Removal of a cell that is not living. Indicates an engine bug.
    #[error("engine invariant violated: {0} is not a living cell")]
    NotOnBoard(Point),

    /// The game configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DogError {
    /// Whether the driver may re-prompt and carry on after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DogError::NotOnBoard(_))
    }
}
