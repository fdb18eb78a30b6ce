//! Turn state and move history records.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Point};
use crate::rules::GameOutcome;

/// Where a game stands.
///
/// ```text
/// AwaitingMove(p) --successful move--> AwaitingMove(p.other())
///                 \--p has no legal move--> GameOver { winner: p.other(), loser: p }
/// ```
///
/// Rejected moves leave the state as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the given player to move. They have at least one legal move.
    AwaitingMove(PlayerId),
    /// The game has ended.
    GameOver(GameOutcome),
}

impl TurnState {
    /// The player to move, if the game is still running.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match self {
            TurnState::AwaitingMove(player) => Some(*player),
            TurnState::GameOver(_) => None,
        }
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            TurnState::AwaitingMove(_) => None,
            TurnState::GameOver(outcome) => Some(*outcome),
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, TurnState::GameOver(_))
    }
}

/// A successful move, kept in the game's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,
    /// The cell that was vacated and burned.
    pub from: Point,
    /// The cell moved to.
    pub to: Point,
    /// 1-based move number within the game.
    pub number: u32,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}: {} -> {}", self.number, self.player, self.from, self.to)
    }
}
