//! Rules engine trait.
//!
//! A rules engine answers three questions about a board:
//! - Where may a player move?
//! - What happens when they do?
//! - Is the player to move already beaten?
//!
//! It holds no per-game state of its own; the board is passed in.

use log::trace;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{PlayerId, Point};
use crate::error::DogResult;

/// Set of destinations a player may move to.
pub type DestinationSet = FxHashSet<Point>;

/// Final result of a game: one winner, one loser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl GameOutcome {
    /// Outcome in which `loser` could not move.
    #[must_use]
    pub fn lost_by(loser: PlayerId) -> Self {
        Self {
            winner: loser.other(),
            loser,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `is_legal` must be pure: no side effects, safe to call any number of times
/// - `apply_move` must leave the board untouched when it returns an error
/// - `legal_destinations` is recomputed on every call; boards change every move
pub trait RulesEngine {
    /// Whether `player` may move to `dest` on this board.
    fn is_legal(&self, board: &Board, player: PlayerId, dest: Point) -> bool;

    /// Move `player` to `dest`, burning the vacated cell.
    ///
    /// Returns the vacated point.
    fn apply_move(&self, board: &mut Board, player: PlayerId, dest: Point) -> DogResult<Point>;

    // === Convenience Methods ===

    /// Every living cell `player` may move to.
    ///
    /// Default implementation scans all living cells.
    fn legal_destinations(&self, board: &Board, player: PlayerId) -> DestinationSet {
        let destinations: DestinationSet = board
            .living_cells()
            .filter(|&point| self.is_legal(board, player, point))
            .collect();
        trace!("{} has {} legal destinations", player, destinations.len());
        destinations
    }

    /// Whether `player` has at least one legal destination.
    fn has_legal_move(&self, board: &Board, player: PlayerId) -> bool {
        !self.legal_destinations(board, player).is_empty()
    }

    /// Check whether the player to move has already lost.
    ///
    /// Returns `Some(outcome)` if `to_move` has no legal destination.
    fn is_terminal(&self, board: &Board, to_move: PlayerId) -> Option<GameOutcome> {
        if self.has_legal_move(board, to_move) {
            None
        } else {
            Some(GameOutcome::lost_by(to_move))
        }
    }
}
