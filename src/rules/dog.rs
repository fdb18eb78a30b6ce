//! The rules of Dog.
//!
//! A destination is legal for a player when:
//! 1. it is a living cell (which implies it is on the board),
//! 2. nobody stands on it,
//! 3. the offset from the player is one of the move table's entries,
//! 4. that offset is between 1 and 2 steps, counting a diagonal step as one.

use log::trace;

use super::engine::{DestinationSet, RulesEngine};
use crate::board::Board;
use crate::core::{PlayerId, Point};
use crate::error::{DogError, DogResult};
use crate::moves::MoveTable;

/// Fewest steps a move may take.
pub const MIN_STEPS: u32 = 1;

/// Most steps a move may take.
pub const MAX_STEPS: u32 = 2;

/// Rules engine for Dog, owning its move table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DogRules {
    moves: MoveTable,
}

impl DogRules {
    /// Rules with the standard 12-move table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The move table.
    #[must_use]
    pub fn moves(&self) -> &MoveTable {
        &self.moves
    }

    /// Destination reached by playing `token` from `player`'s position.
    ///
    /// Only the token is checked; the destination may still be illegal.
    pub fn resolve(&self, board: &Board, player: PlayerId, token: &str) -> DogResult<Point> {
        let displacement = self.moves.resolve(token)?;
        Ok(board.player(player).position() + displacement)
    }
}

impl RulesEngine for DogRules {
    fn is_legal(&self, board: &Board, player: PlayerId, dest: Point) -> bool {
        if !board.in_bounds(dest) || !board.contains(dest) {
            return false;
        }

        if board.is_occupied(dest) {
            return false;
        }

        let displacement = dest - board.player(player).position();
        if !self.moves.contains(displacement) {
            return false;
        }

        (MIN_STEPS..=MAX_STEPS).contains(&displacement.steps())
    }

    fn apply_move(&self, board: &mut Board, player: PlayerId, dest: Point) -> DogResult<Point> {
        if !self.is_legal(board, player, dest) {
            let from = board.player(player).position();
            trace!("rejected {} from {} to {}", player, from, dest);
            return Err(DogError::IllegalMove {
                player,
                from,
                to: dest,
            });
        }

        board.relocate(player, dest)
    }

    /// Only the table's offsets can be legal, so check those instead of
    /// scanning every living cell.
    fn legal_destinations(&self, board: &Board, player: PlayerId) -> DestinationSet {
        let origin = board.player(player).position();
        let destinations: DestinationSet = self
            .moves
            .displacements()
            .map(|displacement| origin + displacement)
            .filter(|&dest| self.is_legal(board, player, dest))
            .collect();
        trace!("{} has {} legal destinations", player, destinations.len());
        destinations
    }
}
