//! The playing field: living cells and the two players standing on them.

use im::HashSet as ImHashSet;
use log::error;

use crate::core::{DogConfig, Player, PlayerId, PlayerPair, Point};
use crate::error::{DogError, DogResult};

/// What a single on-board cell currently looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Still in play and empty.
    Living,
    /// Vacated by a player and gone for good.
    Burned,
    /// A player is standing here.
    Occupied(PlayerId),
}

/// A square board whose cells are burned one at a time.
///
/// Uses an `im` persistent set for the living cells so cloning a board
/// (e.g. to look ahead) is O(1).
///
/// ## Invariants (size >= 2)
///
/// - The living-cell set only ever shrinks.
/// - Each player stands on a living cell.
/// - The two players never share a cell.
///
/// ## Example
///
/// ```
/// use dog_game::board::Board;
/// use dog_game::core::{DogConfig, Point};
///
/// let mut board = Board::from_config(&DogConfig::default().with_size(3));
/// assert_eq!(board.living_count(), 9);
/// assert!(board.is_occupied(Point::new(0, 0)));
///
/// board.remove(Point::new(1, 1)).unwrap();
/// assert!(!board.contains(Point::new(1, 1)));
/// assert!(board.remove(Point::new(1, 1)).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    living: ImHashSet<Point>,
    players: PlayerPair<Player>,
}

impl Board {
    /// Build a fresh board with both players on their starting corners.
    #[must_use]
    pub fn from_config(config: &DogConfig) -> Self {
        let corners = Self::starting_corners(config.size);
        let players = PlayerPair::new(|id| {
            Player::new(
                config.player_names[id].clone(),
                config.player_symbols[id],
                corners[id],
            )
        });

        Self {
            size: config.size,
            living: Point::square(config.size).collect(),
            players,
        }
    }

    /// Starting cells: `(0, 0)` for the first player and the opposite
    /// corner for the second.
    #[must_use]
    pub fn starting_corners(size: usize) -> PlayerPair<Point> {
        let far = size as i32 - 1;
        PlayerPair::from_values(Point::new(0, 0), Point::new(far, far))
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `point` lies inside the square, burned or not.
    #[must_use]
    pub fn in_bounds(&self, point: Point) -> bool {
        point.in_square(self.size)
    }

    /// Whether `point` is a living cell.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.living.contains(&point)
    }

    /// Whether any player stands on `point`.
    #[must_use]
    pub fn is_occupied(&self, point: Point) -> bool {
        self.occupant(point).is_some()
    }

    /// The player standing on `point`, if any.
    #[must_use]
    pub fn occupant(&self, point: Point) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, player)| player.position() == point)
            .map(|(id, _)| id)
    }

    /// Number of living cells.
    #[must_use]
    pub fn living_count(&self) -> usize {
        self.living.len()
    }

    /// Iterate over the living cells in no particular order.
    pub fn living_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.living.iter().copied()
    }

    /// View of an on-board cell; `None` outside the square.
    #[must_use]
    pub fn cell(&self, point: Point) -> Option<Cell> {
        if !self.in_bounds(point) {
            return None;
        }
        Some(match self.occupant(point) {
            Some(id) => Cell::Occupied(id),
            None if self.contains(point) => Cell::Living,
            None => Cell::Burned,
        })
    }

    /// A player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Both players.
    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    /// Permanently remove a living cell.
    ///
    /// Fails with `NotOnBoard` if the cell is not living. That only happens
    /// when the engine is broken, so callers must not retry.
    pub fn remove(&mut self, point: Point) -> DogResult<()> {
        if self.living.remove(&point).is_none() {
            error!("attempted to remove {} which is not a living cell", point);
            return Err(DogError::NotOnBoard(point));
        }
        Ok(())
    }

    /// Move `player` to `dest`, burning the cell it leaves.
    ///
    /// Returns the vacated point. On error nothing has changed. Legality of
    /// `dest` is the caller's responsibility.
    pub(crate) fn relocate(&mut self, player: PlayerId, dest: Point) -> DogResult<Point> {
        let from = self.players[player].position();
        self.remove(from)?;
        self.players[player].set_position(dest);
        Ok(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: usize) -> Board {
        Board::from_config(&DogConfig::new(size, "Ada", "Bob"))
    }

    #[test]
    fn test_new_board() {
        let board = board(4);

        assert_eq!(board.size(), 4);
        assert_eq!(board.living_count(), 16);
        assert_eq!(board.player(PlayerId::FIRST).position(), Point::new(0, 0));
        assert_eq!(board.player(PlayerId::SECOND).position(), Point::new(3, 3));
        assert_eq!(board.player(PlayerId::SECOND).name(), "Bob");
        assert_eq!(board.player(PlayerId::FIRST).symbol(), '@');
    }

    #[test]
    fn test_players_start_on_living_cells() {
        let board = board(5);
        for (_, player) in board.players().iter() {
            assert!(board.contains(player.position()));
        }
    }

    #[test]
    fn test_occupancy() {
        let board = board(3);

        assert!(board.is_occupied(Point::new(0, 0)));
        assert!(board.is_occupied(Point::new(2, 2)));
        assert!(!board.is_occupied(Point::new(1, 1)));
        assert_eq!(board.occupant(Point::new(2, 2)), Some(PlayerId::SECOND));
        assert_eq!(board.occupant(Point::new(1, 0)), None);
    }

    #[test]
    fn test_remove_is_permanent() {
        let mut board = board(3);

        assert!(board.remove(Point::new(1, 1)).is_ok());
        assert!(!board.contains(Point::new(1, 1)));
        assert_eq!(board.living_count(), 8);

        assert_eq!(
            board.remove(Point::new(1, 1)),
            Err(DogError::NotOnBoard(Point::new(1, 1)))
        );
        assert_eq!(board.living_count(), 8);
    }

    #[test]
    fn test_remove_off_board() {
        let mut board = board(3);
        assert_eq!(
            board.remove(Point::new(5, 5)),
            Err(DogError::NotOnBoard(Point::new(5, 5)))
        );
    }

    #[test]
    fn test_relocate_burns_vacated_cell() {
        let mut board = board(3);

        let from = board.relocate(PlayerId::FIRST, Point::new(1, 1)).unwrap();

        assert_eq!(from, Point::new(0, 0));
        assert_eq!(board.player(PlayerId::FIRST).position(), Point::new(1, 1));
        assert!(!board.contains(Point::new(0, 0)));
        assert!(board.contains(Point::new(1, 1)));
        assert_eq!(board.living_count(), 8);
    }

    #[test]
    fn test_relocate_failure_changes_nothing() {
        let mut board = board(3);
        board.remove(Point::new(0, 0)).unwrap();

        let err = board.relocate(PlayerId::FIRST, Point::new(1, 0)).unwrap_err();

        assert_eq!(err, DogError::NotOnBoard(Point::new(0, 0)));
        assert_eq!(board.player(PlayerId::FIRST).position(), Point::new(0, 0));
        assert_eq!(board.living_count(), 8);
    }

    #[test]
    fn test_cell_views() {
        let mut board = board(3);
        board.relocate(PlayerId::FIRST, Point::new(1, 0)).unwrap();

        assert_eq!(board.cell(Point::new(0, 0)), Some(Cell::Burned));
        assert_eq!(board.cell(Point::new(1, 0)), Some(Cell::Occupied(PlayerId::FIRST)));
        assert_eq!(board.cell(Point::new(2, 0)), Some(Cell::Living));
        assert_eq!(board.cell(Point::new(3, 0)), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = board(3);
        let mut copy = original.clone();
        copy.remove(Point::new(1, 1)).unwrap();

        assert!(original.contains(Point::new(1, 1)));
        assert!(!copy.contains(Point::new(1, 1)));
    }
}
