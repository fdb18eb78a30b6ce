//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats in a game.
//!
//! ## PlayerPair
//!
//! Storage for exactly one value per player, indexable by `PlayerId`.
//!
//! ## Player
//!
//! A participant: display name, display glyph and current position.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::point::Point;
use crate::error::DogError;

/// Identifier of one of the two players.
///
/// Indices are 0-based: the first player is `PlayerId(0)`. Only 0 and 1
/// deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who starts in the `(0, 0)` corner.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who starts in the opposite corner.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Look up a player by 0-based index. `None` unless the index is 0 or 1.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::FIRST),
            1 => Some(Self::SECOND),
            _ => None,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Both player IDs, first player first.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = DogError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(usize::from(index))
            .ok_or_else(|| DogError::InvalidConfig(format!("no player with index {}", index)))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One value per player with O(1) access.
///
/// ```
/// use dog_game::core::{PlayerId, PlayerPair};
///
/// let mut score = PlayerPair::new(|_| 0);
/// score[PlayerId::SECOND] += 3;
/// assert_eq!(score[PlayerId::FIRST], 0);
/// assert_eq!(score[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a pair from the first and second player's values.
    pub const fn from_values(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a player's value.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's value.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Transform each value, keeping the player association.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerPair<U> {
        PlayerPair::new(|id| f(id, self.get(id)))
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A participant in a game.
///
/// `name` and `symbol` are presentation data and play no part in the rules.
/// `position` only changes through a successful move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: char,
    position: Point,
}

impl Player {
    /// Create a player standing at `position`.
    pub fn new(name: impl Into<String>, symbol: char, position: Point) -> Self {
        Self {
            name: name.into(),
            symbol,
            position,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display glyph.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Current cell.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
        assert_eq!(format!("{}", PlayerId::SECOND), "Player 2");
    }

    #[test]
    fn test_player_id_other() {
        assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.other().other(), PlayerId::FIRST);
    }

    #[test]
    fn test_player_id_from_index() {
        assert_eq!(PlayerId::from_index(0), Some(PlayerId::FIRST));
        assert_eq!(PlayerId::from_index(1), Some(PlayerId::SECOND));
        assert_eq!(PlayerId::from_index(2), None);

        let all: Vec<_> = PlayerId::both().collect();
        assert_eq!(all, vec![PlayerId::FIRST, PlayerId::SECOND]);
    }

    #[test]
    fn test_player_id_serde_rejects_unknown_index() {
        assert_eq!(serde_json::to_string(&PlayerId::SECOND).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("1").unwrap(), PlayerId::SECOND);

        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(serde_json::from_str::<PlayerId>("7").is_err());
        assert!(matches!(PlayerId::try_from(7), Err(DogError::InvalidConfig(_))));
    }

    #[test]
    fn test_player_pair_access() {
        let mut pair = PlayerPair::new(|p| p.index() as i32 * 10);
        assert_eq!(pair[PlayerId::FIRST], 0);
        assert_eq!(pair[PlayerId::SECOND], 10);

        pair[PlayerId::FIRST] = 7;
        assert_eq!(*pair.get(PlayerId::FIRST), 7);

        let pairs: Vec<_> = pair.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &7), (PlayerId::SECOND, &10)]);
    }

    #[test]
    fn test_player_pair_map() {
        let names = PlayerPair::from_values("ada", "bob");
        let lengths = names.map(|_, name| name.len());
        assert_eq!(lengths, PlayerPair::from_values(3, 3));
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair = PlayerPair::from_values(1, 2);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }

    #[test]
    fn test_player_accessors() {
        let mut player = Player::new("Ada", '@', Point::new(0, 0));
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.symbol(), '@');
        assert_eq!(player.position(), Point::new(0, 0));

        player.set_position(Point::new(1, 1));
        assert_eq!(player.position(), Point::new(1, 1));
    }
}
