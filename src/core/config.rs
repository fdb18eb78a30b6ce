//! Game configuration.
//!
//! A `DogConfig` fixes everything about a game that is decided before the
//! first move: board size, player names and glyphs, and how the first
//! player is chosen. The move table is not configurable here; it is owned
//! by the rules engine.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerPair};
use crate::error::{DogError, DogResult};

/// Default side length, matching the classic playfield.
pub const DEFAULT_SIZE: usize = 10;

/// How the player who moves first is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayer {
    /// Fair coin flip at construction.
    #[default]
    Random,
    /// Always the given player.
    Fixed(PlayerId),
}

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogConfig {
    /// Side length of the square board.
    ///
    /// Sizes below 2 are accepted but produce a game that is over at once.
    pub size: usize,

    /// Display names, first player first.
    pub player_names: PlayerPair<String>,

    /// Display glyphs, first player first.
    pub player_symbols: PlayerPair<char>,

    /// First-player policy.
    pub first_player: FirstPlayer,
}

impl Default for DogConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            player_names: PlayerPair::from_values("Player 1".to_string(), "Player 2".to_string()),
            player_symbols: PlayerPair::from_values('@', 'Ð'),
            first_player: FirstPlayer::Random,
        }
    }
}

impl DogConfig {
    /// Create a config for the given size and names, with default glyphs.
    pub fn new(size: usize, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            size,
            player_names: PlayerPair::from_values(first.into(), second.into()),
            ..Self::default()
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set both player glyphs.
    #[must_use]
    pub fn with_symbols(mut self, first: char, second: char) -> Self {
        self.player_symbols = PlayerPair::from_values(first, second);
        self
    }

    /// Always let `player` move first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = FirstPlayer::Fixed(player);
        self
    }

    /// Whether the board is large enough for anyone to move.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.size >= 2
    }

    /// Check that the two players can be told apart.
    pub fn validate(&self) -> DogResult<()> {
        let [first, second] = [PlayerId::FIRST, PlayerId::SECOND];

        if self.player_names[first] == self.player_names[second] {
            return Err(DogError::InvalidConfig(format!(
                "both players are named '{}'",
                self.player_names[first]
            )));
        }
        if self.player_symbols[first] == self.player_symbols[second] {
            return Err(DogError::InvalidConfig(format!(
                "both players use the symbol '{}'",
                self.player_symbols[first]
            )));
        }
        if i32::try_from(self.size).is_err() {
            return Err(DogError::InvalidConfig(format!("board size {} is too large", self.size)));
        }

        Ok(())
    }
}
