//! # dog-game
//!
//! Rules engine for Dog, a two-player game on a square grid that shrinks
//! as it is played.
//!
//! ## Rules
//!
//! 1. Players start in opposite corners.
//! 2. A move is one or two steps in a straight line, or one diagonal step,
//!    onto a living, empty cell.
//! 3. The cell a player leaves is burned for the rest of the game.
//! 4. A player with no legal move on their turn loses.
//!
//! Every move burns exactly one cell, so a game on an `n x n` board lasts at
//! most `n * n - 1` moves.
//!
//! ## Modules
//!
//! - `core`: Points, players, RNG, configuration
//! - `moves`: Directions, move strings and the table of valid moves
//! - `board`: Living cells and player positions
//! - `rules`: `RulesEngine` trait and the Dog rules
//! - `games`: The turn-based game engine
//! - `display`: Text rendering for terminal front ends
//! - `error`: Error types

pub mod core;
pub mod moves;
pub mod board;
pub mod rules;
pub mod games;
pub mod display;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Displacement, DogConfig, FirstPlayer, GameRng, Player, PlayerId, PlayerPair, Point,
};

pub use crate::moves::{Direction, MoveString, MoveTable};

pub use crate::board::{Board, Cell};

pub use crate::rules::{DestinationSet, DogRules, GameOutcome, RulesEngine};

pub use crate::games::dog::{Game, GameBuilder, MoveRecord, TurnState};

pub use crate::error::{DogError, DogResult};
