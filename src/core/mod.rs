//! Core value types: points, players, RNG, configuration.
//!
//! Everything here is free of game rules; the board and the rules engine
//! are built on top of these types.

pub mod point;
pub mod player;
pub mod rng;
pub mod config;

pub use point::{Displacement, Point};
pub use player::{Player, PlayerId, PlayerPair};
pub use rng::GameRng;
pub use config::{DogConfig, FirstPlayer, DEFAULT_SIZE};
