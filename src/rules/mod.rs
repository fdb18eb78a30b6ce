//! Rules engine: legality, move execution and loss detection.
//!
//! `RulesEngine` is the seam between the game state machine and the rules;
//! `DogRules` implements it for Dog. The engine keeps no state between
//! calls, so every answer reflects the board exactly as passed in.

pub mod engine;
pub mod dog;

pub use engine::{DestinationSet, GameOutcome, RulesEngine};
pub use dog::{DogRules, MAX_STEPS, MIN_STEPS};
