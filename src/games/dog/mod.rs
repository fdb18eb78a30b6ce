//! Dog: a two-player game on a shrinking grid.
//!
//! - Players start in opposite corners of a square board
//! - On your turn, move one or two steps (straight, or one step diagonally)
//!   to a living, empty cell
//! - The cell you leave is burned and can never be used again
//! - A player with no legal move on their turn loses

mod game;
mod state;

pub use game::{Game, GameBuilder};
pub use state::{MoveRecord, TurnState};
