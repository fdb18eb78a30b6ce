//! Board state: which cells are still alive and where the players stand.
//!
//! The board knows nothing about legal moves. It answers membership and
//! occupancy questions and performs the one mutation the game needs:
//! moving a player and burning the cell it left.

pub mod grid;

pub use grid::{Board, Cell};
