//! Game implementations built on the board and rules engine.

pub mod dog;
