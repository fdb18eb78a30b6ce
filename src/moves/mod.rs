//! Move input: directions, move strings and the table of valid moves.
//!
//! Parsing a token never looks at the board. A token either resolves to one
//! of the table's displacements or fails with `InvalidMovestring`; whether
//! the resulting destination is legal is a separate question for the rules.

pub mod direction;
pub mod movestring;
pub mod table;

pub use direction::Direction;
pub use movestring::MoveString;
pub use table::{MoveEntry, MoveTable, STANDARD_MOVES};
