//! The table of valid move displacements.
//!
//! There are exactly 12 valid moves: four single steps, four double steps
//! in a straight line and four single diagonal steps.
//!
//! | Kind     | Names              | Steps |
//! |----------|--------------------|-------|
//! | single   | `N` `E` `S` `W`    | 1     |
//! | double   | `NN` `EE` `SS` `WW`| 2     |
//! | diagonal | `NE` `NW` `SE` `SW`| 1     |
//!
//! The table is plain immutable data owned by the rules engine.

use smallvec::SmallVec;

use super::movestring::MoveString;
use crate::core::Displacement;
use crate::error::{DogError, DogResult};

/// Canonical names of the valid moves.
pub const STANDARD_MOVES: [&str; 12] = [
    "N", "E", "S", "W", "NN", "EE", "SS", "WW", "NE", "NW", "SE", "SW",
];

/// A named move and its offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveEntry {
    /// Canonical upper-case name, e.g. `"NE"`.
    pub name: String,
    /// Offset from the mover's position.
    pub displacement: Displacement,
}

/// Lookup table from move strings to displacements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveTable {
    entries: SmallVec<[MoveEntry; 12]>,
}

impl Default for MoveTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl MoveTable {
    /// The standard 12-move table.
    #[must_use]
    pub fn standard() -> Self {
        let entries = STANDARD_MOVES
            .iter()
            .filter_map(|name| MoveString::parse(name).ok())
            .map(|move_string| MoveEntry {
                name: move_string.to_string(),
                displacement: move_string.displacement(),
            })
            .collect();

        Self { entries }
    }

    /// Number of moves in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = &MoveEntry> {
        self.entries.iter()
    }

    /// Iterate over the displacements in canonical order.
    pub fn displacements(&self) -> impl Iterator<Item = Displacement> + '_ {
        self.entries.iter().map(|entry| entry.displacement)
    }

    /// Whether `displacement` is one of the table's moves.
    #[must_use]
    pub fn contains(&self, displacement: Displacement) -> bool {
        self.entries.iter().any(|entry| entry.displacement == displacement)
    }

    /// Resolve a raw token to a displacement.
    ///
    /// Whitespace and case are ignored, then the token must name a table
    /// entry exactly. `WN` is not `NW`, and `NS` or `NEE` name nothing;
    /// all of these fail with `InvalidMovestring`.
    pub fn resolve(&self, token: &str) -> DogResult<Displacement> {
        let name = MoveString::parse(token)?.to_string();
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.displacement)
            .ok_or_else(|| DogError::InvalidMovestring(token.to_string()))
    }
}
