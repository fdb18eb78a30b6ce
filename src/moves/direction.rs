//! Cardinal directions.

use serde::{Deserialize, Serialize};

use crate::core::Displacement;

/// One of the four compass directions a single step can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Parse a direction letter, ignoring case.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    /// The upper-case letter for this direction.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Offset of a single step. North is `+y`, east is `+x`.
    #[must_use]
    pub const fn unit(self) -> Displacement {
        match self {
            Direction::North => Displacement::new(0, 1),
            Direction::East => Displacement::new(1, 0),
            Direction::South => Displacement::new(0, -1),
            Direction::West => Displacement::new(-1, 0),
        }
    }
}
