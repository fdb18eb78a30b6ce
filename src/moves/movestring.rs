//! Textual move tokens.
//!
//! A move string is one or two direction letters, e.g. `N`, `nn`, ` s e `.
//! Parsing strips all whitespace and ignores case. Whether the letters form
//! a usable move (e.g. `NS` does not) is decided by the `MoveTable`.

use smallvec::SmallVec;

use super::direction::Direction;
use crate::core::Displacement;
use crate::error::{DogError, DogResult};

/// Longest move string: two single steps.
pub const MAX_LETTERS: usize = 2;

/// A syntactically valid move string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveString {
    steps: SmallVec<[Direction; MAX_LETTERS]>,
}

impl MoveString {
    /// Parse a raw token.
    ///
    /// Fails with `InvalidMovestring` unless the token, once whitespace is
    /// removed, is one or two of the letters `N`, `E`, `S`, `W`.
    pub fn parse(token: &str) -> DogResult<Self> {
        let invalid = || DogError::InvalidMovestring(token.to_string());

        let mut steps = SmallVec::new();
        for letter in token.chars().filter(|c| !c.is_whitespace()) {
            if steps.len() == MAX_LETTERS {
                return Err(invalid());
            }
            steps.push(Direction::from_letter(letter).ok_or_else(invalid)?);
        }

        if steps.is_empty() {
            return Err(invalid());
        }

        Ok(Self { steps })
    }

    /// The steps in the order they were written.
    #[must_use]
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    /// Sum of the step offsets.
    #[must_use]
    pub fn displacement(&self) -> Displacement {
        self.steps
            .iter()
            .fold(Displacement::default(), |acc, step| acc + step.unit())
    }
}

impl std::str::FromStr for MoveString {
    type Err = DogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MoveString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step.letter())?;
        }
        Ok(())
    }
}
