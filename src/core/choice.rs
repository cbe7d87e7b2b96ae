//! The three fixed game moves and their cyclic beats-relation.
//!
//! The rule table is closed: paper beats rock, scissors beats paper,
//! rock beats scissors. It is encoded in the type itself rather than
//! built at runtime, so an out-of-range move is unrepresentable inside
//! the API. The only place an invalid move can appear is the string
//! boundary (`FromStr`), which fails fast with [`ParseChoiceError`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three fixed game moves.
///
/// ## Example
///
/// ```
/// use rust_rps::Choice;
///
/// assert_eq!(Choice::Paper.beats(), Choice::Rock);
/// assert_eq!(Choice::Scissors.beats(), Choice::Paper);
/// assert_eq!(Choice::Rock.beats(), Choice::Scissors);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Paper,
    Scissors,
    Rock,
}

impl Choice {
    /// All three choices, in declaration order.
    pub const ALL: [Choice; 3] = [Choice::Paper, Choice::Scissors, Choice::Rock];

    /// The single choice this one defeats.
    #[must_use]
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
            Choice::Rock => Choice::Scissors,
        }
    }

    /// Lowercase name as used by the view layer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
            Choice::Rock => "rock",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a choice name outside the fixed three-value set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown choice {0:?}, expected one of: paper, scissors, rock")]
pub struct ParseChoiceError(pub String);

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            "rock" => Ok(Choice::Rock),
            other => Err(ParseChoiceError(other.to_string())),
        }
    }
}
