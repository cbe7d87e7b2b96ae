//! Round outcome from the user's perspective.

use serde::{Deserialize, Serialize};

/// Result of comparing the user's choice against the opponent's.
///
/// Derived per round, never stored between rounds. Score bookkeeping
/// goes through [`score_delta`](Outcome::score_delta) so the reveal
/// step can apply it at the right time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Score adjustment for this outcome: +1 win, -1 lose, 0 draw.
    #[must_use]
    pub const fn score_delta(self) -> i64 {
        match self {
            Outcome::Win => 1,
            Outcome::Lose => -1,
            Outcome::Draw => 0,
        }
    }

    /// Banner text shown to the user when the round settles.
    #[must_use]
    pub const fn result_text(self) -> &'static str {
        match self {
            Outcome::Win => "you win",
            Outcome::Lose => "you lose",
            Outcome::Draw => "draw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_delta() {
        assert_eq!(Outcome::Win.score_delta(), 1);
        assert_eq!(Outcome::Lose.score_delta(), -1);
        assert_eq!(Outcome::Draw.score_delta(), 0);
    }

    #[test]
    fn test_result_text() {
        assert_eq!(Outcome::Win.result_text(), "you win");
        assert_eq!(Outcome::Lose.result_text(), "you lose");
        assert_eq!(Outcome::Draw.result_text(), "draw");
    }
}
