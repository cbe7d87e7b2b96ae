//! Round resolution over the fixed beats-table.
//!
//! The cycle is symmetric, so `wins_against(a, b)` plus its direct
//! mirror `wins_against(b, a)` classifies all nine (choice, choice)
//! pairs into exactly the three outcomes. Equal choices are the only
//! pairs where neither direction wins, and the only source of a draw.

use serde::{Deserialize, Serialize};

use crate::core::choice::Choice;
use crate::core::outcome::Outcome;
use crate::core::rng::ChoiceSource;

/// Whether `a` defeats `b` under the fixed cyclic rule.
#[must_use]
pub fn wins_against(a: Choice, b: Choice) -> bool {
    a.beats() == b
}

/// Classify a resolved pair from the user's perspective.
#[must_use]
pub fn classify(user: Choice, opponent: Choice) -> Outcome {
    if wins_against(user, opponent) {
        Outcome::Win
    } else if wins_against(opponent, user) {
        Outcome::Lose
    } else {
        Outcome::Draw
    }
}

/// A resolved round: the opponent's draw and the outcome for the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub opponent: Choice,
    pub outcome: Outcome,
}

/// Resolve one round for `user` against an opponent choice drawn from
/// `source`.
///
/// The draw is independent of `user`. This has no side effects: the
/// caller applies the score delta when the outcome is revealed, not
/// here.
///
/// ## Example
///
/// ```
/// use rust_rps::{resolve_round, Choice, GameRng};
///
/// let mut rng = GameRng::new(42);
/// let result = resolve_round(Choice::Rock, &mut rng);
/// assert!(Choice::ALL.contains(&result.opponent));
/// ```
pub fn resolve_round(user: Choice, source: &mut impl ChoiceSource) -> RoundResult {
    let opponent = source.draw();
    RoundResult {
        opponent,
        outcome: classify(user, opponent),
    }
}
