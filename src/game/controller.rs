//! The game controller: single owner of all mutable state.
//!
//! Every mutation goes through the action methods (`choose`, `advance`,
//! `play_again`, `toggle_rules`); there are no ambient globals. The
//! view layer dispatches actions and re-renders from
//! [`snapshot`](GameController::snapshot).
//!
//! ## Timing
//!
//! The 1000ms gap between revealing the pair and revealing the winner
//! is explicit countdown state, not a thread or callback: the embedding
//! UI forwards elapsed time to [`advance`](GameController::advance)
//! from whatever clock it owns (frame ticks, a timer event). Only one
//! countdown can be armed at a time because `choose` is accepted only
//! in `Idle`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::choice::{Choice, ParseChoiceError};
use crate::core::outcome::Outcome;
use crate::core::rng::{ChoiceSource, GameRng};
use crate::rules;
use crate::view::phase::{Phase, REVEAL_DELAY};
use crate::view::snapshot::GameSnapshot;

/// One settled round, recorded for history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub user: Choice,
    pub opponent: Choice,
    pub outcome: Outcome,
}

/// Owns the score, the round phase, the stored pair, and the rules
/// modal flag, and exposes the full action set of the game.
///
/// Generic over the [`ChoiceSource`] so tests can script exact
/// opponent draws; the default source is the seedable [`GameRng`].
///
/// ## Example
///
/// ```
/// use rust_rps::{Choice, GameController, REVEAL_DELAY};
///
/// let mut game = GameController::new(42);
/// game.choose(Choice::Rock);
/// assert!(game.snapshot().results_visible);
/// assert!(!game.snapshot().winner_visible);
///
/// game.advance(REVEAL_DELAY);
/// assert!(game.snapshot().winner_visible);
///
/// game.play_again();
/// assert!(game.snapshot().choices_enabled);
/// ```
#[derive(Clone, Debug)]
pub struct GameController<S = GameRng> {
    phase: Phase,
    score: i64,
    rules_modal_visible: bool,
    /// Resolved (user, opponent) pair; set and cleared together.
    round: Option<(Choice, Choice)>,
    result_text: Option<&'static str>,
    history: Vec<RoundRecord>,
    source: S,
}

impl GameController<GameRng> {
    /// Create a controller with a seeded RNG opponent.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_source(GameRng::new(seed))
    }

    /// Create a controller with an OS-seeded RNG opponent.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_source(GameRng::from_entropy())
    }
}

impl<S: ChoiceSource> GameController<S> {
    /// Create a controller drawing opponent moves from `source`.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            rules_modal_visible: false,
            round: None,
            result_text: None,
            history: Vec::new(),
            source,
        }
    }

    // === Actions ===

    /// Play `choice` against a freshly drawn opponent move.
    ///
    /// Accepted only in `Idle`; otherwise the picker is hidden and the
    /// call is ignored (returns `false`). On success the resolved pair
    /// is stored, the results section becomes visible, and the reveal
    /// timer is armed. The score is untouched until the timer expires.
    pub fn choose(&mut self, choice: Choice) -> bool {
        if !self.phase.choices_enabled() {
            return false;
        }

        let result = rules::resolve_round(choice, &mut self.source);
        self.round = Some((choice, result.opponent));
        self.phase = Phase::Revealed {
            remaining: REVEAL_DELAY,
        };
        true
    }

    /// `choose` by view-layer name, failing fast on anything outside
    /// `"paper" | "scissors" | "rock"`.
    pub fn choose_named(&mut self, name: &str) -> Result<bool, ParseChoiceError> {
        Ok(self.choose(name.parse()?))
    }

    /// Advance the reveal timer by `elapsed`.
    ///
    /// No-op outside `Revealed`. When the timer expires the round
    /// settles: the outcome's banner text is stored, the score delta is
    /// applied, the round is recorded, and the winner banner becomes
    /// visible. Excess elapsed time beyond the expiry is discarded.
    pub fn advance(&mut self, elapsed: Duration) {
        let Phase::Revealed { remaining } = self.phase else {
            return;
        };

        if elapsed < remaining {
            self.phase = Phase::Revealed {
                remaining: remaining - elapsed,
            };
            return;
        }

        if let Some((user, opponent)) = self.round {
            let outcome = rules::classify(user, opponent);
            self.result_text = Some(outcome.result_text());
            self.score += outcome.score_delta();
            self.history.push(RoundRecord {
                user,
                opponent,
                outcome,
            });
        }
        self.phase = Phase::Settled;
    }

    /// Return to the choice picker.
    ///
    /// Accepted only once the round has settled (the button lives in
    /// the winner banner); otherwise ignored. Clears the stored pair
    /// and banner text. Score and modal state are untouched.
    pub fn play_again(&mut self) -> bool {
        if self.phase != Phase::Settled {
            return false;
        }

        self.phase = Phase::Idle;
        self.round = None;
        self.result_text = None;
        true
    }

    /// Toggle the rules overlay. Valid in every phase; the round state
    /// machine is untouched.
    pub fn toggle_rules(&mut self) {
        self.rules_modal_visible = !self.rules_modal_visible;
    }

    // === Render surface ===

    /// Read-only render data for the current frame.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.score,
            results_visible: self.phase.results_visible(),
            winner_visible: self.phase.winner_visible(),
            rules_modal_visible: self.rules_modal_visible,
            choices_enabled: self.phase.choices_enabled(),
            user_choice: self.round.map(|(user, _)| user),
            opponent_choice: self.round.map(|(_, opponent)| opponent),
            result_text: self.result_text,
        }
    }

    // === Queries ===

    /// Current score (wins minus losses).
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Current round phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// All settled rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Settled rounds the user won.
    #[must_use]
    pub fn wins(&self) -> usize {
        self.count_outcome(Outcome::Win)
    }

    /// Settled rounds the user lost.
    #[must_use]
    pub fn losses(&self) -> usize {
        self.count_outcome(Outcome::Lose)
    }

    /// Settled rounds that were drawn.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.count_outcome(Outcome::Draw)
    }

    fn count_outcome(&self, outcome: Outcome) -> usize {
        self.history
            .iter()
            .filter(|record| record.outcome == outcome)
            .count()
    }
}
