//! Round life cycle phases and the reveal timer.

use std::time::Duration;

/// Delay between showing the resolved pair and revealing the winner
/// banner.
pub const REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Where the current round is in its life cycle.
///
/// `Idle -> Revealed -> Settled -> Idle`. The `Revealed` phase carries
/// the remaining reveal-timer countdown, armed at [`REVEAL_DELAY`] on
/// entry and counted down by the controller's `advance`. Exactly one
/// timer can be armed at a time: choosing is only accepted in `Idle`,
/// and the timer is neither cancellable nor restartable.
///
/// Visibility derives from the phase, so the winner banner can never be
/// shown without the results section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Choice picker shown, no round in flight.
    Idle,
    /// Resolved pair shown, winner banner pending the reveal timer.
    Revealed { remaining: Duration },
    /// Resolved pair and winner banner shown.
    Settled,
}

impl Phase {
    /// Whether the results section is shown.
    #[must_use]
    pub fn results_visible(self) -> bool {
        !matches!(self, Phase::Idle)
    }

    /// Whether the winner banner is shown.
    #[must_use]
    pub fn winner_visible(self) -> bool {
        matches!(self, Phase::Settled)
    }

    /// Whether the choice picker accepts input.
    ///
    /// False outside `Idle`: the view hides the picker, and the
    /// controller ignores `choose` as a total-function no-op, so a
    /// second round cannot start while one is in flight.
    #[must_use]
    pub fn choices_enabled(self) -> bool {
        matches!(self, Phase::Idle)
    }
}
