//! Read-only render data for the presentation layer.

use serde::Serialize;

use crate::core::choice::Choice;

/// Everything the view needs to render one frame.
///
/// Produced by `GameController::snapshot` after every action; the
/// presentation layer holds no game state of its own. Serializable so
/// a web or IPC view layer can consume it directly.
///
/// Invariants carried over from the phase machine:
/// - `winner_visible` implies `results_visible`
/// - `user_choice` and `opponent_choice` are both `Some` or both `None`
/// - `choices_enabled` is false whenever `results_visible` is true
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Running score: wins minus losses, unbounded in both directions.
    pub score: i64,
    pub results_visible: bool,
    pub winner_visible: bool,
    pub rules_modal_visible: bool,
    /// Whether the choice picker should accept input.
    pub choices_enabled: bool,
    pub user_choice: Option<Choice>,
    pub opponent_choice: Option<Choice>,
    /// Banner text, set only once the round has settled.
    pub result_text: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serializes_for_the_view() {
        let snapshot = GameSnapshot {
            score: 2,
            results_visible: true,
            winner_visible: true,
            rules_modal_visible: false,
            choices_enabled: false,
            user_choice: Some(Choice::Rock),
            opponent_choice: Some(Choice::Scissors),
            result_text: Some("you win"),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["score"], 2);
        assert_eq!(json["user_choice"], "rock");
        assert_eq!(json["opponent_choice"], "scissors");
        assert_eq!(json["result_text"], "you win");
    }
}
