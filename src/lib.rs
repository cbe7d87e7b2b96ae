//! # rust-rps
//!
//! A rock-paper-scissors game core: rules engine, scoring, and view
//! state machine. The presentation layer (markup, icons, styling) is an
//! external collaborator; this crate owns the game state and exposes
//! only the action set and a read-only render snapshot.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: all mutable state (score, round phase, view
//!    flags) lives in [`GameController`] and changes only through its
//!    action methods. No ambient globals.
//!
//! 2. **Invalid states unrepresentable**: the three choices are a
//!    fieldless enum; the winner banner can only be shown while the
//!    results section is, because both derive from one [`Phase`].
//!
//! 3. **Injected randomness**: opponent moves come through the
//!    [`ChoiceSource`] capability. The real game uses the seedable
//!    [`GameRng`]; tests script exact draws.
//!
//! 4. **Explicit time**: the 1000ms reveal delay is countdown state
//!    driven by `advance(elapsed)`, so the core stays single-threaded
//!    and deterministic and the embedding UI keeps the clock.
//!
//! ## Modules
//!
//! - `core`: choices, outcomes, randomness
//! - `rules`: beats-table classification and round resolution
//! - `view`: round phases, reveal timing, render snapshot
//! - `game`: the controller owning all state
//!
//! ## Example
//!
//! ```
//! use rust_rps::{Choice, GameController, REVEAL_DELAY};
//!
//! let mut game = GameController::new(42);
//!
//! game.choose(Choice::Rock);
//! game.advance(REVEAL_DELAY);
//!
//! let snapshot = game.snapshot();
//! assert!(snapshot.winner_visible);
//! assert!(snapshot.result_text.is_some());
//! ```

pub mod core;
pub mod game;
pub mod rules;
pub mod view;

// Re-export the public surface
pub use crate::core::{Choice, ChoiceSource, GameRng, Outcome, ParseChoiceError};

pub use crate::game::{GameController, RoundRecord};

pub use crate::rules::{classify, resolve_round, wins_against, RoundResult};

pub use crate::view::{GameSnapshot, Phase, REVEAL_DELAY};
