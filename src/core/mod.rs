//! Core game types: choices, outcomes, randomness.
//!
//! These are the fundamental building blocks shared by the rules engine
//! and the view state machine. The rule table is fixed at three choices
//! and lives in the types themselves.

pub mod choice;
pub mod outcome;
pub mod rng;

pub use choice::{Choice, ParseChoiceError};
pub use outcome::Outcome;
pub use rng::{ChoiceSource, GameRng};
