//! Game controller: the single owner of score, phase, and view flags.

pub mod controller;

pub use controller::{GameController, RoundRecord};
