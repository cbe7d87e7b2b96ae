//! View state machine: round phases, reveal timing, render snapshot.

pub mod phase;
pub mod snapshot;

pub use phase::{Phase, REVEAL_DELAY};
pub use snapshot::GameSnapshot;
