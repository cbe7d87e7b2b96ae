//! Rules engine: the beats-table and round resolution.

pub mod engine;

pub use engine::{classify, resolve_round, wins_against, RoundResult};
