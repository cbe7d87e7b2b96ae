//! Opponent choice randomness as an injected capability.
//!
//! The controller never touches a global RNG. It draws opponent moves
//! through [`ChoiceSource`], so tests substitute a scripted source and
//! pin exact (user, opponent) pairs, while the real game uses the
//! deterministic, seedable [`GameRng`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::choice::Choice;

/// Source of opponent moves.
///
/// Implementations draw one choice per round. The production source
/// draws uniformly at random; test doubles may return a fixed script.
pub trait ChoiceSource {
    /// Draw the opponent's choice for one round.
    fn draw(&mut self) -> Choice;
}

/// Deterministic RNG-backed choice source.
///
/// Uses ChaCha8: fast, and the same seed always produces the same
/// sequence of opponent moves. Cryptographic strength is not required
/// here, reproducibility is.
///
/// ## Example
///
/// ```
/// use rust_rps::{ChoiceSource, GameRng};
///
/// let mut a = GameRng::new(42);
/// let mut b = GameRng::new(42);
/// for _ in 0..20 {
///     assert_eq!(a.draw(), b.draw());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a seeded RNG with a reproducible draw sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl ChoiceSource for GameRng {
    fn draw(&mut self) -> Choice {
        Choice::ALL[self.inner.gen_range(0..Choice::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        for _ in 0..100 {
            assert_eq!(rng1.draw(), rng2.draw());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.draw()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.draw()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_all_choices_reachable() {
        let mut rng = GameRng::new(42);
        let draws: Vec<_> = (0..200).map(|_| rng.draw()).collect();

        for choice in Choice::ALL {
            assert!(draws.contains(&choice), "{choice} never drawn");
        }
    }
}
