//! Deterministic random number generation for system moves.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical matches
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rps_engine::core::MatchRng;
//!
//! let mut a = MatchRng::new(7);
//! let mut b = MatchRng::new(7);
//! assert_eq!(a.gen_move(), b.gen_move());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Seedable RNG for the computer opponent.
///
/// Uses ChaCha8 so a checkpoint is just the seed plus the word position.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    ///
    /// The drawn seed is kept, so the match can still be checkpointed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a move uniformly from the three moves.
    pub fn gen_move(&mut self) -> Move {
        Move::from_index(self.inner.gen_range(0..3u8))
    }

    /// Fair coin flip.
    pub fn gen_coin(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MatchRngState {
        MatchRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MatchRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = MatchRng::new(42);
        let mut rng2 = MatchRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_move(), rng2.gen_move());
            assert_eq!(rng1.gen_coin(), rng2.gen_coin());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = MatchRng::new(1);
        let mut rng2 = MatchRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.gen_move()).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.gen_move()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_moves_cover_all_three() {
        let mut rng = MatchRng::new(42);
        let mut seen = [false; 3];

        for _ in 0..300 {
            seen[rng.gen_move().index() as usize] = true;
        }

        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_coin_is_roughly_fair() {
        let mut rng = MatchRng::new(9);
        let heads = (0..10_000).filter(|_| rng.gen_coin()).count();
        assert!((4_500..=5_500).contains(&heads), "heads = {}", heads);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = MatchRng::new(42);

        for _ in 0..50 {
            rng.gen_move();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_move()).collect();

        let mut restored = MatchRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_move()).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = MatchRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
