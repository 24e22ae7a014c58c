//! The single source of randomness for a game.
//!
//! Everything random in the game (shuffles, focus draws, bot decisions, bomb
//! checks) goes through a [`RandomSource`] created once per process and passed
//! down explicitly. Tests substitute [`ScriptedRandom`] to pin every decision.

use crate::cards::Card;
use core::fmt;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;

    /// Uniform permutation of `cards` (Fisher-Yates over [`RandomSource::below`]).
    fn shuffle(&mut self, cards: &mut [Card]) {
        for i in (1..cards.len()).rev() {
            let j = self.below(i as u32 + 1) as usize;
            cards.swap(i, j);
        }
    }

    /// True with probability `percent / 100`.
    fn percent(&mut self, percent: u32) -> bool {
        self.below(100) < percent
    }

    /// True with probability `1 / n`.
    fn one_in(&mut self, n: u32) -> bool {
        self.below(n) == 0
    }
}

/// ChaCha8-backed source; reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    /// Seed from the thread-local OS-seeded generator.
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound.max(1))
    }

    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Deterministic source driven by a closure from `bound` to the answer.
///
/// Answers are clamped into `0..bound`, so a script only has to care about the
/// bounds it wants to steer.
///
/// ```
/// use bluff_bomb::rng::{RandomSource, ScriptedRandom};
///
/// // Bomb checks (1 in 3) never explode, percentage rolls always hit.
/// let mut rng = ScriptedRandom::from_fn(|bound| if bound == 3 { 1 } else { 0 });
/// assert!(!rng.one_in(3));
/// assert!(rng.percent(30));
/// ```
pub struct ScriptedRandom {
    script: Box<dyn FnMut(u32) -> u32>,
}

impl ScriptedRandom {
    pub fn from_fn(script: impl FnMut(u32) -> u32 + 'static) -> Self {
        Self { script: Box::new(script) }
    }

    /// Always answer `value` (clamped).
    pub fn constant(value: u32) -> Self {
        Self::from_fn(move |_| value)
    }

    /// Answer from `values` in order, then keep answering `fallback`.
    pub fn sequence(values: Vec<u32>, fallback: u32) -> Self {
        let mut it = values.into_iter();
        Self::from_fn(move |_| it.next().unwrap_or(fallback))
    }
}

impl fmt::Debug for ScriptedRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScriptedRandom(..)")
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: u32) -> u32 {
        let bound = bound.max(1);
        (self.script)(bound).min(bound - 1)
    }
}
