// ===== cipherforge/src/optimizer/mod.rs =====
pub mod runner;
pub mod seeder;

pub use self::runner::{Attack, AttackOptions, AttackResult};

use crate::consts::ALPHABET_LEN;
use crate::decoder::decode;
use crate::mapping::Mapping;
use crate::scorer::Scorer;

/// One independent hill-climbing run over mapping space. Owns its mapping,
/// score, and RNG exclusively; restarts never share mutable state.
pub struct Restart {
    pub mapping: Mapping,
    pub score: f64,
    pub rng: fastrand::Rng,
}

impl Restart {
    pub fn new(mapping: Mapping, ciphertext: &str, scorer: &Scorer, seed: u64) -> Self {
        let score = scorer.score(&decode(ciphertext, &mapping));
        Self {
            mapping,
            score,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Strict-ascent climb: each iteration swaps the plaintext assignments
    /// of two random cipher letters and keeps the move only if the candidate
    /// scores strictly higher; equal or worse candidates are reverted.
    /// Returns the number of accepted moves.
    pub fn climb(&mut self, ciphertext: &str, scorer: &Scorer, iterations: usize) -> usize {
        let mut accepted = 0;

        for _ in 0..iterations {
            let a = self.rng.usize(0..ALPHABET_LEN);
            let b = self.rng.usize(0..ALPHABET_LEN);
            if a == b {
                continue;
            }

            self.mapping.swap(a, b);
            let candidate = scorer.score(&decode(ciphertext, &self.mapping));

            if candidate > self.score {
                self.score = candidate;
                accepted += 1;
            } else {
                self.mapping.swap(a, b);
            }
        }

        accepted
    }
}
