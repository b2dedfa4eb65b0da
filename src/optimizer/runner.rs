use crate::config::Config;
use crate::decoder::decode;
use crate::freq::FrequencyTable;
use crate::mapping::Mapping;
use crate::optimizer::{seeder, Restart};
use crate::scorer::Scorer;
use crate::{CfResult, CipherForgeError};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

pub struct AttackOptions {
    pub restarts: usize,
    pub iterations: usize,
    pub seed: u64,
    pub parallel: bool,
}

impl Default for AttackOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AttackOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            restarts: cfg.search.restarts,
            iterations: cfg.search.iterations,
            seed: cfg.search.seed,
            parallel: cfg.search.parallel,
        }
    }
}

/// The winning candidate of a run, plus the ciphertext frequency table
/// for inspection.
#[derive(Debug, Clone, Serialize)]
pub struct AttackResult {
    pub mapping: Mapping,
    pub decoded: String,
    pub score: f64,
    pub freq: FrequencyTable,
}

/// Best candidate observed across all restarts. Threaded explicitly
/// through the restart loop; nothing else accumulates search state.
struct BestResult {
    restart: usize,
    score: f64,
    mapping: Mapping,
}

impl BestResult {
    /// Higher score wins; ties go to the lower restart index so the
    /// sequential and parallel paths agree.
    fn better(self, other: BestResult) -> BestResult {
        if other.score > self.score || (other.score == self.score && other.restart < self.restart)
        {
            other
        } else {
            self
        }
    }
}

/// Multi-restart hill-climbing driver over mapping space.
pub struct Attack<'a> {
    scorer: &'a Scorer,
    options: AttackOptions,
}

impl<'a> Attack<'a> {
    pub fn new(scorer: &'a Scorer, options: AttackOptions) -> Self {
        Self { scorer, options }
    }

    /// Seeds from the ciphertext's frequency profile and searches.
    /// Errors when the ciphertext has no letters at all.
    pub fn run(&self, ciphertext: &str) -> CfResult<AttackResult> {
        let freq = FrequencyTable::analyze(ciphertext);
        if freq.total() == 0 {
            return Err(CipherForgeError::EmptyInput);
        }
        let seed_mapping = seeder::seed_mapping(&freq);
        Ok(self.search(ciphertext, seed_mapping, freq))
    }

    /// Searches from a caller-supplied mapping instead of the seeder's,
    /// e.g. to resume a previous session. Partial mappings are allowed;
    /// their unresolved slots decode to markers and are penalized.
    pub fn resume(&self, ciphertext: &str, initial: Mapping) -> CfResult<AttackResult> {
        let freq = FrequencyTable::analyze(ciphertext);
        if freq.total() == 0 {
            return Err(CipherForgeError::EmptyInput);
        }
        Ok(self.search(ciphertext, initial, freq))
    }

    fn search(&self, ciphertext: &str, seed_mapping: Mapping, freq: FrequencyTable) -> AttackResult {
        let opts = &self.options;

        // The seeded candidate is the baseline; with zero restarts it wins.
        let baseline = BestResult {
            restart: usize::MAX,
            score: self.scorer.score(&decode(ciphertext, &seed_mapping)),
            mapping: seed_mapping.clone(),
        };
        debug!(score = baseline.score, "seeded candidate");

        let climb_one = |i: usize| -> BestResult {
            let mut restart = Restart::new(
                seed_mapping.clone(),
                ciphertext,
                self.scorer,
                opts.seed + i as u64,
            );
            let accepted = restart.climb(ciphertext, self.scorer, opts.iterations);
            debug!(
                restart = i,
                score = restart.score,
                accepted,
                "restart converged"
            );
            BestResult {
                restart: i,
                score: restart.score,
                mapping: restart.mapping,
            }
        };

        // Restarts are independent and their inputs read-only, so the
        // parallel path needs no synchronization and reduces to the same
        // winner as the sequential one.
        let converged: Vec<BestResult> = if opts.parallel {
            (0..opts.restarts).into_par_iter().map(climb_one).collect()
        } else {
            (0..opts.restarts).map(climb_one).collect()
        };

        let best = converged
            .into_iter()
            .fold(baseline, |acc, candidate| acc.better(candidate));

        let decoded = decode(ciphertext, &best.mapping);
        info!(score = best.score, "attack finished");

        AttackResult {
            mapping: best.mapping,
            decoded,
            score: best.score,
            freq,
        }
    }
}
