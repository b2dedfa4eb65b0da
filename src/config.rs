use crate::consts::{DEFAULT_ITERATIONS, DEFAULT_RESTARTS, DEFAULT_SEED};
use crate::CfResult;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Independent hill-climbing restarts per attack.
    #[arg(long, default_value_t = DEFAULT_RESTARTS)]
    pub restarts: usize,

    /// Swap budget per restart.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// RNG seed; identical seeds give identical results.
    #[arg(short = 'S', long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Run restarts on a thread pool. Same result as sequential for a
    /// given seed, just faster.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            iterations: DEFAULT_ITERATIONS,
            seed: DEFAULT_SEED,
            parallel: false,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Charge per unresolved marker in the decoded text.
    #[arg(long, default_value_t = 0.05)]
    pub unknown_penalty: f64,

    /// Weight of the "etaoin" membership bonus. 0.0 disables it; never
    /// enabled silently.
    #[arg(long, default_value_t = 0.0)]
    pub etaoin_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            unknown_penalty: 0.05,
            etaoin_bonus: 0.0,
        }
    }
}

impl ScoringWeights {
    /// Loads weights from a JSON file; missing fields fall back to defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let file = File::open(path)?;
        let weights = serde_json::from_reader(BufReader::new(file))?;
        Ok(weights)
    }
}
