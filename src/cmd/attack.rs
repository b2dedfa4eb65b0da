use crate::cmd::read_input;
use cipherforge::config::{Config, ScoringWeights};
use cipherforge::mapping::Mapping;
use cipherforge::optimizer::{Attack, AttackOptions};
use cipherforge::reports::{self, OutputFormat};
use cipherforge::scorer::{Dictionary, Scorer};
use cipherforge::CfResult;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct AttackArgs {
    /// Ciphertext to attack.
    pub text: Option<String>,

    /// Read the ciphertext from a file instead.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Resume from a 26-char mapping (letters, '?' for unresolved).
    #[arg(short, long)]
    pub resume: Option<Mapping>,

    #[arg(long, default_value = "table")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(
    args: AttackArgs,
    dictionary: Dictionary,
    file_weights: Option<ScoringWeights>,
) -> CfResult<()> {
    let ciphertext = read_input(args.text, args.file)?;

    let weights = file_weights.unwrap_or(args.config.weights.clone());
    let scorer = Scorer::new(dictionary, weights);
    let options = AttackOptions::from(&args.config);

    info!(
        restarts = options.restarts,
        iterations = options.iterations,
        seed = options.seed,
        "starting substitution attack"
    );

    let attack = Attack::new(&scorer, options);
    let result = match args.resume {
        Some(mapping) => attack.resume(&ciphertext, mapping)?,
        None => attack.run(&ciphertext)?,
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => {
            println!("{}", reports::mapping_table(&result.mapping));
            println!("\nScore: {:.4}", result.score);
            println!("Key:   {}", result.mapping);
            println!("\n{}", result.decoded);
        }
    }

    Ok(())
}
