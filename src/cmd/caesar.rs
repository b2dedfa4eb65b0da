use crate::cmd::read_input;
use cipherforge::caesar;
use cipherforge::config::ScoringWeights;
use cipherforge::reports::{self, OutputFormat};
use cipherforge::scorer::{Dictionary, Scorer};
use cipherforge::CfResult;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CaesarArgs {
    /// Ciphertext to brute-force.
    pub text: Option<String>,

    /// Read the ciphertext from a file instead.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// How many top candidates to show.
    #[arg(short = 'n', long, default_value_t = 6)]
    pub candidates: usize,

    #[arg(long, default_value = "table")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub weights: ScoringWeights,
}

pub fn run(
    args: CaesarArgs,
    dictionary: Dictionary,
    file_weights: Option<ScoringWeights>,
) -> CfResult<()> {
    let ciphertext = read_input(args.text, args.file)?;

    let weights = file_weights.unwrap_or(args.weights.clone());
    let scorer = Scorer::new(dictionary, weights);

    let ranked = caesar::brute_force(&ciphertext, &scorer);
    let top = &ranked[..args.candidates.clamp(1, ranked.len())];

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(top)?),
        OutputFormat::Table => println!("{}", reports::candidates_table(top)),
    }

    Ok(())
}
