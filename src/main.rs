// ===== cipherforge/src/main.rs =====
use cipherforge::config::ScoringWeights;
use cipherforge::scorer::Dictionary;
use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info};

mod cmd;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON array of common words; falls back to the built-in list.
    #[arg(global = true, short, long)]
    dictionary: Option<String>,

    /// JSON scoring weights; overrides the per-flag defaults.
    #[arg(global = true, short, long)]
    weights: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Break a monoalphabetic substitution cipher.
    Attack(cmd::attack::AttackArgs),
    /// Brute-force a Caesar shift cipher.
    Caesar(cmd::caesar::CaesarArgs),
    /// Print the letter-frequency profile of a text.
    Freq(cmd::freq::FreqArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let dictionary = match &cli.dictionary {
        Some(path) => {
            info!("Loading dictionary from: {}", path);
            Dictionary::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        None => Dictionary::common_english(),
    };

    let file_weights: Option<ScoringWeights> = cli.weights.as_ref().map(|path| {
        info!("Loading weights from: {}", path);
        ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        })
    });

    let outcome = match cli.command {
        Commands::Attack(args) => cmd::attack::run(args, dictionary, file_weights),
        Commands::Caesar(args) => cmd::caesar::run(args, dictionary, file_weights),
        Commands::Freq(args) => cmd::freq::run(args),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
