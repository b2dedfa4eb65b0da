use crate::cmd::read_input;
use cipherforge::freq::FrequencyTable;
use cipherforge::reports::{self, OutputFormat};
use cipherforge::CfResult;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct FreqArgs {
    /// Text to profile.
    pub text: Option<String>,

    /// Read the text from a file instead.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Also write the table as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

pub fn run(args: FreqArgs) -> CfResult<()> {
    let text = read_input(args.text, args.file)?;
    let freq = FrequencyTable::analyze(&text);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&freq)?),
        OutputFormat::Table => {
            println!("{}", reports::freq_table(&freq));
            println!("\nTotal letters: {}", freq.total());
        }
    }

    if let Some(path) = args.csv {
        let file = File::create(&path)?;
        reports::write_freq_csv(file, &freq)?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
