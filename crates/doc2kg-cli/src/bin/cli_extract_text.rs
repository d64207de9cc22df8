//! Print the plain text of a PDF, or the error message.

use clap::Parser;
use doc2kg::{TextExtraction, extract_text};
use doc2kg_cli::{CommonArgs, UsageStyle, parse_or_exit, setup};
use std::path::PathBuf;

const USAGE: &str = "Usage: cli_extract_text <filename>";

#[derive(Debug, Parser)]
#[command(name = "cli_extract_text", version, about = "Print the text of a PDF")]
struct Cli {
    /// PDF file to read
    filename: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

fn run(cli: &Cli) -> doc2kg::Result<TextExtraction> {
    let (_, backend) = setup(&cli.common)?;
    extract_text(&backend, &cli.filename)
}

fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit(USAGE, UsageStyle::Plain);

    match run(&cli) {
        Ok(extraction) => println!("{}", extraction.text),
        Err(e) => {
            tracing::debug!("Extraction failed: {:?}", e);
            println!("{}", e);
        }
    }

    Ok(())
}
