//! Extract all text of a PDF as one whitespace-normalized line.

use clap::Parser;
use doc2kg::{Response, TextExtraction, extract_text};
use doc2kg_cli::{CommonArgs, UsageStyle, emit, parse_or_exit, setup};
use std::path::PathBuf;

const USAGE: &str = "Usage: extract_text <pdf_path>";

#[derive(Debug, Parser)]
#[command(name = "extract_text", version, about = "Extract all text from a PDF as JSON")]
struct Cli {
    /// PDF file to read
    pdf_path: PathBuf,

    /// Accepted and ignored
    #[arg(hide = true)]
    _extra: Vec<String>,

    #[command(flatten)]
    common: CommonArgs,
}

fn run(cli: &Cli) -> doc2kg::Result<TextExtraction> {
    let (_, backend) = setup(&cli.common)?;
    extract_text(&backend, &cli.pdf_path)
}

fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit(USAGE, UsageStyle::Json);
    emit(&Response::from(run(&cli)))
}
