//! Extract body text without headers and footers, one sentence per paragraph.

use clap::Parser;
use doc2kg::{Response, SentenceModel, TextExtraction, extract_text_sentences};
use doc2kg_cli::{CommonArgs, UsageStyle, emit, parse_or_exit, setup};
use std::path::PathBuf;

const USAGE: &str = "Usage: extract_text_sentences <pdf_path>";

#[derive(Debug, Parser)]
#[command(
    name = "extract_text_sentences",
    version,
    about = "Extract sentence-segmented body text from a PDF as JSON"
)]
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
    let (config, backend) = setup(&cli.common)?;

    let mut model = SentenceModel::load(&config.sentences.model)?;

    extract_text_sentences(&backend, &cli.pdf_path, &config.header_footer, &mut model)
}

fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit(USAGE, UsageStyle::Json);
    emit(&Response::from(run(&cli)))
}
