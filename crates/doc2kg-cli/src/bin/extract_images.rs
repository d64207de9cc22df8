//! Render every page of a PDF to `{doc_id}.{page}.png`.

use clap::Parser;
use doc2kg::core::io::ensure_dir;
use doc2kg::{ImageExtraction, PdfBackend, Response, extract_images};
use doc2kg_cli::{CommonArgs, UsageStyle, emit, init, parse_or_exit};
use std::path::PathBuf;

const USAGE: &str = "Usage: extract_images <pdf_path> <output_dir> <doc_id>";

#[derive(Debug, Parser)]
#[command(name = "extract_images", version, about = "Render every PDF page to a PNG file")]
struct Cli {
    /// PDF file to read
    pdf_path: PathBuf,

    /// Directory for the page images, created if missing
    output_dir: PathBuf,

    /// Prefix of the image file names
    doc_id: String,

    /// Accepted and ignored
    #[arg(hide = true)]
    _extra: Vec<String>,

    #[command(flatten)]
    common: CommonArgs,
}

fn run(cli: &Cli) -> doc2kg::Result<ImageExtraction> {
    let config = init(&cli.common)?;
    ensure_dir(&cli.output_dir)?;

    let backend = PdfBackend::new(&config.pdfium)?;
    extract_images(&backend, &cli.pdf_path, &cli.output_dir, &cli.doc_id, &config.render)
}

fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit(USAGE, UsageStyle::Json);
    emit(&Response::from(run(&cli)))
}
