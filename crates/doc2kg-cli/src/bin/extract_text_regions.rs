//! Extract text inside page regions given as JSON, inline or in a file.

use clap::Parser;
use doc2kg::core::io::read_inline_or_file;
use doc2kg::{PdfBackend, RegionMap, Response, TextExtraction, extract_text_regions};
use doc2kg_cli::{CommonArgs, UsageStyle, emit, init, parse_or_exit};
use std::path::PathBuf;

const USAGE: &str = "Usage: extract_text_regions <pdf_path> <regions_json_or_filepath>";

#[derive(Debug, Parser)]
#[command(name = "extract_text_regions", version, about = "Extract text inside page regions of a PDF as JSON")]
struct Cli {
    /// PDF file to read
    pdf_path: PathBuf,

    /// Region mapping such as {"1": [[x0, y0, x1, y1]]}, or a file containing it
    regions: String,

    /// Accepted and ignored
    #[arg(hide = true)]
    _extra: Vec<String>,

    #[command(flatten)]
    common: CommonArgs,
}

fn run(cli: &Cli) -> doc2kg::Result<TextExtraction> {
    let config = init(&cli.common)?;

    // The mapping is validated before pdfium is bound or the PDF is touched.
    let regions = RegionMap::from_json(&read_inline_or_file(&cli.regions)?)?;

    let backend = PdfBackend::new(&config.pdfium)?;
    extract_text_regions(&backend, &cli.pdf_path, &regions)
}

fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit(USAGE, UsageStyle::Json);
    emit(&Response::from(run(&cli)))
}
