//! Shared plumbing for the doc2kg command-line binaries.
//!
//! Each binary parses its positional arguments with clap, installs a stderr
//! logger, loads an [`ExtractionConfig`], runs one extraction and prints the
//! JSON [`Response`] on stdout. Extraction failures are reported in the JSON
//! and still exit 0; only argument errors exit 1.

use clap::error::ErrorKind as ClapErrorKind;
use clap::{Args, Parser};
use doc2kg::{ExtractionConfig, PdfBackend, Response};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Options every binary accepts.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file (TOML, or JSON by extension). Defaults to a discovered doc2kg.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How a binary reports missing or malformed arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageStyle {
    /// `{"success":false,"error":"Usage: ..."}`
    Json,
    /// The bare usage line.
    Plain,
}

/// Parse the command line, or print `usage` and exit with status 1.
///
/// `--help` and `--version` keep clap's usual output and exit codes.
pub fn parse_or_exit<C: Parser>(usage: &str, style: UsageStyle) -> C {
    match C::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", usage_message(usage, style));
                std::process::exit(1);
            }
        },
    }
}

/// The text printed for an argument error.
pub fn usage_message(usage: &str, style: UsageStyle) -> String {
    match style {
        UsageStyle::Json => serde_json::json!({"success": false, "error": usage}).to_string(),
        UsageStyle::Plain => usage.to_string(),
    }
}

/// Install the stderr logger. `RUST_LOG` wins; otherwise `warn`, or `debug` with `-v`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load `--config` if given, else a discovered `doc2kg.toml`, else defaults.
pub fn load_config(explicit: Option<&Path>) -> doc2kg::Result<ExtractionConfig> {
    if let Some(path) = explicit {
        tracing::debug!("Loading config from {}", path.display());
        return ExtractionConfig::from_file(path);
    }

    Ok(ExtractionConfig::discover()?.unwrap_or_default())
}

/// Install logging and load the configuration.
pub fn init(common: &CommonArgs) -> doc2kg::Result<ExtractionConfig> {
    init_logging(common.verbose);
    load_config(common.config.as_deref())
}

/// [`init`] followed by binding pdfium, for binaries with no work to do before binding.
pub fn setup(common: &CommonArgs) -> doc2kg::Result<(ExtractionConfig, PdfBackend)> {
    let config = init(common)?;
    let backend = PdfBackend::new(&config.pdfium)?;
    Ok((config, backend))
}

/// Print a response as one line of JSON on stdout.
pub fn emit<T: Serialize>(response: &Response<T>) -> anyhow::Result<()> {
    let json = serde_json::to_string(response)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
