//! CLI argument definitions for the `askdoc` binary.

use std::path::PathBuf;

use clap::Parser;

/// Ask questions about a document, with web search for everything else.
#[derive(Parser, Debug)]
#[command(name = "askdoc", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file.
    #[arg(long, default_value = "askdoc.toml", env = "ASKDOC_CONFIG")]
    pub config: PathBuf,

    /// Directory holding the document (overrides the config file).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Load this file instead of the first file in the data directory.
    #[arg(long)]
    pub document: Option<PathBuf>,

    /// Session id for the conversation history (random if omitted).
    #[arg(long)]
    pub session: Option<String>,

    /// Chat model (overrides the config file).
    #[arg(long)]
    pub model: Option<String>,

    /// Export spans to stdout via OpenTelemetry (printed between answers).
    #[arg(long)]
    pub otel: bool,

    /// Suppress the banner and all logs except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed logs (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
