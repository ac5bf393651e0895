//! CLI argument definitions.

use clap::Parser;

use crate::commands::Commands;

/// Admin CLI for the PrintCollor backend.
#[derive(Parser, Debug)]
#[command(name = "printcollor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Backend base URL (falls back to $PRINTCOLLOR_API_URL, then the
    /// stored session)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
