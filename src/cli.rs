use std::path::PathBuf;

use clap::Parser;
use reisekosten_calendar::YearMonth;

/// Monthly travel expense reports.
#[derive(Parser)]
#[command(
    name = "reisekosten",
    version,
    about = "Distributes a month's business days across customers and mails the expense reports"
)]
pub struct Cli {
    /// Reporting month as M/YYYY (defaults to the current month).
    #[arg(value_name = "M/YYYY")]
    pub period: Option<YearMonth>,

    /// Path to the TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the PDFs into this directory instead of emailing them.
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
