use std::path::PathBuf;

use clap::Parser;

/// Daystream calendar-day sequence printer.
#[derive(Parser)]
#[command(
    name = "daystream",
    version,
    about = "Print a lazy sequence of calendar-day timestamps"
)]
pub struct Cli {
    /// First instant of the sequence (RFC 3339). Defaults to the current
    /// UTC day's midnight.
    #[arg(short, long)]
    pub start: Option<String>,

    /// Bound after which no more instants are printed (RFC 3339).
    #[arg(short, long)]
    pub end: Option<String>,

    /// Maximum number of instants to print.
    #[arg(short, long)]
    pub take: Option<usize>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
