//! List command: print the day sequence to stdout.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{info, info_span};

use daystream_sequence::DaySequence;

use crate::cli::Cli;
use crate::config::DaystreamConfig;

/// Line format for printed instants.
enum Format {
    Rfc3339,
    Date,
}

/// Resolve the CLI arguments and drain the sequence to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let _cmd = info_span!("list").entered();
    // 1. Load TOML config, if given
    let config = match &cli.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse TOML config")?
        }
        None => DaystreamConfig::default(),
    };

    let format = match config.output.format.as_str() {
        "rfc3339" => Format::Rfc3339,
        "date" => Format::Date,
        other => bail!("unknown output format {other:?} (expected \"rfc3339\" or \"date\")"),
    };

    // 2. Resolve the span
    let start = cli.start.as_deref().map(parse_instant).transpose()?;
    let end = cli.end.as_deref().map(parse_instant).transpose()?;
    let take = cli.take.or(config.output.take);

    // A terminal consumer has no natural backstop for an endless print.
    if end.is_none() && take.is_none() {
        bail!("unbounded sequence: pass --end or --take to limit output");
    }

    // 3. Build and drain the sequence
    let sequence = match (start, end) {
        (Some(start), Some(end)) => DaySequence::bounded(start, end)?,
        (Some(start), None) => DaySequence::unbounded(start),
        (None, Some(end)) => DaySequence::from_today_until(end)?,
        (None, None) => DaySequence::from_today(),
    };

    let capped: Box<dyn Iterator<Item = DateTime<Utc>>> = match take {
        Some(n) => Box::new(sequence.take(n)),
        None => Box::new(sequence),
    };

    let mut n_days = 0usize;
    for instant in capped {
        match format {
            Format::Rfc3339 => println!("{}", instant.to_rfc3339_opts(SecondsFormat::Secs, true)),
            Format::Date => println!("{}", instant.format("%Y-%m-%d")),
        }
        n_days += 1;
    }

    info!(n_days, "sequence complete");
    Ok(())
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("invalid RFC 3339 instant: {raw:?}"))
}
