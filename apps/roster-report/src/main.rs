mod config;
mod report;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use platform_obs::{ObsConfig, init_tracing};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "roster-report", version, about = "Employee roster report")]
struct Cli {
    /// Reference date for ages, as YYYY-MM-DD (defaults to today).
    #[arg(long, value_name = "DATE")]
    as_of: Option<NaiveDate>,
    /// Tracing filter directive; overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(ObsConfig::default().with_filter(cli.log_filter))?;
    let config = AppConfig::load()?;
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(?config, %as_of, "configuration loaded");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_report(&mut out, &config, as_of)?;
    out.flush().context("failed to flush report")?;
    Ok(())
}
