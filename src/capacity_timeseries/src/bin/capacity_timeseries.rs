use std::{fs::File, io};

use anyhow::{Context, Result};
use capacity_timeseries::{
    Market, NormalizerConfig, TracingSink,
    config::load_config_path,
    models::{RawRow, read_rows},
    normalize_rows,
};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(version, about = "Capacity-market rows to named time series")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Normalize a JSON array of rows and print the series as JSON
    Normalize(NormalizeCmd),
}

#[derive(Args)]
struct NormalizeCmd {
    /// Market identifier (e.g. "fcr", "afrr"), case-insensitive
    #[arg(long)]
    market: String,

    /// JSON file with an array of row objects; `-` reads stdin
    #[arg(long, value_name = "FILE", default_value = "-")]
    input: String,

    /// Optional TOML config (reference_zone, country)
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn read_input(input: &str) -> Result<Vec<RawRow>> {
    if input == "-" {
        read_rows(io::stdin().lock()).context("read rows from stdin")
    } else {
        let file = File::open(input).with_context(|| format!("open rows file {input}"))?;
        read_rows(file).with_context(|| format!("read rows file {input}"))
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Normalize(NormalizeCmd {
            market,
            input,
            config,
            pretty,
        }) => {
            // 1) Config
            let cfg = match config {
                Some(path) => load_config_path(&path)?,
                None => NormalizerConfig::default(),
            };

            // 2) Rows
            let rows = read_input(&input)?;

            // 3) Normalize
            let market = Market::parse(&market);
            let (batch, report) = normalize_rows(&market, &rows, &cfg, &mut TracingSink);
            info!(
                %market,
                rows = report.rows_seen,
                dropped = report.rows_dropped(),
                series = batch.series.len(),
                points = report.points,
                null_values = report.null_values,
                "normalized"
            );

            let out = if pretty {
                serde_json::to_string_pretty(&batch)?
            } else {
                serde_json::to_string(&batch)?
            };
            println!("{out}");
        }
    }

    Ok(())
}
