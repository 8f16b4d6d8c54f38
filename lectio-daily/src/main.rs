//! lectio-daily - Daily poem and essay
//!
//! Resolves configuration, fetches today's poem pool and essay text, and
//! prints the paired readings as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use lectio_common::config::{self, CONFIG_ENV_VAR};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for lectio-daily
#[derive(Parser, Debug)]
#[command(name = "lectio-daily")]
#[command(about = "Deterministic daily poem and essay")]
#[command(version)]
struct Args {
    /// Day to assemble (YYYY-MM-DD), defaults to the current UTC day
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Configuration file
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Print only the poem
    #[arg(long)]
    poem_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let loaded =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;
    let config = loaded.config;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting lectio-daily v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &loaded.source {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    let assembler =
        lectio_daily::build_assembler(&config).context("Failed to initialize reading sources")?;

    let output = if args.poem_only {
        let poem = match args.date {
            Some(day) => assembler.daily_reading_on(day).await,
            None => assembler.daily_reading().await,
        };
        to_json(&poem, args.pretty)?
    } else {
        let readings = match args.date {
            Some(day) => assembler.readings_for_day(day).await,
            None => assembler.daily_readings().await,
        };
        to_json(&readings, args.pretty)?
    };

    println!("{}", output);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize readings")
}
