mod poll;
mod report;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::poll::{AvailabilityPoller, PollRequest};

#[derive(Debug, Parser)]
#[command(name = "vaxslots")]
#[command(about = "Report open vaccine and screening appointments at nearby pharmacies")]
struct Cli {
    /// Cities to include, exact match (pass the flag with no value to include none)
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    cities: Option<Vec<String>>,

    /// Number of days forward to search
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    days: u32,

    /// Appointment categories to include, e.g. moderna,pfizer,screening
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    categories: Option<Vec<String>>,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log every outbound query to stderr
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = vaxslots_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config.log_level, cli.debug || config.debug)?;
    tracing::debug!(?config, "configuration loaded");

    let request = PollRequest {
        cities: cli
            .cities
            .unwrap_or_else(|| config.default_cities.clone()),
        categories: cli
            .categories
            .unwrap_or_else(|| config.default_categories.clone()),
        days: cli.days,
        today: chrono::Local::now().date_naive(),
    };

    let poller = AvailabilityPoller::from_config(&config)
        .context("failed to build booking API client")?;
    let outcome = poller
        .poll(&request)
        .await
        .context("availability poll failed")?;

    let rows = match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            report::write_report(outcome.records, BufWriter::new(file))?
        }
        None => report::write_report(outcome.records, std::io::stdout().lock())?,
    };
    tracing::info!(rows, "report written");

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins; otherwise `--debug`
/// turns on query logging and `log_level` applies to everything else.
fn init_tracing(log_level: &str, debug: bool) -> anyhow::Result<()> {
    let fallback = if debug {
        format!("{log_level},vaxslots=debug,vaxslots_medme=debug")
    } else {
        log_level.to_string()
    };
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
