//! Crop Profit Calculator - ranking precompute job
//!
//! Ranks every crop for each season, fertilizer and sell method and writes
//! the table as JSON for the static site.

use std::io::Write;
use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod services;

pub use config::Config;

use error::AppResult;
use services::ranking_report::ScenarioDefaults;
use services::RankingReportService;

fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    init_tracing(config.logging.json);

    tracing::info!("Starting crop ranking precompute");
    tracing::info!("Environment: {}", config.environment);

    if let Err(err) = run(&config) {
        tracing::error!(code = err.code(), "Precompute failed: {}", err);
        return Err(err.into());
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "crop_rankings=info,shared=warn".into());

    // Logs go to stderr so stdout stays clean for the report
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(config: &Config) -> AppResult<()> {
    let catalog = RankingReportService::load_catalog(config.dataset.path.as_deref().map(Path::new))?;
    tracing::info!("Loaded {} crops", catalog.len());

    let service = RankingReportService::new(
        catalog,
        ScenarioDefaults::from(&config.scenario),
        config.output.top_n,
    )?;
    let report = service.generate();
    let json = RankingReportService::to_json(&report, config.output.pretty)?;

    match &config.output.path {
        Some(path) => {
            std::fs::write(path, json)?;
            tracing::info!("Wrote {} ranking entries to {}", report.entries.len(), path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
            tracing::info!("Wrote {} ranking entries to stdout", report.entries.len());
        }
    }

    Ok(())
}
