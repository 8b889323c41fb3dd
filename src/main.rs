use std::io::{self, BufWriter};

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weekday_names::{Config, DEFAULT_LOG_FILTER, run};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    // Logs go to stderr; stdout carries only weekday names
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!(
        on_error = ?config.on_error,
        log_filter = %config.log_filter,
        "Loaded configuration from environment"
    );

    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());
    let report = run(input, output, config.on_error).context("Failed to resolve weekdays")?;

    tracing::info!(
        resolved = report.resolved,
        skipped = report.skipped,
        "Finished"
    );
    Ok(())
}
