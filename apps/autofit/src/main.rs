use std::io::BufRead;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use autofit::config::Config;
use autofit::{FitOrchestrator, FitOutcome, TableMeasurer};

/// One JSON line per processed text.
#[derive(Debug, Serialize)]
struct FitReport<'a> {
    text: &'a str,
    #[serde(flatten)]
    outcome: Option<FitOutcome>,
}

fn main() -> Result<()> {
    // Load configuration first so RUST_LOG from .env applies to the subscriber.
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting autofit v{}", env!("CARGO_PKG_VERSION"));

    let constraints = config.constraints().context("invalid size constraints")?;
    let bounds = config.bounds().context("invalid bounds")?;
    info!(
        font = ?config.font,
        min = constraints.min_size,
        max = constraints.max_size,
        max_lines = ?constraints.max_lines,
        "fitting into {}x{}",
        bounds.width,
        bounds.height
    );

    // The CLI reports outcomes itself; the sink has nothing to render into.
    let mut orchestrator =
        FitOrchestrator::new(TableMeasurer::new(config.font), |_size: u32| {}, constraints);
    orchestrator.set_cache_enabled(config.cache_enabled);
    orchestrator.set_padding(config.padding());
    orchestrator.on_bounds_changed(bounds);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        // No arguments: every stdin line is a text edit.
        for line in std::io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            report(&line, orchestrator.set_text(line.as_str()))?;
        }
    } else {
        for text in &args {
            report(text, orchestrator.set_text(text.as_str()))?;
        }
    }

    Ok(())
}

fn report(text: &str, outcome: Option<FitOutcome>) -> Result<()> {
    let line = serde_json::to_string(&FitReport { text, outcome })?;
    println!("{line}");
    Ok(())
}
