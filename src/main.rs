//! Sleep Dashboard - Sleep health survey summary & static line charts
//!
//! Loads a survey CSV, prints the headline averages and renders the three
//! dashboard charts to image files.

use anyhow::{Context, Result};
use clap::Parser;
use sleep_dashboard::bootstrap;
use sleep_dashboard::charts::StaticChartRenderer;
use sleep_dashboard::settings::Settings;
use sleep_dashboard::{Dashboard, DataLoader};

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Sleep Dashboard v{} starting", env!("CARGO_PKG_VERSION"));

    let mut loader = DataLoader::new();
    loader
        .load_csv(&settings.input)
        .with_context(|| format!("loading {}", settings.input.display()))?;
    let dataset = loader.into_dataset().unwrap_or_default();

    let report = Dashboard::build(&dataset);
    for line in report.summary_lines() {
        println!("{}", line);
    }

    if let Some(path) = &settings.summary_json {
        report
            .write_json(path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if settings.no_charts {
        tracing::info!("Chart rendering skipped");
        return Ok(());
    }

    let written = StaticChartRenderer::render_all(
        &report.charts,
        &settings.render_options(),
        &settings.output_dir,
    )
    .context("rendering charts")?;
    tracing::info!(
        "{} charts written to {}",
        written.len(),
        settings.output_dir.display()
    );

    Ok(())
}
