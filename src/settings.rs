//! Command-line settings for the dashboard binary.

use crate::charts::{ImageFormat, RenderOptions};
use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Sleep health dashboard: summary averages and line charts from a survey CSV
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sleep-dashboard",
    about = "Sleep health summary and line charts from a survey CSV",
    version
)]
pub struct Settings {
    /// CSV file with a header row
    #[arg(default_value = "Sleep_health_and_lifestyle_dataset.csv")]
    pub input: PathBuf,

    /// Directory the chart images are written to
    #[arg(long, default_value = "charts")]
    pub output_dir: PathBuf,

    /// Chart image format
    #[arg(long, value_enum, default_value_t = ImageFormat::Png)]
    pub format: ImageFormat,

    /// Chart width in pixels
    #[arg(long, default_value = "1280", value_parser = clap::value_parser!(u32).range(200..=8000))]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value = "720", value_parser = clap::value_parser!(u32).range(200..=8000))]
    pub height: u32,

    /// Also write the summary and chart data as JSON
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Print the summary without rendering charts
    #[arg(long)]
    pub no_charts: bool,

    /// Logging level (RUST_LOG takes precedence when set)
    #[arg(long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,
}

impl Settings {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            width: self.width,
            height: self.height,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
