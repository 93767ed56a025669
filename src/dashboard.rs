//! Dashboard assembly: summary cards plus chart data for one dataset.

use crate::charts::{ChartData, ChartPlotter};
use crate::data::Dataset;
use crate::error::Result;
use crate::stats::{Average, StatsCalculator};
use serde::Serialize;
use std::path::Path;

/// A headline average shown as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub title: String,
    pub field: String,
    pub average: Average,
    /// Rounded average, `0.0` when the field had no numbers.
    pub value: f64,
    /// Display text, e.g. `"7.3 hours"`.
    pub display: String,
}

/// Everything the presentation layer shows for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub rows: usize,
    pub columns: Vec<String>,
    pub summary: Vec<SummaryCard>,
    pub charts: Vec<ChartData>,
}

/// (title, field, unit suffix) for each summary card.
const SUMMARY_FIELDS: [(&str, &str, &str); 3] = [
    ("Average Sleep", "Sleep Duration", " hours"),
    ("Average Sleep Quality", "Quality of Sleep", "/10"),
    ("Average Daily Steps", "Daily Steps", " steps"),
];

pub struct Dashboard;

impl Dashboard {
    /// Compute the summary cards and the three charts.
    pub fn build(dataset: &Dataset) -> DashboardReport {
        let summary = SUMMARY_FIELDS
            .iter()
            .map(|&(title, field, unit)| {
                let average = StatsCalculator::compute_average(dataset, field);
                if average.is_empty() {
                    tracing::warn!("No numeric values for '{}'", field);
                }
                SummaryCard {
                    title: title.to_string(),
                    field: field.to_string(),
                    average,
                    value: average.rounded(),
                    display: format!("{}{}", average, unit),
                }
            })
            .collect();

        let charts = ChartPlotter::dashboard_specs()
            .iter()
            .map(|spec| ChartPlotter::plot(dataset, spec))
            .collect();

        DashboardReport {
            rows: dataset.len(),
            columns: dataset.headers().to_vec(),
            summary,
            charts,
        }
    }
}

impl DashboardReport {
    /// Summary lines as printed to stdout.
    pub fn summary_lines(&self) -> Vec<String> {
        self.summary
            .iter()
            .map(|card| format!("{}: {}", card.title, card.display))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json()?)?;
        tracing::info!("Wrote summary report to {}", path.display());
        Ok(())
    }
}
