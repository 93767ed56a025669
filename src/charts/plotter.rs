//! Chart Plotter Module
//! Defines the dashboard's line charts and turns a dataset into chart data.

use crate::data::{DataProcessor, Dataset, ValueField};
use serde::Serialize;

/// RGB colour, kept backend-independent so chart data can be serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Default line colour (blue)
pub const DEFAULT_COLOR: Rgb = Rgb(52, 152, 219);
pub const ORANGE: Rgb = Rgb(255, 159, 64);
pub const TEAL: Rgb = Rgb(75, 192, 192);
pub const PURPLE: Rgb = Rgb(153, 102, 255);

/// One plotted line of a chart definition.
#[derive(Debug, Clone)]
pub struct LineSpec {
    pub label: String,
    pub field: ValueField,
    pub color: Rgb,
}

/// A line chart: records sorted by `x_field`, one line per entry in `lines`.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub x_field: String,
    pub lines: Vec<LineSpec>,
}

/// A computed line, aligned with its chart's x values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineData {
    pub label: String,
    pub color: Rgb,
    pub values: Vec<Option<f64>>,
}

/// Everything the renderer needs for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub x: Vec<f64>,
    pub lines: Vec<LineData>,
}

impl ChartData {
    /// Number of points on the x axis.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

pub struct ChartPlotter;

impl ChartPlotter {
    /// The three dashboard charts, in display order.
    pub fn dashboard_specs() -> Vec<ChartSpec> {
        let [systolic, diastolic] = ValueField::blood_pressure();

        vec![
            ChartSpec {
                id: "sleep_trends".to_string(),
                title: "Sleep Duration vs Quality of Sleep".to_string(),
                x_field: "Sleep Duration".to_string(),
                lines: vec![LineSpec {
                    label: "Quality of Sleep (1-10)".to_string(),
                    field: ValueField::numeric("Quality of Sleep"),
                    color: DEFAULT_COLOR,
                }],
            },
            ChartSpec {
                id: "activity_stress".to_string(),
                title: "Physical Activity Level vs Stress Level".to_string(),
                x_field: "Physical Activity Level".to_string(),
                lines: vec![LineSpec {
                    label: "Stress Level (1-10)".to_string(),
                    field: ValueField::numeric("Stress Level"),
                    color: ORANGE,
                }],
            },
            ChartSpec {
                id: "heart_rate_bp".to_string(),
                title: "Heart Rate vs Blood Pressure".to_string(),
                x_field: "Heart Rate".to_string(),
                lines: vec![
                    LineSpec {
                        label: "Blood Pressure (Systolic)".to_string(),
                        field: systolic,
                        color: TEAL,
                    },
                    LineSpec {
                        label: "Blood Pressure (Diastolic)".to_string(),
                        field: diastolic,
                        color: PURPLE,
                    },
                ],
            },
        ]
    }

    /// Compute the chart data for `spec`.
    pub fn plot(dataset: &Dataset, spec: &ChartSpec) -> ChartData {
        let fields: Vec<ValueField> = spec.lines.iter().map(|l| l.field.clone()).collect();
        let series = DataProcessor::build_series(dataset, &spec.x_field, &fields);

        let lines = spec
            .lines
            .iter()
            .zip(series.y)
            .map(|(line, values)| LineData {
                label: line.label.clone(),
                color: line.color,
                values,
            })
            .collect();

        ChartData {
            id: spec.id.clone(),
            title: spec.title.clone(),
            x_label: spec.x_field.clone(),
            x: series.x,
            lines,
        }
    }
}
