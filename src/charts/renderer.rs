//! Static Chart Renderer
//! Draws dashboard line charts to PNG or SVG files with plotters.
//!
//! Layout follows the dashboard's category-axis line charts:
//! 1. Title centred above the plot
//! 2. Points spaced evenly by index, tick labels showing the x values
//! 3. One coloured line per series, broken wherever a value is missing
//! 4. Legend in the upper-left corner

use crate::charts::{ChartData, Rgb};
use crate::error::{DashboardError, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            width: 1280,
            height: 720,
        }
    }
}

const MAX_X_LABELS: usize = 12;

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render one chart to `path`.
    pub fn render(chart: &ChartData, options: &RenderOptions, path: &Path) -> Result<()> {
        let size = (options.width, options.height);
        let result = match options.format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                Self::draw_line_chart(&root, chart).map_err(|e| e.to_string())
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                Self::draw_line_chart(&root, chart).map_err(|e| e.to_string())
            }
        };

        result.map_err(|message| DashboardError::Render {
            chart: chart.id.clone(),
            message,
        })
    }

    /// Render every chart into `output_dir` as `<id>.<ext>`, in parallel.
    ///
    /// Returns the written paths in chart order.
    pub fn render_all(
        charts: &[ChartData],
        options: &RenderOptions,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(output_dir)?;

        charts
            .par_iter()
            .map(|chart| -> Result<PathBuf> {
                let path = Self::output_path(output_dir, chart, options.format);
                Self::render(chart, options, &path)?;
                tracing::info!("Rendered '{}' -> {}", chart.title, path.display());
                Ok(path)
            })
            .collect()
    }

    pub fn output_path(output_dir: &Path, chart: &ChartData, format: ImageFormat) -> PathBuf {
        output_dir.join(format!("{}.{}", chart.id, format.extension()))
    }

    fn draw_line_chart<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        chart: &ChartData,
    ) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let last = chart.len().saturating_sub(1) as f64;
        let (y_min, y_max) = Self::get_y_range(chart);

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.title, ("sans-serif", 26))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..last + 0.5, y_min..y_max)?;

        let x_values = &chart.x;
        let x_formatter = |v: &f64| Self::x_tick_label(x_values, *v);
        let y_precision = if y_max - y_min < 10.0 { 1 } else { 0 };
        let y_formatter = |v: &f64| format!("{:.*}", y_precision, v);

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .x_labels(chart.len().clamp(1, MAX_X_LABELS))
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .draw()?;

        for line in &chart.lines {
            let color = RGBColor::from(line.color);

            // Empty series carries the legend entry so it shows even when
            // every value is missing.
            ctx.draw_series(LineSeries::new(
                std::iter::empty::<(f64, f64)>(),
                color.stroke_width(2),
            ))?
            .label(line.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

            for segment in Self::segments(&line.values) {
                ctx.draw_series(LineSeries::new(
                    segment.iter().copied(),
                    color.stroke_width(2),
                ))?;
                ctx.draw_series(
                    segment
                        .iter()
                        .map(|&point| Circle::new(point, 3, color.filled())),
                )?;
            }
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    /// Split a series into runs of consecutive present values, keyed by
    /// index so each run is drawn as one connected line.
    fn segments(values: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
        let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();

        for (i, value) in values.iter().enumerate() {
            match value {
                Some(v) if v.is_finite() => current.push((i as f64, *v)),
                _ => {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }

        runs
    }

    /// Y range over all finite values with 10% padding; `0..1` when empty.
    fn get_y_range(chart: &ChartData) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in chart.lines.iter().flat_map(|l| l.values.iter().flatten()) {
            if v.is_finite() {
                min = min.min(*v);
                max = max.max(*v);
            }
        }
        if min > max {
            return (0.0, 1.0);
        }

        let pad = if max > min { (max - min) * 0.1 } else { 1.0 };
        (min - pad, max + pad)
    }

    /// Tick label for axis position `pos`: the x value at that index, blank
    /// between indices.
    fn x_tick_label(x: &[f64], pos: f64) -> String {
        let idx = pos.round();
        if (pos - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        x.get(idx as usize).map(|v| v.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(values: Vec<Option<f64>>) -> ChartData {
        ChartData {
            id: "test".to_string(),
            title: "Test".to_string(),
            x_label: "x".to_string(),
            x: (0..values.len()).map(|i| i as f64).collect(),
            lines: vec![crate::charts::LineData {
                label: "y".to_string(),
                color: Rgb(0, 0, 0),
                values,
            }],
        }
    }

    #[test]
    fn test_segments_split_on_gaps() {
        let runs = StaticChartRenderer::segments(&[Some(1.0), Some(2.0), None, Some(4.0), None]);
        assert_eq!(runs, vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(3.0, 4.0)]]);
    }

    #[test]
    fn test_segments_all_missing() {
        assert!(StaticChartRenderer::segments(&[None, None]).is_empty());
        assert!(StaticChartRenderer::segments(&[]).is_empty());
    }

    #[test]
    fn test_segments_skip_infinite() {
        let runs = StaticChartRenderer::segments(&[Some(1.0), Some(f64::INFINITY), Some(3.0)]);
        assert_eq!(runs.len(), 2);
    }

    #[test]
    fn test_y_range_padding() {
        let (lo, hi) = StaticChartRenderer::get_y_range(&chart(vec![Some(10.0), None, Some(20.0)]));
        assert!((lo - 9.0).abs() < 1e-9);
        assert!((hi - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_range_degenerate() {
        assert_eq!(StaticChartRenderer::get_y_range(&chart(vec![None])), (0.0, 1.0));
        assert_eq!(
            StaticChartRenderer::get_y_range(&chart(vec![Some(5.0), Some(5.0)])),
            (4.0, 6.0)
        );
    }

    #[test]
    fn test_x_tick_labels() {
        let x = [6.0, 7.5, f64::NAN];
        assert_eq!(StaticChartRenderer::x_tick_label(&x, 0.0), "6");
        assert_eq!(StaticChartRenderer::x_tick_label(&x, 1.0), "7.5");
        assert_eq!(StaticChartRenderer::x_tick_label(&x, 2.0), "NaN");
        assert_eq!(StaticChartRenderer::x_tick_label(&x, 0.5), "");
        assert_eq!(StaticChartRenderer::x_tick_label(&x, -1.0), "");
        assert_eq!(StaticChartRenderer::x_tick_label(&x, 3.0), "");
    }

    #[test]
    fn test_output_path() {
        let c = chart(vec![]);
        let path = StaticChartRenderer::output_path(Path::new("out"), &c, ImageFormat::Svg);
        assert_eq!(path, PathBuf::from("out/test.svg"));
    }

    #[test]
    fn test_render_all_writes_svg_in_chart_order() {
        let ds = crate::data::Dataset::parse(
            "Sleep Duration,Quality of Sleep,Physical Activity Level,Stress Level,Heart Rate,Blood Pressure\n\
             6.1,6,42,6,77,126/83\n\
             7.8,7,75,6,70,120/80\n\
             5.9,4,30,8,85,bad\n",
        );
        let report = crate::dashboard::Dashboard::build(&ds);
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("charts");
        let options = RenderOptions {
            format: ImageFormat::Svg,
            width: 640,
            height: 480,
        };

        let paths = StaticChartRenderer::render_all(&report.charts, &options, &out).unwrap();

        assert_eq!(
            paths,
            vec![
                out.join("sleep_trends.svg"),
                out.join("activity_stress.svg"),
                out.join("heart_rate_bp.svg"),
            ]
        );
        for path in &paths {
            let meta = std::fs::metadata(path).unwrap();
            assert!(meta.len() > 0, "{} is empty", path.display());
        }
    }

    #[test]
    fn test_render_error_names_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("test.svg");
        let options = RenderOptions {
            format: ImageFormat::Svg,
            ..RenderOptions::default()
        };

        let err = StaticChartRenderer::render(&chart(vec![Some(1.0), Some(2.0)]), &options, &path)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Render { ref chart, .. } if chart == "test"));
        assert!(err.to_string().contains("'test'"));
    }
}
