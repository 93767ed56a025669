//! Charts module - Chart definitions and static rendering

mod plotter;
mod renderer;

pub use plotter::{ChartData, ChartPlotter, ChartSpec, LineData, LineSpec, Rgb};
pub use renderer::{ImageFormat, RenderOptions, StaticChartRenderer};
