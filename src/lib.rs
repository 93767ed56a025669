//! Sleep Dashboard - Sleep health survey summary & static line charts
//!
//! The core (`data`, `stats`) turns CSV text into records, averages and
//! aligned chart series. It never fails: malformed rows and non-numeric cells
//! degrade to nulls and gaps. `dashboard` assembles the report and `charts`
//! draws it.

pub mod bootstrap;
pub mod charts;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod settings;
pub mod stats;

pub use dashboard::{Dashboard, DashboardReport, SummaryCard};
pub use data::{
    build_series, parse, DataLoader, DataProcessor, Dataset, Record, Series, ValueField,
};
pub use error::{DashboardError, Result};
pub use stats::{average, Average, StatsCalculator};
