//! Stats module - summary averages

mod calculator;

pub use calculator::{average, Average, StatsCalculator};
