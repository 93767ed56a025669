//! Statistics Calculator Module
//! Averages over survey fields, skipping cells that are not numeric.

use crate::data::{parse_cell, Dataset};
use serde::Serialize;
use std::fmt;

/// Mean of the numeric cells of one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Average {
    /// Unrounded mean, `0.0` when nothing parsed.
    pub mean: f64,
    /// Number of records that contributed.
    pub count: usize,
}

impl Average {
    /// Mean rounded to one decimal place, as displayed.
    pub fn rounded(&self) -> f64 {
        fixed_one_decimal(self.mean)
            .parse()
            .unwrap_or(self.mean)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for Average {
    /// One decimal place, or a bare `0` when no record had a number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "0")
        } else {
            f.write_str(&fixed_one_decimal(self.mean))
        }
    }
}

/// Format `value` with one decimal place, rounding on its exact binary value.
///
/// An exact halfway value rounds to the larger magnitude. Non-finite values
/// print as `NaN`, `Infinity` or `-Infinity`.
fn fixed_one_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value < 0.0 { "-Infinity" } else { "Infinity" };
        return text.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    // A double lies exactly halfway between two tenths only when it is an odd
    // multiple of 1/4; every other value rounds unambiguously.
    let quarters = magnitude * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (magnitude * 10.0).ceil();
        return format!("{}{:.1}", sign, tenths / 10.0);
    }

    format!("{}{:.1}", sign, magnitude)
}

/// Handles the summary statistics shown on the dashboard.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute the mean of `field` over every record whose cell parses.
    pub fn compute_average(dataset: &Dataset, field: &str) -> Average {
        let (sum, count) = dataset
            .iter()
            .filter_map(|record| parse_cell(record.get(field)))
            .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));

        if count == 0 {
            return Average::default();
        }

        Average {
            mean: sum / count as f64,
            count,
        }
    }

    /// Rounded average of `field`; `0.0` when no record has a number.
    pub fn average(dataset: &Dataset, field: &str) -> f64 {
        Self::compute_average(dataset, field).rounded()
    }
}

/// Free-function form of [`StatsCalculator::average`].
pub fn average(dataset: &Dataset, field: &str) -> f64 {
    StatsCalculator::average(dataset, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_is_zero() {
        let ds = Dataset::parse("Sleep Duration\n");
        assert_eq!(StatsCalculator::average(&ds, "Sleep Duration"), 0.0);
        let avg = StatsCalculator::compute_average(&ds, "Sleep Duration");
        assert!(avg.is_empty());
        assert_eq!(avg.to_string(), "0");
    }

    #[test]
    fn test_ignores_non_numeric() {
        let ds = Dataset::parse("v\n8\nx\n6\n");
        assert_eq!(average(&ds, "v"), 7.0);
        let avg = StatsCalculator::compute_average(&ds, "v");
        assert_eq!(avg.count, 2);
        assert_eq!(avg.to_string(), "7.0");
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        let ds = Dataset::parse("Quality of Sleep\n8\n5\n9\n");
        let avg = StatsCalculator::compute_average(&ds, "Quality of Sleep");
        assert!((avg.mean - 22.0 / 3.0).abs() < 1e-12);
        assert_eq!(avg.rounded(), 7.3);
        assert_eq!(StatsCalculator::average(&ds, "Quality of Sleep"), 7.3);
    }

    #[test]
    fn test_exact_halfway_rounds_up() {
        let ds = Dataset::parse("v\n1.2\n1.3\n");
        assert_eq!(StatsCalculator::average(&ds, "v"), 1.3);

        let ds = Dataset::parse("v\n2.25\n");
        assert_eq!(average(&ds, "v"), 2.3);
        assert_eq!(StatsCalculator::compute_average(&ds, "v").to_string(), "2.3");

        let ds = Dataset::parse("v\n0.25\n");
        assert_eq!(StatsCalculator::compute_average(&ds, "v").to_string(), "0.3");

        let ds = Dataset::parse("v\n-2.25\n");
        assert_eq!(StatsCalculator::compute_average(&ds, "v").to_string(), "-2.3");
    }

    #[test]
    fn test_rounds_on_stored_value() {
        // 0.15 and 1.15 are stored just below the halfway point.
        let ds = Dataset::parse("v\n0.15\n");
        assert_eq!(average(&ds, "v"), 0.1);
        assert_eq!(StatsCalculator::compute_average(&ds, "v").to_string(), "0.1");

        let ds = Dataset::parse("v\n1.15\n");
        assert_eq!(StatsCalculator::compute_average(&ds, "v").to_string(), "1.1");
    }

    #[test]
    fn test_small_negative_keeps_sign() {
        let ds = Dataset::parse("v\n-0.01\n");
        assert_eq!(StatsCalculator::compute_average(&ds, "v").to_string(), "-0.0");
    }

    #[test]
    fn test_non_finite_display() {
        let ds = Dataset::parse("v\nInfinity\n3\n");
        let avg = StatsCalculator::compute_average(&ds, "v");
        assert_eq!(avg.to_string(), "Infinity");
        assert_eq!(avg.rounded(), f64::INFINITY);

        let ds = Dataset::parse("v\n-Infinity\n");
        assert_eq!(StatsCalculator::compute_average(&ds, "v").to_string(), "-Infinity");

        let ds = Dataset::parse("v\nInfinity\n-Infinity\n");
        let avg = StatsCalculator::compute_average(&ds, "v");
        assert_eq!(avg.to_string(), "NaN");
        assert!(avg.rounded().is_nan());
    }

    #[test]
    fn test_default_is_empty() {
        let avg = Average::default();
        assert!(avg.is_empty());
        assert_eq!(avg.mean, 0.0);
        assert_eq!(avg.to_string(), "0");
    }

    #[test]
    fn test_leading_numeric_cells_count() {
        let ds = Dataset::parse("Sleep Duration\n7.5hrs\n6.5 h\n");
        assert_eq!(StatsCalculator::average(&ds, "Sleep Duration"), 7.0);
    }

    #[test]
    fn test_null_and_missing_fields_are_skipped() {
        let ds = Dataset::parse("a,b\n4,2\n6\n");
        assert_eq!(StatsCalculator::compute_average(&ds, "b").count, 1);
        assert_eq!(StatsCalculator::average(&ds, "b"), 2.0);
        assert_eq!(StatsCalculator::average(&ds, "missing"), 0.0);
    }

    #[test]
    fn test_display_large_values() {
        let ds = Dataset::parse("Daily Steps\n4200\n10000\n3000\n");
        let avg = StatsCalculator::compute_average(&ds, "Daily Steps");
        assert_eq!(avg.to_string(), "5733.3");
    }
}
