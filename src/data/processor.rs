//! Data Processor Module
//! Sorts records by one field and projects aligned (x, y) series for charting.

use super::loader::{Dataset, Record};
use super::numeric::parse_cell;
use serde::Serialize;
use std::cmp::Ordering;

/// Field holding "systolic/diastolic" readings.
pub const BLOOD_PRESSURE: &str = "Blood Pressure";

/// Which half of a "first/second" compound value to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundPart {
    /// Text before the first `/`.
    Systolic,
    /// Text between the first and second `/`.
    Diastolic,
}

impl CompoundPart {
    fn index(self) -> usize {
        match self {
            CompoundPart::Systolic => 0,
            CompoundPart::Diastolic => 1,
        }
    }
}

/// A y-axis projection of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueField {
    /// The field's own numeric value.
    Numeric(String),
    /// One half of a slash-separated compound value.
    Compound { field: String, part: CompoundPart },
}

impl ValueField {
    pub fn numeric(field: impl Into<String>) -> Self {
        ValueField::Numeric(field.into())
    }

    /// Systolic and diastolic projections of "Blood Pressure".
    pub fn blood_pressure() -> [ValueField; 2] {
        [
            ValueField::Compound {
                field: BLOOD_PRESSURE.to_string(),
                part: CompoundPart::Systolic,
            },
            ValueField::Compound {
                field: BLOOD_PRESSURE.to_string(),
                part: CompoundPart::Diastolic,
            },
        ]
    }

    pub fn field(&self) -> &str {
        match self {
            ValueField::Numeric(field) => field,
            ValueField::Compound { field, .. } => field,
        }
    }

    /// Numeric value for `record`, `None` for a plotting gap.
    pub fn extract(&self, record: &Record) -> Option<f64> {
        match self {
            ValueField::Numeric(field) => parse_cell(record.get(field)),
            ValueField::Compound { field, part } => {
                let raw = record.get(field)?;
                parse_cell(raw.split('/').nth(part.index()))
            }
        }
    }
}

/// Aligned chart data: one x per record and one y-series per value field.
///
/// `x` holds NaN where the sort field was not numeric; `y` entries are `None`
/// where the value was not numeric.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<Vec<Option<f64>>>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Builds chart series from a dataset.
pub struct DataProcessor;

impl DataProcessor {
    /// Records ordered ascending by the numeric value of `sort_field`.
    ///
    /// The sort is stable. Records whose value is not numeric come last, in
    /// their original order. The dataset itself is left untouched.
    pub fn sorted_by<'a>(
        dataset: &'a Dataset,
        sort_field: &str,
    ) -> Vec<(Option<f64>, &'a Record)> {
        let mut keyed: Vec<(Option<f64>, &Record)> = dataset
            .iter()
            .map(|record| (parse_cell(record.get(sort_field)), record))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        keyed
    }

    /// Build the x sequence from `sort_field` and one y-series per entry of
    /// `value_fields`, all of the dataset's length.
    pub fn build_series(
        dataset: &Dataset,
        sort_field: &str,
        value_fields: &[ValueField],
    ) -> Series {
        let sorted = Self::sorted_by(dataset, sort_field);

        let x = sorted
            .iter()
            .map(|(key, _)| key.unwrap_or(f64::NAN))
            .collect();

        let y = value_fields
            .iter()
            .map(|vf| sorted.iter().map(|(_, record)| vf.extract(record)).collect())
            .collect();

        Series { x, y }
    }
}

/// Free-function form of [`DataProcessor::build_series`].
pub fn build_series(dataset: &Dataset, sort_field: &str, value_fields: &[ValueField]) -> Series {
    DataProcessor::build_series(dataset, sort_field, value_fields)
}
