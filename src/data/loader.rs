//! CSV Data Loader Module
//! Reads survey CSV text into an in-memory dataset of string records.
//!
//! The format is plain comma-separated text. Quoted fields are not supported:
//! a comma inside quotes still splits the cell.

use crate::error::{DashboardError, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// One parsed data row: field name to raw cell value.
///
/// A `None` value means the row was too short to reach that column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: HashMap<String, Option<String>>,
}

impl Record {
    /// Cell value for `field`, or `None` when the cell is null or the field
    /// does not exist.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|v| v.as_deref())
    }

    /// Whether `field` is one of the record's keys (null or not).
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Trim whitespace and byte-order marks from both ends.
///
/// Spreadsheet exports often start with U+FEFF, which `str::trim` keeps.
fn trim_cell(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// All records from one parsed file, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Parse CSV text.
    ///
    /// The text is trimmed and split on `\n`; the first line holds the field
    /// names. Short rows map their missing cells to null and long rows drop
    /// the extra cells. This never fails.
    pub fn parse(text: &str) -> Self {
        let mut lines = trim_cell(text).split('\n');

        let headers: Vec<String> = lines
            .next()
            .unwrap_or_default()
            .split(',')
            .map(|h| trim_cell(h).to_string())
            .collect();

        let records = lines
            .map(|line| {
                let mut cells = line.split(',');
                let fields = headers
                    .iter()
                    .map(|h| (h.clone(), cells.next().map(|c| trim_cell(c).to_string())))
                    .collect();
                Record { fields }
            })
            .collect();

        Self { headers, records }
    }

    /// Trimmed header names in column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Distinct field names every record carries.
    pub fn field_names(&self) -> HashSet<&str> {
        self.headers.iter().map(String::as_str).collect()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Free-function form of [`Dataset::parse`].
pub fn parse(text: &str) -> Dataset {
    Dataset::parse(text)
}

/// Loads a dataset from disk.
pub struct DataLoader {
    dataset: Option<Dataset>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            dataset: None,
            file_path: None,
        }
    }

    /// Read and parse a CSV file. Invalid UTF-8 is replaced rather than
    /// rejected.
    pub fn load_csv(&mut self, file_path: impl AsRef<Path>) -> Result<&Dataset> {
        let path = file_path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| DashboardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let dataset = Dataset::parse(&text);
        tracing::info!(
            "Loaded {} rows x {} columns from {}",
            dataset.len(),
            dataset.headers().len(),
            path.display()
        );
        tracing::debug!(headers = ?dataset.headers(), "parsed dataset");

        self.file_path = Some(path.to_path_buf());
        let dataset = &*self.dataset.insert(dataset);
        Ok(dataset)
    }

    pub fn get_dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    pub fn get_row_count(&self) -> usize {
        self.dataset.as_ref().map(Dataset::len).unwrap_or(0)
    }

    /// Take ownership of the loaded dataset.
    pub fn into_dataset(self) -> Option<Dataset> {
        self.dataset
    }
}
