//! Data module - CSV loading, numeric parsing and series building

mod loader;
mod numeric;
mod processor;

pub use loader::{parse, DataLoader, Dataset, Record};
pub use numeric::{parse_cell, parse_leading};
pub use processor::{
    build_series, CompoundPart, DataProcessor, Series, ValueField, BLOOD_PRESSURE,
};
