// src/data_input/table_parser.rs

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::constants::REQUIRED_COLUMNS;
use crate::data_input::sample_table::SampleTable;
use crate::error::LoadError;

/// Parses one numeric cell. An empty cell, or one past the end of a short
/// row, is a missing value and becomes NaN.
fn parse_cell(record: &StringRecord, index: usize, column: &str) -> Result<f64, LoadError> {
    let raw = record.get(index).unwrap_or("");
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        line: record.position().map_or(0, |p| p.line()),
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Loads the sample table from a CSV file with a header row.
pub fn parse_sample_table(input_file_path: &Path) -> Result<SampleTable, LoadError> {
    let file = File::open(input_file_path).map_err(csv::Error::from)?;
    let table = parse_sample_table_from_reader(file)?;
    log::info!(
        "Loaded {} rows from '{}'",
        table.len(),
        input_file_path.display()
    );
    Ok(table)
}

/// Loads the sample table from any CSV source.
///
/// Every required column is resolved before the first data row is read, so a
/// missing column fails fast. Extra columns are ignored; short rows are padded
/// with missing values.
pub fn parse_sample_table_from_reader<R: Read>(source: R) -> Result<SampleTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);
    let header_record = reader.headers()?.clone();
    log::debug!("Headers found in CSV: {:?}", header_record);

    let mut column_indices = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, &name) in column_indices.iter_mut().zip(REQUIRED_COLUMNS.iter()) {
        *slot = header_record
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))?;
    }

    let mut table = SampleTable::default();
    for result in reader.records() {
        let record = result?;
        let mut values = [0.0f64; REQUIRED_COLUMNS.len()];
        for ((value, &index), &name) in values
            .iter_mut()
            .zip(column_indices.iter())
            .zip(REQUIRED_COLUMNS.iter())
        {
            *value = parse_cell(&record, index, name)?;
        }
        let [time, level, time1, level1] = values;
        table.push_row(time, level, time1, level1);
    }

    Ok(table)
}
