//! Tabular import.
//!
//! Reads a delimited text file with a header row. Every row becomes one
//! [`PitchRecord`] mapping column name to the raw cell text; no column is
//! required and nothing is parsed here.

use crate::error::VizError;
use crate::record::PitchRecord;
use std::io::Read;
use std::path::Path;

/// Reads all records from a CSV file.
///
/// Fails with [`VizError::MissingInput`] if the path does not exist, and with
/// [`VizError::Csv`] if the file cannot be read or a row has the wrong number
/// of fields. Either way nothing is returned: import is all-or-nothing.
pub fn import_csv(path: impl AsRef<Path>) -> Result<Vec<PitchRecord>, VizError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(VizError::MissingInput(path.to_path_buf()));
    }

    let reader = csv::Reader::from_path(path)?;
    let records = read_records(reader)?;
    tracing::debug!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Reads all records from any CSV source with a header row.
pub fn records_from_reader<R: Read>(source: R) -> Result<Vec<PitchRecord>, VizError> {
    read_records(csv::Reader::from_reader(source))
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<PitchRecord>, VizError> {
    let headers = reader.headers()?.clone();

    reader
        .records()
        .map(|row| -> Result<PitchRecord, VizError> {
            let row = row?;
            Ok(headers.iter().zip(row.iter()).collect())
        })
        .collect()
}
