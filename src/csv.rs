// src/csv.rs
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ExportError, Result};

/// One export row, keyed by header name.
pub type Row = HashMap<String, String>;

/// Parse delimited text with a header line into keyed rows.
/// Every row carries every header: missing trailing cells read as empty,
/// extra cells are dropped.
pub fn parse_rows<R: Read>(reader: R, delimiter: u8) -> std::result::Result<Vec<Row>, ::csv::Error> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (s!(h), s!(record.get(i).unwrap_or_default())))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Read the whole export file.
pub fn read_rows(path: &Path, delimiter: u8) -> Result<Vec<Row>> {
    let file = File::open(path).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    parse_rows(file, delimiter).map_err(|source| ExportError::Csv { path: path.to_path_buf(), source })
}
