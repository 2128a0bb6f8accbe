//! CSV/TSV loading into the table model.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use vcf_model::{CellValue, Row, Table};

use crate::error::{IngestError, Result};

/// Picks the delimiter from the file extension: `.tsv`/`.tab` are
/// tab-separated, everything else is treated as comma-separated.
#[must_use]
pub fn delimiter_for_path(path: &Path) -> u8 {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("tab") => b'\t',
        _ => b',',
    }
}

/// Spreadsheet container extensions that the csv reader would silently
/// misparse as one giant delimited record.
const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// Reads a delimited file into a [`Table`], inferring the delimiter
/// from the extension.
///
/// Binary workbook formats (`.xlsx` and friends) are rejected up front
/// with [`IngestError::UnsupportedFormat`] rather than handed to the
/// csv parser.
pub fn read_table(path: &Path) -> Result<Table> {
    if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
        if WORKBOOK_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
        {
            return Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: ext.to_ascii_lowercase(),
            });
        }
    }
    read_table_with_delimiter(path, delimiter_for_path(path))
}

/// Reads a delimited file with an explicit delimiter.
///
/// Short records are padded with missing cells; fully-empty columns and
/// rows are dropped, matching how spreadsheet exports pad their edges.
pub fn read_table_with_delimiter(path: &Path, delimiter: u8) -> Result<Table> {
    let read_error = |source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;

    let headers = reader.headers().map_err(read_error)?;
    if headers.is_empty() {
        return Err(IngestError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    let columns = unique_headers(headers.iter().map(normalize_header));

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        let mut cells = BTreeMap::new();
        for (index, column) in table.columns.iter().enumerate() {
            let raw = record.get(index).unwrap_or("");
            cells.insert(column.clone(), CellValue::parse(raw));
        }
        table.push_row(Row { cells });
    }

    drop_empty_columns(&mut table);
    drop_empty_rows(&mut table);

    info!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.rows.len(),
        "loaded contact table"
    );
    Ok(table)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Disambiguates repeated headers by appending a counter, so every
/// column keeps an addressable name.
fn unique_headers(headers: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    let mut columns = Vec::new();
    for header in headers {
        let count = seen.entry(header.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            columns.push(header);
        } else {
            columns.push(format!("{header} ({count})"));
        }
    }
    columns
}

fn drop_empty_columns(table: &mut Table) {
    let empty: Vec<String> = table
        .columns
        .iter()
        .filter(|column| {
            table
                .rows
                .iter()
                .all(|row| row.cells.get(*column).is_none_or(CellValue::is_missing))
        })
        .cloned()
        .collect();
    if empty.is_empty() {
        return;
    }
    debug!(count = empty.len(), "dropping fully-empty columns");
    table.columns.retain(|column| !empty.contains(column));
    for row in &mut table.rows {
        for column in &empty {
            row.cells.remove(column);
        }
    }
}

fn drop_empty_rows(table: &mut Table) {
    let before = table.rows.len();
    table
        .rows
        .retain(|row| row.cells.values().any(|cell| !cell.is_missing()));
    let dropped = before - table.rows.len();
    if dropped > 0 {
        debug!(count = dropped, "dropping fully-empty rows");
    }
}
