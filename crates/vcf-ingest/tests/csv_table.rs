//! Integration tests for CSV/TSV ingestion.

use std::io::Write;

use tempfile::NamedTempFile;

use vcf_ingest::{read_table, read_table_with_delimiter};
use vcf_model::CellValue;

fn write_fixture(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create fixture");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

#[test]
fn reads_csv_with_typed_cells() {
    let file = write_fixture(
        ".csv",
        "Name,Phone,Score\nJane Doe,555-123-4567,1.5\nJohn,4085551234,7\n",
    );
    let table = read_table(file.path()).expect("read csv");

    assert_eq!(table.columns, vec!["Name", "Phone", "Score"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(
        table.rows[0].cells.get("Phone"),
        Some(&CellValue::Text("555-123-4567".to_string()))
    );
    assert_eq!(
        table.rows[1].cells.get("Phone"),
        Some(&CellValue::Integer(4_085_551_234))
    );
    assert_eq!(table.rows[0].cells.get("Score"), Some(&CellValue::Float(1.5)));
}

#[test]
fn reads_tsv_by_extension() {
    let file = write_fixture(".tsv", "Name\tEmail\nJane\tjane@example.com\n");
    let table = read_table(file.path()).expect("read tsv");
    assert_eq!(table.columns, vec!["Name", "Email"]);
    assert_eq!(table.rows[0].value("Email"), "jane@example.com");
}

#[test]
fn strips_bom_from_first_header() {
    let file = write_fixture(".csv", "\u{feff}Name,Phone\nJane,123\n");
    let table = read_table(file.path()).expect("read csv");
    assert_eq!(table.columns[0], "Name");
}

#[test]
fn drops_fully_empty_columns_and_rows() {
    let file = write_fixture(
        ".csv",
        "Name,Unused,Phone\nJane,,123\n,,\nJohn,,456\n",
    );
    let table = read_table(file.path()).expect("read csv");
    assert_eq!(table.columns, vec!["Name", "Phone"]);
    assert_eq!(table.rows.len(), 2);
}

#[test]
fn pads_short_records_with_missing_cells() {
    let file = write_fixture(".csv", "Name,Phone,Note\nJane,123\n");
    let table = read_table(file.path()).expect("read csv");
    // The Note column is empty everywhere, so it is dropped outright.
    assert_eq!(table.columns, vec!["Name", "Phone"]);
    assert_eq!(table.rows[0].value("Name"), "Jane");
}

#[test]
fn explicit_delimiter_overrides_extension() {
    let file = write_fixture(".txt", "Name;Phone\nJane;123\n");
    let table = read_table_with_delimiter(file.path(), b';').expect("read with delimiter");
    assert_eq!(table.columns, vec!["Name", "Phone"]);
}

#[test]
fn workbook_extensions_are_rejected_up_front() {
    // Binary container, not delimited text. The csv parser must never
    // see these bytes.
    let mut file = tempfile::Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("create fixture");
    file.write_all(b"PK\x03\x04workbook bytes").expect("write fixture");

    let error = read_table(file.path()).expect_err("should fail");
    assert!(matches!(
        error,
        vcf_ingest::IngestError::UnsupportedFormat { .. }
    ));
    let message = error.to_string();
    assert!(message.contains("xlsx workbook"));
    assert!(message.contains("CSV or TSV"));
}

#[test]
fn missing_file_is_a_read_error() {
    let error = read_table(std::path::Path::new("/nonexistent/contacts.csv"))
        .expect_err("should fail");
    assert!(error.to_string().contains("contacts.csv"));
}
