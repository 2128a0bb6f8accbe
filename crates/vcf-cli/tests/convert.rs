//! End-to-end tests for the convert command.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use vcf_cli::cli::{ConvertArgs, VersionArg};
use vcf_cli::commands::run_convert;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn fixture(dir: &TempDir) -> (PathBuf, PathBuf) {
    let input = write_file(
        dir,
        "contacts.csv",
        "First Name,Last Name,Phone,Email\n\
         Jane,Doe,555-123-4567,jane@example.com\n\
         John,Smith,408 555 1234,john@example.com\n",
    );
    let mapping = write_file(
        dir,
        "mapping.json",
        r#"{
            "entries": [
                { "field": "name", "source": { "column": "First Name" } },
                { "field": "name", "source": { "column": "Last Name" } },
                { "field": "phone_number", "subtype": "mobile", "source": { "column": "Phone" } },
                { "field": "email", "subtype": "work", "source": { "column": "Email" } },
                { "field": "organization", "source": { "constant": "Acme Corp" } }
            ]
        }"#,
    );
    (input, mapping)
}

fn convert_args(input: PathBuf, mapping: PathBuf) -> ConvertArgs {
    ConvertArgs {
        input,
        mapping,
        output: None,
        vcard_version: None,
        ios: false,
        skip_empty_fields: false,
        dry_run: false,
    }
}

#[test]
fn convert_writes_vcf_next_to_input() {
    let dir = TempDir::new().expect("tempdir");
    let (input, mapping) = fixture(&dir);

    let summary = run_convert(&convert_args(input, mapping)).expect("convert");
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.entries, 5);
    assert!(summary.written);
    assert_eq!(summary.output, dir.path().join("contacts.vcf"));

    let payload = fs::read_to_string(&summary.output).expect("read output");
    assert_eq!(payload.matches("BEGIN:VCARD").count(), 2);
    assert!(payload.contains("VERSION:3.0\n"));
    assert!(payload.contains("N:Jane Doe;;;;\n"));
    assert!(payload.contains("FN:Jane Doe\n"));
    assert!(payload.contains("TEL;TYPE=CELL:5551234567\n"));
    assert!(payload.contains("TEL;TYPE=CELL:4085551234\n"));
    assert!(payload.contains("EMAIL;TYPE=WORK:john@example.com\n"));
    // The constant organization appears in every record.
    assert_eq!(payload.matches("ORG:Acme Corp\n").count(), 2);
}

#[test]
fn ios_flag_selects_legacy_version() {
    let dir = TempDir::new().expect("tempdir");
    let (input, mapping) = fixture(&dir);

    let mut args = convert_args(input, mapping);
    args.ios = true;
    let summary = run_convert(&args).expect("convert");
    let payload = fs::read_to_string(&summary.output).expect("read output");
    assert!(payload.contains("VERSION:2.1\n"));
}

#[test]
fn explicit_version_overrides_ios_flag() {
    let dir = TempDir::new().expect("tempdir");
    let (input, mapping) = fixture(&dir);

    let mut args = convert_args(input, mapping);
    args.ios = true;
    args.vcard_version = Some(VersionArg::V3_0);
    let summary = run_convert(&args).expect("convert");
    let payload = fs::read_to_string(&summary.output).expect("read output");
    assert!(payload.contains("VERSION:3.0\n"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let (input, mapping) = fixture(&dir);

    let mut args = convert_args(input, mapping);
    args.dry_run = true;
    let summary = run_convert(&args).expect("convert");
    assert!(!summary.written);
    assert!(!summary.output.exists());
}

#[test]
fn unknown_mapped_column_fails_before_rendering() {
    let dir = TempDir::new().expect("tempdir");
    let (input, _) = fixture(&dir);
    let mapping = write_file(
        &dir,
        "bad-mapping.json",
        r#"{ "entries": [ { "field": "name", "source": { "column": "Nickname" } } ] }"#,
    );

    let error = run_convert(&convert_args(input, mapping)).expect_err("should fail");
    assert!(format!("{error:#}").contains("Nickname"));
    assert!(!dir.path().join("contacts.vcf").exists());
}

#[test]
fn mapping_file_version_applies_when_no_flags() {
    let dir = TempDir::new().expect("tempdir");
    let (input, _) = fixture(&dir);
    let mapping = write_file(
        &dir,
        "versioned-mapping.json",
        r#"{
            "version": "2.1",
            "entries": [ { "field": "name", "source": { "column": "First Name" } } ]
        }"#,
    );

    let summary = run_convert(&convert_args(input, mapping)).expect("convert");
    let payload = fs::read_to_string(&summary.output).expect("read output");
    assert!(payload.contains("VERSION:2.1\n"));
}
