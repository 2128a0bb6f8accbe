//! Per-row record rendering and batch concatenation.

use chrono::{DateTime, Utc};

use vcf_model::{FieldKind, MappingEntry, MappingSet, Row, Table, ValueSource, VcardVersion};

use crate::properties::{
    email_line, full_name_line, name_line, rev_line, simple_line, tel_line,
};

/// How empty optional single-value fields (ORG, TITLE, ADR, NOTE) are
/// rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyFieldPolicy {
    /// Emit a bare blank line, keeping line-count parity across rows.
    #[default]
    BlankLine,
    /// Drop the line entirely.
    Omit,
}

/// Rendering configuration, fixed for a whole generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub version: VcardVersion,
    pub empty_fields: EmptyFieldPolicy,
}

/// Renders one record with the current wall-clock revision timestamp.
#[must_use]
pub fn render_record(set: &MappingSet, row: &Row, options: &RenderOptions) -> String {
    render_record_at(set, row, options, Utc::now())
}

/// Renders one record with an explicit revision timestamp.
///
/// Two passes over the entries: the first gathers name and suffix
/// tokens (which must head the record but may be interleaved with other
/// kinds in entry order), the second emits everything else in entry
/// order.
#[must_use]
pub fn render_record_at(
    set: &MappingSet,
    row: &Row,
    options: &RenderOptions,
    revised_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    out.push_str("BEGIN:VCARD\n");
    out.push_str(&format!("VERSION:{}\n", options.version));

    let mut name_parts = Vec::new();
    let mut suffix_parts = Vec::new();
    for entry in set.entries() {
        match entry.field_kind {
            FieldKind::Name => name_parts.push(resolve(entry, row)),
            FieldKind::Suffix => suffix_parts.push(resolve(entry, row)),
            _ => {}
        }
    }
    out.push_str(&name_line(&name_parts, &suffix_parts));
    out.push_str(&full_name_line(&name_parts, &suffix_parts));

    for entry in set.entries() {
        match entry.field_kind {
            FieldKind::Name | FieldKind::Suffix | FieldKind::None => {}
            FieldKind::PhoneNumber => {
                out.push_str(&tel_line(entry.subtype, &resolve(entry, row)));
            }
            FieldKind::Email => {
                out.push_str(&email_line(entry.subtype, &resolve(entry, row)));
            }
            FieldKind::Organization => {
                out.push_str(&simple_line("ORG", &resolve(entry, row), options.empty_fields));
            }
            FieldKind::JobTitle => {
                out.push_str(&simple_line("TITLE", &resolve(entry, row), options.empty_fields));
            }
            FieldKind::Address => {
                out.push_str(&simple_line("ADR", &resolve(entry, row), options.empty_fields));
            }
            FieldKind::Note => {
                out.push_str(&simple_line("NOTE", &resolve(entry, row), options.empty_fields));
            }
        }
    }

    out.push_str(&rev_line(revised_at));
    out.push_str("END:VCARD\n");
    out
}

/// Renders every row of the table and concatenates the records in row
/// order. Each record captures its own revision timestamp.
#[must_use]
pub fn render_table(set: &MappingSet, table: &Table, options: &RenderOptions) -> String {
    table
        .rows
        .iter()
        .map(|row| render_record(set, row, options))
        .collect()
}

/// Resolves an entry's value for the current row as trimmed text.
/// Column references read the row (missing cells resolve empty, absent
/// columns are a caller-checked precondition); constants ignore the
/// row entirely.
fn resolve(entry: &MappingEntry, row: &Row) -> String {
    match &entry.source {
        ValueSource::Column(name) => row.value(name),
        ValueSource::Constant(literal) => literal.trim().to_string(),
    }
}
