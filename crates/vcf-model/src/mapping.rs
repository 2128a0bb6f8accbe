//! Column-to-field mapping model.
//!
//! A [`MappingSet`] captures the user's decisions of which input column
//! (or literal constant) supplies which vCard field. It is built once
//! per run and consumed read-only by the renderer for every row.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{FieldKind, Subtype};
use crate::version::VcardVersion;

/// Where a mapped value comes from: a named column resolved against
/// each row, or a literal constant shared by every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Column(String),
    Constant(String),
}

impl ValueSource {
    /// Returns the referenced column name, if this source reads a column.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Column(name) => Some(name),
            Self::Constant(_) => None,
        }
    }
}

/// One mapping decision: a field kind, its subtype qualifier, the value
/// source, and a caller-assigned sequence index that keeps keys unique
/// when one kind is chosen several times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub field_kind: FieldKind,
    #[serde(default)]
    pub subtype: Subtype,
    pub source: ValueSource,
    pub sequence_index: u32,
}

impl MappingEntry {
    /// Composite key for uniqueness. The sequence index carries no
    /// rendering semantics; it only disambiguates repeated kinds.
    #[must_use]
    pub fn key(&self) -> (FieldKind, Subtype, u32) {
        (self.field_kind, self.subtype, self.sequence_index)
    }
}

/// Append-ordered collection of mapping entries, keyed by
/// (kind, subtype, sequence index).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSet {
    entries: Vec<MappingEntry>,
}

impl MappingSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. [`FieldKind::None`] is silently dropped. When
    /// the composite key collides with an existing entry the later one
    /// overwrites the earlier in place (last-write-wins); callers are
    /// expected to assign unique sequence indexes so this stays a
    /// documented edge rather than a normal path.
    pub fn add_entry(
        &mut self,
        field_kind: FieldKind,
        subtype: Subtype,
        source: ValueSource,
        sequence_index: u32,
    ) {
        if field_kind == FieldKind::None {
            return;
        }
        let entry = MappingEntry {
            field_kind,
            subtype,
            source,
            sequence_index,
        };
        if let Some(existing) = self.entries.iter_mut().find(|e| e.key() == entry.key()) {
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    /// Entries in append order. Rendering iterates this twice (names
    /// first, everything else second) and must not assume any
    /// kind-based ordering.
    #[must_use]
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column names referenced by the entries, in entry order.
    pub fn column_references(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter_map(|entry| entry.source.column())
    }
}

/// One entry of the user-facing mapping document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub field: FieldKind,
    #[serde(default)]
    pub subtype: Subtype,
    pub source: ValueSource,
}

/// The on-disk mapping configuration: an optional version choice plus
/// the ordered entry list. Sequence indexes are assigned from
/// declaration order when the document is turned into a [`MappingSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VcardVersion>,
    pub entries: Vec<DocumentEntry>,
}

impl MappingDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the renderer-facing mapping set, assigning sequence
    /// indexes in declaration order and dropping `none` entries.
    #[must_use]
    pub fn to_mapping_set(&self) -> MappingSet {
        let mut set = MappingSet::new();
        for (index, entry) in self.entries.iter().enumerate() {
            set.add_entry(
                entry.field,
                entry.subtype,
                entry.source.clone(),
                index as u32,
            );
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str) -> ValueSource {
        ValueSource::Column(name.to_string())
    }

    #[test]
    fn none_entries_are_dropped() {
        let mut set = MappingSet::new();
        set.add_entry(FieldKind::None, Subtype::Unspecified, column("Ignored"), 0);
        set.add_entry(FieldKind::Name, Subtype::Unspecified, column("First"), 1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.entries()[0].field_kind, FieldKind::Name);
    }

    #[test]
    fn colliding_key_overwrites_in_place() {
        let mut set = MappingSet::new();
        set.add_entry(FieldKind::Note, Subtype::Unspecified, column("A"), 0);
        set.add_entry(FieldKind::Name, Subtype::Unspecified, column("B"), 1);
        set.add_entry(FieldKind::Note, Subtype::Unspecified, column("C"), 0);
        assert_eq!(set.len(), 2);
        // The overwrite keeps the original position.
        assert_eq!(set.entries()[0].source, column("C"));
        assert_eq!(set.entries()[1].source, column("B"));
    }

    #[test]
    fn repeated_kinds_with_distinct_indexes_coexist() {
        let mut set = MappingSet::new();
        set.add_entry(FieldKind::Name, Subtype::Unspecified, column("First"), 0);
        set.add_entry(FieldKind::Name, Subtype::Unspecified, column("Last"), 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn document_assigns_sequence_from_declaration_order() {
        let document = MappingDocument {
            version: None,
            entries: vec![
                DocumentEntry {
                    field: FieldKind::Name,
                    subtype: Subtype::Unspecified,
                    source: column("First"),
                },
                DocumentEntry {
                    field: FieldKind::None,
                    subtype: Subtype::Unspecified,
                    source: column("Skip"),
                },
                DocumentEntry {
                    field: FieldKind::Name,
                    subtype: Subtype::Unspecified,
                    source: column("Last"),
                },
            ],
        };
        let set = document.to_mapping_set();
        assert_eq!(set.len(), 2);
        assert_eq!(set.entries()[0].sequence_index, 0);
        assert_eq!(set.entries()[1].sequence_index, 2);
    }
}
