pub mod error;
pub mod field;
pub mod mapping;
pub mod table;
pub mod version;

pub use error::{Result, VcfError};
pub use field::{FieldKind, Subtype};
pub use mapping::{DocumentEntry, MappingDocument, MappingEntry, MappingSet, ValueSource};
pub use table::{CellValue, Row, Table};
pub use version::VcardVersion;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_document_round_trips() {
        let document = MappingDocument {
            version: Some(VcardVersion::V3_0),
            entries: vec![
                DocumentEntry {
                    field: FieldKind::Name,
                    subtype: Subtype::Unspecified,
                    source: ValueSource::Column("First Name".to_string()),
                },
                DocumentEntry {
                    field: FieldKind::PhoneNumber,
                    subtype: Subtype::Mobile,
                    source: ValueSource::Column("Phone".to_string()),
                },
                DocumentEntry {
                    field: FieldKind::Organization,
                    subtype: Subtype::Unspecified,
                    source: ValueSource::Constant("Acme Corp".to_string()),
                },
            ],
        };
        let json = document.to_json_pretty().expect("serialize document");
        let round = MappingDocument::from_json(&json).expect("deserialize document");
        assert_eq!(round.version, Some(VcardVersion::V3_0));
        assert_eq!(round.entries.len(), 3);
        assert_eq!(
            round.entries[2].source,
            ValueSource::Constant("Acme Corp".to_string())
        );
    }

    #[test]
    fn document_entry_accepts_shorthand_json() {
        let json = r#"{
            "entries": [
                { "field": "email", "subtype": "work", "source": { "column": "E-Mail" } },
                { "field": "note", "source": { "constant": "imported" } }
            ]
        }"#;
        let document = MappingDocument::from_json(json).expect("parse shorthand");
        assert_eq!(document.version, None);
        assert_eq!(document.entries[0].field, FieldKind::Email);
        assert_eq!(document.entries[0].subtype, Subtype::Work);
        // Omitted subtype defaults to unspecified.
        assert_eq!(document.entries[1].subtype, Subtype::Unspecified);
    }

    #[test]
    fn version_parses_from_text() {
        assert_eq!("2.1".parse::<VcardVersion>().unwrap(), VcardVersion::V2_1);
        assert_eq!("3.0".parse::<VcardVersion>().unwrap(), VcardVersion::V3_0);
        assert!("4.0".parse::<VcardVersion>().is_err());
    }
}
