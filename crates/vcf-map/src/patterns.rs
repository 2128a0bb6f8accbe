//! Built-in header synonym table.
//!
//! This is the replaceable lookup behind header auto-suggestion: each
//! normalized synonym maps to the field kind (and subtype) a column
//! with that header most likely holds.

use std::collections::BTreeMap;

use vcf_model::{FieldKind, Subtype};

use crate::utils::normalize_text;

/// Known header synonyms, in source form. Keys are normalized before
/// lookup, so casing and separators in this table are cosmetic.
const SYNONYMS: &[(&str, FieldKind, Subtype)] = &[
    ("name", FieldKind::Name, Subtype::Unspecified),
    ("full name", FieldKind::Name, Subtype::Unspecified),
    ("first name", FieldKind::Name, Subtype::Unspecified),
    ("given name", FieldKind::Name, Subtype::Unspecified),
    ("last name", FieldKind::Name, Subtype::Unspecified),
    ("surname", FieldKind::Name, Subtype::Unspecified),
    ("family name", FieldKind::Name, Subtype::Unspecified),
    ("middle name", FieldKind::Name, Subtype::Unspecified),
    ("contact name", FieldKind::Name, Subtype::Unspecified),
    ("suffix", FieldKind::Suffix, Subtype::Unspecified),
    ("name suffix", FieldKind::Suffix, Subtype::Unspecified),
    ("phone", FieldKind::PhoneNumber, Subtype::Unspecified),
    ("phone number", FieldKind::PhoneNumber, Subtype::Unspecified),
    ("telephone", FieldKind::PhoneNumber, Subtype::Unspecified),
    ("tel", FieldKind::PhoneNumber, Subtype::Unspecified),
    ("contact number", FieldKind::PhoneNumber, Subtype::Unspecified),
    ("mobile", FieldKind::PhoneNumber, Subtype::Mobile),
    ("mobile number", FieldKind::PhoneNumber, Subtype::Mobile),
    ("cell", FieldKind::PhoneNumber, Subtype::Mobile),
    ("cell phone", FieldKind::PhoneNumber, Subtype::Mobile),
    ("work phone", FieldKind::PhoneNumber, Subtype::Work),
    ("office phone", FieldKind::PhoneNumber, Subtype::Work),
    ("home phone", FieldKind::PhoneNumber, Subtype::Home),
    ("email", FieldKind::Email, Subtype::Unspecified),
    ("e-mail", FieldKind::Email, Subtype::Unspecified),
    ("email address", FieldKind::Email, Subtype::Unspecified),
    ("mail", FieldKind::Email, Subtype::Unspecified),
    ("work email", FieldKind::Email, Subtype::Work),
    ("home email", FieldKind::Email, Subtype::Home),
    ("personal email", FieldKind::Email, Subtype::Home),
    ("organization", FieldKind::Organization, Subtype::Unspecified),
    ("organisation", FieldKind::Organization, Subtype::Unspecified),
    ("company", FieldKind::Organization, Subtype::Unspecified),
    ("employer", FieldKind::Organization, Subtype::Unspecified),
    ("job title", FieldKind::JobTitle, Subtype::Unspecified),
    ("title", FieldKind::JobTitle, Subtype::Unspecified),
    ("position", FieldKind::JobTitle, Subtype::Unspecified),
    ("role", FieldKind::JobTitle, Subtype::Unspecified),
    ("designation", FieldKind::JobTitle, Subtype::Unspecified),
    ("address", FieldKind::Address, Subtype::Unspecified),
    ("street address", FieldKind::Address, Subtype::Unspecified),
    ("home address", FieldKind::Address, Subtype::Unspecified),
    ("location", FieldKind::Address, Subtype::Unspecified),
    ("note", FieldKind::Note, Subtype::Unspecified),
    ("notes", FieldKind::Note, Subtype::Unspecified),
    ("comment", FieldKind::Note, Subtype::Unspecified),
    ("comments", FieldKind::Note, Subtype::Unspecified),
    ("remarks", FieldKind::Note, Subtype::Unspecified),
];

/// Builds the normalized synonym lookup.
pub fn build_synonym_map() -> BTreeMap<String, (FieldKind, Subtype)> {
    let mut map = BTreeMap::new();
    for (synonym, kind, subtype) in SYNONYMS {
        map.insert(normalize_text(synonym), (*kind, *subtype));
    }
    map
}
