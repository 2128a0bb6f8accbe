//! Header auto-suggestion engine.
//!
//! Given the column headers of an ingested table, proposes a field kind
//! (and subtype) per column. Exact synonym hits win, then word-bounded
//! substring hits, then a Jaro-Winkler fuzzy fallback for misspelled or
//! abbreviated headers. Every suggestion carries a confidence score so
//! callers can filter to their taste.

use std::collections::BTreeMap;

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;
use serde::Serialize;

use vcf_model::{DocumentEntry, FieldKind, MappingDocument, Subtype, ValueSource};

use crate::patterns::build_synonym_map;
use crate::utils::normalize_text;

const EXACT_MATCH_CONFIDENCE: f64 = 1.0;
const CONTAINS_MATCH_CONFIDENCE: f64 = 0.9;
/// Minimum Jaro-Winkler similarity for a fuzzy hit to count at all.
const FUZZY_MIN_SIMILARITY: f64 = 0.84;
/// Default cutoff applied when building a mapping document.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;

/// A suggested column-to-field assignment with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingSuggestion {
    pub source_column: String,
    pub field_kind: FieldKind,
    pub subtype: Subtype,
    pub confidence: f64,
}

/// Suggests a field for every column that clears `min_confidence`.
/// Columns without a match are simply absent from the result.
pub fn suggest_mappings(columns: &[String], min_confidence: f64) -> Vec<MappingSuggestion> {
    let synonyms = build_synonym_map();
    columns
        .iter()
        .filter_map(|column| {
            let (field_kind, subtype, confidence) = suggest_for_header(column, &synonyms)?;
            if confidence < min_confidence {
                return None;
            }
            Some(MappingSuggestion {
                source_column: column.clone(),
                field_kind,
                subtype,
                confidence,
            })
        })
        .collect()
}

/// Builds a starter mapping document from header suggestions, together
/// with the columns that stayed unmapped.
pub fn suggest_document(
    columns: &[String],
    min_confidence: f64,
) -> (MappingDocument, Vec<String>) {
    let suggestions = suggest_mappings(columns, min_confidence);
    let mapped: Vec<&str> = suggestions
        .iter()
        .map(|suggestion| suggestion.source_column.as_str())
        .collect();
    let unmapped = columns
        .iter()
        .filter(|column| !mapped.contains(&column.as_str()))
        .cloned()
        .collect();
    let document = MappingDocument {
        version: None,
        entries: suggestions
            .into_iter()
            .map(|suggestion| DocumentEntry {
                field: suggestion.field_kind,
                subtype: suggestion.subtype,
                source: ValueSource::Column(suggestion.source_column),
            })
            .collect(),
    };
    (document, unmapped)
}

fn suggest_for_header(
    header: &str,
    synonyms: &BTreeMap<String, (FieldKind, Subtype)>,
) -> Option<(FieldKind, Subtype, f64)> {
    let normalized = normalize_text(header);
    if normalized.is_empty() {
        return None;
    }

    if let Some((kind, subtype)) = synonyms.get(&normalized) {
        return Some((*kind, *subtype, EXACT_MATCH_CONFIDENCE));
    }

    // Word-bounded substring: "work email address" hits "work email".
    // Longest synonym wins so subtype-qualified entries beat bare ones.
    let padded = format!(" {normalized} ");
    let contained = synonyms
        .iter()
        .filter(|(key, _)| padded.contains(&format!(" {key} ")))
        .max_by_key(|(key, _)| key.len());
    if let Some((_, (kind, subtype))) = contained {
        return Some((*kind, *subtype, CONTAINS_MATCH_CONFIDENCE));
    }

    let mut best: Option<(FieldKind, Subtype, f64)> = None;
    for (key, (kind, subtype)) in synonyms {
        let score = jaro_similarity(normalized.chars(), key.chars());
        if score >= FUZZY_MIN_SIMILARITY
            && best.is_none_or(|(_, _, best_score)| score > best_score)
        {
            best = Some((*kind, *subtype, score));
        }
    }
    best
}
