//! Per-property line generators.
//!
//! Each function renders one `\n`-terminated vCard property line. Type
//! tags are always written as `TYPE=<X>` regardless of the selected
//! format version.

use chrono::{DateTime, Utc};

use vcf_model::Subtype;

use crate::render::EmptyFieldPolicy;

/// Strips a phone value down to its digits. Values that parse as a
/// number are truncated at the decimal point first, so spreadsheet
/// floats like `4085551234.0` do not leak a stray `0` into the number.
#[must_use]
pub fn sanitize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let truncated = if trimmed.parse::<f64>().is_ok() {
        trimmed.split('.').next().unwrap_or(trimmed)
    } else {
        trimmed
    };
    truncated.chars().filter(char::is_ascii_digit).collect()
}

/// Telephone line. Mobile/Work/Home map to a type tag; anything else
/// renders untagged. A value with no digits still emits the line.
pub(crate) fn tel_line(subtype: Subtype, value: &str) -> String {
    let digits = sanitize_phone(value);
    match subtype {
        Subtype::Mobile => format!("TEL;TYPE=CELL:{digits}\n"),
        Subtype::Work => format!("TEL;TYPE=WORK:{digits}\n"),
        Subtype::Home => format!("TEL;TYPE=HOME:{digits}\n"),
        Subtype::Other | Subtype::Unspecified => format!("TEL:{digits}\n"),
    }
}

/// Email line. Work/Home/Other map to a type tag; anything else
/// renders untagged.
pub(crate) fn email_line(subtype: Subtype, value: &str) -> String {
    match subtype {
        Subtype::Work => format!("EMAIL;TYPE=WORK:{value}\n"),
        Subtype::Home => format!("EMAIL;TYPE=HOME:{value}\n"),
        Subtype::Other => format!("EMAIL;TYPE=OTHER:{value}\n"),
        Subtype::Mobile | Subtype::Unspecified => format!("EMAIL:{value}\n"),
    }
}

/// Single-value property line (ORG, TITLE, ADR, NOTE). Empty values
/// render according to the configured policy: a bare blank line keeps
/// line-count parity with populated rows, omission drops them.
pub(crate) fn simple_line(property: &str, value: &str, policy: EmptyFieldPolicy) -> String {
    if value.is_empty() {
        match policy {
            EmptyFieldPolicy::BlankLine => "\n".to_string(),
            EmptyFieldPolicy::Omit => String::new(),
        }
    } else {
        format!("{property}:{value}\n")
    }
}

/// Structured-name line. The collected name tokens collapse into the
/// first component; three components stay empty; suffix tokens join
/// into the fifth.
///
/// Deliberately no placeholder here: with no name tokens this renders
/// `N:;;;;` and the `Unknown` fallback lives on the FN line only (see
/// [`full_name_line`]), so a nameless record stays structurally empty
/// while still carrying a displayable full name.
pub(crate) fn name_line(name_parts: &[String], suffix_parts: &[String]) -> String {
    let name = name_parts.join(" ");
    let suffix = suffix_parts.join(" ");
    format!("N:{};;;;{}\n", name.trim(), suffix)
}

/// Full-name line: name tokens then suffix tokens, empties filtered,
/// with an `Unknown` fallback when nothing remains.
pub(crate) fn full_name_line(name_parts: &[String], suffix_parts: &[String]) -> String {
    let full: Vec<&str> = name_parts
        .iter()
        .chain(suffix_parts.iter())
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect();
    let joined = full.join(" ");
    if joined.is_empty() {
        "FN:Unknown\n".to_string()
    } else {
        format!("FN:{joined}\n")
    }
}

/// Revision line with the render-time UTC timestamp.
pub(crate) fn rev_line(revised_at: DateTime<Utc>) -> String {
    format!("REV:{}\n", revised_at.format("%Y%m%dT%H%M%SZ"))
}
