#![deny(unsafe_code)]

//! vCard record rendering.
//!
//! Turns one [`vcf_model::MappingSet`] plus one table row into one
//! complete vCard text record, and a whole table into the concatenated
//! `.vcf` payload. Rendering is a pure function of the mapping, the
//! row, the options and the clock; batches are just ordered
//! concatenations of independently rendered records.

pub mod properties;
pub mod render;

pub use properties::sanitize_phone;
pub use render::{
    EmptyFieldPolicy, RenderOptions, render_record, render_record_at, render_table,
};

/// MIME type of the concatenated output when offered as a download.
pub const VCF_MIME_TYPE: &str = "text/vcard";

/// File extension of the concatenated output.
pub const VCF_EXTENSION: &str = "vcf";
