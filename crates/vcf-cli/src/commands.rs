use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span, warn};

use vcf_map::{suggest_document, validate_mapping};
use vcf_model::{FieldKind, MappingDocument, VcardVersion};
use vcf_vcard::{EmptyFieldPolicy, RenderOptions, render_table};

use crate::cli::{ConvertArgs, SuggestArgs, VersionArg};
use crate::summary::apply_table_style;
use crate::types::ConvertSummary;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertSummary> {
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();

    let table = vcf_ingest::read_table(&args.input)
        .with_context(|| format!("load contact table {}", args.input.display()))?;
    let document = MappingDocument::load(&args.mapping)
        .with_context(|| format!("load mapping document {}", args.mapping.display()))?;
    let set = document.to_mapping_set();
    validate_mapping(&set, &table).context("validate mapping against input columns")?;

    let version = resolve_version(args.vcard_version, args.ios, document.version);
    let options = RenderOptions {
        version,
        empty_fields: if args.skip_empty_fields {
            EmptyFieldPolicy::Omit
        } else {
            EmptyFieldPolicy::BlankLine
        },
    };
    info!(
        rows = table.rows.len(),
        entries = set.len(),
        version = %version,
        "rendering vCard records"
    );
    let payload = render_table(&set, &table, &options);

    let output = default_output_path(&args.input, args.output.as_deref());
    if args.dry_run {
        debug!("dry run, skipping output write");
    } else {
        fs::write(&output, &payload)
            .with_context(|| format!("write {}", output.display()))?;
    }

    Ok(ConvertSummary {
        input: args.input.clone(),
        output,
        rows: table.rows.len(),
        entries: set.len(),
        version,
        written: !args.dry_run,
    })
}

pub fn run_suggest(args: &SuggestArgs) -> Result<()> {
    let table = vcf_ingest::read_table(&args.input)
        .with_context(|| format!("load contact table {}", args.input.display()))?;
    let (document, unmapped) = suggest_document(&table.columns, args.min_confidence);
    for column in &unmapped {
        warn!(column = %column, "no suggestion for column, map it manually or leave it out");
    }
    println!("{}", document.to_json_pretty()?);
    Ok(())
}

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Key", "Subtypes"]);
    apply_table_style(&mut table);
    for kind in FieldKind::ALL {
        table.add_row(vec![kind.label(), field_key(kind), field_subtypes(kind)]);
    }
    println!("{table}");
    Ok(())
}

/// Version precedence: explicit CLI flag, then --ios shorthand, then
/// the mapping document, then the 3.0 default.
pub fn resolve_version(
    flag: Option<VersionArg>,
    ios: bool,
    document: Option<VcardVersion>,
) -> VcardVersion {
    if let Some(flag) = flag {
        return flag.into();
    }
    if ios {
        return VcardVersion::V2_1;
    }
    document.unwrap_or_default()
}

/// Output defaults to the input path with a `.vcf` extension.
pub fn default_output_path(input: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => input.with_extension(vcf_vcard::VCF_EXTENSION),
    }
}

/// Mapping-document key for a field kind.
fn field_key(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Name => "name",
        FieldKind::Suffix => "suffix",
        FieldKind::PhoneNumber => "phone_number",
        FieldKind::Email => "email",
        FieldKind::Organization => "organization",
        FieldKind::JobTitle => "job_title",
        FieldKind::Address => "address",
        FieldKind::Note => "note",
        FieldKind::None => "none",
    }
}

fn field_subtypes(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::PhoneNumber => "mobile, work, home, unspecified",
        FieldKind::Email => "work, home, other, unspecified",
        _ => "-",
    }
}
