use std::path::PathBuf;

use vcf_model::VcardVersion;

/// Outcome of a `convert` run, for the post-run summary.
#[derive(Debug)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub entries: usize,
    pub version: VcardVersion,
    pub written: bool,
}
